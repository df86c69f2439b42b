//! 种子数据初始化
//!
//! 首次启动时写入固定的情侣、玩家和问题。
//! 判定条件是“是否已存在任意一对情侣”，而不是逐个实体检查。

use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::database::repository::{
    couples_repository::CouplesRepository, players_repository::PlayersRepository,
    questions_repository::QuestionsRepository,
};

const IMAGE_BASE: &str = "https://prod.static9.net.au/fs/";

/// 情侣：(名称, 图片 ID)
pub const SEED_COUPLES: [(&str, &str); 9] = [
    ("Alissa & David", "3110edcf-d1d0-43eb-a1a2-0201b5274d45"),
    ("Rachel & Steven", "f9096611-33b3-4878-89b1-ec1c66d01278"),
    ("Mel & Luke", "e0a41a1e-8789-496d-af45-b5b805bc29a8"),
    ("Gia & Scott", "0b2f72ab-ef8d-4a91-ad38-a4d970d141f7"),
    ("Bec & Danny", "6d550315-b047-4704-aea7-37821bb4654d"),
    ("Brook & Chris", "4a4505a9-174c-4e44-b4b3-77abe54cfca7"),
    ("Rebecca & Steve", "6d2499fd-65c9-4fa3-858b-e6c0eaa9f809"),
    ("Stella & Filip", "85b063cf-4c70-4a1a-b93b-e11db8349925"),
    ("Julia & Grayson", "c47439d3-7fc0-49e1-9fe5-6631f65b2518"),
];

/// 玩家：(名称, 头像)
pub const SEED_PLAYERS: [(&str, &str); 5] = [
    ("Fabio", "🐃"),
    ("Danielle", "🪲"),
    ("Kathryn", "🦊"),
    ("Camille", "🦭"),
    ("Connor", "🫎"),
];

pub const SEED_QUESTIONS: [&str; 4] = [
    "Most Romantic Progress?",
    "Biggest Red Flag?",
    "Worst Fight?",
    "Who left the show?",
];

/// 写入种子数据
///
/// 返回 `true` 表示本次写入了数据，`false` 表示数据库已初始化过
pub async fn seed_database(db: &DatabaseConnection) -> Result<bool, DbErr> {
    let txn = db.begin().await?;

    if CouplesRepository::any_exists(&txn).await? {
        log::debug!("种子数据已存在，跳过初始化");
        return Ok(false);
    }

    for (name, image_id) in SEED_COUPLES {
        let img = format!("{}{}", IMAGE_BASE, image_id);
        CouplesRepository::insert(&txn, name, &img).await?;
    }

    for (name, avatar) in SEED_PLAYERS {
        PlayersRepository::insert(&txn, name, avatar).await?;
    }

    for text in SEED_QUESTIONS {
        QuestionsRepository::insert(&txn, text).await?;
    }

    txn.commit().await?;

    log::info!(
        "种子数据初始化完成: {} 对情侣, {} 名玩家, {} 个问题",
        SEED_COUPLES.len(),
        SEED_PLAYERS.len(),
        SEED_QUESTIONS.len()
    );
    Ok(true)
}
