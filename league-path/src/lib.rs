use std::path::{Path, PathBuf};

/// 数据库相关路径常量
pub const DB_DATA_DIR: &str = "data";
pub const DB_FILE_NAME: &str = "mafs.db";
pub const RESOURCE_DIR: &str = "resources";

/// 环境变量：显式指定数据根目录
pub const DATA_DIR_ENV: &str = "MAFS_DATA_DIR";

/// 判断是否处于便携模式
///
/// 检测逻辑：检查可执行文件同级目录下是否存在 resources/data/mafs.db
pub fn is_portable_mode() -> bool {
    match exe_dir() {
        Ok(dir) => is_portable_layout(&dir),
        Err(_) => false,
    }
}

/// 给定目录下是否具备便携模式的目录结构
pub fn is_portable_layout(exe_dir: &Path) -> bool {
    let portable_data_dir = exe_dir.join(RESOURCE_DIR).join(DB_DATA_DIR);
    portable_data_dir.exists() && portable_data_dir.join(DB_FILE_NAME).exists()
}

/// 获取基础数据目录
///
/// 优先级：`MAFS_DATA_DIR` > 便携模式 > 系统应用数据目录
pub fn get_base_data_dir() -> Result<PathBuf, String> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir.trim()));
        }
    }

    if is_portable_mode() {
        Ok(exe_dir()?.join(RESOURCE_DIR))
    } else {
        get_system_data_dir()
    }
}

fn exe_dir() -> Result<PathBuf, String> {
    let exe_path =
        std::env::current_exe().map_err(|e| format!("无法获取可执行文件路径: {}", e))?;
    exe_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| "无法获取可执行文件父目录".to_string())
}

/// 获取系统数据目录（跨平台）
fn get_system_data_dir() -> Result<PathBuf, String> {
    use directories::BaseDirs;

    let base_dirs = BaseDirs::new().ok_or_else(|| "无法获取系统目录信息".to_string())?;

    #[cfg(any(target_os = "windows", target_os = "macos"))]
    {
        Ok(base_dirs.data_dir().join("com.mafsleague.dev"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Ok(base_dirs.data_dir().join("mafs-league"))
    }
}

/// 数据根目录下的数据库文件路径
pub fn db_path_in(base: &Path) -> PathBuf {
    base.join(DB_DATA_DIR).join(DB_FILE_NAME)
}

/// 获取数据库文件路径
pub fn get_db_path() -> Result<PathBuf, String> {
    Ok(db_path_in(&get_base_data_dir()?))
}
