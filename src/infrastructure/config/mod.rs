//! 프로필 설정 파일(JSON) 위치 결정 및 읽기/쓰기 모듈.

mod loader;

use std::env;
use std::path::PathBuf;

pub use loader::{read_profiles, write_profiles};

/// 고정 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/userapp/config.json";
/// 설정 파일 경로를 덮어쓰는 환경변수.
pub const CONFIG_PATH_ENV: &str = "USERAPP_CONFIG";

/// 환경변수가 있으면 우선 사용하고, 없으면 고정 경로를 사용한다.
pub fn config_path() -> PathBuf {
    match env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}
