//! 설정 저장소 포트 구현 어댑터.

use std::path::PathBuf;

use crate::application::error::CliResult;
use crate::application::ports::{ConfigRepository, ProfileMap};
use crate::infrastructure::config;

/// JSON 파일 기반 설정 저장소 어댑터.
pub struct JsonConfigRepository {
    path: PathBuf,
}

impl Default for JsonConfigRepository {
    fn default() -> Self {
        Self::new(config::config_path())
    }
}

impl JsonConfigRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> CliResult<ProfileMap> {
        config::read_profiles(&self.path)
    }

    fn save(&self, profiles: &ProfileMap) -> CliResult<()> {
        config::write_profiles(&self.path, profiles)
    }
}
