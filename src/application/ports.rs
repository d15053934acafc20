//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::error::CliResult;
use crate::domain::profile::Profile;

/// 이름 → 프로필 매핑. 순회 순서는 이름 정렬 순이다.
pub type ProfileMap = BTreeMap<String, Profile>;

/// 프로필 저장소(파일) 포트.
pub trait ConfigRepository: Send + Sync {
    /// 파일이 없으면 빈 매핑, 파일이 깨져 있으면 오류.
    fn load(&self) -> CliResult<ProfileMap>;
    fn save(&self, profiles: &ProfileMap) -> CliResult<()>;
}

/// API 클라이언트 접속 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub app_id: Option<String>,
    pub token: Option<String>,
    pub base_address: String,
    pub secure: bool,
    pub debug: bool,
}

impl ApiSettings {
    /// 프로필의 앱/토큰으로 접속한다.
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            app_id: profile.user.app_id.clone(),
            token: profile.user.token.clone(),
            base_address: profile.server.base_address.clone(),
            secure: profile.server.secure,
            debug: profile.server.debug,
        }
    }

    /// 프로필의 서버 설정으로 지정 앱에 토큰 없이 접속한다.
    pub fn for_app(app_id: &str, profile: &Profile) -> Self {
        Self {
            app_id: Some(app_id.to_string()),
            token: None,
            ..Self::for_profile(profile)
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// UserApp 원격 호출 포트.
#[async_trait]
pub trait UserAppApi: Send + Sync {
    async fn call(
        &self,
        version: u32,
        service: &str,
        method: &str,
        params: Value,
    ) -> CliResult<Value>;
}

/// 접속 정보에 맞는 API 클라이언트를 생성하는 팩토리 포트.
pub trait UserAppApiFactory: Send + Sync {
    fn build(&self, settings: ApiSettings) -> Box<dyn UserAppApi>;
}

/// 사용자 입력(질문/비밀번호/확인) 포트.
pub trait Prompter: Send + Sync {
    fn ask(&self, prompt: &str) -> CliResult<String>;
    /// 입력 내용을 화면에 표시하지 않는다.
    fn ask_secret(&self, prompt: &str) -> CliResult<String>;
    /// yes/y는 승인. 빈 입력은 `default_yes`를 따른다.
    fn confirm(&self, question: &str, default_yes: bool) -> CliResult<bool>;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn result(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
    fn raw(&self, line: &str);
}

/// 터미널/브라우저 제어 포트.
pub trait Console: Send + Sync {
    fn clear(&self) -> CliResult<()>;
    fn open_url(&self, url: &str) -> CliResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    AlreadyInstalled,
}

/// 실행 파일을 시스템 경로로 복사하는 포트.
pub trait Installer: Send + Sync {
    fn install(&self, target: &Path) -> CliResult<InstallOutcome>;
}
