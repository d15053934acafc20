//! 웹 대시보드 실행 유스케이스.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::application::config::Configuration;
use crate::application::error::CliResult;
use crate::application::ports::{ApiSettings, Console, Prompter, Reporter, UserAppApiFactory};
use crate::application::usecases::api_call::ensure_authenticated;
use crate::application::userapp::{self, MASTER_APP_ID};

pub const DASHBOARD_URL: &str = "https://app.userapp.io/#/";

pub struct DashboardUseCase<'a> {
    pub api_factory: &'a dyn UserAppApiFactory,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
    pub console: &'a dyn Console,
}

impl<'a> DashboardUseCase<'a> {
    /// 프로필 자격 증명으로 세션 토큰을 받아 브라우저로 대시보드를 연다.
    pub async fn execute(&self, config: &mut Configuration) -> CliResult<()> {
        ensure_authenticated(config, self.api_factory, self.prompter, self.reporter).await?;

        let profile = config.get_selected_profile().into_owned();
        let api = self
            .api_factory
            .build(ApiSettings::for_app(MASTER_APP_ID, &profile));
        let session = userapp::user_login(
            api.as_ref(),
            profile.user.login.as_deref().unwrap_or_default(),
            profile.user.password.as_deref().unwrap_or_default(),
        )
        .await?;

        self.reporter.result("Launching dashboard...");
        self.console.open_url(&dashboard_url(&session.token))
    }
}

fn dashboard_url(token: &str) -> String {
    format!(
        "{DASHBOARD_URL}?ua_token={}",
        utf8_percent_encode(token, NON_ALPHANUMERIC)
    )
}
