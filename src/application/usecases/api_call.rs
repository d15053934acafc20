//! `call service.method key=value ...` 유스케이스.

use serde_json::Value;

use crate::application::config::Configuration;
use crate::application::error::{CliError, CliResult};
use crate::application::ports::{ApiSettings, Prompter, Reporter, UserAppApiFactory};
use crate::application::render::pretty_json;
use crate::application::usecases::login::{Credentials, LoginUseCase};
use crate::application::userapp::API_VERSION;
use crate::domain::api_call::ApiCallRequest;

/// 선택된 프로필 자격 증명으로 임의의 API 메서드를 호출한다.
pub struct ApiCallUseCase<'a> {
    pub api_factory: &'a dyn UserAppApiFactory,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ApiCallUseCase<'a> {
    pub async fn execute(&self, config: &mut Configuration, args: &[String]) -> CliResult<()> {
        let Some(request) = ApiCallRequest::from_args(args) else {
            return Err(CliError::usage(
                "Please specify a method to call. E.g. 'call user.get'.",
            ));
        };

        ensure_authenticated(config, self.api_factory, self.prompter, self.reporter).await?;

        let settings = ApiSettings::for_profile(&config.get_selected_profile());
        let api = self.api_factory.build(settings);

        let params = serde_json::to_value(&request.parameters)
            .map_err(|err| CliError::usage(format!("invalid parameters: {err}")))?;
        tracing::debug!(endpoint = %request.endpoint(), "calling API");

        let result: Value = api
            .call(API_VERSION, &request.service, &request.method, params)
            .await?;
        self.reporter.result(&pretty_json(&result)?);
        Ok(())
    }
}

/// 토큰이 없으면 프로필의 로그인 이름으로 로그인부터 진행한다.
pub(crate) async fn ensure_authenticated(
    config: &mut Configuration,
    api_factory: &dyn UserAppApiFactory,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
) -> CliResult<()> {
    let profile = config.get_selected_profile();
    if profile.has_token() {
        return Ok(());
    }

    let login = profile.user.login.clone();
    drop(profile);

    reporter.info(&format!(
        "Not authenticated. Please login as user {}.",
        login.as_deref().unwrap_or("<unknown>")
    ));

    LoginUseCase {
        api_factory,
        prompter,
        reporter,
    }
    .execute(
        config,
        Credentials {
            email: login,
            password: None,
        },
    )
    .await
}
