//! UserApp 로그인 유스케이스.

use crate::application::config::Configuration;
use crate::application::error::CliResult;
use crate::application::ports::{ApiSettings, Prompter, Reporter, UserAppApiFactory};
use crate::application::userapp::{self, CLI_TOKEN_NAME, MASTER_APP_ID};

/// `login [email] [password]` 인자. 비어 있는 값은 프롬프트로 받는다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            email: args.first().cloned(),
            password: args.get(1).cloned(),
        }
    }
}

/// 마스터 앱으로 로그인하고 CLI 토큰을 발급받아 이메일 이름의 프로필에 기록한다.
pub struct LoginUseCase<'a> {
    pub api_factory: &'a dyn UserAppApiFactory,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl<'a> LoginUseCase<'a> {
    pub async fn execute(&self, config: &mut Configuration, credentials: Credentials) -> CliResult<()> {
        if credentials.email.is_none() && credentials.password.is_none() {
            self.reporter.raw("Enter your UserApp credentials.");
        }

        let email = match credentials.email {
            Some(email) => email,
            None => self.prompter.ask("email: ")?,
        };
        let password = match credentials.password {
            Some(password) => password,
            None => self.prompter.ask_secret("password: ")?,
        };

        let source = config.get_selected_profile().into_owned();
        let master = ApiSettings::for_app(MASTER_APP_ID, &source);
        let api = self.api_factory.build(master.clone());
        let session = userapp::user_login(api.as_ref(), &email, &password).await?;
        tracing::debug!(user_id = %session.user_id, "authenticated against master app");

        // 이후 호출은 로그인 세션 토큰으로 수행한다.
        let api = self.api_factory.build(master.with_token(session.token.clone()));
        let app_id = userapp::app_id(api.as_ref()).await?;
        let token = userapp::find_or_create_token(api.as_ref(), CLI_TOKEN_NAME).await?;

        let has_primary = config.profiles().values().any(|profile| profile.primary);
        let is_new = !config.has_profile(&email);
        let profile = config.get_profile(&email);
        // 새 프로필은 인증에 사용한 서버 설정을 물려받는다.
        if is_new {
            profile.server = source.server;
        }
        if !has_primary {
            profile.primary = true;
        }
        profile.user.app_id = Some(app_id);
        profile.user.login = Some(email.clone());
        profile.user.token = Some(token);
        profile.user.password = Some(password);
        config.set_selected_profile(&email);

        self.reporter
            .result(&format!("Logged in as user {}", session.user_id));

        if self.prompter.confirm("Save credentials? ", true)? {
            config.save()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::CliError;
    use crate::domain::profile::ConfigKey;
    use crate::application::testing::{
        FakeApi, MemoryConfigRepository, RecordingReporter, ScriptedPrompter,
    };
    use serde_json::json;

    fn scripted_api() -> FakeApi {
        let api = FakeApi::default();
        api.respond("user.login", json!({"token": "session-1", "user_id": "u-42"}));
        api.respond("app.get", json!({"app_id": "app-9", "name": "demo"}));
        api.respond(
            "token.search",
            json!({"items": [{"name": CLI_TOKEN_NAME, "value": "cli-token"}]}),
        );
        api
    }

    #[tokio::test]
    async fn prompts_for_missing_credentials_and_saves() {
        let repo = MemoryConfigRepository::default();
        let mut config = Configuration::new(Box::new(repo.clone()));
        let api = scripted_api();
        let prompter = ScriptedPrompter::with_answers(&["joe@example.com", "secret", ""]);
        let reporter = RecordingReporter::default();
        let usecase = LoginUseCase {
            api_factory: &api,
            prompter: &prompter,
            reporter: &reporter,
        };

        usecase
            .execute(&mut config, Credentials::default())
            .await
            .unwrap();

        assert_eq!(
            prompter.asked(),
            vec!["email: ", "password: ", "Save credentials? "]
        );
        assert!(reporter.contains("Enter your UserApp credentials."));
        assert!(reporter.contains("(result) Logged in as user u-42"));

        let saved = repo.snapshot();
        let profile = &saved["joe@example.com"];
        assert!(profile.primary);
        assert_eq!(profile.user.app_id.as_deref(), Some("app-9"));
        assert_eq!(profile.user.token.as_deref(), Some("cli-token"));
        assert_eq!(profile.user.password.as_deref(), Some("secret"));
        assert_eq!(config.selected_profile_name(), Some("joe@example.com"));

        let builds = api.builds();
        assert_eq!(builds[0].app_id.as_deref(), Some(MASTER_APP_ID));
        assert_eq!(builds[0].token, None);
        assert_eq!(builds[1].token.as_deref(), Some("session-1"));
        assert_eq!(
            api.params_of("user.login"),
            Some(json!({"login": "joe@example.com", "password": "secret"}))
        );
    }

    #[tokio::test]
    async fn declining_save_keeps_changes_in_memory() {
        let repo = MemoryConfigRepository::default();
        let mut config = Configuration::new(Box::new(repo.clone()));
        let api = scripted_api();
        let prompter = ScriptedPrompter::with_answers(&["no"]);
        let reporter = RecordingReporter::default();
        let usecase = LoginUseCase {
            api_factory: &api,
            prompter: &prompter,
            reporter: &reporter,
        };

        usecase
            .execute(
                &mut config,
                Credentials::from_args(&["joe@example.com".into(), "pw".into()]),
            )
            .await
            .unwrap();

        assert_eq!(repo.save_count(), 0);
        assert!(config.has_profile("joe@example.com"));
        assert!(!reporter.contains("Enter your UserApp credentials."));
    }

    #[tokio::test]
    async fn new_profile_keeps_server_used_for_login() {
        let repo = MemoryConfigRepository::default();
        let mut config = Configuration::new(Box::new(repo.clone()));
        config
            .selected_profile_mut()
            .set(ConfigKey::BaseAddress, "localhost:8080");
        config.selected_profile_mut().set(ConfigKey::Secure, "false");
        let api = scripted_api();
        let prompter = ScriptedPrompter::with_answers(&["no"]);
        let reporter = RecordingReporter::default();
        let usecase = LoginUseCase {
            api_factory: &api,
            prompter: &prompter,
            reporter: &reporter,
        };

        usecase
            .execute(
                &mut config,
                Credentials::from_args(&["joe@x.io".into(), "pw".into()]),
            )
            .await
            .unwrap();

        assert_eq!(api.builds()[0].base_address, "localhost:8080");
        let selected = config.get_selected_profile();
        assert_eq!(config.selected_profile_name(), Some("joe@x.io"));
        assert_eq!(selected.server.base_address, "localhost:8080");
        assert!(!selected.server.secure);
    }

    #[tokio::test]
    async fn remote_failure_leaves_store_untouched() {
        let repo = MemoryConfigRepository::default();
        let mut config = Configuration::new(Box::new(repo.clone()));
        let api = FakeApi::default();
        api.fail("user.login", "Invalid login or password");
        let prompter = ScriptedPrompter::default();
        let reporter = RecordingReporter::default();
        let usecase = LoginUseCase {
            api_factory: &api,
            prompter: &prompter,
            reporter: &reporter,
        };

        let err = usecase
            .execute(
                &mut config,
                Credentials::from_args(&["joe@example.com".into(), "bad".into()]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Remote(ref msg) if msg == "Invalid login or password"));
        assert!(config.profiles().is_empty());
    }
}
