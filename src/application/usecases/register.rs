//! UserApp 계정 생성 유스케이스.

use crate::application::config::Configuration;
use crate::application::error::{CliError, CliResult};
use crate::application::ports::{ApiSettings, Prompter, Reporter, UserAppApiFactory};
use crate::application::usecases::login::{Credentials, LoginUseCase};
use crate::application::userapp::{self, MASTER_APP_ID};

pub struct RegisterUseCase<'a> {
    pub api_factory: &'a dyn UserAppApiFactory,
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl<'a> RegisterUseCase<'a> {
    /// 가입 후 같은 자격 증명으로 곧바로 로그인한다.
    pub async fn execute(&self, config: &mut Configuration, credentials: Credentials) -> CliResult<()> {
        if credentials.email.is_none() && credentials.password.is_none() {
            self.reporter.raw("Create a new UserApp account.");
        }

        let email = match credentials.email {
            Some(email) => email,
            None => self.prompter.ask("email: ")?,
        };
        let password = match credentials.password {
            Some(password) => password,
            None => {
                let first = self.prompter.ask_secret("password: ")?;
                if first != self.prompter.ask_secret("retype same password: ")? {
                    return Err(CliError::usage("Password did not match."));
                }
                first
            }
        };

        let master = ApiSettings::for_app(MASTER_APP_ID, &config.get_selected_profile());
        let api = self.api_factory.build(master);
        userapp::user_save(api.as_ref(), &email, &email, &password).await?;
        tracing::debug!(email = %email, "account created");

        LoginUseCase {
            api_factory: self.api_factory,
            prompter: self.prompter,
            reporter: self.reporter,
        }
        .execute(
            config,
            Credentials {
                email: Some(email),
                password: Some(password),
            },
        )
        .await
    }
}
