//! 쉘 명령 실행기.
//! 설정/세션 상태를 한 번 만들어 보관하고 각 명령에 참조로 넘긴다.

use crate::application::config::Configuration;
use crate::application::error::{CliError, CliResult};
use crate::application::usecases::login::Credentials;
use crate::domain::session::SessionContext;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::factory::{ShellCommand, create_command};

const HELP_TEXT: &str = "\
Usage: userapp [COMMAND] [OPTIONS] [OPTIONS...]
       userapp register john@doe.com mysecretpsw999
       userapp login john@doe.com mysecretpsw999
       userapp config list
       userapp config get app_id
       userapp config set app_id 123
       userapp call
       userapp call user.get
       userapp call user.get user_id=abc

COMMANDS

  register [email] [password]
    Sign up for a new UserApp account.

  login [email] [password]
    Authenticate with UserApp and load your app id and token.

  config list
    List all config variables.

  config get <variable>
    Get a config variable. Available: app_id, token, login, password, base_address, secure, debug.

  config set <variable> <value>
    Set a config variable. In the interactive shell, run 'config save' to persist.

  config save
    Write the configuration to disk.

  profile list
    List all profiles.

  profile current
    Get the name of the current profile.

  profile switch <name>
    Switch to another profile.

  call
    Enter the callable scope (interactive shell only, Ctrl-C to leave).

  call <service>.<method>
    Call a UserApp API method. E.g. 'call user.get'.

  call <service>.<method> variable=value other_var=other_val
    Call a UserApp API method with arguments. E.g. 'call user.get user_id=abc'.

  dashboard
    Open the UserApp dashboard in your browser.

  install
    Copy this executable to /usr/local/bin/userapp-cli.

  clear
    Clear the console.
";

pub struct Shell<'a> {
    composition: &'a AppComposition,
    config: Configuration,
    session: SessionContext,
}

impl<'a> Shell<'a> {
    pub fn new(
        composition: &'a AppComposition,
        config: Configuration,
        session: SessionContext,
    ) -> Self {
        Self {
            composition,
            config,
            session,
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    /// 입력 토큰을 명령으로 변환해 실행한다.
    pub async fn run_tokens(&mut self, tokens: Vec<String>) -> CliResult<()> {
        let command = create_command(&self.session, tokens);
        tracing::debug!(?command, "dispatching command");
        self.execute(command).await
    }

    pub async fn execute(&mut self, command: ShellCommand) -> CliResult<()> {
        let composition = self.composition;

        match command {
            ShellCommand::ClearConsole => composition.console().clear(),
            ShellCommand::Config(args) => composition.edit_config_usecase().execute(
                &mut self.config,
                self.session.is_interactive(),
                &args,
            ),
            ShellCommand::Profile(args) => composition
                .profile_usecase()
                .execute(&mut self.config, &args),
            ShellCommand::Login(args) => {
                composition
                    .login_usecase()
                    .execute(&mut self.config, Credentials::from_args(&args))
                    .await
            }
            ShellCommand::Register(args) => {
                composition
                    .register_usecase()
                    .execute(&mut self.config, Credentials::from_args(&args))
                    .await
            }
            ShellCommand::EnterScope(scopes) => {
                for scope in scopes {
                    self.session.enter(scope);
                }
                Ok(())
            }
            ShellCommand::ApiCall(args) => {
                composition
                    .api_call_usecase()
                    .execute(&mut self.config, &args)
                    .await
            }
            ShellCommand::DashboardLaunch => {
                composition
                    .dashboard_usecase()
                    .execute(&mut self.config)
                    .await
            }
            ShellCommand::Install => composition.install_usecase().execute(),
            ShellCommand::Help => {
                for line in HELP_TEXT.lines() {
                    composition.reporter().raw(line);
                }
                Ok(())
            }
            ShellCommand::Invalid(tokens) => Err(CliError::usage(format!(
                "Invalid command '{}'",
                tokens.join(" ")
            ))),
        }
    }

    /// 명령 오류를 `(error)` 줄로 출력한다.
    pub fn report(&self, err: &CliError) {
        if let CliError::Io(_) = err {
            tracing::warn!(error = %err, "command failed with I/O error");
        }
        self.composition.reporter().error(&err.to_string());
    }
}
