//! 토큰 목록을 쉘 명령으로 변환하는 팩토리.

use crate::domain::session::SessionContext;

pub const CALL_SCOPE: &str = "call";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    ClearConsole,
    Config(Vec<String>),
    Profile(Vec<String>),
    Login(Vec<String>),
    Register(Vec<String>),
    /// 인자 없는 `call`. 이후 입력 앞에 스코프를 붙인다.
    EnterScope(Vec<String>),
    ApiCall(Vec<String>),
    DashboardLaunch,
    Install,
    Help,
    Invalid(Vec<String>),
}

/// 세션 스코프를 입력 앞에 붙인 뒤 첫 토큰으로 명령을 고른다.
/// 스코프는 대화형 모드에서만 쌓인다.
pub fn create_command(session: &SessionContext, input: Vec<String>) -> ShellCommand {
    let tokens: Vec<String> = session.scopes().iter().cloned().chain(input).collect();

    let Some((command_type, rest)) = tokens.split_first() else {
        return ShellCommand::Invalid(tokens);
    };

    if command_type == "clear" || rest.last().is_some_and(|last| last == "clear") {
        return ShellCommand::ClearConsole;
    }

    let rest = rest.to_vec();
    match command_type.as_str() {
        "config" => ShellCommand::Config(rest),
        "profile" => ShellCommand::Profile(rest),
        "login" => ShellCommand::Login(rest),
        "register" => ShellCommand::Register(rest),
        CALL_SCOPE => {
            if session.is_interactive() && rest.is_empty() && !session.in_scope(CALL_SCOPE) {
                ShellCommand::EnterScope(vec![CALL_SCOPE.to_string()])
            } else {
                ShellCommand::ApiCall(rest)
            }
        }
        "dashboard" => ShellCommand::DashboardLaunch,
        "install" => ShellCommand::Install,
        "help" => ShellCommand::Help,
        _ => ShellCommand::Invalid(tokens.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::cli::parser::parse;

    #[test]
    fn dispatches_on_first_token() {
        let batch = SessionContext::new(false);
        assert_eq!(
            create_command(&batch, parse("config set secure false")),
            ShellCommand::Config(vec!["set".into(), "secure".into(), "false".into()])
        );
        assert_eq!(
            create_command(&batch, parse("profile list")),
            ShellCommand::Profile(vec!["list".into()])
        );
        assert_eq!(
            create_command(&batch, parse("login joe@x.io pw")),
            ShellCommand::Login(vec!["joe@x.io".into(), "pw".into()])
        );
        assert_eq!(
            create_command(&batch, parse("register")),
            ShellCommand::Register(vec![])
        );
        assert_eq!(create_command(&batch, parse("dashboard")), ShellCommand::DashboardLaunch);
        assert_eq!(create_command(&batch, parse("install")), ShellCommand::Install);
        assert_eq!(create_command(&batch, parse("help")), ShellCommand::Help);
    }

    #[test]
    fn clear_wins_as_first_or_last_token() {
        let batch = SessionContext::new(false);
        assert_eq!(create_command(&batch, parse("clear")), ShellCommand::ClearConsole);
        assert_eq!(
            create_command(&batch, parse("config list clear")),
            ShellCommand::ClearConsole
        );
        assert_eq!(
            create_command(&batch, parse("nonsense clear")),
            ShellCommand::ClearConsole
        );
    }

    #[test]
    fn unknown_and_empty_input_are_invalid() {
        let batch = SessionContext::new(false);
        assert_eq!(
            create_command(&batch, parse("fly away")),
            ShellCommand::Invalid(vec!["fly".into(), "away".into()])
        );
        assert_eq!(create_command(&batch, parse("")), ShellCommand::Invalid(vec![]));
    }

    #[test]
    fn bare_call_enters_scope_only_when_interactive() {
        let batch = SessionContext::new(false);
        assert_eq!(create_command(&batch, parse("call")), ShellCommand::ApiCall(vec![]));

        let mut shell = SessionContext::new(true);
        assert_eq!(
            create_command(&shell, parse("call")),
            ShellCommand::EnterScope(vec!["call".into()])
        );

        shell.enter(CALL_SCOPE);
        assert_eq!(create_command(&shell, parse("")), ShellCommand::ApiCall(vec![]));
    }

    #[test]
    fn scope_is_prepended_to_input() {
        let mut shell = SessionContext::new(true);
        shell.enter(CALL_SCOPE);

        assert_eq!(
            create_command(&shell, parse("user.get user_id=abc")),
            ShellCommand::ApiCall(vec!["user.get".into(), "user_id=abc".into()])
        );
        assert_eq!(create_command(&shell, parse("clear")), ShellCommand::ClearConsole);
    }
}
