//! 명령줄 인자(argv) 파싱 모듈.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "userapp", version)]
#[command(about = "Universal Command Line Environment for UserApp")]
pub struct Cli {
    /// Command and its arguments, e.g. `call user.get user_id=abc`.
    /// Omit to start the interactive shell.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    Run(Vec<String>),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        if self.args.is_empty() {
            CliAction::Interactive
        } else {
            CliAction::Run(self.args)
        }
    }
}
