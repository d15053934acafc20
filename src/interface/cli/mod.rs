//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/명령 생성/실행/REPL/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod factory;
pub mod parser;
pub mod repl;
pub mod shell;

pub use command::{Cli, CliAction};
pub use composition::AppComposition;
pub use factory::{ShellCommand, create_command};
pub use parser::parse;
pub use repl::run_repl;
pub use shell::Shell;
