//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod api_factory;
mod config_repository;
mod console;
mod installer;
mod reporter;
mod user_prompter;

pub use api_factory::HttpApiFactory;
pub use config_repository::JsonConfigRepository;
pub use console::SystemConsole;
pub use installer::ExecutableInstaller;
pub use reporter::ConsoleReporter;
pub use user_prompter::StdinPrompter;
