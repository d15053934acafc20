//! userapp-cli library root.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

use anyhow::{Context, Result};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use application::config::Configuration;
use domain::session::SessionContext;
use infrastructure::adapters::JsonConfigRepository;
use interface::cli::{AppComposition, CliAction, Shell, run_repl};

/// 설정을 불러온 뒤 단일 명령 또는 대화형 쉘을 실행하고 종료 코드를 반환한다.
pub async fn run(composition: &AppComposition, action: CliAction) -> Result<i32> {
    let mut config = Configuration::new(Box::new(JsonConfigRepository::default()));
    config.load().context("failed to load configuration")?;

    match action {
        CliAction::Interactive => {
            let mut shell = Shell::new(composition, config, SessionContext::new(true));
            run_repl(&mut shell).await?;
            Ok(0)
        }
        CliAction::Run(tokens) => {
            let mut shell = Shell::new(composition, config, SessionContext::new(false));
            match shell.run_tokens(tokens).await {
                Ok(()) => Ok(0),
                Err(err) => {
                    shell.report(&err);
                    Ok(1)
                }
            }
        }
    }
}
