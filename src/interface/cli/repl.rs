//! UserApp 대화형 쉘(REPL) 인터페이스.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};

use crate::domain::session::SessionContext;
use crate::interface::cli::factory::ShellCommand;
use crate::interface::cli::parser::parse;
use crate::interface::cli::shell::Shell;

const HISTORY_FILE: &str = ".uahistory";

/// 한 줄씩 읽어 실행한다.
/// Ctrl-C는 스코프를 한 단계 빠져나오고, 최상위에서는 쉘을 종료한다.
pub async fn run_repl(shell: &mut Shell<'_>) -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .build();
    let mut editor: Editor<(), DefaultHistory> =
        Editor::with_config(config).context("failed to initialise line editor")?;

    let history = history_path();
    if let Some(path) = &history
        && path.exists()
        && let Err(err) = editor.load_history(path)
    {
        tracing::warn!(path = %path.display(), error = %err, "failed to load history");
    }

    if let Err(err) = shell.execute(ShellCommand::ClearConsole).await {
        tracing::debug!(error = %err, "initial clear failed");
    }

    loop {
        let prompt = shell.session().prompt();

        match editor.readline(&prompt) {
            Ok(line) => {
                if let Err(err) = shell.run_tokens(parse(&line)).await {
                    shell.report(&err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!(" ");
                if !on_interrupt(shell.session_mut()) {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    if let Some(path) = &history
        && let Err(err) = editor.save_history(path)
    {
        tracing::warn!(path = %path.display(), error = %err, "failed to save history");
    }

    Ok(())
}

/// 스코프를 하나 빠져나온다. 더 나올 스코프가 없으면 `false`(쉘 종료).
fn on_interrupt(session: &mut SessionContext) -> bool {
    session.exit().is_some()
}

fn history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HISTORY_FILE))
}
