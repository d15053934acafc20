//! 터미널/브라우저 포트 구현 어댑터.

use std::io;
use std::process::{Command, Stdio};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use crate::application::error::{CliError, CliResult};
use crate::application::ports::Console;

pub struct SystemConsole;

impl Console for SystemConsole {
    fn clear(&self) -> CliResult<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
            .map_err(|err| CliError::io(format!("failed to clear console: {err}")))
    }

    fn open_url(&self, url: &str) -> CliResult<()> {
        let (program, args) = opener_command(url);

        // 브라우저 출력이 쉘 화면을 덮지 않도록 stdout/stderr를 버린다.
        Command::new(program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|err| CliError::io(format!("failed to open browser with {program}: {err}")))
    }
}

fn opener_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "windows") {
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        )
    } else if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}
