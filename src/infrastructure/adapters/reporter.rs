//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// `(result)`/`(info)`/`(error)` 접두어로 출력한다. TTY에서는 접두어에 색을 입힌다.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }
}

impl ConsoleReporter {
    fn tag(&self, tag: &str, ansi: &str) -> String {
        if self.interactive {
            format!("\x1b[{ansi}m({tag})\x1b[0m")
        } else {
            format!("({tag})")
        }
    }
}

impl Reporter for ConsoleReporter {
    fn result(&self, message: &str) {
        println!("{} {message}", self.tag("result", "32"));
    }

    fn info(&self, message: &str) {
        println!("{} {message}", self.tag("info", "33"));
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", self.tag("error", "31"));
    }

    fn raw(&self, line: &str) {
        println!("{line}");
    }
}
