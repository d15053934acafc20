//! 사용자 입력 포트 구현 어댑터.

use std::io::{self, Write};

use crate::application::error::{CliError, CliResult};
use crate::application::ports::Prompter;

/// stdin에서 한 줄씩 읽고, 비밀번호는 에코 없이 읽는 어댑터.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&self, prompt: &str) -> CliResult<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Err(CliError::io("input closed"));
        }
        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_secret(&self, prompt: &str) -> CliResult<String> {
        rpassword::prompt_password(prompt)
            .map_err(|err| CliError::io(format!("failed to read password: {err}")))
    }

    fn confirm(&self, question: &str, default_yes: bool) -> CliResult<bool> {
        let answer = self.ask(question)?.trim().to_ascii_lowercase();
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer == "y" || answer == "yes")
    }
}
