//! 유스케이스 테스트용 메모리 포트 구현.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::application::error::{CliError, CliResult};
use crate::application::ports::{
    ApiSettings, ConfigRepository, Console, InstallOutcome, Installer, ProfileMap, Prompter,
    Reporter, UserAppApi, UserAppApiFactory,
};
use crate::domain::profile::Profile;

#[derive(Clone, Default)]
pub struct MemoryConfigRepository {
    profiles: Arc<Mutex<ProfileMap>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryConfigRepository {
    pub fn insert(&self, name: &str, profile: Profile) {
        self.profiles
            .lock()
            .unwrap()
            .insert(name.to_string(), profile);
    }

    pub fn snapshot(&self) -> ProfileMap {
        self.profiles.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl ConfigRepository for MemoryConfigRepository {
    fn load(&self) -> CliResult<ProfileMap> {
        Ok(self.snapshot())
    }

    fn save(&self, profiles: &ProfileMap) -> CliResult<()> {
        *self.profiles.lock().unwrap() = profiles.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl Reporter for RecordingReporter {
    fn result(&self, message: &str) {
        self.push(format!("(result) {message}"));
    }

    fn info(&self, message: &str) {
        self.push(format!("(info) {message}"));
    }

    fn error(&self, message: &str) {
        self.push(format!("(error) {message}"));
    }

    fn raw(&self, line: &str) {
        self.push(line.to_string());
    }
}

/// 미리 정한 답을 순서대로 돌려준다.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|s| s.to_string()).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> CliResult<String> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| CliError::io(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, prompt: &str) -> CliResult<String> {
        self.next(prompt)
    }

    fn ask_secret(&self, prompt: &str) -> CliResult<String> {
        self.next(prompt)
    }

    fn confirm(&self, question: &str, default_yes: bool) -> CliResult<bool> {
        let answer = self.next(question)?.to_ascii_lowercase();
        if answer.is_empty() {
            return Ok(default_yes);
        }
        Ok(answer == "y" || answer == "yes")
    }
}

#[derive(Default)]
struct FakeApiState {
    responses: HashMap<String, Result<Value, String>>,
    calls: Vec<(String, Value)>,
    builds: Vec<ApiSettings>,
}

/// `service.method` 단위로 응답을 지정하는 가짜 API.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeApiState>>,
}

impl FakeApi {
    pub fn respond(&self, endpoint: &str, value: Value) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(endpoint.to_string(), Ok(value));
    }

    pub fn fail(&self, endpoint: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(endpoint.to_string(), Err(message.to_string()));
    }

    pub fn was_called(&self, endpoint: &str) -> bool {
        self.params_of(endpoint).is_some()
    }

    pub fn params_of(&self, endpoint: &str) -> Option<Value> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .rev()
            .find(|(name, _)| name == endpoint)
            .map(|(_, params)| params.clone())
    }

    pub fn builds(&self) -> Vec<ApiSettings> {
        self.state.lock().unwrap().builds.clone()
    }
}

#[async_trait]
impl UserAppApi for FakeApi {
    async fn call(
        &self,
        _version: u32,
        service: &str,
        method: &str,
        params: Value,
    ) -> CliResult<Value> {
        let endpoint = format!("{service}.{method}");
        let mut state = self.state.lock().unwrap();
        state.calls.push((endpoint.clone(), params));

        match state.responses.get(&endpoint) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(CliError::remote(message.clone())),
            None => Err(CliError::remote(format!("no response scripted for {endpoint}"))),
        }
    }
}

impl UserAppApiFactory for FakeApi {
    fn build(&self, settings: ApiSettings) -> Box<dyn UserAppApi> {
        self.state.lock().unwrap().builds.push(settings);
        Box::new(self.clone())
    }
}

#[derive(Default)]
pub struct FakeConsole {
    cleared: Mutex<usize>,
    opened: Mutex<Vec<String>>,
}

impl FakeConsole {
    pub fn cleared(&self) -> usize {
        *self.cleared.lock().unwrap()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl Console for FakeConsole {
    fn clear(&self) -> CliResult<()> {
        *self.cleared.lock().unwrap() += 1;
        Ok(())
    }

    fn open_url(&self, url: &str) -> CliResult<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

pub struct FakeInstaller {
    pub outcome: InstallOutcome,
    pub targets: Mutex<Vec<PathBuf>>,
}

impl Installer for FakeInstaller {
    fn install(&self, target: &Path) -> CliResult<InstallOutcome> {
        self.targets.lock().unwrap().push(target.to_path_buf());
        Ok(self.outcome.clone())
    }
}
