//! 프로필 설정 저장소(메모리 상태 + 영속화 포트).
//!
//! 주의: 파일 접근은 `infrastructure`의 `ConfigRepository` 구현에서만 수행한다.

use std::borrow::Cow;

use crate::application::error::CliResult;
use crate::application::ports::{ConfigRepository, ProfileMap};
use crate::domain::profile::Profile;

/// 저장소에 기본 프로필이 하나도 없을 때 편집용으로 생성하는 프로필 이름.
pub const DEFAULT_PROFILE_NAME: &str = "default";

pub struct Configuration {
    repo: Box<dyn ConfigRepository>,
    profiles: ProfileMap,
    /// 세션에서 선택한 프로필(저장하지 않음)
    selected_profile_name: Option<String>,
}

impl Configuration {
    pub fn new(repo: Box<dyn ConfigRepository>) -> Self {
        Self {
            repo,
            profiles: ProfileMap::new(),
            selected_profile_name: None,
        }
    }

    /// 저장소에서 프로필 매핑을 다시 읽는다.
    pub fn load(&mut self) -> CliResult<()> {
        self.profiles = self.repo.load()?;
        tracing::debug!(profiles = self.profiles.len(), "configuration loaded");
        Ok(())
    }

    pub fn save(&self) -> CliResult<()> {
        self.repo.save(&self.profiles)?;
        tracing::debug!(profiles = self.profiles.len(), "configuration saved");
        Ok(())
    }

    pub fn profiles(&self) -> &ProfileMap {
        &self.profiles
    }

    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }

    pub fn has_profile(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// 없는 이름이면 제로값 프로필을 생성해 보관한다.
    pub fn get_profile(&mut self, name: &str) -> &mut Profile {
        self.profiles.entry(name.to_string()).or_default()
    }

    pub fn get_default_profile() -> Profile {
        Profile::default()
    }

    fn primary_profile_name(&self) -> Option<&str> {
        self.profiles
            .iter()
            .find(|(_, profile)| profile.primary)
            .map(|(name, _)| name.as_str())
    }

    /// 첫 번째 기본 프로필. 없으면 제로값(매핑에 넣지 않음).
    pub fn get_primary_profile(&self) -> Cow<'_, Profile> {
        match self.profiles.values().find(|profile| profile.primary) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(Self::get_default_profile()),
        }
    }

    pub fn get_selected_profile(&self) -> Cow<'_, Profile> {
        let Some(name) = &self.selected_profile_name else {
            return self.get_primary_profile();
        };

        match self.profiles.get(name) {
            Some(profile) => Cow::Borrowed(profile),
            None => Cow::Owned(Self::get_default_profile()),
        }
    }

    /// 편집 대상 프로필. 반환값은 항상 매핑 안에 존재하므로 `save()`에 반영된다.
    /// 선택/기본 프로필이 모두 없으면 `default` 프로필을 기본으로 만든다.
    pub fn selected_profile_mut(&mut self) -> &mut Profile {
        let name = self
            .selected_profile_name
            .clone()
            .or_else(|| self.primary_profile_name().map(str::to_string));

        match name {
            Some(name) => self.get_profile(&name),
            None => {
                let profile = self.get_profile(DEFAULT_PROFILE_NAME);
                profile.primary = true;
                profile
            }
        }
    }

    pub fn selected_profile_name(&self) -> Option<&str> {
        self.selected_profile_name.as_deref()
    }

    /// 존재하는 프로필만 선택할 수 있다.
    pub fn set_selected_profile(&mut self, name: &str) -> bool {
        if !self.has_profile(name) {
            return false;
        }
        self.selected_profile_name = Some(name.to_string());
        true
    }

    /// 대상 프로필만 기본으로 남긴다.
    pub fn promote_primary(&mut self, name: &str) {
        for (profile_name, profile) in self.profiles.iter_mut() {
            profile.primary = profile_name == name;
        }
    }
}
