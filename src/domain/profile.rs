//! 프로필(사용자 자격 증명 + 서버 접속 설정) 도메인 모델.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_ADDRESS: &str = "api.userapp.io";

/// 제로값(`Default`)은 비기본 프로필이다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Profile {
    /// 디스크상의 기본 프로필 여부
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub user: UserSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct UserSection {
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerSection {
    #[serde(default = "default_base_address")]
    pub base_address: String,
    #[serde(default = "default_secure")]
    pub secure: bool,
    #[serde(default)]
    pub debug: bool,
}

fn default_base_address() -> String {
    DEFAULT_BASE_ADDRESS.to_string()
}

fn default_secure() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            base_address: default_base_address(),
            secure: default_secure(),
            debug: false,
        }
    }
}

/// 설정 키가 속한 섹션.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    User,
    Server,
}

/// `config get/set`이 허용하는 키 목록.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    AppId,
    Token,
    Login,
    Password,
    BaseAddress,
    Debug,
    Secure,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 7] = [
        ConfigKey::AppId,
        ConfigKey::Token,
        ConfigKey::Login,
        ConfigKey::Password,
        ConfigKey::BaseAddress,
        ConfigKey::Debug,
        ConfigKey::Secure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::AppId => "app_id",
            ConfigKey::Token => "token",
            ConfigKey::Login => "login",
            ConfigKey::Password => "password",
            ConfigKey::BaseAddress => "base_address",
            ConfigKey::Debug => "debug",
            ConfigKey::Secure => "secure",
        }
    }

    pub fn section(self) -> ConfigSection {
        match self {
            ConfigKey::AppId | ConfigKey::Token | ConfigKey::Login | ConfigKey::Password => {
                ConfigSection::User
            }
            ConfigKey::BaseAddress | ConfigKey::Debug | ConfigKey::Secure => ConfigSection::Server,
        }
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == raw)
            .ok_or_else(|| format!("Invalid config variable '{raw}'."))
    }
}

/// 설정 값. 문자열 키는 비어 있을 수 있다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(Option<String>),
    Flag(bool),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(Some(text)) => f.write_str(text),
            ConfigValue::Text(None) => Ok(()),
            ConfigValue::Flag(true) => f.write_str("true"),
            ConfigValue::Flag(false) => f.write_str("false"),
        }
    }
}

impl UserSection {
    fn slot(&self, key: ConfigKey) -> Option<&Option<String>> {
        match key {
            ConfigKey::AppId => Some(&self.app_id),
            ConfigKey::Token => Some(&self.token),
            ConfigKey::Login => Some(&self.login),
            ConfigKey::Password => Some(&self.password),
            _ => None,
        }
    }

    fn slot_mut(&mut self, key: ConfigKey) -> Option<&mut Option<String>> {
        match key {
            ConfigKey::AppId => Some(&mut self.app_id),
            ConfigKey::Token => Some(&mut self.token),
            ConfigKey::Login => Some(&mut self.login),
            ConfigKey::Password => Some(&mut self.password),
            _ => None,
        }
    }
}

impl ServerSection {
    fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::Debug => ConfigValue::Flag(self.debug),
            ConfigKey::Secure => ConfigValue::Flag(self.secure),
            _ => ConfigValue::Text(Some(self.base_address.clone())),
        }
    }

    fn set(&mut self, key: ConfigKey, raw: &str) {
        match key {
            ConfigKey::Debug => self.debug = parse_bool(raw),
            ConfigKey::Secure => self.secure = parse_bool(raw),
            _ => self.base_address = raw.to_string(),
        }
    }
}

impl Profile {
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key.section() {
            ConfigSection::User => ConfigValue::Text(self.user.slot(key).cloned().flatten()),
            ConfigSection::Server => self.server.get(key),
        }
    }

    /// 원시 문자열을 키 타입에 맞게 변환해 저장하고, 저장된 값을 반환한다.
    pub fn set(&mut self, key: ConfigKey, raw: &str) -> ConfigValue {
        match key.section() {
            ConfigSection::User => {
                if let Some(slot) = self.user.slot_mut(key) {
                    *slot = Some(raw.to_string());
                }
            }
            ConfigSection::Server => self.server.set(key, raw),
        }
        self.get(key)
    }

    pub fn has_token(&self) -> bool {
        self.user
            .token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// `true/1/yes/on`(대소문자 무시)만 참으로 본다.
pub fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_truthy_words() {
        for raw in ["true", "TRUE", "1", "yes", "on", "On"] {
            assert!(parse_bool(raw), "{raw} should be true");
        }
        for raw in ["false", "0", "no", "", "enabled", "2"] {
            assert!(!parse_bool(raw), "{raw} should be false");
        }
    }

    #[test]
    fn keys_map_to_fixed_sections() {
        assert_eq!(ConfigKey::AppId.section(), ConfigSection::User);
        assert_eq!(ConfigKey::Password.section(), ConfigSection::User);
        assert_eq!(ConfigKey::BaseAddress.section(), ConfigSection::Server);
        assert_eq!(ConfigKey::Secure.section(), ConfigSection::Server);
        assert!("primary".parse::<ConfigKey>().is_err());
        assert_eq!("debug".parse::<ConfigKey>(), Ok(ConfigKey::Debug));
    }

    #[test]
    fn set_coerces_boolean_keys() {
        let mut profile = Profile::default();
        assert!(profile.server.secure);

        let stored = profile.set(ConfigKey::Secure, "false");
        assert_eq!(stored, ConfigValue::Flag(false));
        assert!(!profile.server.secure);

        profile.set(ConfigKey::Debug, "Yes");
        assert!(profile.server.debug);
    }

    #[test]
    fn every_key_reads_back_what_was_set() {
        let mut profile = Profile::default();
        for key in ConfigKey::ALL {
            let raw = if matches!(key, ConfigKey::Debug | ConfigKey::Secure) {
                "true"
            } else {
                "value"
            };
            profile.set(key, raw);
            assert_eq!(profile.get(key).to_string(), raw, "{}", key.as_str());
        }
        assert_eq!(profile.user.password.as_deref(), Some("value"));
        assert_eq!(profile.server.base_address, "value");
    }

    #[test]
    fn display_renders_empty_and_flags() {
        assert_eq!(ConfigValue::Text(None).to_string(), "");
        assert_eq!(ConfigValue::Flag(true).to_string(), "true");
        assert_eq!(ConfigValue::Text(Some("abc".into())).to_string(), "abc");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"user":{"login":"joe"}}"#).unwrap();
        assert!(!profile.primary);
        assert_eq!(profile.user.login.as_deref(), Some("joe"));
        assert_eq!(profile.server, ServerSection::default());
    }
}
