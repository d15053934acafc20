//! `config list|get|set|save` 유스케이스.

use std::collections::BTreeMap;

use crate::application::config::Configuration;
use crate::application::error::{CliError, CliResult};
use crate::application::ports::Reporter;
use crate::application::render::pretty_json;
use crate::domain::profile::{ConfigKey, ConfigValue};

const SUBCOMMAND_HINT: &str = "Please specify a command (list, get, set or save).";

/// 선택된 프로필의 user/server 섹션 값을 조회/변경한다.
pub struct EditConfigUseCase<'a> {
    pub reporter: &'a dyn Reporter,
}

impl<'a> EditConfigUseCase<'a> {
    /// 비대화형 모드의 `set`은 즉시 저장하고, 대화형 모드는 `config save`를 기다린다.
    pub fn execute(
        &self,
        config: &mut Configuration,
        interactive: bool,
        args: &[String],
    ) -> CliResult<()> {
        let Some((subcommand, rest)) = args.split_first() else {
            return Err(CliError::usage(SUBCOMMAND_HINT));
        };

        match subcommand.as_str() {
            "list" => self.list(config),
            "get" => self.get(config, rest),
            "set" => self.set(config, interactive, rest),
            "save" => {
                config.save()?;
                self.reporter.result("Configuration saved");
                Ok(())
            }
            _ => Err(CliError::usage(SUBCOMMAND_HINT)),
        }
    }

    fn list(&self, config: &Configuration) -> CliResult<()> {
        let profile = config.get_selected_profile();
        let listing: BTreeMap<&str, serde_json::Value> = ConfigKey::ALL
            .into_iter()
            .map(|key| {
                let value = match profile.get(key) {
                    ConfigValue::Flag(flag) => serde_json::Value::Bool(flag),
                    ConfigValue::Text(text) => {
                        serde_json::Value::String(text.unwrap_or_default())
                    }
                };
                (key.as_str(), value)
            })
            .collect();

        self.reporter.result(&pretty_json(&listing)?);
        Ok(())
    }

    fn get(&self, config: &Configuration, args: &[String]) -> CliResult<()> {
        let Some(raw_key) = args.first() else {
            return Err(CliError::usage(
                "Please specify a variable to get (debug, base_address, secure, app_id, token).",
            ));
        };
        let key = raw_key.parse::<ConfigKey>().map_err(CliError::Usage)?;

        let value = config.get_selected_profile().get(key);
        self.reporter.result(&value.to_string());
        Ok(())
    }

    fn set(&self, config: &mut Configuration, interactive: bool, args: &[String]) -> CliResult<()> {
        let (raw_key, raw_value) = match args {
            [] => {
                return Err(CliError::usage(
                    "Please specify a variable to set (debug, base_address, secure, app_id, token).",
                ));
            }
            [key, value] => (key, value),
            _ => return Err(CliError::usage("Please specify a value to set.")),
        };
        let key = raw_key.parse::<ConfigKey>().map_err(CliError::Usage)?;

        let profile = config.selected_profile_mut();
        let previous = profile.get(key);
        let stored = profile.set(key, raw_value);
        tracing::debug!(key = key.as_str(), "config value changed");

        self.reporter.result(&format!(
            "Changed config '{}' from '{previous}' to '{stored}'.",
            key.as_str()
        ));

        if !interactive {
            config.save()?;
        }
        Ok(())
    }
}
