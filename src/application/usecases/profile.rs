//! `profile list|current|switch` 유스케이스.

use crate::application::config::Configuration;
use crate::application::error::{CliError, CliResult};
use crate::application::ports::{Prompter, Reporter};
use crate::application::render::pretty_json;

const SUBCOMMAND_HINT: &str = "Please specify a command (list, current or switch).";

pub struct ProfileUseCase<'a> {
    pub prompter: &'a dyn Prompter,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ProfileUseCase<'a> {
    pub fn execute(&self, config: &mut Configuration, args: &[String]) -> CliResult<()> {
        let Some((subcommand, rest)) = args.split_first() else {
            return Err(CliError::usage(SUBCOMMAND_HINT));
        };

        match subcommand.as_str() {
            "list" => {
                self.reporter.result(&pretty_json(&config.profile_names())?);
                Ok(())
            }
            "current" => {
                let profile = config.get_selected_profile();
                match profile.user.login.as_deref() {
                    Some(login) => self.reporter.result(login),
                    None => self.reporter.result(
                        "No profile. Use 'login' or 'register' if you want to create a new profile.",
                    ),
                }
                Ok(())
            }
            "switch" => self.switch(config, rest),
            _ => Err(CliError::usage(SUBCOMMAND_HINT)),
        }
    }

    /// 기본 프로필 승격 여부를 묻고, 승격할 때만 저장한다.
    fn switch(&self, config: &mut Configuration, args: &[String]) -> CliResult<()> {
        let Some(name) = args.first() else {
            return Err(CliError::usage(
                "Please specify a profile to switch to. For valid profiles, try 'profile list'.",
            ));
        };
        if !config.has_profile(name) {
            return Err(CliError::usage(format!("Invalid profile name '{name}'.")));
        }

        if self.prompter.confirm("Set as primary? ", false)? {
            config.promote_primary(name);
            config.save()?;
        }

        config.set_selected_profile(name);
        tracing::debug!(profile = %name, "profile switched");
        Ok(())
    }
}
