//! CLI 실행 파일 설치 유스케이스.

use std::path::Path;

use crate::application::error::{CliError, CliResult};
use crate::application::ports::{InstallOutcome, Installer, Reporter};

pub const INSTALL_TARGET: &str = "/usr/local/bin/userapp-cli";

pub struct InstallUseCase<'a> {
    pub installer: &'a dyn Installer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> InstallUseCase<'a> {
    pub fn execute(&self) -> CliResult<()> {
        match self.installer.install(Path::new(INSTALL_TARGET)) {
            Ok(InstallOutcome::Installed) => {
                self.reporter.result(
                    "Successfully installed. Now you can access the CLI using # userapp-cli",
                );
                Ok(())
            }
            Ok(InstallOutcome::AlreadyInstalled) => Err(CliError::usage(
                "Already installed. Cannot install same file.",
            )),
            Err(err) => {
                tracing::debug!(error = %err, "install failed");
                Err(CliError::io(
                    "Error installing CLI. Please verify that you are sudo/have permissions to /usr/local/bin.",
                ))
            }
        }
    }
}
