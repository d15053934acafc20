//! 실행 파일 설치 포트 구현 어댑터.

use std::env;
use std::fs;
use std::path::Path;

use crate::application::error::{CliError, CliResult};
use crate::application::ports::{InstallOutcome, Installer};

/// 현재 실행 중인 바이너리를 대상 경로로 복사한다.
pub struct ExecutableInstaller;

impl Installer for ExecutableInstaller {
    fn install(&self, target: &Path) -> CliResult<InstallOutcome> {
        let source = env::current_exe()
            .and_then(fs::canonicalize)
            .map_err(|err| CliError::io(format!("failed to locate executable: {err}")))?;

        if fs::canonicalize(target).is_ok_and(|existing| existing == source) {
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        copy_executable(&source, target)?;
        Ok(InstallOutcome::Installed)
    }
}

fn copy_executable(source: &Path, target: &Path) -> CliResult<()> {
    // fs::copy는 권한 비트도 함께 복사한다.
    fs::copy(source, target).map_err(|err| {
        CliError::io(format!(
            "failed to copy {} to {}: {err}",
            source.display(),
            target.display()
        ))
    })?;
    tracing::debug!(target = %target.display(), "executable installed");
    Ok(())
}
