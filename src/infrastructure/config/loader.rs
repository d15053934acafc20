//! 설정 파일 로더/저장기.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::error::{CliError, CliResult};
use crate::application::ports::ProfileMap;
use crate::application::render::pretty_json;

/// 디스크 문서 형식: `{"profiles": {<name>: <Profile>}}`
#[derive(Debug, Default, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    profiles: ProfileMap,
}

/// 파일이 없으면 빈 매핑을 반환한다. 읽기/파싱 실패는 오류로 보고한다.
pub fn read_profiles(path: &Path) -> CliResult<ProfileMap> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file absent, starting empty");
        return Ok(ProfileMap::new());
    }

    let raw = fs::read_to_string(path).map_err(|err| {
        CliError::io(format!("failed to read config at {}: {err}", path.display()))
    })?;
    let parsed: ConfigFile = serde_json::from_str(&raw).map_err(|err| {
        CliError::io(format!(
            "failed to parse JSON in {}: {err} (fix or remove the file to continue)",
            path.display()
        ))
    })?;

    Ok(parsed.profiles)
}

/// 상위 디렉터리를 만들고 정렬된 4칸 들여쓰기 JSON으로 덮어쓴다.
pub fn write_profiles(path: &Path, profiles: &ProfileMap) -> CliResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|err| {
            CliError::io(format!(
                "failed to create directory {}: {err}",
                parent.display()
            ))
        })?;
    }

    let rendered = pretty_json(&ConfigFile {
        profiles: profiles.clone(),
    })?;
    fs::write(path, format!("{rendered}\n")).map_err(|err| {
        CliError::io(format!("failed to write config at {}: {err}", path.display()))
    })
}
