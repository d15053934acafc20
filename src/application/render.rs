//! 결과 출력용 JSON 렌더링.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::application::error::{CliError, CliResult};

/// 키 정렬 + 4칸 들여쓰기 JSON 문자열.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    // Value로 한 번 변환하면 객체 키가 정렬된다.
    let value = serde_json::to_value(value)
        .map_err(|err| CliError::io(format!("failed to encode JSON: {err}")))?;

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| CliError::io(format!("failed to encode JSON: {err}")))?;

    String::from_utf8(out).map_err(|err| CliError::io(format!("failed to encode JSON: {err}")))
}
