//! 입력 한 줄을 토큰으로 나누는 파서.

/// 공백 한 칸 단위로 나눈다. 연속 공백은 빈 토큰을 만든다.
/// 빈 줄은 빈 토큰 하나가 아니라 빈 목록이다.
pub fn parse(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    line.split(' ').map(str::to_string).collect()
}
