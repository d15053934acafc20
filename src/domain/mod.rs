//! Domain layer
//! 프로필/세션/호출 인자 규칙을 외부 의존성 없이 표현한다.

pub mod api_call;
pub mod profile;
pub mod session;
