//! Interface layer
//! 명령줄/대화형 쉘 입력을 유스케이스 호출로 연결한다.

pub mod cli;
