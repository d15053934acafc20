//! UserApp REST API 연동 계층.

pub mod client;

pub use client::HttpUserAppClient;
