pub mod api_call;
pub mod dashboard;
pub mod edit_config;
pub mod install;
pub mod login;
pub mod profile;
pub mod register;
