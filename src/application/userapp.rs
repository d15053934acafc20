//! 로그인/가입/대시보드가 사용하는 UserApp API 상위 연산.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::application::error::{CliError, CliResult};
use crate::application::ports::UserAppApi;

/// CLI가 계정 관리용으로 접속하는 UserApp 마스터 앱.
pub const MASTER_APP_ID: &str = "51ded0be98035";
/// CLI가 발급/재사용하는 API 토큰 이름.
pub const CLI_TOKEN_NAME: &str = "UserApp CLI";
pub const API_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginSession {
    pub token: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
struct AppInfo {
    app_id: String,
}

#[derive(Debug, Deserialize)]
struct TokenItem {
    #[serde(default)]
    name: Option<String>,
    value: String,
}

#[derive(Debug, Deserialize)]
struct TokenSearch {
    #[serde(default)]
    items: Vec<TokenItem>,
}

async fn invoke<T: DeserializeOwned>(
    api: &dyn UserAppApi,
    service: &str,
    method: &str,
    params: Value,
) -> CliResult<T> {
    let raw = api.call(API_VERSION, service, method, params).await?;
    serde_json::from_value(raw).map_err(|err| {
        CliError::remote(format!("unexpected response from {service}.{method}: {err}"))
    })
}

pub async fn user_login(
    api: &dyn UserAppApi,
    login: &str,
    password: &str,
) -> CliResult<LoginSession> {
    invoke(
        api,
        "user",
        "login",
        json!({ "login": login, "password": password }),
    )
    .await
}

pub async fn user_save(
    api: &dyn UserAppApi,
    login: &str,
    email: &str,
    password: &str,
) -> CliResult<Value> {
    api.call(
        API_VERSION,
        "user",
        "save",
        json!({ "login": login, "email": email, "password": password }),
    )
    .await
}

/// 로그인 세션이 속한 앱 ID.
pub async fn app_id(api: &dyn UserAppApi) -> CliResult<String> {
    let app: AppInfo = invoke(api, "app", "get", json!({})).await?;
    Ok(app.app_id)
}

/// 이름이 같은 토큰을 재사용하고, 없으면 새로 발급한다.
pub async fn find_or_create_token(api: &dyn UserAppApi, name: &str) -> CliResult<String> {
    let found: TokenSearch = invoke(api, "token", "search", json!({ "fields": "*" })).await?;

    if let Some(existing) = found
        .items
        .into_iter()
        .rev()
        .find(|item| item.name.as_deref() == Some(name))
    {
        return Ok(existing.value);
    }

    tracing::debug!(name, "no CLI token found, creating one");
    let created: TokenItem = invoke(
        api,
        "token",
        "save",
        json!({ "name": name, "enabled": true }),
    )
    .await?;
    Ok(created.value)
}
