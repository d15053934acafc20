//! UserApp API HTTP 클라이언트 구현.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

use crate::application::error::{CliError, CliResult};
use crate::application::ports::{ApiSettings, UserAppApi};

const USER_AGENT: &str = concat!("userapp-cli/", env!("CARGO_PKG_VERSION"));

pub struct HttpUserAppClient {
    client: Client,
    settings: ApiSettings,
}

impl HttpUserAppClient {
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// `<scheme>://<base_address>/v<version>/<service>.<method>`
    fn endpoint(&self, version: u32, service: &str, method: &str) -> CliResult<Url> {
        let scheme = if self.settings.secure { "https" } else { "http" };
        let base = self.settings.base_address.trim_end_matches('/');
        let target = if service.is_empty() {
            method.to_string()
        } else {
            format!("{service}.{method}")
        };

        let raw = format!("{scheme}://{base}/v{version}/{target}");
        Url::parse(&raw).map_err(|err| CliError::usage(format!("invalid API address {raw}: {err}")))
    }

    fn request(&self, url: Url) -> RequestBuilder {
        // 앱 ID와 토큰을 basic 인증으로 전달한다(토큰이 없으면 빈 값).
        self.client
            .post(url)
            .header("User-Agent", USER_AGENT)
            .basic_auth(
                self.settings.app_id.clone().unwrap_or_default(),
                Some(self.settings.token.clone().unwrap_or_default()),
            )
    }
}

#[async_trait]
impl UserAppApi for HttpUserAppClient {
    async fn call(
        &self,
        version: u32,
        service: &str,
        method: &str,
        params: Value,
    ) -> CliResult<Value> {
        let url = self.endpoint(version, service, method)?;
        if self.settings.debug {
            tracing::debug!(%url, %params, "userapp: request");
        }

        let resp = self
            .request(url)
            .json(&params)
            .send()
            .await
            .map_err(|err| CliError::remote(format!("userapp: request failed: {err}")))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|err| CliError::remote(format!("userapp: failed to read response: {err}")))?;
        if self.settings.debug {
            tracing::debug!(%status, body = %body, "userapp: response");
        }

        interpret_response(status.is_success(), status.as_u16(), &body)
    }
}

/// 본문에 `error_code`가 있으면 원격 오류로 본다.
fn interpret_response(success: bool, status: u16, body: &str) -> CliResult<Value> {
    if body.trim().is_empty() {
        return if success {
            Ok(Value::Null)
        } else {
            Err(CliError::remote(format!("userapp: HTTP {status}")))
        };
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !success => {
            return Err(CliError::remote(format!("userapp: HTTP {status}: {body}")));
        }
        Err(err) => {
            return Err(CliError::remote(format!("userapp: invalid response JSON: {err}")));
        }
    };

    if let Some(code) = value.get("error_code").and_then(Value::as_str) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(code);
        return Err(CliError::remote(message));
    }

    if !success {
        return Err(CliError::remote(format!("userapp: HTTP {status}: {body}")));
    }

    Ok(value)
}
