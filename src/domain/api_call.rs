//! `call service.method key=value ...` 인자 해석.

use std::collections::BTreeMap;

/// 원격 호출 대상과 문자열 파라미터.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiCallRequest {
    pub service: String,
    pub method: String,
    pub parameters: BTreeMap<String, String>,
}

impl ApiCallRequest {
    /// 첫 인자는 `service.method`, 나머지 `key=value`는 파라미터가 된다.
    /// `=`이 없는 인자는 버린다. 대상이 없으면 `None`.
    pub fn from_args(args: &[String]) -> Option<Self> {
        let (target, rest) = args.split_first()?;

        let (service, method) = match target.rsplit_once('.') {
            Some((service, method)) => (service.to_string(), method.to_string()),
            None => (String::new(), target.clone()),
        };

        let parameters = rest
            .iter()
            .filter_map(|arg| arg.split_once('='))
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Some(Self {
            service,
            method,
            parameters,
        })
    }

    pub fn endpoint(&self) -> String {
        if self.service.is_empty() {
            self.method.clone()
        } else {
            format!("{}.{}", self.service, self.method)
        }
    }
}
