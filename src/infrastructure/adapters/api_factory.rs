//! UserApp API 클라이언트 팩토리 포트 구현 어댑터.

use crate::application::ports::{ApiSettings, UserAppApi, UserAppApiFactory};
use crate::infrastructure::userapp::HttpUserAppClient;

/// 프로필 접속 정보마다 HTTP 클라이언트를 생성한다.
pub struct HttpApiFactory;

impl UserAppApiFactory for HttpApiFactory {
    fn build(&self, settings: ApiSettings) -> Box<dyn UserAppApi> {
        Box::new(HttpUserAppClient::new(settings))
    }
}
