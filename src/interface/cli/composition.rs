//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use crate::application::ports::{Console, Installer, Prompter, Reporter, UserAppApiFactory};
use crate::application::usecases::api_call::ApiCallUseCase;
use crate::application::usecases::dashboard::DashboardUseCase;
use crate::application::usecases::edit_config::EditConfigUseCase;
use crate::application::usecases::install::InstallUseCase;
use crate::application::usecases::login::LoginUseCase;
use crate::application::usecases::profile::ProfileUseCase;
use crate::application::usecases::register::RegisterUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, ExecutableInstaller, HttpApiFactory, StdinPrompter, SystemConsole,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    api_factory: Arc<dyn UserAppApiFactory>,
    prompter: Arc<dyn Prompter>,
    reporter: Arc<dyn Reporter>,
    console: Arc<dyn Console>,
    installer: Arc<dyn Installer>,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::with_adapters(
            Arc::new(HttpApiFactory),
            Arc::new(StdinPrompter),
            Arc::new(ConsoleReporter::default()),
            Arc::new(SystemConsole),
            Arc::new(ExecutableInstaller),
        )
    }
}

impl AppComposition {
    /// 어댑터를 외부에서 주입한다.
    pub fn with_adapters(
        api_factory: Arc<dyn UserAppApiFactory>,
        prompter: Arc<dyn Prompter>,
        reporter: Arc<dyn Reporter>,
        console: Arc<dyn Console>,
        installer: Arc<dyn Installer>,
    ) -> Self {
        Self {
            api_factory,
            prompter,
            reporter,
            console,
            installer,
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }

    /// 설정 조회/변경 유스케이스를 생성한다.
    pub fn edit_config_usecase(&self) -> EditConfigUseCase<'_> {
        EditConfigUseCase {
            reporter: self.reporter.as_ref(),
        }
    }

    /// 프로필 목록/전환 유스케이스를 생성한다.
    pub fn profile_usecase(&self) -> ProfileUseCase<'_> {
        ProfileUseCase {
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 로그인 유스케이스를 생성한다.
    pub fn login_usecase(&self) -> LoginUseCase<'_> {
        LoginUseCase {
            api_factory: self.api_factory.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 계정 생성 유스케이스를 생성한다.
    pub fn register_usecase(&self) -> RegisterUseCase<'_> {
        RegisterUseCase {
            api_factory: self.api_factory.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// API 호출 유스케이스를 생성한다.
    pub fn api_call_usecase(&self) -> ApiCallUseCase<'_> {
        ApiCallUseCase {
            api_factory: self.api_factory.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }

    /// 대시보드 실행 유스케이스를 생성한다.
    pub fn dashboard_usecase(&self) -> DashboardUseCase<'_> {
        DashboardUseCase {
            api_factory: self.api_factory.as_ref(),
            prompter: self.prompter.as_ref(),
            reporter: self.reporter.as_ref(),
            console: self.console.as_ref(),
        }
    }

    /// 실행 파일 설치 유스케이스를 생성한다.
    pub fn install_usecase(&self) -> InstallUseCase<'_> {
        InstallUseCase {
            installer: self.installer.as_ref(),
            reporter: self.reporter.as_ref(),
        }
    }
}
