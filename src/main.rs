/*
Create date : 2025-03-10
Description : 수신자 목록을 한 명씩 돌아가며 매일 템플릿 메일을 보내주는 프로그램 (cron 으로 하루 한 번 실행)

History     : 2025-03-10       # [v.1.0.0] first create
              2025-03-18       # [v.1.1.0] 발송 실패 시 수신자를 목록 맨 앞으로 되돌려 다음 실행에서 재발송
              2025-04-02       # [v.1.2.0]
                                 1) 발신자, 제목, 템플릿 이름을 toml 설정 파일로 분리
                                 2) 경로들을 .env 파일로 빼서 컴파일 없이도 수정될 수 있도록 변경
              2025-04-21       # [v.1.3.0] 로컬 SMTP(Mailpit) 용 평문 연결 옵션 추가
*/
mod common;
use common::*;

mod controller;
use controller::main_controller::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{rotation_service::*, template_service::*};

mod model;
use model::configs::config::*;

mod repository;
use repository::{queue_repository::*, smtp_repository::*};

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod enums;

#[doc = "Writes the startup failure as the single status line and returns a failing exit code."]
fn startup_failure(msg: String) -> ExitCode {
    error!("[main()] {}", msg);
    println!("{}", msg);
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    /* config 설정 전역 적용 */
    dotenv().ok();

    /* 전역 로거설정 */
    let _logger: LoggerHandle = match set_global_logger() {
        Ok(handle) => handle,
        Err(e) => {
            println!("Unable to initialize the logger: {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Start Daily Email Program");

    let system_config: Config = match initialize_server_config(&SYSTEM_CONFIG_PATH) {
        Ok(system_config) => system_config,
        Err(e) => return startup_failure(format!("Unable to load the system config: {:#}", e)),
    };

    let template_service: TemplateServiceImpl =
        match TemplateServiceImpl::new(&HTML_TEMPLATE_PATH) {
            Ok(template_service) => template_service,
            Err(e) => return startup_failure(format!("Unable to load the email templates: {:#}", e)),
        };

    let smtp_repository: SmtpRepositoryImpl = match SmtpRepositoryImpl::new(&system_config.smtp) {
        Ok(smtp_repository) => smtp_repository,
        Err(e) => return startup_failure(format!("Unable to set up the SMTP transport: {:#}", e)),
    };

    let queue_repository: QueueRepositoryImpl =
        QueueRepositoryImpl::new(PathBuf::from(RECIPIENTS_PATH.as_str()));

    /* Dependency Injection(DI) */
    let rotation_service: Arc<
        RotationServiceImpl<QueueRepositoryImpl, TemplateServiceImpl, SmtpRepositoryImpl>,
    > = Arc::new(RotationServiceImpl::new(
        Arc::new(queue_repository),
        Arc::new(template_service),
        Arc::new(smtp_repository),
        Arc::clone(&system_config.mail),
    ));

    let controller: MainController<
        RotationServiceImpl<QueueRepositoryImpl, TemplateServiceImpl, SmtpRepositoryImpl>,
    > = MainController::new(rotation_service);

    let exit_code: ExitCode = controller.main_task(&mut std::io::stdout()).await;

    info!("Daily Email Program finished");

    exit_code
}
