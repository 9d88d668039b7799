use crate::common::*;

use crate::enums::rotation_error::*;

use crate::traits::service::rotation_service_trait::*;

#[doc = "Single human-readable line describing how a run ended."]
pub fn status_line(result: &RunResult) -> String {
    match result {
        Ok(recipient) => format!("Email sent to {}", recipient.first_name()),
        Err(e) => e.to_string(),
    }
}

#[derive(new)]
pub struct MainController<R: RotationService> {
    rotation_service: Arc<R>,
}

impl<R> MainController<R>
where
    R: RotationService,
{
    #[doc = r#"
        Runs one rotation, writes the status line to `out` and maps the outcome to
        the process exit code (success only when the email was actually sent).
    "#]
    pub async fn main_task<W: Write>(&self, out: &mut W) -> ExitCode {
        let result: RunResult = self.rotation_service.run_once().await;
        let status: String = status_line(&result);

        if let Err(e) = writeln!(out, "{}", status) {
            error!("[MainController::main_task] Failed to write status line: {:?}", e);
        }

        match result {
            Ok(recipient) => {
                info!(
                    "[MainController::main_task] Daily email delivered to {}",
                    recipient.email()
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("[MainController::main_task] {}", e);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::recipient::*;

    struct StubRotationService {
        fail: bool,
    }

    #[async_trait]
    impl RotationService for StubRotationService {
        async fn run_once(&self) -> RunResult {
            if self.fail {
                Err(RotationError::EmptyQueue)
            } else {
                Ok(Recipient::new("Toto".to_string(), "toto@test.com".to_string()))
            }
        }
    }

    #[tokio::test]
    async fn success_prints_first_name_and_exits_zero() {
        let controller = MainController::new(Arc::new(StubRotationService { fail: false }));
        let mut out: Vec<u8> = Vec::new();

        let code: ExitCode = controller.main_task(&mut out).await;

        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "Email sent to Toto\n");
    }

    #[tokio::test]
    async fn failure_prints_reason_and_exits_non_zero() {
        let controller = MainController::new(Arc::new(StubRotationService { fail: true }));
        let mut out: Vec<u8> = Vec::new();

        let code: ExitCode = controller.main_task(&mut out).await;

        assert_eq!(code, ExitCode::FAILURE);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No recipients found in the list.\n"
        );
    }

    #[test]
    fn status_line_for_delivery_failure_names_address() {
        let result: RunResult = Err(RotationError::Delivery {
            recipient: Recipient::new("Toto".to_string(), "toto@test.com".to_string()),
            reason: "timed out".to_string(),
        });

        assert_eq!(
            status_line(&result),
            "Could not send the email to toto@test.com. Error: timed out."
        );
    }
}
