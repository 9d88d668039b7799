use crate::common::*;

#[doc = "Function to globally initialize the logger"]
/// Log lines go to `./logs`, rotated every day and kept for ten days.
/// Errors are duplicated to stderr so they stay visible when the job runs from cron.
///
/// # Returns
/// * Result<LoggerHandle, anyhow::Error> - the handle must be kept alive until the program ends
pub fn set_global_logger() -> Result<LoggerHandle, anyhow::Error> {
    let log_directory: &str = "logs";

    let handle: LoggerHandle = Logger::try_with_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("daily_email"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .duplicate_to_stderr(Duplicate::Error)
        .start()?;

    Ok(handle)
}

#[doc = "Custom Log Format Function"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}
