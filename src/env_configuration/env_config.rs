use crate::common::*;

#[doc = "env 헬퍼함수 정의"]
fn get_env_or_panic(key: &str) -> String {
    match std::env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg: String = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = "env 값이 없으면 기본값을 사용하는 헬퍼함수"]
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        info!("'{}' is not set. Using the default '{}'", key, default);
        default.to_string()
    })
}

#[doc = "Function to globally initialize the 'SYSTEM_CONFIG_PATH' variable"]
pub static SYSTEM_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SYSTEM_CONFIG_PATH"));

#[doc = "Function to globally initialize the 'RECIPIENTS_PATH' variable"]
pub static RECIPIENTS_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("RECIPIENTS_PATH", "./config/recipients.json"));

#[doc = "Function to globally initialize the 'HTML_TEMPLATE_PATH' variable"]
pub static HTML_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("HTML_TEMPLATE_PATH", "./templates"));
