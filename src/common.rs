pub use std::collections::{HashMap, VecDeque};
pub use std::fs;
pub use std::io::{ErrorKind, Write};
pub use std::path::{Path, PathBuf};
pub use std::process::ExitCode;
pub use std::sync::Arc;

pub use log::{error, info, warn};

pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming, Record,
};

pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use serde_json::ser::PrettyFormatter;

pub use lettre::{
    message::{Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub use anyhow::{anyhow, Context, Result};

pub use thiserror::Error;

pub use getset::Getters;
pub use derive_new::new;

pub use once_cell::sync::Lazy as once_lazy;

pub use async_trait::async_trait;

pub use dotenv::dotenv;
