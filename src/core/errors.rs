use super::types::MenuId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("item count still below 1 after {attempts} draws")]
    RejectionLimit { attempts: u32 },

    #[error("scripted sample source has no {0} draws left")]
    ScriptExhausted(&'static str),

    #[error("menu item {0} does not exist")]
    UnknownMenuItem(MenuId),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
