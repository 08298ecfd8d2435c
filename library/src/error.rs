use thiserror::Error;

use crate::model::PortSide;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("{side} port count {value} is out of range (0..={max})")]
    PortCountOutOfRange {
        side: PortSide,
        value: i64,
        max: usize,
    },
    #[error("{side} port count must be a whole number, got {text:?}")]
    PortCountNotANumber { side: PortSide, text: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoardError {
    pub fn config(msg: impl Into<String>) -> Self {
        BoardError::Config(msg.into())
    }
}
