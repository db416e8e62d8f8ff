use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid field kind tag: {0}")]
    InvalidKind(u8),

    #[error("Invalid width {width}, expected one of {expected:?}")]
    InvalidWidth {
        width: usize,
        expected: &'static [usize],
    },

    #[error("Buffer too short: need {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    #[error("Failed to read memory at address {address:#x}: {message}")]
    MemoryReadFailed { address: u64, message: String },

    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.message().to_string())
    }
}
