use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Transport error: {status} {text}")]
    Transport { status: u16, text: String },
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("A {0} connective needs at least one operand")]
    EmptyConnective(&'static str),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

// Helper conversions
impl From<serde_json::Error> for ScreenerError {
    fn from(e: serde_json::Error) -> Self { Self::Serialization(e.to_string()) }
}
impl From<reqwest::Error> for ScreenerError {
    fn from(e: reqwest::Error) -> Self { Self::Http(e.to_string()) }
}
impl From<config::ConfigError> for ScreenerError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
