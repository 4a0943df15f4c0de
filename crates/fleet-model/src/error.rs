/// Errors raised while loading or decoding fleet data.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// The fixture did not match the asset schema.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FleetError {
    fn from(e: serde_json::Error) -> Self {
        FleetError::InvalidInput(e.to_string())
    }
}
