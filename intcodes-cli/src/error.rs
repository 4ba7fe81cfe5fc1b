/// Errors that stop the command line tool.
///
/// An undecodable tail while decoding is not one of them: it is reported
/// as the last entry of the output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selected coding has invalid or missing settings.
    #[error("invalid coding settings: {0}")]
    Coding(#[from] intcodes::ConfigError),

    /// The configuration file or environment could not be loaded.
    #[error("could not load configuration: {0}")]
    ConfigFile(#[from] config::ConfigError),

    /// A value could not be encoded with the selected coding.
    #[error("could not encode: {0}")]
    Encode(#[from] intcodes::EncodeError),

    /// The bits argument contains something other than `0` and `1`.
    #[error("invalid bits: {0}")]
    ParseBits(#[from] intcodes::ParseBitsError),

    /// An item of the numbers argument is not an unsigned integer.
    #[error("invalid number '{0}', expected an unsigned integer")]
    InvalidNumber(String),

    /// JSON output could not be produced.
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
