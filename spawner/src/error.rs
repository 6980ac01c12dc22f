use crate::parts::BodyPart;

/// Errors raised while building the price table or the catalog.
///
/// These are fatal, the spawner refuses to start with an invalid configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigurationError {
    #[error("Unknown body part: {0:?}")]
    UnknownPart(String),

    #[error("Price table has no entry for {0}")]
    MissingPrice(BodyPart),

    #[error("Price of {0} must be positive")]
    NonPositivePrice(BodyPart),

    #[error("Template {category}/{size} has no body parts")]
    EmptyBody { category: String, size: String },

    #[error("Template {category}/{size} has {len} body parts, the maximum is {max}")]
    BodyTooLarge {
        category: String,
        size: String,
        len: usize,
        max: usize,
    },

    #[error("Cost of template {category}/{size} does not fit in 32 bits")]
    CostOverflow { category: String, size: String },

    #[error("Failed to deserialize the configuration: {0}")]
    Deserialize(serde_json::Error),

    #[error("Failed to read the configuration: {0}")]
    Io(std::io::Error),
}

impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Deserialize(err)
    }
}

impl From<std::io::Error> for ConfigurationError {
    fn from(err: std::io::Error) -> Self {
        ConfigurationError::Io(err)
    }
}
