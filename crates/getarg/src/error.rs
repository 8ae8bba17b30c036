use thiserror::Error;

/// Errors from the strict [`ArgumentStore::try_get`](crate::ArgumentStore::try_get) accessor.
///
/// The lenient accessors never produce these; they fall back to a default
/// or to zero instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("flag '{name}' requires a value (use {name}=VALUE)")]
    MissingValue { name: String },

    #[error("invalid value '{value}' for flag '{name}': {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_flag() {
        let err = ArgError::MissingValue {
            name: "-port".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "flag '-port' requires a value (use -port=VALUE)"
        );

        let err = ArgError::InvalidValue {
            name: "-port".to_string(),
            value: "http".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("'http'"));
        assert!(err.to_string().contains("-port"));
    }
}
