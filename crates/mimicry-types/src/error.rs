use thiserror::Error;

/// Errors related to custom personality operations.
#[derive(Debug, Error)]
pub enum PersonalityError {
    #[error("personality not found")]
    NotFound,

    #[error("invalid personality name: {0}")]
    InvalidName(String),

    #[error("training text is empty")]
    EmptyTrainingText,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors raised while loading a training document, before the trainer runs.
#[derive(Debug, Error)]
pub enum TrainingInputError {
    #[error("failed to read file: {0}")]
    ReadFailed(String),

    #[error("file is too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("unsupported file type: '{0}'")]
    UnsupportedType(String),

    #[error("training text is empty")]
    Empty,
}

/// Errors from repository operations (used by trait definitions in mimicry-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personality_error_display() {
        let err = PersonalityError::InvalidName("name cannot be empty".to_string());
        assert_eq!(err.to_string(), "invalid personality name: name cannot be empty");
    }

    #[test]
    fn test_training_input_error_display() {
        let err = TrainingInputError::TooLarge {
            size: 20,
            limit: 10,
        };
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("10"));
        assert!(
            TrainingInputError::ReadFailed("bad utf-8".to_string())
                .to_string()
                .starts_with("failed to read file")
        );
    }

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }
}
