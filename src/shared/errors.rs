use thiserror::Error;

/// Business-level error kinds surfaced by the inventory services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Storage,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{entity} with {field}={value} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity} invalid, {field} {value} is already registered")]
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Opaque storage failure. The message is the storage layer's own.
    #[error("{0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn conflict(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::Conflict {
            entity,
            field,
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Bootstrapping errors: configuration, database connection, listener binding.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_message_names_field_and_value() {
        let err = DomainError::conflict("Employee", "card_number_id", "AAA111222");
        assert_eq!(
            err.to_string(),
            "Employee invalid, card_number_id AAA111222 is already registered"
        );
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn not_found_message_names_id() {
        let err = DomainError::not_found("Section", 7);
        assert_eq!(err.to_string(), "Section with id=7 not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn storage_message_is_passed_through() {
        let err = DomainError::Storage("disk on fire".into());
        assert_eq!(err.to_string(), "disk on fire");
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
