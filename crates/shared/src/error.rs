use validator::{ValidationError, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] ValidationErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("authentication failed: {0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Backend(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validation error for a single field, for checks that run after `validate()`.
    pub fn invalid(field: &'static str, code: &'static str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, ValidationError::new(code));
        Self::Validate(errors)
    }

    /// Names of the offending fields, sorted. Empty for non-validation errors.
    pub fn invalid_fields(&self) -> Vec<String> {
        let Self::Validate(errors) = self else {
            return Vec::new();
        };

        let mut fields = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect::<Vec<_>>();
        fields.sort();

        fields
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::Backend(anyhow::anyhow!(value))
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Backend($crate::__anyhow::anyhow!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Backend($crate::__anyhow::anyhow!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! unauthenticated {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Unauthenticated(format!($msg)))
    };
}
