use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Address is missing the `@` separator or a `.` in the domain.
    #[error("invalid email format: {email}")]
    InvalidEmailFormat { email: String },
    #[error("ambassador name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
