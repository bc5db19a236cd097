use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Calendar already holds data; reset it before loading")]
    AlreadyLoaded,

    #[error("Calendar has not been initialized")]
    EmptyCalendar,

    #[error("Missing required field {name}")]
    MissingField { name: String },

    #[error("Field {name} is invalid: {reason}")]
    InvalidField { name: String, reason: String },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
