use saga_booking::{BookingError, ConfigError};
use saga_core::SagaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid booking configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Booking(#[from] SagaError<BookingError>),
}

pub type Result<T> = std::result::Result<T, CliError>;
