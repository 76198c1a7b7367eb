use std::path::PathBuf;

use thiserror::Error;

use crate::types::{FlightTicket, HotelRoom};

/// Failure reported by a booking service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("failed to book flight: {ticket}")]
    FlightBooking { ticket: FlightTicket },

    #[error("failed to cancel flight: {ticket}")]
    FlightCancellation { ticket: FlightTicket },

    #[error("failed to book hotel: {room}")]
    HotelBooking { room: HotelRoom },

    #[error("failed to cancel hotel: {room}")]
    HotelCancellation { room: HotelRoom },
}

pub type Result<T> = std::result::Result<T, BookingError>;

/// Failure while loading or validating a booking configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read itinerary at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse itinerary")]
    Parse(#[from] toml::de::Error),

    #[error("invalid schedule '{value}', expected YYYY/MM/DD HH:MM")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{name} failure rate {value} is outside 0.0..=1.0")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("itinerary has nothing to book")]
    EmptyItinerary,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    #[test]
    fn booking_error_names_the_resource() {
        let departure = NaiveDateTime::parse_from_str("2022/01/01 10:00", "%Y/%m/%d %H:%M")
            .expect("valid date");
        let err = BookingError::FlightBooking {
            ticket: FlightTicket::new("Tokyo", "Seoul", departure),
        };

        assert_eq!(
            err.to_string(),
            "failed to book flight: flight ticket: from Tokyo to Seoul, 01/01 10:00"
        );
    }

    #[test]
    fn read_error_includes_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/trips/seoul.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(err.to_string().contains("/trips/seoul.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn invalid_rate_error_names_the_rate() {
        let err = ConfigError::InvalidRate {
            name: "booking",
            value: 1.5,
        };

        assert_eq!(err.to_string(), "booking failure rate 1.5 is outside 0.0..=1.0");
    }
}
