use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::ConfigError;

/// Format of every date in an itinerary file.
pub const SCHEDULE_FORMAT: &str = "%Y/%m/%d %H:%M";

const DEMO_ITINERARY: &str = include_str!("../demo-itinerary.toml");

/// One flight to book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightLeg {
    pub from: String,
    pub to: String,
    pub departure: NaiveDateTime,
}

/// One hotel stay to book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelStay {
    pub check_in: NaiveDateTime,
}

/// Everything a booking run reserves, in booking order: flights, then hotels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub flights: Vec<FlightLeg>,
    pub hotels: Vec<HotelStay>,
}

/// Probabilities used by the random booking services.
///
/// Both rates are always within `0.0..=1.0`; the only way to build one is
/// through [`FailureRates::new`] or [`FailureRates::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureRates {
    booking: f64,
    cancellation: f64,
}

impl Default for FailureRates {
    fn default() -> Self {
        Self {
            booking: 0.5,
            cancellation: 0.25,
        }
    }
}

impl FailureRates {
    /// # Errors
    ///
    /// Returns an error if either rate is not a probability.
    pub fn new(booking: f64, cancellation: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("booking", booking), ("cancellation", cancellation)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(Self {
            booking,
            cancellation,
        })
    }

    /// Probability that a reservation fails.
    #[must_use]
    pub fn booking(&self) -> f64 {
        self.booking
    }

    /// Probability that a cancellation fails.
    #[must_use]
    pub fn cancellation(&self) -> f64 {
        self.cancellation
    }

    /// Copy with the given rates replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if a replacement is not a probability.
    pub fn with_overrides(
        self,
        booking: Option<f64>,
        cancellation: Option<f64>,
    ) -> Result<Self, ConfigError> {
        Self::new(
            booking.unwrap_or(self.booking),
            cancellation.unwrap_or(self.cancellation),
        )
    }
}

/// Itinerary plus service behaviour for one booking run.
///
/// File format:
/// ```toml
/// [[flights]]
/// from = "Tokyo"
/// to = "Seoul"
/// departure = "2022/01/01 10:00"
///
/// [[hotels]]
/// check_in = "2022/01/01 19:00"
///
/// [failure_rates]
/// booking = 0.5
/// cancellation = 0.25
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    pub itinerary: Itinerary,
    pub failure_rates: FailureRates,
}

impl BookingConfig {
    /// The Tokyo/Seoul round trip with one hotel night.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled itinerary is invalid.
    pub fn demo() -> Result<Self, ConfigError> {
        DEMO_ITINERARY.parse()
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid itinerary.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Replace the configured rates where an override is given.
    ///
    /// # Errors
    ///
    /// Returns an error if a resulting rate is not a probability.
    pub fn override_rates(
        &mut self,
        booking: Option<f64>,
        cancellation: Option<f64>,
    ) -> Result<(), ConfigError> {
        self.failure_rates = self.failure_rates.with_overrides(booking, cancellation)?;
        Ok(())
    }
}

impl FromStr for BookingConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawConfig = toml::from_str(s)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    flights: Vec<RawFlight>,
    #[serde(default)]
    hotels: Vec<RawHotel>,
    #[serde(default)]
    failure_rates: RawRates,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRates {
    booking: Option<f64>,
    cancellation: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFlight {
    from: String,
    to: String,
    departure: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHotel {
    check_in: String,
}

impl TryFrom<RawConfig> for BookingConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.flights.is_empty() && raw.hotels.is_empty() {
            return Err(ConfigError::EmptyItinerary);
        }
        let failure_rates = FailureRates::default()
            .with_overrides(raw.failure_rates.booking, raw.failure_rates.cancellation)?;

        let flights = raw
            .flights
            .into_iter()
            .map(|flight| {
                Ok(FlightLeg {
                    departure: parse_schedule(&flight.departure)?,
                    from: flight.from,
                    to: flight.to,
                })
            })
            .collect::<Result<_, ConfigError>>()?;

        let hotels = raw
            .hotels
            .iter()
            .map(|hotel| {
                Ok(HotelStay {
                    check_in: parse_schedule(&hotel.check_in)?,
                })
            })
            .collect::<Result<_, ConfigError>>()?;

        Ok(Self {
            itinerary: Itinerary { flights, hotels },
            failure_rates,
        })
    }
}

/// # Errors
///
/// Returns an error if `value` is not in `YYYY/MM/DD HH:MM` form.
pub fn parse_schedule(value: &str) -> Result<NaiveDateTime, ConfigError> {
    NaiveDateTime::parse_from_str(value, SCHEDULE_FORMAT).map_err(|source| {
        ConfigError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
