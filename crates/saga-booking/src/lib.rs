//! Travel booking on top of the saga coordinator.
//!
//! A [`BookingApp`](operations::BookingApp) reserves every flight and hotel
//! stay of an [`Itinerary`](config::Itinerary). When one reservation fails,
//! the ones already made are cancelled in reverse order and the caller gets
//! a single report of what failed and what could not be cancelled.

pub mod config;
mod error;
pub mod lazy;
pub mod operations;
pub mod providers;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use error::{BookingError, ConfigError, Result};
pub use types::{Bookings, FlightTicket, HotelRoom};
