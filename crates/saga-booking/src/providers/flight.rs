use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::Chance;
use crate::config::FailureRates;
use crate::traits::FlightBookingService;
use crate::types::FlightTicket;
use crate::{BookingError, Result};

/// Flight booking backed by chance: every call may fail at the configured rate.
#[derive(Debug, Clone)]
pub struct RandomFlightBookingService {
    chance: Chance,
    rates: FailureRates,
}

impl RandomFlightBookingService {
    #[must_use]
    pub fn new(chance: Chance, rates: FailureRates) -> Self {
        Self { chance, rates }
    }
}

impl FlightBookingService for RandomFlightBookingService {
    fn book(&self, from: &str, to: &str, departure: NaiveDateTime) -> Result<FlightTicket> {
        let ticket = FlightTicket::new(from, to, departure);

        if self.chance.happens(self.rates.booking()) {
            warn!(%ticket, "failed to book flight");
            return Err(BookingError::FlightBooking { ticket });
        }

        info!(%ticket, "booked flight");
        Ok(ticket)
    }

    fn cancel(&self, ticket: &FlightTicket) -> Result<()> {
        if self.chance.happens(self.rates.cancellation()) {
            warn!(%ticket, "failed to cancel flight");
            return Err(BookingError::FlightCancellation {
                ticket: ticket.clone(),
            });
        }

        info!(%ticket, "cancelled flight");
        Ok(())
    }
}
