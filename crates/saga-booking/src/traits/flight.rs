use chrono::NaiveDateTime;

use crate::Result;
use crate::types::FlightTicket;

pub trait FlightBookingService: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no seat could be reserved on the flight.
    fn book(&self, from: &str, to: &str, departure: NaiveDateTime) -> Result<FlightTicket>;

    /// # Errors
    ///
    /// Returns an error if the reservation could not be released.
    fn cancel(&self, ticket: &FlightTicket) -> Result<()>;
}

impl<T: FlightBookingService + ?Sized> FlightBookingService for &T {
    fn book(&self, from: &str, to: &str, departure: NaiveDateTime) -> Result<FlightTicket> {
        (**self).book(from, to, departure)
    }

    fn cancel(&self, ticket: &FlightTicket) -> Result<()> {
        (**self).cancel(ticket)
    }
}
