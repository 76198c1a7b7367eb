//! Deferred service calls for use as saga steps and compensations.
//!
//! Each method captures its arguments and returns a closure; nothing reaches
//! the wrapped service until the saga invokes that closure. Bookings resolve
//! to `Some` so that a skipped or failed step leaves `None` behind, and
//! cancelling `None` does nothing.

use chrono::NaiveDateTime;

use crate::Result;
use crate::traits::{FlightBookingService, HotelBookingService};
use crate::types::{FlightTicket, HotelRoom};

#[derive(Debug, Clone)]
pub struct LazyFlightBookingService<S> {
    inner: S,
}

impl<S: FlightBookingService> LazyFlightBookingService<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn book<'s>(
        &'s self,
        from: &'s str,
        to: &'s str,
        departure: NaiveDateTime,
    ) -> impl FnOnce() -> Result<Option<FlightTicket>> + 's {
        move || self.inner.book(from, to, departure).map(Some)
    }

    pub fn cancel(&self, ticket: Option<FlightTicket>) -> impl FnMut() -> Result<()> + '_ {
        move || match &ticket {
            Some(ticket) => self.inner.cancel(ticket),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LazyHotelBookingService<S> {
    inner: S,
}

impl<S: HotelBookingService> LazyHotelBookingService<S> {
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn book(&self, check_in: NaiveDateTime) -> impl FnOnce() -> Result<Option<HotelRoom>> + '_ {
        move || self.inner.book(check_in).map(Some)
    }

    pub fn cancel(&self, room: Option<HotelRoom>) -> impl FnMut() -> Result<()> + '_ {
        move || match &room {
            Some(room) => self.inner.cancel(room),
            None => Ok(()),
        }
    }
}
