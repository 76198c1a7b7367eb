use saga_core::{Saga, SagaAuditLog, SagaError};
use tracing::{debug, info, warn};

use crate::BookingError;
use crate::config::Itinerary;
use crate::lazy::{LazyFlightBookingService, LazyHotelBookingService};
use crate::traits::{FlightBookingService, HotelBookingService};
use crate::types::Bookings;

/// Books a whole itinerary, cancelling what was already booked if any
/// reservation fails.
pub struct BookingApp<F, H> {
    flights: LazyFlightBookingService<F>,
    hotels: LazyHotelBookingService<H>,
}

impl<F, H> BookingApp<F, H>
where
    F: FlightBookingService,
    H: HotelBookingService,
{
    #[must_use]
    pub fn new(flights: F, hotels: H) -> Self {
        Self {
            flights: LazyFlightBookingService::new(flights),
            hotels: LazyHotelBookingService::new(hotels),
        }
    }

    /// Book every flight, then every hotel stay, in itinerary order.
    ///
    /// # Errors
    ///
    /// Returns every booking and cancellation failure if any reservation
    /// could not be made.
    pub fn book(&self, itinerary: &Itinerary) -> Result<Bookings, SagaError<BookingError>> {
        self.book_with_audit(itinerary).0
    }

    /// Like [`book`](Self::book), also returning the saga's audit log.
    #[must_use]
    pub fn book_with_audit(
        &self,
        itinerary: &Itinerary,
    ) -> (Result<Bookings, SagaError<BookingError>>, SagaAuditLog) {
        info!(
            flights = itinerary.flights.len(),
            hotels = itinerary.hotels.len(),
            "starting booking"
        );

        let mut saga = Saga::new();

        let mut tickets = Vec::with_capacity(itinerary.flights.len());
        for leg in &itinerary.flights {
            let ticket = saga.make(self.flights.book(&leg.from, &leg.to, leg.departure));
            saga.add_compensation(self.flights.cancel(ticket.clone()));
            tickets.push(ticket);
        }

        let mut rooms = Vec::with_capacity(itinerary.hotels.len());
        for stay in &itinerary.hotels {
            let room = saga.make(self.hotels.book(stay.check_in));
            saga.add_compensation(self.hotels.cancel(room.clone()));
            rooms.push(room);
        }

        saga.compensate();

        let (result, audit_log) = saga.finish();
        debug!(summary = %audit_log.summary(), "booking saga finished");

        let result = result
            .map(|()| Bookings {
                flights: tickets.into_iter().flatten().collect(),
                rooms: rooms.into_iter().flatten().collect(),
            })
            .inspect_err(|err| {
                warn!(failures = err.len(), "booking rolled back");
            });
        (result, audit_log)
    }
}
