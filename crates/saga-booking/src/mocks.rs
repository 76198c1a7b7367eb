use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;

use crate::traits::{FlightBookingService, HotelBookingService};
use crate::types::{FlightTicket, HotelRoom};
use crate::{BookingError, Result};

/// Call journal that several mocks can share to assert cross-service order.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: String) {
        self.entries.lock().expect("call log lock").push(entry);
    }

    /// # Panics
    ///
    /// Panics if the lock is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().expect("call log lock").clone()
    }
}

#[derive(Debug, Default)]
pub struct MockFlightService {
    log: CallLog,
    failing_routes: Vec<(String, String)>,
    failing_cancellations: bool,
}

impl MockFlightService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn failing_route(mut self, from: &str, to: &str) -> Self {
        self.failing_routes.push((from.to_string(), to.to_string()));
        self
    }

    #[must_use]
    pub fn failing_cancellation(mut self) -> Self {
        self.failing_cancellations = true;
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.log.entries()
    }
}

impl FlightBookingService for MockFlightService {
    fn book(&self, from: &str, to: &str, departure: NaiveDateTime) -> Result<FlightTicket> {
        self.log.push(format!("book {from}->{to}"));
        let ticket = FlightTicket::new(from, to, departure);
        let fails = self
            .failing_routes
            .iter()
            .any(|(f, t)| f == from && t == to);
        if fails {
            Err(BookingError::FlightBooking { ticket })
        } else {
            Ok(ticket)
        }
    }

    fn cancel(&self, ticket: &FlightTicket) -> Result<()> {
        self.log
            .push(format!("cancel {}->{}", ticket.from, ticket.to));
        if self.failing_cancellations {
            Err(BookingError::FlightCancellation {
                ticket: ticket.clone(),
            })
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
pub struct MockHotelService {
    log: CallLog,
    next_room: Mutex<u32>,
    failing_bookings: bool,
    failing_cancellations: bool,
}

impl Default for MockHotelService {
    fn default() -> Self {
        Self {
            log: CallLog::new(),
            next_room: Mutex::new(101),
            failing_bookings: false,
            failing_cancellations: false,
        }
    }
}

impl MockHotelService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn failing_booking(mut self) -> Self {
        self.failing_bookings = true;
        self
    }

    #[must_use]
    pub fn failing_cancellation(mut self) -> Self {
        self.failing_cancellations = true;
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.log.entries()
    }
}

impl HotelBookingService for MockHotelService {
    fn book(&self, check_in: NaiveDateTime) -> Result<HotelRoom> {
        let number = {
            let mut next = self.next_room.lock().expect("room counter lock");
            let number = *next;
            *next += 1;
            number
        };
        self.log.push(format!("book room {number}"));
        let room = HotelRoom::new(number, check_in);
        if self.failing_bookings {
            Err(BookingError::HotelBooking { room })
        } else {
            Ok(room)
        }
    }

    fn cancel(&self, room: &HotelRoom) -> Result<()> {
        self.log.push(format!("cancel room {}", room.number));
        if self.failing_cancellations {
            Err(BookingError::HotelCancellation { room: room.clone() })
        } else {
            Ok(())
        }
    }
}
