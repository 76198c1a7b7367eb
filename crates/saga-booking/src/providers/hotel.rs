use chrono::NaiveDateTime;
use tracing::{info, warn};

use super::Chance;
use crate::config::FailureRates;
use crate::traits::HotelBookingService;
use crate::types::HotelRoom;
use crate::{BookingError, Result};

/// Hotel booking backed by chance: every call may fail at the configured rate.
#[derive(Debug, Clone)]
pub struct RandomHotelBookingService {
    chance: Chance,
    rates: FailureRates,
}

impl RandomHotelBookingService {
    #[must_use]
    pub fn new(chance: Chance, rates: FailureRates) -> Self {
        Self { chance, rates }
    }

    /// Room numbers run from 101 to 999: floor 1-9, room 01-99.
    fn room_number(&self) -> u32 {
        self.chance.pick(1..10) * 100 + self.chance.pick(1..100)
    }
}

impl HotelBookingService for RandomHotelBookingService {
    fn book(&self, check_in: NaiveDateTime) -> Result<HotelRoom> {
        let room = HotelRoom::new(self.room_number(), check_in);

        if self.chance.happens(self.rates.booking()) {
            warn!(%room, "failed to book hotel");
            return Err(BookingError::HotelBooking { room });
        }

        info!(%room, "booked hotel");
        Ok(room)
    }

    fn cancel(&self, room: &HotelRoom) -> Result<()> {
        if self.chance.happens(self.rates.cancellation()) {
            warn!(%room, "failed to cancel hotel");
            return Err(BookingError::HotelCancellation { room: room.clone() });
        }

        info!(%room, "cancelled hotel");
        Ok(())
    }
}
