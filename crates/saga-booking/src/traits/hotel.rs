use chrono::NaiveDateTime;

use crate::Result;
use crate::types::HotelRoom;

pub trait HotelBookingService: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no room could be reserved for the night.
    fn book(&self, check_in: NaiveDateTime) -> Result<HotelRoom>;

    /// # Errors
    ///
    /// Returns an error if the reservation could not be released.
    fn cancel(&self, room: &HotelRoom) -> Result<()>;
}

impl<T: HotelBookingService + ?Sized> HotelBookingService for &T {
    fn book(&self, check_in: NaiveDateTime) -> Result<HotelRoom> {
        (**self).book(check_in)
    }

    fn cancel(&self, room: &HotelRoom) -> Result<()> {
        (**self).cancel(room)
    }
}
