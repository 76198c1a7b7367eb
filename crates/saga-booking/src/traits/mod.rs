mod flight;
mod hotel;

pub use flight::FlightBookingService;
pub use hotel::HotelBookingService;
