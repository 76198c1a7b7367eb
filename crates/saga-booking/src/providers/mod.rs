mod chance;
mod flight;
mod hotel;

pub use chance::Chance;
pub use flight::RandomFlightBookingService;
pub use hotel::RandomHotelBookingService;
