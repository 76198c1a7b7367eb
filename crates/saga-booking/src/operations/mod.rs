mod book;

pub use book::BookingApp;
