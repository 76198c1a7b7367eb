use std::fmt;

use chrono::NaiveDateTime;

/// A booked seat on one flight leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightTicket {
    pub from: String,
    pub to: String,
    pub departure: NaiveDateTime,
}

impl FlightTicket {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, departure: NaiveDateTime) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            departure,
        }
    }
}

impl fmt::Display for FlightTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flight ticket: from {} to {}, {}",
            self.from,
            self.to,
            self.departure.format("%m/%d %H:%M")
        )
    }
}

/// A booked hotel room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRoom {
    pub number: u32,
    pub check_in: NaiveDateTime,
}

impl HotelRoom {
    #[must_use]
    pub fn new(number: u32, check_in: NaiveDateTime) -> Self {
        Self { number, check_in }
    }
}

impl fmt::Display for HotelRoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hotel room: number {}, {}",
            self.number,
            self.check_in.format("%m/%d")
        )
    }
}

/// Everything reserved by a successful booking run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookings {
    pub flights: Vec<FlightTicket>,
    pub rooms: Vec<HotelRoom>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid date")
    }

    #[test]
    fn flight_ticket_displays_route_and_departure() {
        let ticket = FlightTicket::new("Tokyo", "Seoul", at(1, 1, 10, 0));

        assert_eq!(
            ticket.to_string(),
            "flight ticket: from Tokyo to Seoul, 01/01 10:00"
        );
    }

    #[test]
    fn hotel_room_displays_number_and_date() {
        let room = HotelRoom::new(512, at(1, 2, 19, 0));

        assert_eq!(room.to_string(), "hotel room: number 512, 01/02");
    }
}
