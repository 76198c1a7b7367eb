use std::fmt::Write;

use saga_booking::Bookings;
use saga_core::SagaAuditLog;

pub(crate) fn format_bookings(bookings: &Bookings) -> String {
    let mut output = String::new();
    for ticket in &bookings.flights {
        let _ = writeln!(output, "{ticket}");
    }
    for room in &bookings.rooms {
        let _ = writeln!(output, "{room}");
    }
    output.push_str("ready for traveling!!");
    output
}

pub(crate) fn format_audit(audit_log: &SagaAuditLog) -> String {
    format!("audit:\n{}", audit_log.summary())
}

#[cfg(test)]
mod tests {
    use saga_booking::config::parse_schedule;
    use saga_booking::{FlightTicket, HotelRoom};

    use super::*;

    #[test]
    fn bookings_are_listed_before_the_greeting() -> Result<(), Box<dyn std::error::Error>> {
        let bookings = Bookings {
            flights: vec![FlightTicket::new(
                "Tokyo",
                "Seoul",
                parse_schedule("2022/01/01 10:00")?,
            )],
            rooms: vec![HotelRoom::new(204, parse_schedule("2022/01/01 19:00")?)],
        };

        assert_eq!(
            format_bookings(&bookings),
            "flight ticket: from Tokyo to Seoul, 01/01 10:00\n\
             hotel room: number 204, 01/01\n\
             ready for traveling!!"
        );
        Ok(())
    }

    #[test]
    fn empty_audit_has_only_a_header() {
        assert_eq!(format_audit(&SagaAuditLog::new()), "audit:\n");
    }
}
