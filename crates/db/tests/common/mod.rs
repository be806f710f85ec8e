//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use aerodesk_core::flight::FlightStatus;
use aerodesk_core::types::{DbId, Timestamp};
use aerodesk_db::models::airport::CreateAirport;
use aerodesk_db::models::flight::CreateFlight;
use aerodesk_db::models::passenger::CreatePassenger;
use aerodesk_db::models::personnel::CreatePersonnel;
use aerodesk_db::models::ticket::CreateTicket;
use aerodesk_db::repositories::{
    AirportRepo, FlightRepo, PassengerRepo, PersonnelRepo, TicketRepo,
};
use sqlx::PgPool;

pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub async fn airport(pool: &PgPool, iata: &str) -> DbId {
    AirportRepo::create(
        pool,
        &CreateAirport {
            name: format!("{iata} International"),
            city: "City".to_string(),
            country: "Russia".to_string(),
            iata_code: Some(iata.to_string()),
            icao_code: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub fn new_flight(number: &str, from: DbId, to: DbId, dep: &str, arr: &str) -> CreateFlight {
    CreateFlight {
        flight_number: number.to_string(),
        aircraft_id: None,
        airline_id: None,
        gate_id: None,
        stand_id: None,
        departure_airport_id: from,
        arrival_airport_id: to,
        scheduled_departure: ts(dep),
        scheduled_arrival: ts(arr),
        status: FlightStatus::Scheduled,
    }
}

/// SVO -> LED flight SU-128 on 2025-06-20.
pub async fn flight(pool: &PgPool) -> DbId {
    let svo = airport(pool, "SVO").await;
    let led = airport(pool, "LED").await;
    FlightRepo::create(
        pool,
        &new_flight("SU-128", svo, led, "2025-06-20T10:00:00Z", "2025-06-20T11:30:00Z"),
    )
    .await
    .unwrap()
    .id
}

pub async fn passenger(pool: &PgPool, passport: &str) -> DbId {
    PassengerRepo::create(
        pool,
        &CreatePassenger {
            name: "Ivan Petrov".to_string(),
            passport_number: passport.to_string(),
            nationality: Some("RU".to_string()),
            birth_date: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn ticket(pool: &PgPool, passenger_id: DbId, flight_id: DbId) -> DbId {
    TicketRepo::create(
        pool,
        &CreateTicket {
            passenger_id,
            flight_id,
            seat_number: Some("12A".to_string()),
            ticket_price: Some(5400.0),
            baggage_included: true,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn personnel(pool: &PgPool, name: &str) -> DbId {
    PersonnelRepo::create(
        pool,
        &CreatePersonnel {
            name: name.to_string(),
            position_id: None,
            license_number: None,
            hired_date: None,
        },
    )
    .await
    .unwrap()
    .id
}
