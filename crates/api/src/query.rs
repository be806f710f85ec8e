//! Shared query parameter types for API handlers.

use aerodesk_core::error::CoreError;
use aerodesk_core::flight::FlightFilter;
use aerodesk_core::pagination::Page;
use aerodesk_core::types::DbId;
use serde::Deserialize;

/// Pagination parameters (`?page=&limit=`). Clamped by [`Page::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::new(self.page, self.limit)
    }
}

/// Raw flight list filters. Kept as strings so that blank form values and
/// malformed input can be told apart and reported with a useful message.
#[derive(Debug, Default, Deserialize)]
pub struct FlightListParams {
    pub date: Option<String>,
    pub status: Option<String>,
    pub airline_id: Option<String>,
}

impl FlightListParams {
    pub fn filter(&self) -> Result<FlightFilter, CoreError> {
        FlightFilter::parse(
            self.date.as_deref(),
            self.status.as_deref(),
            self.airline_id.as_deref(),
        )
    }
}

/// `?airport_id=` filter for terminals and stands.
#[derive(Debug, Default, Deserialize)]
pub struct AirportScope {
    pub airport_id: Option<DbId>,
}

/// `?terminal_id=` filter for gates.
#[derive(Debug, Default, Deserialize)]
pub struct TerminalScope {
    pub terminal_id: Option<DbId>,
}

/// `?airline_id=` filter for aircraft.
#[derive(Debug, Default, Deserialize)]
pub struct AirlineScope {
    pub airline_id: Option<DbId>,
}

/// `?flight_id=&passenger_id=` filters for tickets.
#[derive(Debug, Default, Deserialize)]
pub struct TicketScope {
    pub flight_id: Option<DbId>,
    pub passenger_id: Option<DbId>,
}
