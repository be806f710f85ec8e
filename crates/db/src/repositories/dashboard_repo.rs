//! Read-only aggregate queries backing the operations dashboard.

use aerodesk_core::flight::FlightStatus;
use aerodesk_core::incident::Severity;
use chrono::Utc;
use sqlx::PgPool;

use crate::models::checkin::Checkin;
use crate::models::dashboard::{
    AirportTraffic, CountryTraffic, DashboardSummary, EntityCounts, LabelCount,
};
use crate::models::flight::Flight;
use crate::models::incident::Incident;
use crate::models::maintenance::Maintenance;

/// Number of rows in each "recent"/"top" panel.
const PANEL_SIZE: i64 = 5;

pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn summary(pool: &PgPool) -> Result<DashboardSummary, sqlx::Error> {
        let counts = Self::entity_counts(pool).await?;

        let status_rows = sqlx::query_as::<_, LabelCount>(
            "SELECT status AS label, COUNT(*) AS count FROM flights GROUP BY status",
        )
        .fetch_all(pool)
        .await?;
        let statuses: Vec<&str> = FlightStatus::ALL.iter().map(|s| s.as_str()).collect();

        let severity_rows = sqlx::query_as::<_, LabelCount>(
            "SELECT severity AS label, COUNT(*) AS count FROM incidents GROUP BY severity",
        )
        .fetch_all(pool)
        .await?;
        let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();

        let upcoming_flights = sqlx::query_as::<_, Flight>(
            "SELECT id, flight_number, aircraft_id, airline_id, gate_id, stand_id, \
                    departure_airport_id, arrival_airport_id, scheduled_departure, \
                    scheduled_arrival, status, created_at, updated_at
             FROM flights
             WHERE scheduled_departure >= NOW()
             ORDER BY scheduled_departure ASC
             LIMIT $1",
        )
        .bind(PANEL_SIZE)
        .fetch_all(pool)
        .await?;

        let recent_incidents = sqlx::query_as::<_, Incident>(
            "SELECT id, flight_id, personnel_id, incident_time, description, severity, \
                    created_at, updated_at
             FROM incidents
             ORDER BY incident_time DESC, id DESC
             LIMIT $1",
        )
        .bind(PANEL_SIZE)
        .fetch_all(pool)
        .await?;

        let open_maintenance = sqlx::query_as::<_, Maintenance>(
            "SELECT id, aircraft_id, personnel_id, start_time, end_time, description, \
                    created_at, updated_at
             FROM maintenance
             WHERE end_time IS NULL
             ORDER BY start_time DESC
             LIMIT $1",
        )
        .bind(PANEL_SIZE)
        .fetch_all(pool)
        .await?;

        let recent_checkins = sqlx::query_as::<_, Checkin>(
            "SELECT id, ticket_id, checkin_time, baggage_count, created_at, updated_at
             FROM checkins
             ORDER BY checkin_time DESC, id DESC
             LIMIT $1",
        )
        .bind(PANEL_SIZE)
        .fetch_all(pool)
        .await?;

        let top_departure_airports = sqlx::query_as::<_, AirportTraffic>(
            "SELECT a.id AS airport_id, a.name, a.iata_code, COUNT(t.id) AS ticket_count
             FROM airports a
             JOIN flights f ON f.departure_airport_id = a.id
             JOIN tickets t ON t.flight_id = f.id
             GROUP BY a.id, a.name, a.iata_code
             ORDER BY ticket_count DESC, a.id ASC
             LIMIT $1",
        )
        .bind(PANEL_SIZE)
        .fetch_all(pool)
        .await?;

        let flights_by_country = Self::flights_by_country(pool).await?;

        Ok(DashboardSummary {
            counts,
            flights_by_status: fill_buckets(&statuses, status_rows),
            incidents_by_severity: fill_buckets(&severities, severity_rows),
            upcoming_flights,
            recent_incidents,
            open_maintenance,
            recent_checkins,
            top_departure_airports,
            flights_by_country,
            generated_at: Utc::now(),
        })
    }

    /// Departures and arrivals per airport country, ordered by country.
    ///
    /// A flight between two airports of the same country counts once as a
    /// departure and once as an arrival of that country.
    pub async fn flights_by_country(pool: &PgPool) -> Result<Vec<CountryTraffic>, sqlx::Error> {
        sqlx::query_as::<_, CountryTraffic>(
            "SELECT a.country,
                    COUNT(f.id) FILTER (WHERE f.departure_airport_id = a.id) AS departures,
                    COUNT(f.id) FILTER (WHERE f.arrival_airport_id = a.id) AS arrivals
             FROM airports a
             LEFT JOIN flights f
                    ON f.departure_airport_id = a.id OR f.arrival_airport_id = a.id
             GROUP BY a.country
             ORDER BY a.country ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn entity_counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            "SELECT
                (SELECT COUNT(*) FROM flights)     AS flights,
                (SELECT COUNT(*) FROM airlines)    AS airlines,
                (SELECT COUNT(*) FROM airports)    AS airports,
                (SELECT COUNT(*) FROM passengers)  AS passengers,
                (SELECT COUNT(*) FROM personnel)   AS personnel,
                (SELECT COUNT(*) FROM incidents)   AS incidents,
                (SELECT COUNT(*) FROM maintenance) AS maintenance,
                (SELECT COUNT(*) FROM tickets)     AS tickets,
                (SELECT COUNT(*) FROM crews)       AS crews,
                (SELECT COUNT(*) FROM checkins)    AS checkins",
        )
        .fetch_one(pool)
        .await
    }
}

/// Order buckets by `labels`, inserting zero counts for missing labels.
fn fill_buckets(labels: &[&str], rows: Vec<LabelCount>) -> Vec<LabelCount> {
    labels
        .iter()
        .map(|label| LabelCount {
            label: (*label).to_string(),
            count: rows
                .iter()
                .find(|row| row.label == *label)
                .map_or(0, |row| row.count),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_buckets_are_zero_filled_in_label_order() {
        let rows = vec![
            LabelCount { label: "Delayed".into(), count: 2 },
            LabelCount { label: "Scheduled".into(), count: 5 },
        ];
        let filled = fill_buckets(&["Scheduled", "Delayed", "Cancelled"], rows);
        let counts: Vec<(&str, i64)> = filled.iter().map(|b| (b.label.as_str(), b.count)).collect();
        assert_eq!(counts, vec![("Scheduled", 5), ("Delayed", 2), ("Cancelled", 0)]);
    }
}
