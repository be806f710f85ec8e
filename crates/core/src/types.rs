/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Instants (departures, check-in times, incident times) are stored as UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates without a time component (birth dates, hire dates).
pub type Date = chrono::NaiveDate;
