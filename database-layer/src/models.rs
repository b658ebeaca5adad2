// Database models
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A church managed by the scheduling service.
///
/// `require_ppg` is the stored PPG-requirement flag: the integer 1 means PPG
/// attendance tracking is required by configuration; any other value,
/// including NULL, means the database has not set it and the feature gate
/// decides.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Church {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub timezone: String,
    pub require_ppg: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A zone (wilayah) ushers are drawn from, scoped to one church.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Zone {
    pub id: Uuid,
    pub church_id: Uuid,
    pub name: String,
    pub sequence: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A duty position ushers are assigned to (e.g. a door, an aisle).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Position {
    pub id: Uuid,
    pub church_id: Uuid,
    pub zone_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A recurring mass slot (weekday + start time) for one church.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MassSchedule {
    pub id: Uuid,
    pub church_id: Uuid,
    pub code: String,
    /// Weekday, 0 = Sunday through 6 = Saturday.
    pub day: i16,
    pub time: NaiveTime,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A concrete service event on a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: Uuid,
    pub church_id: Uuid,
    pub mass_id: Option<Uuid>,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description: Option<String>,
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One usher assignment row for an event.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventUsher {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub zone_name: Option<String>,
    pub position_name: Option<String>,
    pub is_ppg: bool,
    pub created_at: DateTime<Utc>,
}

/// One event with its usher assignments, as printed on the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JadwalEvent {
    pub event: Event,
    pub ushers: Vec<EventUsher>,
}

// ---------------------------------------------------------------------------
// Write payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewChurch {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub timezone: String,
    pub require_ppg: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateChurch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub timezone: Option<String>,
    pub require_ppg: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewZone {
    pub church_id: Uuid,
    pub name: String,
    pub sequence: i32,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateZone {
    pub name: Option<String>,
    pub sequence: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewPosition {
    pub church_id: Uuid,
    pub zone_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdatePosition {
    pub zone_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewMassSchedule {
    pub church_id: Uuid,
    pub code: String,
    pub day: i16,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMassSchedule {
    pub code: Option<String>,
    pub day: Option<i16>,
    pub time: Option<NaiveTime>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEvent {
    pub church_id: Uuid,
    pub mass_id: Option<Uuid>,
    pub date: NaiveDate,
    pub week_number: i32,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEventUsher {
    pub name: String,
    pub zone_name: Option<String>,
    pub position_name: Option<String>,
    pub is_ppg: bool,
}
