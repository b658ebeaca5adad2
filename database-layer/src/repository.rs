use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::DatabaseResult;
use crate::models::{
    Church, Event, EventUsher, JadwalEvent, MassSchedule, NewChurch, NewEvent, NewEventUsher,
    NewMassSchedule, NewPosition, NewZone, Position, UpdateChurch, UpdateMassSchedule,
    UpdatePosition, UpdateZone, Zone,
};

/// Storage operations for the scheduling domain.
///
/// One implementation exists per backing store; the process resolves a single
/// implementation at startup from [`crate::DatabaseConfig`] and shares it as a
/// read-only handle. Implementations hold no per-call state.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Cheap liveness probe against the backing store.
    async fn is_healthy(&self) -> bool;

    // Churches
    async fn list_churches(&self) -> DatabaseResult<Vec<Church>>;
    async fn get_church(&self, id: Uuid) -> DatabaseResult<Option<Church>>;
    async fn get_church_by_code(&self, code: &str) -> DatabaseResult<Option<Church>>;
    async fn create_church(&self, church: NewChurch) -> DatabaseResult<Church>;
    async fn update_church(&self, id: Uuid, update: UpdateChurch) -> DatabaseResult<Church>;

    // Zones (wilayah)
    async fn list_zones(&self, church_id: Uuid) -> DatabaseResult<Vec<Zone>>;
    async fn create_zone(&self, zone: NewZone) -> DatabaseResult<Zone>;
    async fn update_zone(&self, id: Uuid, update: UpdateZone) -> DatabaseResult<Zone>;
    async fn delete_zone(&self, id: Uuid) -> DatabaseResult<()>;

    // Duty positions
    async fn list_positions(&self, church_id: Uuid) -> DatabaseResult<Vec<Position>>;
    async fn create_position(&self, position: NewPosition) -> DatabaseResult<Position>;
    async fn update_position(&self, id: Uuid, update: UpdatePosition)
        -> DatabaseResult<Position>;
    async fn delete_position(&self, id: Uuid) -> DatabaseResult<()>;

    // Mass schedules
    async fn list_masses(&self, church_id: Uuid) -> DatabaseResult<Vec<MassSchedule>>;
    async fn create_mass(&self, mass: NewMassSchedule) -> DatabaseResult<MassSchedule>;
    async fn update_mass(&self, id: Uuid, update: UpdateMassSchedule)
        -> DatabaseResult<MassSchedule>;
    async fn delete_mass(&self, id: Uuid) -> DatabaseResult<()>;

    // Events
    async fn events_by_week_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<Event>>;
    async fn get_event(&self, id: Uuid) -> DatabaseResult<Option<Event>>;
    async fn create_event(&self, event: NewEvent) -> DatabaseResult<Event>;
    async fn set_event_complete(&self, id: Uuid, complete: bool) -> DatabaseResult<Event>;

    // Usher assignments
    async fn list_event_ushers(&self, event_id: Uuid) -> DatabaseResult<Vec<EventUsher>>;

    /// Replace all usher rows for an event with the given set, atomically.
    async fn replace_event_ushers(
        &self,
        event_id: Uuid,
        ushers: Vec<NewEventUsher>,
    ) -> DatabaseResult<Vec<EventUsher>>;

    /// Events joined with their ushers for the printable weekly schedule
    /// (cetak jadwal).
    async fn jadwal_for_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<JadwalEvent>>;
}
