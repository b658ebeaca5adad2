//! PostgreSQL implementation of [`ScheduleRepository`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::connection::DatabasePool;
use crate::error::DatabaseResult;
use crate::models::{
    Church, Event, EventUsher, JadwalEvent, MassSchedule, NewChurch, NewEvent, NewEventUsher,
    NewMassSchedule, NewPosition, NewZone, Position, UpdateChurch, UpdateMassSchedule,
    UpdatePosition, UpdateZone, Zone,
};
use crate::repository::ScheduleRepository;

const CHURCH_COLUMNS: &str =
    "id, code, name, address, timezone, require_ppg, is_active, created_at, updated_at";
const ZONE_COLUMNS: &str = "id, church_id, name, sequence, is_active, created_at, updated_at";
const POSITION_COLUMNS: &str =
    "id, church_id, zone_id, name, description, is_active, created_at, updated_at";
const MASS_COLUMNS: &str = "id, church_id, code, day, time, is_active, created_at, updated_at";
const EVENT_COLUMNS: &str =
    "id, church_id, mass_id, date, week_number, description, is_complete, created_at, updated_at";
const USHER_COLUMNS: &str = "id, event_id, name, zone_name, position_name, is_ppg, created_at";

/// Repository for scheduling data backed by PostgreSQL
#[derive(Clone)]
pub struct PostgresScheduleRepository {
    pool: DatabasePool,
}

impl PostgresScheduleRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepository {
    async fn is_healthy(&self) -> bool {
        self.pool.is_healthy().await
    }

    async fn list_churches(&self) -> DatabaseResult<Vec<Church>> {
        let churches = sqlx::query_as::<_, Church>(&format!(
            "SELECT {CHURCH_COLUMNS} FROM churches WHERE is_active = true ORDER BY name ASC"
        ))
        .fetch_all(self.pool.pool())
        .await?;

        Ok(churches)
    }

    async fn get_church(&self, id: Uuid) -> DatabaseResult<Option<Church>> {
        let church = sqlx::query_as::<_, Church>(&format!(
            "SELECT {CHURCH_COLUMNS} FROM churches WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(church)
    }

    async fn get_church_by_code(&self, code: &str) -> DatabaseResult<Option<Church>> {
        let church = sqlx::query_as::<_, Church>(&format!(
            "SELECT {CHURCH_COLUMNS} FROM churches WHERE code = $1"
        ))
        .bind(code)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(church)
    }

    async fn create_church(&self, church: NewChurch) -> DatabaseResult<Church> {
        let created = sqlx::query_as::<_, Church>(&format!(
            r#"
            INSERT INTO churches (id, code, name, address, timezone, require_ppg, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, true, NOW(), NOW())
            RETURNING {CHURCH_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&church.code)
        .bind(&church.name)
        .bind(&church.address)
        .bind(&church.timezone)
        .bind(church.require_ppg)
        .fetch_one(self.pool.pool())
        .await?;

        debug!(church_code = %created.code, "church created");
        Ok(created)
    }

    async fn update_church(&self, id: Uuid, update: UpdateChurch) -> DatabaseResult<Church> {
        let updated = sqlx::query_as::<_, Church>(&format!(
            r#"
            UPDATE churches SET
                name = COALESCE($2, name),
                address = COALESCE($3, address),
                timezone = COALESCE($4, timezone),
                require_ppg = COALESCE($5, require_ppg),
                is_active = COALESCE($6, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {CHURCH_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.address)
        .bind(&update.timezone)
        .bind(update.require_ppg)
        .bind(update.is_active)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(updated)
    }

    async fn list_zones(&self, church_id: Uuid) -> DatabaseResult<Vec<Zone>> {
        let zones = sqlx::query_as::<_, Zone>(&format!(
            r#"
            SELECT {ZONE_COLUMNS} FROM zones
            WHERE church_id = $1 AND is_active = true
            ORDER BY sequence ASC, name ASC
            "#
        ))
        .bind(church_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(zones)
    }

    async fn create_zone(&self, zone: NewZone) -> DatabaseResult<Zone> {
        let created = sqlx::query_as::<_, Zone>(&format!(
            r#"
            INSERT INTO zones (id, church_id, name, sequence, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, true, NOW(), NOW())
            RETURNING {ZONE_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(zone.church_id)
        .bind(&zone.name)
        .bind(zone.sequence)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(created)
    }

    async fn update_zone(&self, id: Uuid, update: UpdateZone) -> DatabaseResult<Zone> {
        let updated = sqlx::query_as::<_, Zone>(&format!(
            r#"
            UPDATE zones SET
                name = COALESCE($2, name),
                sequence = COALESCE($3, sequence),
                is_active = COALESCE($4, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ZONE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.sequence)
        .bind(update.is_active)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(updated)
    }

    async fn delete_zone(&self, id: Uuid) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM zones WHERE id = $1")
            .bind(id)
            .execute(self.pool.pool())
            .await?;

        Ok(())
    }

    async fn list_positions(&self, church_id: Uuid) -> DatabaseResult<Vec<Position>> {
        let positions = sqlx::query_as::<_, Position>(&format!(
            r#"
            SELECT {POSITION_COLUMNS} FROM positions
            WHERE church_id = $1 AND is_active = true
            ORDER BY name ASC
            "#
        ))
        .bind(church_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(positions)
    }

    async fn create_position(&self, position: NewPosition) -> DatabaseResult<Position> {
        let created = sqlx::query_as::<_, Position>(&format!(
            r#"
            INSERT INTO positions (id, church_id, zone_id, name, description, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, true, NOW(), NOW())
            RETURNING {POSITION_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(position.church_id)
        .bind(position.zone_id)
        .bind(&position.name)
        .bind(&position.description)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(created)
    }

    async fn update_position(
        &self,
        id: Uuid,
        update: UpdatePosition,
    ) -> DatabaseResult<Position> {
        let updated = sqlx::query_as::<_, Position>(&format!(
            r#"
            UPDATE positions SET
                zone_id = COALESCE($2, zone_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {POSITION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(update.zone_id)
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.is_active)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(updated)
    }

    async fn delete_position(&self, id: Uuid) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM positions WHERE id = $1")
            .bind(id)
            .execute(self.pool.pool())
            .await?;

        Ok(())
    }

    async fn list_masses(&self, church_id: Uuid) -> DatabaseResult<Vec<MassSchedule>> {
        let masses = sqlx::query_as::<_, MassSchedule>(&format!(
            r#"
            SELECT {MASS_COLUMNS} FROM mass_schedules
            WHERE church_id = $1 AND is_active = true
            ORDER BY day ASC, time ASC
            "#
        ))
        .bind(church_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(masses)
    }

    async fn create_mass(&self, mass: NewMassSchedule) -> DatabaseResult<MassSchedule> {
        let created = sqlx::query_as::<_, MassSchedule>(&format!(
            r#"
            INSERT INTO mass_schedules (id, church_id, code, day, time, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, true, NOW(), NOW())
            RETURNING {MASS_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(mass.church_id)
        .bind(&mass.code)
        .bind(mass.day)
        .bind(mass.time)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(created)
    }

    async fn update_mass(
        &self,
        id: Uuid,
        update: UpdateMassSchedule,
    ) -> DatabaseResult<MassSchedule> {
        let updated = sqlx::query_as::<_, MassSchedule>(&format!(
            r#"
            UPDATE mass_schedules SET
                code = COALESCE($2, code),
                day = COALESCE($3, day),
                time = COALESCE($4, time),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {MASS_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&update.code)
        .bind(update.day)
        .bind(update.time)
        .bind(update.is_active)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(updated)
    }

    async fn delete_mass(&self, id: Uuid) -> DatabaseResult<()> {
        sqlx::query("DELETE FROM mass_schedules WHERE id = $1")
            .bind(id)
            .execute(self.pool.pool())
            .await?;

        Ok(())
    }

    async fn events_by_week_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(&format!(
            r#"
            SELECT {EVENT_COLUMNS} FROM events
            WHERE church_id = $1 AND date >= $2 AND date <= $3
            ORDER BY date ASC
            "#
        ))
        .bind(church_id)
        .bind(start)
        .bind(end)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(events)
    }

    async fn get_event(&self, id: Uuid) -> DatabaseResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(event)
    }

    async fn create_event(&self, event: NewEvent) -> DatabaseResult<Event> {
        let created = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (id, church_id, mass_id, date, week_number, description, is_complete, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, false, NOW(), NOW())
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(event.church_id)
        .bind(event.mass_id)
        .bind(event.date)
        .bind(event.week_number)
        .bind(&event.description)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(created)
    }

    async fn set_event_complete(&self, id: Uuid, complete: bool) -> DatabaseResult<Event> {
        let updated = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events SET is_complete = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(complete)
        .fetch_one(self.pool.pool())
        .await?;

        Ok(updated)
    }

    async fn list_event_ushers(&self, event_id: Uuid) -> DatabaseResult<Vec<EventUsher>> {
        let ushers = sqlx::query_as::<_, EventUsher>(&format!(
            r#"
            SELECT {USHER_COLUMNS} FROM event_ushers
            WHERE event_id = $1
            ORDER BY created_at ASC, name ASC
            "#
        ))
        .bind(event_id)
        .fetch_all(self.pool.pool())
        .await?;

        Ok(ushers)
    }

    async fn replace_event_ushers(
        &self,
        event_id: Uuid,
        ushers: Vec<NewEventUsher>,
    ) -> DatabaseResult<Vec<EventUsher>> {
        let mut tx = self.pool.pool().begin().await?;

        sqlx::query("DELETE FROM event_ushers WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(ushers.len());
        for usher in &ushers {
            let row = sqlx::query_as::<_, EventUsher>(&format!(
                r#"
                INSERT INTO event_ushers (id, event_id, name, zone_name, position_name, is_ppg, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, NOW())
                RETURNING {USHER_COLUMNS}
                "#
            ))
            .bind(Uuid::new_v4())
            .bind(event_id)
            .bind(&usher.name)
            .bind(&usher.zone_name)
            .bind(&usher.position_name)
            .bind(usher.is_ppg)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;

        debug!(event_id = %event_id, count = inserted.len(), "event ushers replaced");
        Ok(inserted)
    }

    async fn jadwal_for_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<JadwalEvent>> {
        let events = self.events_by_week_range(church_id, start, end).await?;
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        let ushers = sqlx::query_as::<_, EventUsher>(&format!(
            r#"
            SELECT {USHER_COLUMNS} FROM event_ushers
            WHERE event_id = ANY($1)
            ORDER BY created_at ASC, name ASC
            "#
        ))
        .bind(&event_ids)
        .fetch_all(self.pool.pool())
        .await?;

        let mut by_event: HashMap<Uuid, Vec<EventUsher>> = HashMap::new();
        for usher in ushers {
            by_event.entry(usher.event_id).or_default().push(usher);
        }

        Ok(events
            .into_iter()
            .map(|event| {
                let ushers = by_event.remove(&event.id).unwrap_or_default();
                JadwalEvent { event, ushers }
            })
            .collect())
    }
}
