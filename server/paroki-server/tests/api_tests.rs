//! HTTP-level tests for the scheduling API, run against an in-memory
//! repository and a static gate client.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use database_layer::{
    Church, DatabaseResult, Event, EventUsher, JadwalEvent, MassSchedule, NewChurch, NewEvent,
    NewEventUsher, NewMassSchedule, NewPosition, NewZone, Position, ScheduleRepository,
    UpdateChurch, UpdateMassSchedule, UpdatePosition, UpdateZone, Zone,
};
use feature_gate::{GateClient, StaticGateClient};
use paroki_server::{create_app, server::ServerConfig, ParokiServer};

/// In-memory repository covering the slices of storage the tests touch.
#[derive(Default)]
struct InMemoryRepository {
    churches: Mutex<Vec<Church>>,
    events: Mutex<Vec<Event>>,
    ushers: Mutex<Vec<EventUsher>>,
    database_down: bool,
}

impl InMemoryRepository {
    fn with_church(self, church: Church) -> Self {
        self.churches.lock().unwrap().push(church);
        self
    }

    fn with_event(self, event: Event) -> Self {
        self.events.lock().unwrap().push(event);
        self
    }

    fn with_database_down(mut self) -> Self {
        self.database_down = true;
        self
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryRepository {
    async fn is_healthy(&self) -> bool {
        !self.database_down
    }

    async fn list_churches(&self) -> DatabaseResult<Vec<Church>> {
        Ok(self.churches.lock().unwrap().clone())
    }

    async fn get_church(&self, id: Uuid) -> DatabaseResult<Option<Church>> {
        Ok(self
            .churches
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn get_church_by_code(&self, code: &str) -> DatabaseResult<Option<Church>> {
        Ok(self
            .churches
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.code == code)
            .cloned())
    }

    async fn create_church(&self, church: NewChurch) -> DatabaseResult<Church> {
        let created = Church {
            id: Uuid::new_v4(),
            code: church.code,
            name: church.name,
            address: church.address,
            timezone: church.timezone,
            require_ppg: church.require_ppg,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.churches.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_church(&self, id: Uuid, update: UpdateChurch) -> DatabaseResult<Church> {
        let mut churches = self.churches.lock().unwrap();
        let church = churches
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(database_layer::DatabaseError::SqlxError(
                sqlx::Error::RowNotFound,
            ))?;
        if let Some(name) = update.name {
            church.name = name;
        }
        if let Some(require_ppg) = update.require_ppg {
            church.require_ppg = Some(require_ppg);
        }
        if let Some(is_active) = update.is_active {
            church.is_active = is_active;
        }
        Ok(church.clone())
    }

    async fn list_zones(&self, _church_id: Uuid) -> DatabaseResult<Vec<Zone>> {
        Ok(Vec::new())
    }

    async fn create_zone(&self, zone: NewZone) -> DatabaseResult<Zone> {
        Ok(Zone {
            id: Uuid::new_v4(),
            church_id: zone.church_id,
            name: zone.name,
            sequence: zone.sequence,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update_zone(&self, _id: Uuid, _update: UpdateZone) -> DatabaseResult<Zone> {
        Err(database_layer::DatabaseError::SqlxError(
            sqlx::Error::RowNotFound,
        ))
    }

    async fn delete_zone(&self, _id: Uuid) -> DatabaseResult<()> {
        Ok(())
    }

    async fn list_positions(&self, _church_id: Uuid) -> DatabaseResult<Vec<Position>> {
        Ok(Vec::new())
    }

    async fn create_position(&self, position: NewPosition) -> DatabaseResult<Position> {
        Ok(Position {
            id: Uuid::new_v4(),
            church_id: position.church_id,
            zone_id: position.zone_id,
            name: position.name,
            description: position.description,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update_position(
        &self,
        _id: Uuid,
        _update: UpdatePosition,
    ) -> DatabaseResult<Position> {
        Err(database_layer::DatabaseError::SqlxError(
            sqlx::Error::RowNotFound,
        ))
    }

    async fn delete_position(&self, _id: Uuid) -> DatabaseResult<()> {
        Ok(())
    }

    async fn list_masses(&self, _church_id: Uuid) -> DatabaseResult<Vec<MassSchedule>> {
        Ok(Vec::new())
    }

    async fn create_mass(&self, mass: NewMassSchedule) -> DatabaseResult<MassSchedule> {
        Ok(MassSchedule {
            id: Uuid::new_v4(),
            church_id: mass.church_id,
            code: mass.code,
            day: mass.day,
            time: mass.time,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn update_mass(
        &self,
        _id: Uuid,
        _update: UpdateMassSchedule,
    ) -> DatabaseResult<MassSchedule> {
        Err(database_layer::DatabaseError::SqlxError(
            sqlx::Error::RowNotFound,
        ))
    }

    async fn delete_mass(&self, _id: Uuid) -> DatabaseResult<()> {
        Ok(())
    }

    async fn events_by_week_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.church_id == church_id && e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }

    async fn get_event(&self, id: Uuid) -> DatabaseResult<Option<Event>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn create_event(&self, event: NewEvent) -> DatabaseResult<Event> {
        let created = Event {
            id: Uuid::new_v4(),
            church_id: event.church_id,
            mass_id: event.mass_id,
            date: event.date,
            week_number: event.week_number,
            description: event.description,
            is_complete: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.events.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn set_event_complete(&self, id: Uuid, complete: bool) -> DatabaseResult<Event> {
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(database_layer::DatabaseError::SqlxError(
                sqlx::Error::RowNotFound,
            ))?;
        event.is_complete = complete;
        Ok(event.clone())
    }

    async fn list_event_ushers(&self, event_id: Uuid) -> DatabaseResult<Vec<EventUsher>> {
        Ok(self
            .ushers
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn replace_event_ushers(
        &self,
        event_id: Uuid,
        ushers: Vec<NewEventUsher>,
    ) -> DatabaseResult<Vec<EventUsher>> {
        let mut store = self.ushers.lock().unwrap();
        store.retain(|u| u.event_id != event_id);
        let mut inserted = Vec::with_capacity(ushers.len());
        for usher in ushers {
            let row = EventUsher {
                id: Uuid::new_v4(),
                event_id,
                name: usher.name,
                zone_name: usher.zone_name,
                position_name: usher.position_name,
                is_ppg: usher.is_ppg,
                created_at: Utc::now(),
            };
            store.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn jadwal_for_range(
        &self,
        church_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DatabaseResult<Vec<JadwalEvent>> {
        let events = self.events_by_week_range(church_id, start, end).await?;
        let mut jadwal = Vec::with_capacity(events.len());
        for event in events {
            let ushers = self.list_event_ushers(event.id).await?;
            jadwal.push(JadwalEvent { event, ushers });
        }
        Ok(jadwal)
    }
}

fn church(require_ppg: Option<i32>) -> Church {
    Church {
        id: Uuid::new_v4(),
        code: "STO".to_string(),
        name: "St. Odilia".to_string(),
        address: None,
        timezone: "Asia/Jakarta".to_string(),
        require_ppg,
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn event(church_id: Uuid) -> Event {
    Event {
        id: Uuid::new_v4(),
        church_id,
        mass_id: None,
        date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        week_number: 2,
        description: None,
        is_complete: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn app_with(repository: InMemoryRepository, gate: StaticGateClient) -> axum::Router {
    let server = ParokiServer::new_with_deps(
        ServerConfig::default(),
        Arc::new(repository),
        Arc::new(gate) as Arc<dyn GateClient>,
    );
    create_app(server)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let app = app_with(InMemoryRepository::default(), StaticGateClient::new());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "healthy");
    assert_eq!(json["data"]["checks"]["database"], "healthy");
}

#[tokio::test]
async fn health_check_reports_degraded_database() {
    let repo = InMemoryRepository::default().with_database_down();
    let app = app_with(repo, StaticGateClient::new());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "degraded");
    assert_eq!(json["data"]["checks"]["database"], "unhealthy");
}

#[tokio::test]
async fn put_ushers_rejects_duplicates_with_verbatim_message() {
    let c = church(None);
    let e = event(c.id);
    let event_id = e.id;
    let repo = InMemoryRepository::default().with_church(c).with_event(e);
    let app = app_with(repo, StaticGateClient::new());

    let payload = serde_json::json!({
        "ushers": [
            {"name": "Budi Santoso"},
            {"name": "Budi Santoso"}
        ]
    });
    let response = app
        .oneshot(
            Request::put(format!("/api/v1/events/{event_id}/ushers"))
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Validation error: Nama petugas tidak boleh duplikat: Budi Santoso"
    );
}

#[tokio::test]
async fn put_ushers_persists_valid_names() {
    let c = church(None);
    let e = event(c.id);
    let event_id = e.id;
    let repo = InMemoryRepository::default().with_church(c).with_event(e);
    let app = app_with(repo, StaticGateClient::new());

    let payload = serde_json::json!({
        "ushers": [
            {"name": "Budi Santoso", "zone_name": "Wilayah II", "is_ppg": true},
            {"name": "Siti Aminah", "position_name": "Pintu Utama"}
        ]
    });
    let response = app
        .oneshot(
            Request::put(format!("/api/v1/events/{event_id}/ushers"))
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"][0]["name"], "Budi Santoso");
    assert_eq!(json["data"][0]["is_ppg"], true);
}

#[tokio::test]
async fn put_ushers_on_unknown_event_is_404() {
    let app = app_with(InMemoryRepository::default(), StaticGateClient::new());

    let payload = serde_json::json!({"ushers": [{"name": "Budi Santoso"}]});
    let response = app
        .oneshot(
            Request::put(format!("/api/v1/events/{}/ushers", Uuid::new_v4()))
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ppg_requirement_honors_stored_flag() {
    let c = church(Some(1));
    let church_id = c.id;
    let repo = InMemoryRepository::default().with_church(c);
    // The gate says disabled, but the stored flag wins.
    let app = app_with(repo, StaticGateClient::new().with_gate("ppg", false));

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/churches/{church_id}/ppg-requirement"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["ppg_required"], true);
    assert_eq!(json["data"]["church_code"], "STO");
}

#[tokio::test]
async fn ppg_requirement_defers_to_gate_when_flag_unset() {
    let c = church(Some(0));
    let church_id = c.id;
    let repo = InMemoryRepository::default().with_church(c);
    let app = app_with(repo, StaticGateClient::new().with_gate("ppg", true));

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/churches/{church_id}/ppg-requirement"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["ppg_required"], true);
}

#[tokio::test]
async fn ppg_requirement_surfaces_gate_failure_as_503() {
    let c = church(None);
    let church_id = c.id;
    let repo = InMemoryRepository::default().with_church(c);
    // No "ppg" gate configured: lookup fails and the policy propagates it.
    let app = app_with(repo, StaticGateClient::new());

    let response = app
        .oneshot(
            Request::get(format!("/api/v1/churches/{church_id}/ppg-requirement"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "gate_error");
}

#[tokio::test]
async fn week_range_query_rejects_inverted_bounds() {
    let c = church(None);
    let church_id = c.id;
    let repo = InMemoryRepository::default().with_church(c);
    let app = app_with(repo, StaticGateClient::new());

    let response = app
        .oneshot(
            Request::get(format!(
                "/api/v1/churches/{church_id}/events?start=2024-03-10&end=2024-03-03"
            ))
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn jadwal_returns_events_with_their_ushers() {
    let c = church(None);
    let e = event(c.id);
    let church_id = c.id;
    let event_id = e.id;
    let repo = InMemoryRepository::default().with_church(c).with_event(e);
    repo.replace_event_ushers(
        event_id,
        vec![NewEventUsher {
            name: "Budi Santoso".to_string(),
            zone_name: Some("Wilayah II".to_string()),
            position_name: None,
            is_ppg: false,
        }],
    )
    .await
    .unwrap();
    let app = app_with(repo, StaticGateClient::new());

    let response = app
        .oneshot(
            Request::get(format!(
                "/api/v1/churches/{church_id}/jadwal?start=2024-03-04&end=2024-03-10"
            ))
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let jadwal = json["data"].as_array().unwrap();
    assert_eq!(jadwal.len(), 1);
    assert_eq!(jadwal[0]["ushers"][0]["name"], "Budi Santoso");
}

#[tokio::test]
async fn create_church_rejects_duplicate_codes() {
    let repo = InMemoryRepository::default().with_church(church(None));
    let app = app_with(repo, StaticGateClient::new());

    let payload = serde_json::json!({
        "code": "STO",
        "name": "St. Odilia Duplicate",
        "timezone": "Asia/Jakarta"
    });
    let response = app
        .oneshot(
            Request::post("/api/v1/churches")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
