//! OpenAPI document for the Paroki Engine API.

use utoipa::OpenApi;

use crate::handlers::{churches, events, health, masses, positions, zones};
use crate::validation::ValidationResult;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::version_info,
        churches::list_churches,
        churches::create_church,
        churches::get_church,
        churches::update_church,
        churches::get_ppg_requirement,
        zones::list_zones,
        zones::create_zone,
        zones::update_zone,
        zones::delete_zone,
        positions::list_positions,
        positions::create_position,
        positions::update_position,
        positions::delete_position,
        masses::list_masses,
        masses::create_mass,
        masses::update_mass,
        masses::delete_mass,
        events::list_events,
        events::create_event,
        events::get_jadwal,
        events::get_event,
        events::set_event_complete,
        events::list_event_ushers,
        events::put_event_ushers,
    ),
    components(schemas(
        health::HealthResponse,
        health::VersionResponse,
        churches::PpgRequirementResponse,
        events::CreateEventRequest,
        events::SetCompleteRequest,
        events::UsherPayload,
        events::UsherAssignmentsRequest,
        ValidationResult,
    )),
    tags(
        (name = "health", description = "Service health and version"),
        (name = "churches", description = "Church management and PPG policy"),
        (name = "zones", description = "Zone (wilayah) management"),
        (name = "positions", description = "Duty position management"),
        (name = "masses", description = "Mass schedule management"),
        (name = "events", description = "Events, usher assignments and the printable schedule")
    ),
    info(
        title = "Paroki Engine API",
        description = "Church ushering scheduling API"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().unwrap();
        assert!(json.contains("/api/v1/churches/{id}/ppg-requirement"));
        assert!(json.contains("/api/v1/events/{id}/ushers"));
    }

    #[test]
    fn openapi_document_describes_write_payloads() {
        // Request-body schemas come from the Json extractors on the create
        // and update handlers, so the payload models must carry schemas.
        let json = ApiDoc::openapi().to_json().unwrap();
        for schema in [
            "NewChurch",
            "UpdateChurch",
            "NewZone",
            "UpdateZone",
            "NewPosition",
            "UpdatePosition",
            "NewMassSchedule",
            "UpdateMassSchedule",
        ] {
            assert!(json.contains(schema), "missing schema: {schema}");
        }
    }
}
