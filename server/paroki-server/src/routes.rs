pub mod paths;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::{
    handlers::{churches, events, health, masses, positions, zones},
    server::ParokiServer,
};

/// Create health check routes
pub fn health_routes() -> Router<ParokiServer> {
    Router::new()
        .route(paths::health::HEALTH, get(health::health_check))
        .route(paths::health::VERSION, get(health::version_info))
}

/// Create church management routes
pub fn church_routes() -> Router<ParokiServer> {
    Router::new()
        .route(paths::churches::CHURCHES, get(churches::list_churches))
        .route(paths::churches::CHURCHES, post(churches::create_church))
        .route(paths::churches::CHURCH_BY_ID, get(churches::get_church))
        .route(paths::churches::CHURCH_BY_ID, put(churches::update_church))
        .route(
            paths::churches::CHURCH_PPG_REQUIREMENT,
            get(churches::get_ppg_requirement),
        )
}

/// Create zone (wilayah) management routes
pub fn zone_routes() -> Router<ParokiServer> {
    Router::new()
        .route(paths::zones::CHURCH_ZONES, get(zones::list_zones))
        .route(paths::zones::ZONES, post(zones::create_zone))
        .route(paths::zones::ZONE_BY_ID, put(zones::update_zone))
        .route(paths::zones::ZONE_BY_ID, delete(zones::delete_zone))
}

/// Create duty position management routes
pub fn position_routes() -> Router<ParokiServer> {
    Router::new()
        .route(
            paths::positions::CHURCH_POSITIONS,
            get(positions::list_positions),
        )
        .route(paths::positions::POSITIONS, post(positions::create_position))
        .route(
            paths::positions::POSITION_BY_ID,
            put(positions::update_position),
        )
        .route(
            paths::positions::POSITION_BY_ID,
            delete(positions::delete_position),
        )
}

/// Create mass schedule management routes
pub fn mass_routes() -> Router<ParokiServer> {
    Router::new()
        .route(paths::masses::CHURCH_MASSES, get(masses::list_masses))
        .route(paths::masses::MASSES, post(masses::create_mass))
        .route(paths::masses::MASS_BY_ID, put(masses::update_mass))
        .route(paths::masses::MASS_BY_ID, delete(masses::delete_mass))
}

/// Create event and usher assignment routes
pub fn event_routes() -> Router<ParokiServer> {
    Router::new()
        .route(paths::events::CHURCH_EVENTS, get(events::list_events))
        .route(paths::events::CHURCH_EVENTS, post(events::create_event))
        .route(paths::events::CHURCH_JADWAL, get(events::get_jadwal))
        .route(paths::events::EVENT_BY_ID, get(events::get_event))
        .route(
            paths::events::EVENT_COMPLETE,
            patch(events::set_event_complete),
        )
        .route(paths::events::EVENT_USHERS, get(events::list_event_ushers))
        .route(paths::events::EVENT_USHERS, put(events::put_event_ushers))
}

/// Assemble the full application router
pub fn create_routes() -> Router<ParokiServer> {
    Router::new()
        .merge(health_routes())
        .merge(church_routes())
        .merge(zone_routes())
        .merge(position_routes())
        .merge(mass_routes())
        .merge(event_routes())
}
