//! Route path constants, grouped per resource.

pub mod health {
    pub const HEALTH: &str = "/health";
    pub const VERSION: &str = "/version";
}

pub mod churches {
    pub const CHURCHES: &str = "/api/v1/churches";
    pub const CHURCH_BY_ID: &str = "/api/v1/churches/:id";
    pub const CHURCH_PPG_REQUIREMENT: &str = "/api/v1/churches/:id/ppg-requirement";
}

pub mod zones {
    pub const CHURCH_ZONES: &str = "/api/v1/churches/:id/zones";
    pub const ZONES: &str = "/api/v1/zones";
    pub const ZONE_BY_ID: &str = "/api/v1/zones/:id";
}

pub mod positions {
    pub const CHURCH_POSITIONS: &str = "/api/v1/churches/:id/positions";
    pub const POSITIONS: &str = "/api/v1/positions";
    pub const POSITION_BY_ID: &str = "/api/v1/positions/:id";
}

pub mod masses {
    pub const CHURCH_MASSES: &str = "/api/v1/churches/:id/masses";
    pub const MASSES: &str = "/api/v1/masses";
    pub const MASS_BY_ID: &str = "/api/v1/masses/:id";
}

pub mod events {
    pub const CHURCH_EVENTS: &str = "/api/v1/churches/:id/events";
    pub const CHURCH_JADWAL: &str = "/api/v1/churches/:id/jadwal";
    pub const EVENT_BY_ID: &str = "/api/v1/events/:id";
    pub const EVENT_COMPLETE: &str = "/api/v1/events/:id/complete";
    pub const EVENT_USHERS: &str = "/api/v1/events/:id/ushers";
}
