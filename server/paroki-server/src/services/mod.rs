//! Domain services invoked by handlers.

pub mod ppg_policy;

pub use ppg_policy::PpgPolicy;
