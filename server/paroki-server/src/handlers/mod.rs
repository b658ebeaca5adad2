pub mod churches;
pub mod events;
pub mod health;
pub mod masses;
pub mod positions;
pub mod zones;
