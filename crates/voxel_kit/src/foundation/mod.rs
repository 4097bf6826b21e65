//! Foundation utilities: math types and tick timing

pub mod math;
pub mod time;

pub use math::{Vec2, Vec3};
pub use time::TickTimer;
