mod core;
mod messages;
mod worker;

pub use self::core::TankEngine;
pub use messages::{TickEvent, TickUpdate};
