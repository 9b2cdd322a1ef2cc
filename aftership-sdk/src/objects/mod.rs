//! Request and response types of the AfterShip API.

pub mod checkpoint;
pub mod envelope;
pub mod lookup;
