pub mod engine;
pub mod message;

pub use engine::{Hub, HubHandle};
