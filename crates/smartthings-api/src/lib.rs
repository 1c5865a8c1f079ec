// smartthings-api: Async Rust client for the SmartThings cloud REST API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::{DEFAULT_BASE_URL, SmartThingsClient};
pub use error::Error;
pub use transport::{ACCEPT_MEDIA_TYPE, TransportConfig};
pub use types::{DeviceCommand, DeviceItem, LocationItem, SceneItem};
