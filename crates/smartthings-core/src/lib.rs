//! SmartThings account client.
//!
//! - **[`Account`]**: connects with a bearer token, snapshots the account's
//!   locations, devices, and scenes into an [`Inventory`], then sends device
//!   commands and executes scenes by raw id.
//!
//! - **[`Inventory`]**: name-keyed lookup tables
//!   (location → id, location → label → device id,
//!   location → scene name → scene id) built once at connect time.
//!
//! - **[`ConnectObserver`]**: receives [`ConnectPhase`] progress during
//!   connect. [`TracingObserver`] (the default) logs via `tracing`.
//!
//! - **[`blocking::Account`]**: the same surface for callers without an
//!   async runtime.
//!
//! ```no_run
//! # async fn demo() -> Result<(), smartthings_core::Error> {
//! use serde_json::json;
//! use smartthings_core::Account;
//!
//! let account = Account::new("my-personal-access-token").await?;
//! if let Some(lamp) = account.inventory().device_id("Home", "Lamp") {
//!     account.send_device_command(lamp, "switch", "on", json!([])).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod blocking;
pub mod config;
pub mod error;
pub mod inventory;
pub mod observer;

// ── Primary re-exports ──────────────────────────────────────────────
pub use account::Account;
pub use config::AccountConfig;
pub use error::Error;
pub use inventory::{IdMap, Inventory};
pub use observer::{ConnectObserver, ConnectPhase, NoopObserver, TracingObserver};

pub use smartthings_api::DeviceCommand;
