//! Blocking facade over [`crate::Account`].
//!
//! For hosts without an async runtime. Each call blocks the calling thread
//! until the request completes. Do not use from inside an async runtime:
//! tokio refuses to block a worker thread and will panic.

use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

use smartthings_api::DeviceCommand;

use crate::config::AccountConfig;
use crate::error::Error;
use crate::inventory::Inventory;
use crate::observer::{ConnectObserver, TracingObserver};

/// Blocking SmartThings account.
#[derive(Debug)]
pub struct Account {
    inner: crate::Account,
    runtime: Runtime,
}

impl Account {
    /// Connect to the public cloud endpoint with `token`.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::connect(&AccountConfig::new(token))
    }

    pub fn connect(config: &AccountConfig) -> Result<Self, Error> {
        Self::connect_with_observer(config, &TracingObserver)
    }

    pub fn connect_with_observer(
        config: &AccountConfig,
        observer: &dyn ConnectObserver,
    ) -> Result<Self, Error> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;
        let inner = runtime.block_on(crate::Account::connect_with_observer(config, observer))?;
        Ok(Self { inner, runtime })
    }

    pub fn inventory(&self) -> &Inventory {
        self.inner.inventory()
    }

    /// The async account this facade drives.
    pub fn as_async(&self) -> &crate::Account {
        &self.inner
    }

    pub fn send_device_command(
        &self,
        device_id: &str,
        capability: &str,
        command: &str,
        arguments: Value,
    ) -> Result<(), Error> {
        self.runtime.block_on(
            self.inner
                .send_device_command(device_id, capability, command, arguments),
        )
    }

    pub fn send(&self, device_id: &str, command: &DeviceCommand) -> Result<(), Error> {
        self.runtime.block_on(self.inner.send(device_id, command))
    }

    pub fn execute_scene(&self, scene_id: &str) -> Result<(), Error> {
        self.runtime.block_on(self.inner.execute_scene(scene_id))
    }
}
