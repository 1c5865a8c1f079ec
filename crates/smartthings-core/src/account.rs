// ── Account client ──
//
// An `Account` only exists once its inventory snapshot is complete:
// `connect` fetches locations, then devices per location, then scenes per
// location, strictly in that order. Any failure aborts the whole connect.
//
// `Account` is `Send + Sync`. The inventory is immutable after connect and
// `reqwest::Client` is shareable, so concurrent reads and command dispatch
// from several tasks against one `Account` are fine.

use serde_json::Value;
use tracing::debug;

use smartthings_api::{DeviceCommand, SmartThingsClient};

use crate::config::AccountConfig;
use crate::error::Error;
use crate::inventory::Inventory;
use crate::observer::{ConnectObserver, ConnectPhase, TracingObserver};

/// Authenticated SmartThings account with a name → id inventory snapshot.
#[derive(Debug, Clone)]
pub struct Account {
    api: SmartThingsClient,
    inventory: Inventory,
}

impl Account {
    // ── Construction ─────────────────────────────────────────────────

    /// Connect to the public cloud endpoint with `token`.
    pub async fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::connect(&AccountConfig::new(token)).await
    }

    /// Connect and build the inventory, reporting progress via `tracing`.
    pub async fn connect(config: &AccountConfig) -> Result<Self, Error> {
        Self::connect_with_observer(config, &TracingObserver).await
    }

    /// Connect and build the inventory, reporting progress to `observer`.
    ///
    /// The token is not checked up front; a rejected token surfaces as
    /// the error from the locations fetch.
    pub async fn connect_with_observer(
        config: &AccountConfig,
        observer: &dyn ConnectObserver,
    ) -> Result<Self, Error> {
        observer.on_phase(ConnectPhase::Connecting);
        let api = SmartThingsClient::from_token(
            config.base_url.as_str(),
            &config.token,
            &config.transport(),
        )?;
        Self::load(api, observer).await
    }

    /// Build the inventory over an existing API client.
    pub async fn from_client(
        api: SmartThingsClient,
        observer: &dyn ConnectObserver,
    ) -> Result<Self, Error> {
        observer.on_phase(ConnectPhase::Connecting);
        Self::load(api, observer).await
    }

    async fn load(api: SmartThingsClient, observer: &dyn ConnectObserver) -> Result<Self, Error> {
        let mut inventory = Inventory::default();

        observer.on_phase(ConnectPhase::RetrievingLocations);
        inventory.set_locations(api.list_locations().await?);
        debug!(count = inventory.locations().len(), "locations retrieved");

        let locations = inventory.location_pairs();

        observer.on_phase(ConnectPhase::RetrievingDevices);
        for (name, id) in &locations {
            let devices = api.list_devices(id).await?;
            inventory.insert_devices(name, devices);
        }
        debug!(count = inventory.device_count(), "devices retrieved");

        observer.on_phase(ConnectPhase::RetrievingScenes);
        for (name, id) in &locations {
            let scenes = api.list_scenes(id).await?;
            inventory.insert_scenes(name, scenes);
        }
        debug!(count = inventory.scene_count(), "scenes retrieved");

        observer.on_phase(ConnectPhase::Ready);
        Ok(Self { api, inventory })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The snapshot taken at connect time.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The underlying API client.
    pub fn api(&self) -> &SmartThingsClient {
        &self.api
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Send `capability.command(arguments)` to a device.
    ///
    /// `device_id` is used as given; it is not checked against the
    /// inventory. Pass `json!([])` for a command without arguments.
    pub async fn send_device_command(
        &self,
        device_id: &str,
        capability: &str,
        command: &str,
        arguments: Value,
    ) -> Result<(), Error> {
        let cmd = DeviceCommand::new(capability, command).with_arguments(arguments);
        self.send(device_id, &cmd).await
    }

    /// Send a prepared command to a device.
    pub async fn send(&self, device_id: &str, command: &DeviceCommand) -> Result<(), Error> {
        debug!(
            device_id,
            capability = %command.capability,
            command = %command.command,
            "sending device command"
        );
        self.api.send_device_command(device_id, command).await?;
        Ok(())
    }

    /// Execute a scene. `scene_id` is used as given.
    pub async fn execute_scene(&self, scene_id: &str) -> Result<(), Error> {
        debug!(scene_id, "executing scene");
        self.api.execute_scene(scene_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Account>();
    }
}
