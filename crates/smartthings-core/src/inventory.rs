// ── Inventory snapshot ──
//
// Name-keyed lookup tables built once at connect time. Nothing mutates an
// `Inventory` after `Account::connect` returns; it goes stale if the account
// changes remotely and is replaced by connecting again.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use smartthings_api::{DeviceItem, LocationItem, SceneItem};

/// Display name → identifier, in API response order.
pub type IdMap = IndexMap<String, String>;

/// Locations, devices, and scenes of one account, keyed by display name.
///
/// Every location name in [`devices`](Self::devices) and
/// [`scenes`](Self::scenes) is also a key of [`locations`](Self::locations),
/// and every location has an entry (possibly empty) in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    locations: IdMap,
    devices: IndexMap<String, IdMap>,
    scenes: IndexMap<String, IdMap>,
}

impl Inventory {
    // ── Raw mappings ─────────────────────────────────────────────────

    /// Location name → location id.
    pub fn locations(&self) -> &IdMap {
        &self.locations
    }

    /// Location name → (device label → device id).
    pub fn devices(&self) -> &IndexMap<String, IdMap> {
        &self.devices
    }

    /// Location name → (scene name → scene id).
    pub fn scenes(&self) -> &IndexMap<String, IdMap> {
        &self.scenes
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn location_id(&self, location: &str) -> Option<&str> {
        self.locations.get(location).map(String::as_str)
    }

    pub fn devices_in(&self, location: &str) -> Option<&IdMap> {
        self.devices.get(location)
    }

    pub fn scenes_in(&self, location: &str) -> Option<&IdMap> {
        self.scenes.get(location)
    }

    /// Resolve a device label within a location to its id.
    pub fn device_id(&self, location: &str, label: &str) -> Option<&str> {
        self.devices_in(location)?.get(label).map(String::as_str)
    }

    /// Resolve a scene name within a location to its id.
    pub fn scene_id(&self, location: &str, name: &str) -> Option<&str> {
        self.scenes_in(location)?.get(name).map(String::as_str)
    }

    pub fn device_count(&self) -> usize {
        self.devices.values().map(IndexMap::len).sum()
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.values().map(IndexMap::len).sum()
    }

    // ── Construction (connect-time only) ─────────────────────────────

    pub(crate) fn set_locations(&mut self, items: Vec<LocationItem>) {
        self.locations = index_by_name(
            "location",
            "account",
            items.into_iter().map(|l| (l.name, l.location_id)),
        );
    }

    pub(crate) fn insert_devices(&mut self, location: &str, items: Vec<DeviceItem>) {
        let map = index_by_name(
            "device",
            location,
            items.into_iter().map(|d| (d.label, d.device_id)),
        );
        self.devices.insert(location.to_owned(), map);
    }

    pub(crate) fn insert_scenes(&mut self, location: &str, items: Vec<SceneItem>) {
        let map = index_by_name(
            "scene",
            location,
            items.into_iter().map(|s| (s.scene_name, s.scene_id)),
        );
        self.scenes.insert(location.to_owned(), map);
    }

    /// `(location name, location id)` pairs, cloned so fetches can run
    /// while the inventory is being filled.
    pub(crate) fn location_pairs(&self) -> Vec<(String, String)> {
        self.locations
            .iter()
            .map(|(name, id)| (name.clone(), id.clone()))
            .collect()
    }
}

/// Build a name → id map. Last one wins on a duplicate name.
fn index_by_name(
    kind: &str,
    scope: &str,
    pairs: impl Iterator<Item = (String, String)>,
) -> IdMap {
    let mut map = IdMap::new();
    for (name, id) in pairs {
        if let Some(previous) = map.insert(name, id) {
            warn!(kind, scope, replaced = %previous, "duplicate {kind} name, keeping the last one");
        }
    }
    map
}
