// Wire types for the SmartThings REST API.
//
// Only the fields the client reads are modelled; serde ignores the rest of
// each item, so richer responses still deserialize.

use serde::{Deserialize, Serialize};

/// Collection envelope: `{ "items": [...] }`.
///
/// The API also returns `_links` for paging; a single response is all the
/// client consumes, so that field is not modelled.
#[derive(Debug, Clone, Deserialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

/// One entry of `GET /locations`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationItem {
    pub name: String,
    pub location_id: String,
}

/// One entry of `GET /devices?locationId=...`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceItem {
    pub label: String,
    pub device_id: String,
}

/// One entry of `GET /scenes?locationId=...`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneItem {
    pub scene_name: String,
    pub scene_id: String,
}

/// Body of `POST /devices/{deviceId}/commands`.
///
/// `arguments` is free-form JSON; an empty array means "no arguments".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommand {
    pub capability: String,
    pub command: String,
    pub arguments: serde_json::Value,
}

impl DeviceCommand {
    /// A command with no arguments.
    pub fn new(capability: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            capability: capability.into(),
            command: command.into(),
            arguments: serde_json::Value::Array(Vec::new()),
        }
    }

    pub fn with_arguments(mut self, arguments: serde_json::Value) -> Self {
        self.arguments = arguments;
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn items_ignore_unknown_fields() {
        let body = json!({
            "items": [{
                "deviceId": "D1",
                "name": "c2c-switch",
                "label": "Lamp",
                "locationId": "L1",
                "components": []
            }],
            "_links": {}
        });
        let parsed: Items<DeviceItem> = serde_json::from_value(body).unwrap();
        assert_eq!(
            parsed.items,
            vec![DeviceItem {
                label: "Lamp".into(),
                device_id: "D1".into(),
            }]
        );
    }

    #[test]
    fn command_without_arguments_serializes_empty_array() {
        let cmd = DeviceCommand::new("switch", "on");
        assert_eq!(
            serde_json::to_value(&cmd).unwrap(),
            json!({ "capability": "switch", "command": "on", "arguments": [] })
        );
    }

    #[test]
    fn command_arguments_pass_through() {
        let cmd = DeviceCommand::new("switchLevel", "setLevel").with_arguments(json!([50, 2]));
        assert_eq!(cmd.arguments, json!([50, 2]));
    }
}
