//! Response objects returned from the Ecobee thermostat listing, and the
//! per-invocation reading derived from them.
//!
//! Every field defaults when absent: a response missing any segment of the
//! `thermostatList[0].remoteSensors[]` path parses to empty collections
//! instead of failing.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ThermostatListResponse {
    #[serde(default, rename = "thermostatList")]
    pub thermostat_list: Vec<Thermostat>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thermostat {
    #[serde(default, rename = "remoteSensors")]
    pub remote_sensors: Vec<RemoteSensor>,
}

/// One remote sensor entry as listed under a thermostat.
#[derive(Debug, Default, Deserialize)]
pub struct RemoteSensor {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub capability: Vec<Capability>,
}

/// A single named measurement reported by a remote sensor.
///
/// The vendor transmits values as JSON strings regardless of kind ("725",
/// "true"), so the raw value is kept loose until conversion.
#[derive(Debug, Deserialize)]
pub struct Capability {
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub value: serde_json::Value,
}

/// A converted capability value: real-valued for temperature, raw otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum CapabilityValue {
    Number(f64),
    Text(String),
}

/// Mapping from capability type to value for one sensor, built fresh per
/// invocation and never persisted.
#[derive(Debug, Default, PartialEq)]
pub struct SensorReading {
    values: HashMap<String, CapabilityValue>,
}

impl SensorReading {
    pub fn get(&self, kind: &str) -> Option<&CapabilityValue> {
        self.values.get(kind)
    }

    /// The temperature reading in degrees, if the sensor reported one.
    pub fn temperature(&self) -> Option<f64> {
        match self.values.get("temperature") {
            Some(CapabilityValue::Number(degrees)) => Some(*degrees),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<RemoteSensor> for SensorReading {
    fn from(sensor: RemoteSensor) -> SensorReading {
        let values = sensor
            .capability
            .into_iter()
            .map(|capability| {
                let value = convert(&capability.kind, capability.value);

                (capability.kind, value)
            })
            .collect();

        SensorReading { values }
    }
}

/// Temperature arrives in tenths of a degree and is divided down to degrees;
/// every other capability passes its raw value through unchanged.
fn convert(kind: &str, value: serde_json::Value) -> CapabilityValue {
    if kind == "temperature" {
        let tenths = match &value {
            serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
            serde_json::Value::String(s) => s.parse().unwrap_or(0.0),
            _ => 0.0,
        };

        return CapabilityValue::Number(tenths / 10.0);
    }

    match value {
        serde_json::Value::Number(n) => CapabilityValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => CapabilityValue::Text(s),
        other => CapabilityValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{CapabilityValue, RemoteSensor, SensorReading, ThermostatListResponse};

    fn sensor_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{}",
                "capability": [
                    {{"type": "temperature", "value": "725"}},
                    {{"type": "humidity", "value": "31"}},
                    {{"type": "occupancy", "value": "true"}}
                ]
            }}"#,
            id
        )
    }

    #[test]
    fn temperature_is_divided_from_tenths() {
        let sensor: RemoteSensor = serde_json::from_str(&sensor_json("rs:100")).unwrap();
        let reading = SensorReading::from(sensor);

        assert_eq!(reading.temperature(), Some(72.5));
    }

    #[test]
    fn numeric_temperature_value_is_also_accepted() {
        let sensor: RemoteSensor = serde_json::from_str(
            r#"{"id": "rs:100", "capability": [{"type": "temperature", "value": 725}]}"#,
        )
        .unwrap();
        let reading = SensorReading::from(sensor);

        assert_eq!(reading.temperature(), Some(72.5));
    }

    #[test]
    fn non_temperature_capabilities_pass_through_unchanged() {
        let sensor: RemoteSensor = serde_json::from_str(&sensor_json("rs:100")).unwrap();
        let reading = SensorReading::from(sensor);

        assert_eq!(
            reading.get("humidity"),
            Some(&CapabilityValue::Text(String::from("31")))
        );
        assert_eq!(
            reading.get("occupancy"),
            Some(&CapabilityValue::Text(String::from("true")))
        );
    }

    #[test]
    fn reading_without_temperature_reports_none() {
        let sensor: RemoteSensor = serde_json::from_str(
            r#"{"id": "rs:100", "capability": [{"type": "occupancy", "value": "false"}]}"#,
        )
        .unwrap();
        let reading = SensorReading::from(sensor);

        assert_eq!(reading.temperature(), None);
        assert!(!reading.is_empty());
    }

    #[test]
    fn missing_path_segments_default_to_empty_collections() {
        let response: ThermostatListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.thermostat_list.is_empty());

        let response: ThermostatListResponse =
            serde_json::from_str(r#"{"thermostatList": [{}]}"#).unwrap();
        assert!(response.thermostat_list[0].remote_sensors.is_empty());
    }
}
