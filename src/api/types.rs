//! Wire types for the celestial object API.

use serde::{Deserialize, Serialize};

use crate::db::entities::celestial_object;

/// Request body for create and update. The `Id` field is accepted but
/// never used for row assignment; the store allocates ids.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelestialObjectPayload {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub orbital_period: f64,
    #[serde(default)]
    pub orbited_object_id: Option<i32>,
}

/// Response body. `Satellites` is derived per request from rows whose
/// `orbited_object_id` matches this object's id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CelestialObjectBody {
    pub id: i32,
    pub name: String,
    pub orbital_period: f64,
    pub orbited_object_id: Option<i32>,
    pub satellites: Vec<CelestialObjectBody>,
}

impl CelestialObjectBody {
    pub fn from_model(
        model: celestial_object::Model,
        satellites: Vec<celestial_object::Model>,
    ) -> Self {
        Self {
            id: model.id,
            name: model.name,
            orbital_period: model.orbital_period,
            orbited_object_id: model.orbited_object_id,
            satellites: satellites
                .into_iter()
                .map(|m| Self::from_model(m, Vec::new()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_field_names() {
        let payload: CelestialObjectPayload = serde_json::from_str(
            r#"{"Name": "Earth", "OrbitalPeriod": 365.25, "OrbitedObjectId": 1}"#,
        )
        .unwrap();

        assert_eq!(payload.id, 0);
        assert_eq!(payload.name, "Earth");
        assert_eq!(payload.orbital_period, 365.25);
        assert_eq!(payload.orbited_object_id, Some(1));
    }

    #[test]
    fn test_payload_optional_orbited_object_id() {
        let payload: CelestialObjectPayload =
            serde_json::from_str(r#"{"Id": 7, "Name": "Sun", "OrbitalPeriod": 0.0}"#).unwrap();

        assert_eq!(payload.id, 7);
        assert_eq!(payload.orbited_object_id, None);
    }

    #[test]
    fn test_body_serialization() {
        let sun = celestial_object::Model {
            id: 1,
            name: "Sun".to_string(),
            orbital_period: 0.0,
            orbited_object_id: None,
        };
        let earth = celestial_object::Model {
            id: 2,
            name: "Earth".to_string(),
            orbital_period: 365.25,
            orbited_object_id: Some(1),
        };

        let body = CelestialObjectBody::from_model(sun, vec![earth]);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["Id"], 1);
        assert_eq!(json["Name"], "Sun");
        assert_eq!(json["OrbitedObjectId"], serde_json::Value::Null);
        assert_eq!(json["Satellites"][0]["Id"], 2);
        assert_eq!(json["Satellites"][0]["OrbitedObjectId"], 1);
        assert_eq!(json["Satellites"][0]["Satellites"].as_array().unwrap().len(), 0);
    }
}
