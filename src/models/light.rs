use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Light {
    pub id: u32,
    pub name: String,
    pub is_on: Option<bool>,
}

impl Light {
    pub fn power_label(&self) -> &'static str {
        match self.is_on {
            Some(true) => "on",
            Some(false) => "off",
            None => "unknown",
        }
    }
}

/// Result of a single state change issued while applying to every light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightOutcome {
    pub id: u32,
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_snake_case_keys() {
        let light = Light {
            id: 1,
            name: "Lamp".into(),
            is_on: Some(true),
        };
        assert_eq!(
            serde_json::to_value(&light).unwrap(),
            serde_json::json!({"id": 1, "name": "Lamp", "is_on": true})
        );
    }

    #[test]
    fn test_unknown_power_state() {
        let light = Light {
            id: 2,
            name: "Hall".into(),
            is_on: None,
        };
        assert_eq!(light.power_label(), "unknown");
        assert_eq!(serde_json::to_value(&light).unwrap()["is_on"], serde_json::Value::Null);
    }
}
