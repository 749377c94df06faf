//! Domain record for the dinosaur API.
//!
//! # Design
//! `Dinosaur` mirrors the mock-server's schema but is defined independently.
//! Integration tests catch any schema drift between the two crates. Every
//! field is required: a missing or non-string key fails the whole decode
//! rather than producing a partial record.

use serde::{Deserialize, Serialize};

/// A single dinosaur entry returned by the API.
///
/// `image_url` travels as `img_src` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dinosaur {
    /// Stable list key.
    pub id: String,
    pub name: String,
    /// Human-readable length with the unit embedded, e.g. `"12m"`.
    pub length: String,
    pub description: String,
    #[serde(rename = "img_src")]
    pub image_url: String,
}

impl Dinosaur {
    /// Card heading: `"<name> (<length>)"`.
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.name, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REX: &str =
        r#"{"id":"1","img_src":"http://x/a.png","description":"d","name":"Rex","length":"12m"}"#;

    #[test]
    fn img_src_maps_to_image_url() {
        let dino: Dinosaur = serde_json::from_str(REX).unwrap();
        assert_eq!(dino.id, "1");
        assert_eq!(dino.name, "Rex");
        assert_eq!(dino.length, "12m");
        assert_eq!(dino.description, "d");
        assert_eq!(dino.image_url, "http://x/a.png");
    }

    #[test]
    fn serializes_back_to_wire_keys() {
        let dino: Dinosaur = serde_json::from_str(REX).unwrap();
        let json = serde_json::to_value(&dino).unwrap();
        assert_eq!(json["img_src"], "http://x/a.png");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn every_field_is_required() {
        for key in ["id", "img_src", "description", "name", "length"] {
            let mut value: serde_json::Value = serde_json::from_str(REX).unwrap();
            value.as_object_mut().unwrap().remove(key);
            let result: Result<Dinosaur, _> = serde_json::from_value(value);
            assert!(result.is_err(), "missing {key} should fail");
        }
    }

    #[test]
    fn non_string_field_is_rejected() {
        let raw = r#"{"id":1,"img_src":"u","description":"d","name":"Rex","length":"12m"}"#;
        let result: Result<Dinosaur, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let raw = r#"{"id":"1","img_src":"u","description":"d","name":"Rex","length":"12m","era":"Cretaceous"}"#;
        let dino: Dinosaur = serde_json::from_str(raw).unwrap();
        assert_eq!(dino.name, "Rex");
    }

    #[test]
    fn display_title_combines_name_and_length() {
        let dino: Dinosaur = serde_json::from_str(REX).unwrap();
        assert_eq!(dino.display_title(), "Rex (12m)");
    }
}
