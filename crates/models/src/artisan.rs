use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::Violations;

/// A craftsperson who owns zero or more products.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artisan {
    pub id: String,
    pub name: String,
    pub craft_type: String,
}

/// Raw `POST /artisans` body. `id` may be supplied by the client.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ArtisanInput {
    pub id: Option<String>,
    pub name: Option<String>,
    pub craft_type: Option<String>,
}

/// Validated artisan payload. `id` is `None` when the server must generate one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewArtisan {
    pub id: Option<String>,
    pub name: String,
    pub craft_type: String,
}

impl ArtisanInput {
    pub fn validate(self) -> Result<NewArtisan, ModelError> {
        let mut v = Violations::new();
        let name = v.required_text("name", self.name);
        let craft_type = v.required_text("craft_type", self.craft_type);
        v.finish()?;
        Ok(NewArtisan {
            id: self.id.filter(|id| !id.is_empty()),
            name,
            craft_type,
        })
    }
}

impl NewArtisan {
    /// Build the stored record, keeping the client id when one was given.
    pub fn into_artisan(self, generate_id: impl FnOnce() -> String) -> Artisan {
        Artisan {
            id: self.id.unwrap_or_else(generate_id),
            name: self.name,
            craft_type: self.craft_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: serde_json::Value) -> ArtisanInput {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn valid_payload_without_id_gets_generated_one() {
        let new = input(serde_json::json!({"name": "Maria Silva", "craft_type": "Ceramics"}))
            .validate()
            .unwrap();
        assert_eq!(new.id, None);
        let artisan = new.into_artisan(|| "generated".into());
        assert_eq!(artisan.id, "generated");
        assert_eq!(artisan.name, "Maria Silva");
    }

    #[test]
    fn client_id_is_kept_and_empty_id_is_dropped() {
        let kept = input(serde_json::json!({"id": "a-1", "name": "Ana", "craft_type": "Lace"}))
            .validate()
            .unwrap();
        assert_eq!(kept.into_artisan(|| unreachable!()).id, "a-1");

        let blank = input(serde_json::json!({"id": "", "name": "Ana", "craft_type": "Lace"}))
            .validate()
            .unwrap();
        assert_eq!(blank.id, None);

        let spaces = input(serde_json::json!({"id": " ", "name": "Ana", "craft_type": "Lace"}))
            .validate()
            .unwrap();
        assert_eq!(spaces.id.as_deref(), Some(" "));
    }

    #[test]
    fn missing_craft_type_is_reported() {
        let err = input(serde_json::json!({"name": "João"})).validate().unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "craft_type");
    }

    #[test]
    fn empty_body_reports_both_fields() {
        let err = ArtisanInput::default().validate().unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "craft_type"]);
    }
}
