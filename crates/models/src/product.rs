use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::errors::ModelError;
use crate::validation::Violations;

/// An item for sale, owned by exactly one artisan.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u64,
    pub artisan_id: String,
}

/// Raw `POST /artisans/{id}/products` body.
///
/// There is deliberately no `artisan_id` here: the owner always comes from the
/// path, and unknown JSON fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<Number>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u64,
}

impl ProductInput {
    pub fn validate(self) -> Result<NewProduct, ModelError> {
        let mut v = Violations::new();
        let name = v.required_text("name", self.name);
        let description = v.required_text("description", self.description);
        let price = v.positive_number("price", self.price);
        let stock_quantity = v.non_negative_integer("stock_quantity", self.stock_quantity);
        v.finish()?;
        Ok(NewProduct { name, description, price, stock_quantity })
    }
}

impl NewProduct {
    pub fn into_product(self, id: String, artisan_id: String) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock_quantity: self.stock_quantity,
            artisan_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(v: serde_json::Value) -> ProductInput {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn valid_payload() {
        let new = input(json!({
            "name": "Rocking Chair",
            "description": "Solid wood",
            "price": 450.0,
            "stock_quantity": 5
        }))
        .validate()
        .unwrap();
        let p = new.into_product("p-1".into(), "a-1".into());
        assert_eq!(p.price, 450.0);
        assert_eq!(p.stock_quantity, 5);
        assert_eq!(p.artisan_id, "a-1");
    }

    #[test]
    fn zero_stock_is_allowed() {
        let new = input(json!({"name": "Vase", "description": "Clay", "price": 1, "stock_quantity": 0}))
            .validate()
            .unwrap();
        assert_eq!(new.stock_quantity, 0);
    }

    #[test]
    fn whole_float_stock_is_accepted() {
        let new = input(json!({"name": "Vase", "description": "Clay", "price": 12.5, "stock_quantity": 5.0}))
            .validate()
            .unwrap();
        assert_eq!(new.stock_quantity, 5);

        let err = input(json!({"name": "Vase", "description": "Clay", "price": 12.5, "stock_quantity": 5.5}))
            .validate()
            .unwrap_err();
        assert_eq!(err.violations()[0].field, "stock_quantity");
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = input(json!({"name": "Bad", "description": "Desc", "price": -50.0, "stock_quantity": 5}))
            .validate()
            .unwrap_err();
        assert_eq!(err.violations()[0].field, "price");
    }

    #[test]
    fn every_violation_is_listed() {
        let err = input(json!({"name": "", "price": 0, "stock_quantity": -3}))
            .validate()
            .unwrap_err();
        let fields: Vec<_> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "description", "price", "stock_quantity"]);
    }

    #[test]
    fn spoofed_artisan_id_is_ignored_on_decode() {
        let new = input(json!({
            "name": "Mug",
            "description": "Glazed",
            "price": 20.5,
            "stock_quantity": 1,
            "artisan_id": "someone-else"
        }))
        .validate()
        .unwrap();
        assert_eq!(new.into_product("p".into(), "owner".into()).artisan_id, "owner");
    }
}
