//! # Data Transfer Objects
//!
//! Request and response bodies for the REST surface.
//!
//! ## Why DTOs?
//! - Decouples the internal domain model from the API contract: the wire
//!   representation carries only id, name, brand, max and quantity; the
//!   version counter and timestamps stay internal
//! - Request shape is validated here before the engine runs

use serde::{Deserialize, Serialize};

use beerstock_core::validation::{
    validate_brand, validate_max, validate_name, validate_stock_delta,
};
use beerstock_core::{Beer, NewBeer, ValidationError};

// =============================================================================
// Beer Representation
// =============================================================================

/// A beer as exposed to HTTP clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerDto {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        BeerDto {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
        }
    }
}

// =============================================================================
// Create Request
// =============================================================================

/// Body of `POST /beers`.
///
/// All fields are required except `id`, which the store assigns when
/// omitted. Missing required fields are rejected at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBeerDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub brand: String,
    pub max: i64,
    pub quantity: i64,
}

impl CreateBeerDto {
    /// Validates the request shape and converts into the domain type.
    ///
    /// ## Checks
    /// - name and brand non-empty, within length limits
    /// - max positive
    ///
    /// The quantity-vs-max bound is a business rule and stays with the
    /// engine.
    pub fn validate(self) -> Result<NewBeer, ValidationError> {
        validate_name(&self.name)?;
        validate_brand(&self.brand)?;
        validate_max(self.max)?;

        Ok(NewBeer {
            id: self.id,
            name: self.name,
            brand: self.brand,
            max: self.max,
            quantity: self.quantity,
        })
    }
}

// =============================================================================
// Stock Update Request
// =============================================================================

/// Body of `PATCH /beers/{id}/increment` and `/decrement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityDto {
    pub quantity: i64,
}

impl QuantityDto {
    /// Validates the delta range [1, 100] and returns the delta.
    pub fn validate(&self) -> Result<i64, ValidationError> {
        validate_stock_delta(self.quantity)?;
        Ok(self.quantity)
    }
}

// =============================================================================
// Message Response
// =============================================================================

/// Confirmation body, e.g. for `DELETE /beers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_beer_dto_hides_internals() {
        let beer = Beer {
            id: 1,
            name: "Skol Beats".to_string(),
            brand: "Ambev".to_string(),
            max: 5,
            quantity: 2,
            version: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(BeerDto::from(beer)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Skol Beats");
        assert!(json.get("version").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_create_dto_missing_field_rejected_by_serde() {
        let result: Result<CreateBeerDto, _> =
            serde_json::from_str(r#"{"brand": "Ambev", "max": 5, "quantity": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_dto_id_is_optional() {
        let dto: CreateBeerDto = serde_json::from_str(
            r#"{"name": "Skol Beats", "brand": "Ambev", "max": 5, "quantity": 2}"#,
        )
        .unwrap();
        assert_eq!(dto.id, None);

        let new_beer = dto.validate().unwrap();
        assert_eq!(new_beer.name, "Skol Beats");
    }

    #[test]
    fn test_create_dto_validation() {
        let dto = CreateBeerDto {
            id: None,
            name: "".to_string(),
            brand: "Ambev".to_string(),
            max: 5,
            quantity: 2,
        };
        assert!(dto.validate().is_err());

        let dto = CreateBeerDto {
            id: None,
            name: "Skol Beats".to_string(),
            brand: "Ambev".to_string(),
            max: 0,
            quantity: 0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_quantity_dto_range() {
        assert_eq!(QuantityDto { quantity: 3 }.validate(), Ok(3));
        assert!(QuantityDto { quantity: 0 }.validate().is_err());
        assert!(QuantityDto { quantity: 101 }.validate().is_err());
    }
}
