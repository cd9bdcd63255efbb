//! Typed payloads, one struct per event kind.
//!
//! Each struct is the closed field set for its kind. Serialized, a payload
//! is a flat JSON object of exactly these fields (no tag); the kind travels
//! next to it in the record.

use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// A user marked a product as a favorite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub user_id: i64,
    pub product_id: i64,
}

/// Decoding goes through [`ProductCreated::new`], so a stored record with a
/// non-finite price is rejected the same way construction is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProductCreated")]
pub struct ProductCreated {
    product_id: i64,
    product_name: String,
    category: String,
    price: f64,
}

impl ProductCreated {
    pub fn new(
        product_id: i64,
        product_name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Result<Self, EventError> {
        if !price.is_finite() {
            return Err(EventError::NonFinitePrice { product_id });
        }

        Ok(Self {
            product_id,
            product_name: product_name.into(),
            category: category.into(),
            price,
        })
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[derive(Deserialize)]
struct RawProductCreated {
    product_id: i64,
    product_name: String,
    category: String,
    price: f64,
}

impl TryFrom<RawProductCreated> for ProductCreated {
    type Error = EventError;

    fn try_from(raw: RawProductCreated) -> Result<Self, Self::Error> {
        ProductCreated::new(raw.product_id, raw.product_name, raw.category, raw.price)
    }
}

/// A product's price moved from `old_price` to `new_price`.
///
/// `change_percentage` is computed once in [`ProductPriceChanged::new`] and
/// stored; it is never recomputed on read. Decoding re-runs `new` and
/// rejects a stored percentage that disagrees with the prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPriceChange")]
pub struct ProductPriceChanged {
    product_id: i64,
    old_price: f64,
    new_price: f64,
    change_percentage: f64,
}

impl ProductPriceChanged {
    /// Rejects a zero `old_price` (the percentage would be undefined),
    /// non-finite prices, and a percentage that overflows.
    pub fn new(product_id: i64, old_price: f64, new_price: f64) -> Result<Self, EventError> {
        if !old_price.is_finite() || !new_price.is_finite() {
            return Err(EventError::NonFinitePrice { product_id });
        }
        if old_price == 0.0 {
            return Err(EventError::ZeroBasePrice { product_id });
        }

        let change_percentage = (new_price - old_price) / old_price * 100.0;
        if !change_percentage.is_finite() {
            return Err(EventError::NonFinitePrice { product_id });
        }

        Ok(Self {
            product_id,
            old_price,
            new_price,
            change_percentage,
        })
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn old_price(&self) -> f64 {
        self.old_price
    }

    pub fn new_price(&self) -> f64 {
        self.new_price
    }

    pub fn change_percentage(&self) -> f64 {
        self.change_percentage
    }
}

#[derive(Deserialize)]
struct RawPriceChange {
    product_id: i64,
    old_price: f64,
    new_price: f64,
    change_percentage: f64,
}

impl TryFrom<RawPriceChange> for ProductPriceChanged {
    type Error = EventError;

    fn try_from(raw: RawPriceChange) -> Result<Self, Self::Error> {
        let change = ProductPriceChanged::new(raw.product_id, raw.old_price, raw.new_price)?;

        // NaN compares false, so a NaN stored percentage never agrees.
        let tolerance = 1e-9 * change.change_percentage.abs().max(1.0);
        let agrees = (change.change_percentage - raw.change_percentage).abs() <= tolerance;
        if !agrees {
            return Err(EventError::PercentageMismatch {
                product_id: raw.product_id,
                stored: raw.change_percentage,
                computed: change.change_percentage,
            });
        }

        Ok(change)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDeleted {
    pub product_id: i64,
    pub product_name: String,
}

/// Closed set of event payloads. The variant decides the event kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    FavoriteAdded(FavoriteAdded),
    ProductCreated(ProductCreated),
    ProductPriceChanged(ProductPriceChanged),
    ProductDeleted(ProductDeleted),
}

impl From<FavoriteAdded> for EventPayload {
    fn from(payload: FavoriteAdded) -> Self {
        EventPayload::FavoriteAdded(payload)
    }
}

impl From<ProductCreated> for EventPayload {
    fn from(payload: ProductCreated) -> Self {
        EventPayload::ProductCreated(payload)
    }
}

impl From<ProductPriceChanged> for EventPayload {
    fn from(payload: ProductPriceChanged) -> Self {
        EventPayload::ProductPriceChanged(payload)
    }
}

impl From<ProductDeleted> for EventPayload {
    fn from(payload: ProductDeleted) -> Self {
        EventPayload::ProductDeleted(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_change_percentage_is_computed_at_construction() {
        let change = ProductPriceChanged::new(7, 200.0, 150.0).unwrap();
        assert_eq!(change.change_percentage(), -25.0);

        let change = ProductPriceChanged::new(7, 80.0, 100.0).unwrap();
        assert_eq!(change.change_percentage(), 25.0);
    }

    #[test]
    fn price_change_from_zero_is_rejected() {
        let err = ProductPriceChanged::new(3, 0.0, 10.0).unwrap_err();
        assert!(matches!(err, EventError::ZeroBasePrice { product_id: 3 }));
    }

    #[test]
    fn price_change_with_nan_is_rejected() {
        let err = ProductPriceChanged::new(3, 10.0, f64::NAN).unwrap_err();
        assert!(matches!(err, EventError::NonFinitePrice { product_id: 3 }));
    }

    #[test]
    fn price_change_percentage_overflow_is_rejected() {
        let err = ProductPriceChanged::new(4, 1e-300, 1e300).unwrap_err();
        assert!(matches!(err, EventError::NonFinitePrice { product_id: 4 }));
    }

    #[test]
    fn product_created_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ProductCreated::new(5, "Lamp", "Home", price).unwrap_err();
            assert!(matches!(err, EventError::NonFinitePrice { product_id: 5 }));
        }
    }

    #[test]
    fn decoding_price_change_reruns_validation() {
        let zero_base = serde_json::json!({
            "product_id": 8,
            "old_price": 0.0,
            "new_price": 10.0,
            "change_percentage": 0.0
        });
        let err = serde_json::from_value::<ProductPriceChanged>(zero_base).unwrap_err();
        assert!(err.to_string().contains("zero base price"));

        let tampered = serde_json::json!({
            "product_id": 8,
            "old_price": 10.0,
            "new_price": 12.0,
            "change_percentage": 50.0
        });
        let err = serde_json::from_value::<ProductPriceChanged>(tampered).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn decoding_price_change_keeps_stored_percentage() {
        let change = ProductPriceChanged::new(8, 3.0, 4.0).unwrap();
        let json = serde_json::to_value(&change).unwrap();

        let decoded: ProductPriceChanged = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, change);
    }

    #[test]
    fn payload_serializes_without_tag() {
        let payload = EventPayload::from(FavoriteAdded {
            user_id: 1,
            product_id: 2,
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"user_id": 1, "product_id": 2}));
    }
}
