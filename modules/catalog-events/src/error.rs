use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventError {
    /// A price change from zero has no defined percentage.
    #[error("product {product_id}: price change from a zero base price")]
    ZeroBasePrice { product_id: i64 },

    #[error("product {product_id}: price must be a finite number")]
    NonFinitePrice { product_id: i64 },

    /// A decoded price change whose stored percentage disagrees with its prices.
    #[error("product {product_id}: stored change percentage {stored} does not match computed {computed}")]
    PercentageMismatch {
        product_id: i64,
        stored: f64,
        computed: f64,
    },

    #[error("unknown event kind: {0}")]
    UnknownKind(String),

    #[error("failed to decode event payload: {0}")]
    Decode(#[from] serde_json::Error),
}
