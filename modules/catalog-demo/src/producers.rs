//! Producer call sites.
//!
//! Each method runs after the corresponding row has been persisted: it
//! builds the typed event and hands it to the shared dispatcher. Whatever a
//! fail-loud subscriber returns comes straight back to the caller.

use std::sync::Arc;

use catalog_events::Event;
use catalog_notify::{Dispatcher, NotifyError};

/// A persisted favorite row.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub user_id: i64,
    pub product_id: i64,
}

/// A persisted product row.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
}

pub struct FavoritesProducer {
    dispatcher: Arc<Dispatcher>,
}

impl FavoritesProducer {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn favorite_added(&self, favorite: &Favorite) -> Result<(), NotifyError> {
        self.dispatcher
            .emit(&Event::favorite_added(favorite.user_id, favorite.product_id))
    }
}

pub struct ProductsProducer {
    dispatcher: Arc<Dispatcher>,
}

impl ProductsProducer {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub fn product_created(&self, product: &Product) -> Result<(), NotifyError> {
        let event = Event::product_created(
            product.id,
            product.name.clone(),
            product.category.clone(),
            product.price,
        )?;
        self.dispatcher.emit(&event)
    }

    /// `product` carries the new price. A zero `old_price` is rejected
    /// before anything is emitted.
    pub fn price_changed(&self, product: &Product, old_price: f64) -> Result<(), NotifyError> {
        let event = Event::product_price_changed(product.id, old_price, product.price)?;
        self.dispatcher.emit(&event)
    }

    pub fn product_deleted(&self, product: &Product) -> Result<(), NotifyError> {
        self.dispatcher
            .emit(&Event::product_deleted(product.id, product.name.clone()))
    }
}
