use std::sync::Arc;

use anyhow::Result;
use catalog_events::EventKind;
use catalog_notify::{
    AuditLogSubscriber, ConsoleSubscriber, Dispatcher, FileStrategy, NotificationSubscriber,
    RecommendationSubscriber,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod producers;

use config::Config;
use producers::{Favorite, FavoritesProducer, Product, ProductsProducer};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("catalog=info".parse()?))
        .init();

    info!("Catalog notifications starting...");

    let config = Config::from_env();
    config.log();

    // The one dispatcher for this process.
    let dispatcher = Arc::new(Dispatcher::new());
    register_subscribers(&dispatcher, &config);
    info!(kinds = ?dispatcher.kinds(), "Subscribers registered");

    let favorites = FavoritesProducer::new(dispatcher.clone());
    let products = ProductsProducer::new(dispatcher.clone());

    let mut lamp = Product {
        id: 1,
        name: "Desk Lamp".into(),
        category: "Home".into(),
        price: 40.0,
    };
    products.product_created(&lamp)?;

    favorites.favorite_added(&Favorite {
        user_id: 123,
        product_id: lamp.id,
    })?;

    let old_price = lamp.price;
    lamp.price = 32.0;
    products.price_changed(&lamp, old_price)?;

    let freebie = Product {
        id: 2,
        name: "Sticker".into(),
        category: "Promo".into(),
        price: 1.5,
    };
    if let Err(e) = products.price_changed(&freebie, 0.0) {
        warn!(product_id = freebie.id, error = %e, "Price change rejected");
    }

    products.product_deleted(&lamp)?;

    info!(audit_log = %config.audit_log_path.display(), "Done");
    Ok(())
}

/// Audit every kind; feed favorites to recommendations; notify the
/// recipient about price changes and deletions; echo to console if enabled.
fn register_subscribers(dispatcher: &Dispatcher, config: &Config) {
    let audit = Arc::new(AuditLogSubscriber::new(&config.audit_log_path));
    for kind in EventKind::ALL {
        dispatcher.subscribe(kind, audit.clone());
    }

    if config.console {
        let console = Arc::new(ConsoleSubscriber::new());
        for kind in EventKind::ALL {
            dispatcher.subscribe(kind, console.clone());
        }
    }

    dispatcher.subscribe(
        EventKind::FavoriteAdded,
        Arc::new(RecommendationSubscriber::new(&config.recommendations_path)),
    );

    let notifier = Arc::new(NotificationSubscriber::new(
        config.notify_recipient.clone(),
        FileStrategy::new(&config.notifications_path),
    ));
    dispatcher.subscribe(EventKind::ProductPriceChanged, notifier.clone());
    dispatcher.subscribe(EventKind::ProductDeleted, notifier);
}
