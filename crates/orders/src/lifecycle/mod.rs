//! System lifecycle and orchestration.
//!
//! Individual actors are simple; wiring them together is where the
//! complexity lives. [`OrderSystem`] is the conductor: it spawns the
//! catalog and store actors, injects their mailboxes into the service
//! layer, and coordinates graceful shutdown.
//!
//! Shutdown follows the channel-closure pattern: dropping the service
//! drops the last mailbox clones, each actor's `recv()` returns `None`,
//! the run loops exit, and `shutdown` awaits the tasks. No messages are
//! lost — everything already queued is processed first.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use orders_messaging::MessageActor;

use crate::catalog::{CatalogDirectory, ProductValidator};
use crate::model::ProductRecord;
use crate::repository::{OrderRepository, OrderStore};
use crate::service::OrderService;

/// Runtime knobs, constructed explicitly and injected at startup instead
/// of living in ambient global state.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Capacity of each actor's mpsc channel; senders wait when full.
    pub channel_capacity: usize,
    /// Window the validation client waits for a catalog reply. Mandatory:
    /// the remote call must never block a request unboundedly.
    pub validation_timeout: Duration,
    /// Window repository calls wait for the store actor.
    pub storage_timeout: Duration,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            validation_timeout: Duration::from_secs(5),
            storage_timeout: Duration::from_secs(5),
        }
    }
}

/// The running system: both actors spawned, the service wired.
pub struct OrderSystem {
    /// The order workflow, ready to serve requests.
    pub orders: OrderService,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system against an empty in-process catalog.
    pub fn start(config: SystemConfig) -> Self {
        Self::start_with_catalog(config, Vec::new())
    }

    /// Starts the system with the in-process catalog pre-seeded.
    ///
    /// Production wiring would hand the validation mailbox to a real
    /// transport bridge instead; everything downstream of the mailbox is
    /// identical.
    pub fn start_with_catalog(config: SystemConfig, products: Vec<ProductRecord>) -> Self {
        let (catalog_actor, catalog_mailbox) = MessageActor::new(
            CatalogDirectory::with_products(products),
            config.channel_capacity,
        );
        let (store_actor, store_mailbox) =
            MessageActor::new(OrderStore::default(), config.channel_capacity);

        let handles = vec![
            tokio::spawn(catalog_actor.run()),
            tokio::spawn(store_actor.run()),
        ];

        let validator = ProductValidator::new(catalog_mailbox, config.validation_timeout);
        let repo = OrderRepository::new(store_mailbox, config.storage_timeout);

        Self {
            orders: OrderService::new(validator, repo),
            handles,
        }
    }

    /// Gracefully shuts the system down.
    ///
    /// Drops the service (closing both mailboxes), then awaits every actor
    /// task. Callers still holding service clones keep the system alive
    /// until those clones are dropped too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {e:?}");
                return Err(format!("Actor task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
