//! Application state management.
//!
//! The catalog lives here for the lifetime of the process and is handed to
//! the routers explicitly; nothing is global.

use domain_email_check::{EmailCheckService, HickoryMxResolver};
use domain_items::{InMemoryItemRepository, ItemService};

/// Shared application state. Clones share the same catalog and resolver.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Item catalog, seeded with five products at startup
    pub items: ItemService<InMemoryItemRepository>,
    /// Format and MX checks
    pub email: EmailCheckService<HickoryMxResolver>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let items = ItemService::new(InMemoryItemRepository::seeded());
        let email = EmailCheckService::new(HickoryMxResolver::new(&config.dns));

        Self {
            config,
            items,
            email,
        }
    }
}
