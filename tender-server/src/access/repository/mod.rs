use {
    crate::kernel::entities::{
        Address,
        TenderId,
    },
    std::collections::{
        HashMap,
        HashSet,
    },
    tokio::sync::RwLock,
};

mod add_admin;
mod add_verified_vendor;
mod approve_vendors;
mod get_approved_vendors;
mod is_admin;
mod is_approved_vendor;
mod is_verified_vendor;
mod models;
mod remove_admin;
mod remove_approved_vendor;
mod remove_verified_vendor;
mod seed_allow_list;
mod warm_up;

pub use models::*;

/// Role state served to every authorization check. Warmed from the
/// database at startup; writes go through the database first.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub admins:           RwLock<HashSet<Address>>,
    pub verified_vendors: RwLock<HashSet<Address>>,
    pub approved_vendors: RwLock<HashMap<TenderId, HashSet<Address>>>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub db:              Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db:              Box::new(db),
        }
    }
}
