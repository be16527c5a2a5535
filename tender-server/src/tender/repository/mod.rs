use {
    super::entities,
    crate::kernel::entities::TenderId,
    std::collections::{
        BTreeMap,
        HashMap,
    },
    tokio::sync::{
        Mutex,
        RwLock,
    },
};

mod add_bid;
mod add_tender;
mod cancel_tender;
mod conclude_tender;
mod get_all_tender_bids;
mod get_bid;
mod get_or_create_tender_lock;
mod get_tender;
mod get_tender_bids;
mod get_tenders;
mod models;
mod remove_tender_lock;
mod warm_up;

pub use models::*;

/// Serves every read and precondition check. Warmed from the database at
/// startup; all writes go through the database first.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub tenders:        RwLock<BTreeMap<TenderId, entities::Tender>>,
    pub bids:           RwLock<HashMap<TenderId, Vec<entities::Bid>>>,
    pub tender_lock:    Mutex<HashMap<TenderId, entities::TenderLock>>,
    pub next_tender_id: Mutex<TenderId>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub db:              Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore {
                next_tender_id: Mutex::new(1),
                ..Default::default()
            },
            db:              Box::new(db),
        }
    }
}
