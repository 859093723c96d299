//! Leave ledger operations on top of an injected [`LeaveStore`].

pub mod processor;
pub mod queries;
pub mod responder;

use std::sync::Arc;

use crate::store::LeaveStore;

#[derive(Clone)]
pub struct LeaveService {
    store: Arc<dyn LeaveStore>,
}

impl LeaveService {
    pub fn new(store: Arc<dyn LeaveStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub(crate) fn seeded_service() -> LeaveService {
    LeaveService::new(Arc::new(crate::store::InMemoryStore::seeded()))
}
