use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStore, SharedPayment};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A thread-safe in-memory store for payments.
///
/// The map itself sits behind an `RwLock`; each payment additionally has its
/// own `Mutex`, so updates to different payments never contend.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<BTreeMap<String, SharedPayment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn insert(&self, payment: Payment) -> Result<SharedPayment> {
        let client_id = payment
            .client_id
            .clone()
            .ok_or(PaymentError::MissingField("client_id"))?;

        let mut payments = self.payments.write().await;
        if payments.contains_key(&client_id) {
            return Err(PaymentError::DuplicatePayment(client_id));
        }

        let shared = Arc::new(Mutex::new(payment));
        payments.insert(client_id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, client_id: &str) -> Result<Option<SharedPayment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(client_id).cloned())
    }

    async fn all(&self) -> Result<Vec<SharedPayment>> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }
}
