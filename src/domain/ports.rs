use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A payment behind its own exclusive lock.
///
/// Status assignment, transaction linkage and lazy nested-entity creation all
/// need `&mut Payment`, so every mutation goes through this lock.
pub type SharedPayment = Arc<Mutex<Payment>>;

#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Stores a new payment keyed by its merchant `client_id`.
    async fn insert(&self, payment: Payment) -> Result<SharedPayment>;
    async fn get(&self, client_id: &str) -> Result<Option<SharedPayment>>;
    /// Every stored payment, ordered by `client_id`.
    async fn all(&self) -> Result<Vec<SharedPayment>>;
}

pub type PaymentStoreBox = Box<dyn PaymentStore>;
