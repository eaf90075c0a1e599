//! A payment aggregate for gateway client libraries.
//!
//! [`domain::payment::Payment`] tracks the gateway-side status of one payment,
//! owns the customer and card data sent with it, and keeps the ordered list of
//! [`domain::transaction::PaymentTransaction`]s issued for it. The remaining
//! layers are a reference gateway collaborator that replays event logs.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use domain::payment::{Payment, PaymentId, PaymentStatus};
pub use domain::payment_data::{BillingAddress, CreditCard, Customer, RecurrentCard};
pub use domain::transaction::{
    PaymentTransaction, TransactionId, TransactionOperation, TransactionStatus,
};
pub use error::{PaymentError, Result};
