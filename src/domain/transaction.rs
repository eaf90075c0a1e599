use super::payment::{PaymentId, PaymentStatus};
use serde::Deserialize;
use std::fmt;

/// Identifier of a gateway call, assigned by the caller that issues it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The gateway operation a transaction performs.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionOperation {
    Preauth,
    Capture,
    Return,
}

impl TransactionOperation {
    /// Payment status reached once the gateway approves this operation.
    pub fn resulting_status(self) -> PaymentStatus {
        match self {
            Self::Preauth => PaymentStatus::Preauth,
            Self::Capture => PaymentStatus::Capture,
            Self::Return => PaymentStatus::Return,
        }
    }
}

impl fmt::Display for TransactionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resulting_status().as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum TransactionStatus {
    #[default]
    New,
    Processing,
    Approved,
    Declined,
    Error,
}

/// One discrete gateway call made on behalf of a payment.
///
/// A transaction only becomes linked to a payment through
/// [`Payment::add_payment_transaction`](super::payment::Payment::add_payment_transaction),
/// which owns the back-reference.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentTransaction {
    id: TransactionId,
    operation: TransactionOperation,
    status: TransactionStatus,
    payment: Option<PaymentId>,
    errors: Vec<String>,
}

impl PaymentTransaction {
    pub fn new(id: impl Into<TransactionId>, operation: TransactionOperation) -> Self {
        Self {
            id: id.into(),
            operation,
            status: TransactionStatus::New,
            payment: None,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn operation(&self) -> TransactionOperation {
        self.operation
    }

    pub fn status(&self) -> TransactionStatus {
        self.status
    }

    /// The payment this transaction belongs to, once linked.
    pub fn payment(&self) -> Option<PaymentId> {
        self.payment
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub(super) fn link_to(&mut self, payment: PaymentId) {
        self.payment = Some(payment);
    }

    /// Marks the call as sent to the gateway and awaiting its result.
    pub fn start_processing(&mut self) {
        self.status = TransactionStatus::Processing;
    }

    pub fn approve(&mut self) {
        self.status = TransactionStatus::Approved;
    }

    pub fn decline(&mut self) {
        self.status = TransactionStatus::Declined;
    }

    /// Records a gateway error and finishes the transaction.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.status = TransactionStatus::Error;
    }

    pub fn is_processing(&self) -> bool {
        self.status == TransactionStatus::Processing
    }

    pub fn is_approved(&self) -> bool {
        self.status == TransactionStatus::Approved
    }

    pub fn is_declined(&self) -> bool {
        self.status == TransactionStatus::Declined
    }

    /// True once the gateway has answered, whatever the outcome.
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status,
            TransactionStatus::Approved | TransactionStatus::Declined | TransactionStatus::Error
        )
    }
}
