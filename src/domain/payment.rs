use super::payment_data::{BillingAddress, CreditCard, Customer, RecurrentCard};
use super::transaction::{PaymentTransaction, TransactionId};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// In-process identity of a [`Payment`], the target of transaction back-references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaymentId(Uuid);

impl PaymentId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Gateway-side state of a payment.
///
/// `New` is the state of a payment nothing has been assigned to yet. It cannot
/// be assigned; see [`Payment::set_status`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PaymentStatus {
    #[default]
    New,
    /// Under preauth, or preauth finished.
    Preauth,
    /// Under capture, or capture finished.
    Capture,
    /// Under return, or return finished.
    Return,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Preauth => "preauth",
            Self::Capture => "capture",
            Self::Return => "return",
        }
    }

    fn is_assignable(self) -> bool {
        !matches!(self, Self::New)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(Self::New),
            "preauth" => Ok(Self::Preauth),
            "capture" => Ok(Self::Capture),
            "return" => Ok(Self::Return),
            other => Err(PaymentError::InvalidStatus(other.to_string())),
        }
    }
}

/// A single payment flow against the gateway and every call made for it.
///
/// Nested party and card data is created empty on first access, so callers can
/// always populate it in place. Transactions are linked only through
/// [`Payment::add_payment_transaction`].
#[derive(Debug)]
pub struct Payment {
    id: PaymentId,
    /// Unique payment identifier assigned by the merchant.
    pub client_id: Option<String>,
    /// Unique payment identifier assigned by the gateway.
    pub paynet_id: Option<String>,
    pub description: Option<String>,
    /// Where the funds go.
    pub destination: Option<String>,
    /// Amount in currency units, not cents.
    pub amount: Option<Decimal>,
    /// Three-letter ISO 4217 code.
    pub currency: Option<String>,
    pub comment: Option<String>,
    status: PaymentStatus,
    customer: Option<Customer>,
    billing_address: Option<BillingAddress>,
    credit_card: Option<CreditCard>,
    recurrent_card_from: Option<RecurrentCard>,
    recurrent_card_to: Option<RecurrentCard>,
    payment_transactions: Vec<PaymentTransaction>,
}

impl Default for Payment {
    fn default() -> Self {
        Self::new()
    }
}

impl Payment {
    pub fn new() -> Self {
        Self {
            id: PaymentId::generate(),
            client_id: None,
            paynet_id: None,
            description: None,
            destination: None,
            amount: None,
            currency: None,
            comment: None,
            status: PaymentStatus::New,
            customer: None,
            billing_address: None,
            credit_card: None,
            recurrent_card_from: None,
            recurrent_card_to: None,
            payment_transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Amount in whole cents, truncated toward zero.
    ///
    /// `None` when no amount is set or the value does not fit an `i64`.
    pub fn amount_in_cents(&self) -> Option<i64> {
        self.amount
            .and_then(|amount| amount.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|cents| cents.trunc().to_i64())
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Replaces the status with `status`.
    ///
    /// Only `Preauth`, `Capture` and `Return` are accepted, regardless of the
    /// current status. On error the status is left untouched.
    pub fn set_status(&mut self, status: PaymentStatus) -> Result<()> {
        if !status.is_assignable() {
            tracing::warn!(payment = %self.id, status = %status, "rejected payment status");
            return Err(PaymentError::InvalidStatus(status.to_string()));
        }

        tracing::debug!(
            payment = %self.id,
            from = %self.status,
            to = %status,
            "payment status changed"
        );
        self.status = status;
        Ok(())
    }

    /// Parses raw gateway text and assigns it with [`Payment::set_status`].
    pub fn set_status_from_str(&mut self, status: &str) -> Result<()> {
        match status.parse::<PaymentStatus>() {
            Ok(parsed) => self.set_status(parsed),
            Err(e) => {
                tracing::warn!(payment = %self.id, status, "rejected payment status");
                Err(e)
            }
        }
    }

    pub fn is_new(&self) -> bool {
        self.status == PaymentStatus::New
    }

    /// True once funds are reserved or collected.
    pub fn is_paid(&self) -> bool {
        matches!(self.status, PaymentStatus::Preauth | PaymentStatus::Capture)
    }

    /// True if funds were returned to the customer.
    pub fn is_returned(&self) -> bool {
        self.status == PaymentStatus::Return
    }

    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    pub fn customer(&mut self) -> &mut Customer {
        self.customer.get_or_insert_with(Customer::default)
    }

    pub fn customer_if_set(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn set_billing_address(&mut self, billing_address: BillingAddress) {
        self.billing_address = Some(billing_address);
    }

    pub fn billing_address(&mut self) -> &mut BillingAddress {
        self.billing_address.get_or_insert_with(BillingAddress::default)
    }

    pub fn billing_address_if_set(&self) -> Option<&BillingAddress> {
        self.billing_address.as_ref()
    }

    pub fn set_credit_card(&mut self, credit_card: CreditCard) {
        self.credit_card = Some(credit_card);
    }

    pub fn credit_card(&mut self) -> &mut CreditCard {
        self.credit_card.get_or_insert_with(CreditCard::default)
    }

    pub fn credit_card_if_set(&self) -> Option<&CreditCard> {
        self.credit_card.as_ref()
    }

    /// Source card of a card-to-card transfer.
    pub fn set_recurrent_card_from(&mut self, recurrent_card: RecurrentCard) {
        self.recurrent_card_from = Some(recurrent_card);
    }

    pub fn recurrent_card_from(&mut self) -> &mut RecurrentCard {
        self.recurrent_card_from.get_or_insert_with(RecurrentCard::default)
    }

    pub fn recurrent_card_from_if_set(&self) -> Option<&RecurrentCard> {
        self.recurrent_card_from.as_ref()
    }

    /// Destination card of a card-to-card transfer.
    pub fn set_recurrent_card_to(&mut self, recurrent_card: RecurrentCard) {
        self.recurrent_card_to = Some(recurrent_card);
    }

    pub fn recurrent_card_to(&mut self) -> &mut RecurrentCard {
        self.recurrent_card_to.get_or_insert_with(RecurrentCard::default)
    }

    pub fn recurrent_card_to_if_set(&self) -> Option<&RecurrentCard> {
        self.recurrent_card_to.as_ref()
    }

    /// Transactions in the order they were added.
    pub fn payment_transactions(&self) -> &[PaymentTransaction] {
        &self.payment_transactions
    }

    /// Adds `tx` unless a transaction with the same id is already held, and
    /// makes sure the held entry points back to this payment.
    ///
    /// Returns the stored entry. A duplicate `tx` is dropped in favour of the
    /// entry added first.
    pub fn add_payment_transaction(&mut self, tx: PaymentTransaction) -> &mut PaymentTransaction {
        let index = match self.position_of(tx.id()) {
            Some(index) => index,
            None => {
                tracing::debug!(
                    payment = %self.id,
                    transaction = %tx.id(),
                    "payment transaction added"
                );
                self.payment_transactions.push(tx);
                self.payment_transactions.len() - 1
            }
        };

        let id = self.id;
        let stored = &mut self.payment_transactions[index];
        if stored.payment() != Some(id) {
            stored.link_to(id);
        }
        stored
    }

    pub fn has_payment_transaction(&self, tx: &PaymentTransaction) -> bool {
        self.position_of(tx.id()).is_some()
    }

    pub fn payment_transaction(&self, id: &TransactionId) -> Option<&PaymentTransaction> {
        self.payment_transactions.iter().find(|tx| tx.id() == id)
    }

    pub fn payment_transaction_mut(
        &mut self,
        id: &TransactionId,
    ) -> Option<&mut PaymentTransaction> {
        self.payment_transactions.iter_mut().find(|tx| tx.id() == id)
    }

    /// True if exactly one transaction is currently being processed.
    ///
    /// Zero, or two and more, in-flight transactions both report `false`.
    pub fn has_processing_transaction(&self) -> bool {
        self.payment_transactions
            .iter()
            .filter(|tx| tx.is_processing())
            .take(2)
            .count()
            == 1
    }

    fn position_of(&self, id: &TransactionId) -> Option<usize> {
        self.payment_transactions.iter().position(|tx| tx.id() == id)
    }
}
