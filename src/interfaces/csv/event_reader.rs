use crate::domain::transaction::TransactionOperation;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum GatewayEventType {
    /// A merchant opens a payment.
    Open,
    /// A gateway call is issued.
    Submit,
    Approve,
    Decline,
    Error,
    /// The gateway reports the payment state as raw text.
    Status,
}

/// One line of a gateway event log.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct GatewayEvent {
    pub r#type: GatewayEventType,
    /// Merchant `client_id` of the payment.
    pub payment: String,
    pub tx: Option<String>,
    pub operation: Option<TransactionOperation>,
    pub status: Option<String>,
    /// Parsed from the text as written, never through a float.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Reads gateway events from a CSV source.
///
/// Whitespace is trimmed and trailing empty columns may be omitted.
pub struct GatewayEventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> GatewayEventReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<GatewayEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
