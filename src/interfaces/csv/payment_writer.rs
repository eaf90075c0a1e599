use crate::domain::payment::Payment;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Flat view of a payment as reported by the replay CLI.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentSummary {
    pub payment: String,
    pub status: String,
    pub amount: Option<Decimal>,
    pub amount_in_cents: Option<i64>,
    pub currency: Option<String>,
    pub transactions: usize,
    pub processing: bool,
    pub paid: bool,
    pub returned: bool,
}

impl From<&Payment> for PaymentSummary {
    fn from(payment: &Payment) -> Self {
        Self {
            payment: payment.client_id.clone().unwrap_or_default(),
            status: payment.status().to_string(),
            amount: payment.amount,
            amount_in_cents: payment.amount_in_cents(),
            currency: payment.currency.clone(),
            transactions: payment.payment_transactions().len(),
            processing: payment.has_processing_transaction(),
            paid: payment.is_paid(),
            returned: payment.is_returned(),
        }
    }
}

/// Writes payment summaries to a CSV sink.
pub struct PaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_summaries(&mut self, summaries: &[PaymentSummary]) -> Result<()> {
        for summary in summaries {
            self.writer.serialize(summary)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes payment summaries as a pretty-printed JSON array.
pub fn write_summaries_json<W: Write>(sink: W, summaries: &[PaymentSummary]) -> Result<()> {
    serde_json::to_writer_pretty(sink, summaries)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentStatus;
    use crate::domain::transaction::{PaymentTransaction, TransactionOperation};
    use rust_decimal_macros::dec;

    fn captured_payment() -> Payment {
        let mut payment = Payment::new();
        payment.client_id = Some("order-1".to_string());
        payment.amount = Some(dec!(19.999));
        payment.currency = Some("EUR".to_string());
        payment.set_status(PaymentStatus::Capture).unwrap();
        payment.add_payment_transaction(PaymentTransaction::new(
            "t1",
            TransactionOperation::Capture,
        ));
        payment
    }

    #[test]
    fn test_summary_from_payment() {
        let summary = PaymentSummary::from(&captured_payment());
        assert_eq!(summary.payment, "order-1");
        assert_eq!(summary.status, "capture");
        assert_eq!(summary.amount_in_cents, Some(1999));
        assert_eq!(summary.transactions, 1);
        assert!(!summary.processing);
        assert!(summary.paid);
        assert!(!summary.returned);
    }

    #[test]
    fn test_write_csv() {
        let mut unpriced = Payment::new();
        unpriced.client_id = Some("order-2".to_string());
        let summaries = vec![
            PaymentSummary::from(&captured_payment()),
            PaymentSummary::from(&unpriced),
        ];

        let mut buffer = Vec::new();
        PaymentWriter::new(&mut buffer)
            .write_summaries(&summaries)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some(
                "payment,status,amount,amount_in_cents,currency,transactions,processing,paid,returned"
            )
        );
        assert_eq!(
            lines.next(),
            Some("order-1,capture,19.999,1999,EUR,1,false,true,false")
        );
        assert_eq!(lines.next(), Some("order-2,new,,,,0,false,false,false"));
    }

    #[test]
    fn test_write_json() {
        let summaries = vec![PaymentSummary::from(&captured_payment())];
        let mut buffer = Vec::new();
        write_summaries_json(&mut buffer, &summaries).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["payment"], "order-1");
        assert_eq!(value[0]["amount_in_cents"], 1999);
        assert_eq!(value[0]["paid"], true);
    }
}
