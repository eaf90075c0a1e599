use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStoreBox, SharedPayment};
use crate::domain::transaction::{PaymentTransaction, TransactionId};
use crate::error::{PaymentError, Result};
use crate::interfaces::csv::event_reader::{GatewayEvent, GatewayEventType};
use crate::interfaces::csv::payment_writer::PaymentSummary;

/// Applies gateway events to the payments held in a store.
///
/// Each event locks only the payment it targets, so events for different
/// payments can be applied concurrently.
pub struct GatewayEventProcessor {
    store: PaymentStoreBox,
}

impl GatewayEventProcessor {
    pub fn new(store: PaymentStoreBox) -> Self {
        Self { store }
    }

    /// Applies one event.
    ///
    /// A rejected event leaves the payment as it was.
    pub async fn process_event(&self, event: GatewayEvent) -> Result<()> {
        match event.r#type {
            GatewayEventType::Open => {
                let mut payment = Payment::new();
                payment.client_id = Some(event.payment);
                payment.amount = event.amount;
                payment.currency = event.currency;
                self.store.insert(payment).await?;
            }
            GatewayEventType::Submit => {
                let operation = event
                    .operation
                    .ok_or(PaymentError::MissingField("operation"))?;
                let tx_id = transaction_id(&event)?;
                let shared = self.payment(&event.payment).await?;
                let mut payment = shared.lock().await;

                if payment.payment_transaction(&tx_id).is_some() {
                    return Err(PaymentError::DuplicateTransaction {
                        payment: event.payment,
                        transaction: tx_id.to_string(),
                    });
                }
                if payment.has_processing_transaction() {
                    return Err(PaymentError::TransactionInFlight(event.payment));
                }

                let mut tx = PaymentTransaction::new(tx_id.clone(), operation);
                tx.start_processing();
                payment.add_payment_transaction(tx);
                tracing::info!(
                    payment = %event.payment,
                    transaction = %tx_id,
                    %operation,
                    "gateway call issued"
                );
            }
            GatewayEventType::Approve => {
                let tx_id = transaction_id(&event)?;
                let shared = self.payment(&event.payment).await?;
                let mut payment = shared.lock().await;

                let tx = processing_transaction(&mut payment, &event.payment, &tx_id)?;
                let status = tx.operation().resulting_status();
                tx.approve();

                payment.set_status(status)?;
                if payment.paynet_id.is_none() {
                    payment.paynet_id = Some(tx_id.to_string());
                }
                tracing::info!(
                    payment = %event.payment,
                    transaction = %tx_id,
                    %status,
                    "gateway call approved"
                );
            }
            GatewayEventType::Decline => {
                let tx_id = transaction_id(&event)?;
                let shared = self.payment(&event.payment).await?;
                let mut payment = shared.lock().await;

                processing_transaction(&mut payment, &event.payment, &tx_id)?.decline();
                tracing::info!(
                    payment = %event.payment,
                    transaction = %tx_id,
                    "gateway call declined"
                );
            }
            GatewayEventType::Error => {
                let tx_id = transaction_id(&event)?;
                let message = event.status.unwrap_or_default();
                let shared = self.payment(&event.payment).await?;
                let mut payment = shared.lock().await;

                let tx = processing_transaction(&mut payment, &event.payment, &tx_id)?;
                tracing::warn!(
                    payment = %event.payment,
                    transaction = %tx_id,
                    error = %message,
                    "gateway call failed"
                );
                tx.fail(message);
            }
            GatewayEventType::Status => {
                let status = event.status.ok_or(PaymentError::MissingField("status"))?;
                let shared = self.payment(&event.payment).await?;
                shared.lock().await.set_status_from_str(&status)?;
            }
        }

        Ok(())
    }

    /// Consumes the processor and returns a summary of every payment.
    pub async fn into_results(self) -> Result<Vec<PaymentSummary>> {
        let mut summaries = Vec::new();
        for shared in self.store.all().await? {
            let payment = shared.lock().await;
            summaries.push(PaymentSummary::from(&*payment));
        }
        Ok(summaries)
    }

    async fn payment(&self, client_id: &str) -> Result<SharedPayment> {
        self.store
            .get(client_id)
            .await?
            .ok_or_else(|| PaymentError::UnknownPayment(client_id.to_string()))
    }
}

fn transaction_id(event: &GatewayEvent) -> Result<TransactionId> {
    event
        .tx
        .as_deref()
        .map(TransactionId::from)
        .ok_or(PaymentError::MissingField("tx"))
}

/// Looks up a transaction that is still awaiting its gateway result.
///
/// Resolving a finished transaction again would rewrite its outcome.
fn processing_transaction<'a>(
    payment: &'a mut Payment,
    client_id: &str,
    tx_id: &TransactionId,
) -> Result<&'a mut PaymentTransaction> {
    let tx = payment.payment_transaction_mut(tx_id).ok_or_else(|| {
        PaymentError::UnknownTransaction {
            payment: client_id.to_string(),
            transaction: tx_id.to_string(),
        }
    })?;

    if !tx.is_processing() {
        return Err(PaymentError::TransactionNotProcessing {
            payment: client_id.to_string(),
            transaction: tx_id.to_string(),
        });
    }
    Ok(tx)
}
