//! CSV adapters for the replay CLI: gateway event logs in, payment summaries out.

pub mod event_reader;
pub mod payment_writer;
