//! The payment aggregate and the entities it owns.

pub mod payment;
pub mod payment_data;
pub mod ports;
pub mod transaction;
