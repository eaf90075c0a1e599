//! Application layer driving payments from gateway outcomes.
//!
//! `GatewayEventProcessor` plays the part of the gateway client: it opens
//! payments, issues transactions and resolves them as results arrive. All
//! invariants are enforced by the aggregate; this layer only sequences calls.

pub mod engine;
