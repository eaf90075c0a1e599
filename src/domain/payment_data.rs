//! Party and instrument data owned by a [`Payment`](super::payment::Payment).
//!
//! These are plain value containers. The aggregate never inspects them; it only
//! guarantees that each one exists once it has been read.

/// The payer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub ip_address: Option<String>,
    /// Date of birth as sent to the gateway (`MMDDYY`).
    pub birthday: Option<String>,
    /// Last four digits of the customer's social security number.
    pub ssn: Option<String>,
    pub phone: Option<String>,
    pub cell_phone: Option<String>,
}

/// Billing address of the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingAddress {
    /// Two-letter ISO country code.
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub first_line: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub cell_phone: Option<String>,
}

/// Card data entered for a single payment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditCard {
    pub card_printed_name: Option<String>,
    pub credit_card_number: Option<String>,
    pub expire_month: Option<String>,
    pub expire_year: Option<String>,
    pub cvv2: Option<String>,
}

/// A card registered at the gateway for repeated use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecurrentCard {
    /// Card reference assigned by the gateway.
    pub paynet_id: Option<String>,
    pub card_printed_name: Option<String>,
    pub credit_card_number: Option<String>,
    pub expire_month: Option<String>,
    pub expire_year: Option<String>,
    pub cvv2: Option<String>,
    pub bin: Option<String>,
    pub last_four_digits: Option<String>,
}
