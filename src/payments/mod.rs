use std::fmt;

use log::info;

/// Price of unlocking one lead's contact details, in cents.
pub const LEAD_PRICE_CENTS: i64 = 500;

/// Why a charge attempt did not go through.
///
/// These are the kinds a card list has to explain to the user; anything the
/// provider reports beyond them collapses into `Network`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeError {
    Declined,
    InsufficientFunds,
    Network(String),
}

impl fmt::Display for ChargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeError::Declined => write!(f, "your card was declined"),
            ChargeError::InsufficientFunds => write!(f, "insufficient funds"),
            ChargeError::Network(msg) => write!(f, "payment provider unreachable: {msg}"),
        }
    }
}

impl std::error::Error for ChargeError {}

#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    pub amount_cents: i64,
}

/// Port to the payment provider. The purchase flow only ever talks to this
/// trait; production wires in [`StubGateway`] until a real provider lands.
pub trait PaymentGateway: Send + Sync {
    fn charge(
        &self,
        user_id: i64,
        lead_id: i64,
        amount_cents: i64,
    ) -> Result<ChargeReceipt, ChargeError>;
}

/// Placeholder gateway: approves every charge and logs it.
#[derive(Debug, Default)]
pub struct StubGateway;

impl PaymentGateway for StubGateway {
    fn charge(
        &self,
        user_id: i64,
        lead_id: i64,
        amount_cents: i64,
    ) -> Result<ChargeReceipt, ChargeError> {
        info!("stub charge: user={user_id} lead={lead_id} amount_cents={amount_cents}");
        Ok(ChargeReceipt { amount_cents })
    }
}
