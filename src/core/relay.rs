//! Asynchronous transfer relay
//!
//! Consumes transfer requests from a channel and applies them to the
//! ledger. Domain rejections are final: retrying an insufficient-funds
//! transfer yields the same rejection, so they are logged and dropped.
//! Infrastructure errors may be transient and abort the relay so the
//! transport layer can redeliver.

use crate::core::ledger::LedgerService;
use crate::types::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A transfer request received from the transport layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Source account identifier
    pub from: String,
    /// Destination account identifier
    pub to: String,
    /// Amount to transfer
    pub amount: Decimal,
}

/// Consume transfer requests until the channel closes
///
/// # Errors
///
/// Returns the first infrastructure error (`Io`, `Internal`); all domain
/// rejections are logged and skipped.
pub async fn run_relay(
    ledger: Arc<LedgerService>,
    mut requests: mpsc::Receiver<TransferRequest>,
) -> Result<(), LedgerError> {
    while let Some(request) = requests.recv().await {
        debug!(
            from = %request.from,
            to = %request.to,
            amount = %request.amount,
            "transfer request received"
        );
        match ledger.transfer(&request.from, &request.to, request.amount) {
            Ok(()) => {}
            Err(error) if error.is_domain() => {
                // Final rejection: redelivery cannot change the outcome
                warn!(
                    from = %request.from,
                    to = %request.to,
                    %error,
                    "transfer request rejected"
                );
            }
            Err(error) => return Err(error),
        }
    }
    Ok(())
}
