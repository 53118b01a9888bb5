//! Core ledger logic: stores, orchestration, and the transfer relay

pub mod account_store;
pub mod ledger;
pub mod number_gen;
pub mod relay;
pub mod session_store;

pub use account_store::AccountStore;
pub use ledger::LedgerService;
pub use number_gen::NumberGenerator;
pub use relay::{run_relay, TransferRequest};
pub use session_store::SessionStore;
