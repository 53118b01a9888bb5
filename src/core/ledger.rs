//! Ledger service: orchestration over the account and session stores
//!
//! Every public operation is a complete unit of work: it resolves the
//! accounts involved, takes their locks through the store, applies the
//! domain rules, and releases the locks before any I/O. Receipts are
//! best-effort and rendered from snapshots taken while the locks were
//! held; a renderer failure is logged and never fails the operation.

use crate::core::account_store::AccountStore;
use crate::core::number_gen::NumberGenerator;
use crate::core::session_store::SessionStore;
use crate::io::receipt::ReceiptRenderer;
use crate::types::{
    Account, AccountKind, AccountVariant, CreditCard, DebitCard, LedgerError, Movement, Operation,
    OperationRecord,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write as _;
use tracing::{info, warn};

/// Orchestrates all ledger operations
///
/// Holds the durable account store, the ephemeral lockout store, and an
/// optional receipt renderer.
pub struct LedgerService {
    accounts: AccountStore,
    sessions: SessionStore,
    numbers: NumberGenerator,
    receipts: Option<Box<dyn ReceiptRenderer + Send + Sync>>,
}

impl LedgerService {
    /// Create a service with no receipt renderer
    pub fn new() -> Self {
        LedgerService {
            accounts: AccountStore::new(),
            sessions: SessionStore::new(),
            numbers: NumberGenerator::new(),
            receipts: None,
        }
    }

    /// Create a service that renders receipts through `renderer`
    pub fn with_receipts(renderer: Box<dyn ReceiptRenderer + Send + Sync>) -> Self {
        LedgerService {
            receipts: Some(renderer),
            ..Self::new()
        }
    }

    /// Open an account and return its initial state
    ///
    /// # Errors
    ///
    /// - `InvalidAccountId` if the identifier is empty
    /// - `InvalidAmount` if the initial deposit is negative
    /// - `DuplicateAccount` if the identifier is already in use
    pub fn open_account(
        &self,
        id: &str,
        owner: &str,
        credential: &str,
        variant: AccountVariant,
        initial_deposit: Decimal,
    ) -> Result<Account, LedgerError> {
        if id.trim().is_empty() {
            return Err(LedgerError::InvalidAccountId {
                account: id.to_string(),
            });
        }
        let account = Account::open(
            id,
            self.numbers.account_number(),
            owner,
            credential,
            initial_deposit,
            AccountKind::for_variant(variant),
        )?;
        let snapshot = account.clone();
        self.accounts.insert(account)?;
        info!(
            account = id,
            number = snapshot.number,
            variant = variant.label(),
            "account opened"
        );
        Ok(snapshot)
    }

    /// Authenticate against an account and return its state
    ///
    /// Three consecutive failures lock the account for five minutes; while
    /// locked every attempt fails with `AccountLocked` without touching
    /// the failure count.
    pub fn login(&self, id: &str, credential: &str) -> Result<Account, LedgerError> {
        let snapshot = self.accounts.snapshot(id)?;
        if snapshot.closed {
            return Err(LedgerError::account_closed(id));
        }
        if let Some(until) = self.sessions.locked_until(id) {
            return Err(LedgerError::AccountLocked {
                account: id.to_string(),
                until,
            });
        }
        if snapshot.verify_credential(credential) {
            self.sessions.record_attempt(id, true);
            return Ok(snapshot);
        }
        if let Some(until) = self.sessions.record_attempt(id, false) {
            warn!(account = id, %until, "account locked after repeated login failures");
        }
        Err(LedgerError::InvalidCredential {
            account: id.to_string(),
        })
    }

    /// Clear any lockout state for an account
    pub fn unlock(&self, id: &str) -> Result<(), LedgerError> {
        if !self.accounts.exists(id) {
            return Err(LedgerError::account_not_found(id));
        }
        self.sessions.unlock(id);
        Ok(())
    }

    /// Deposit into an account; returns the new balance
    pub fn deposit(&self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            account.deposit(amount)?;
            Ok(account.balance)
        })
    }

    /// Withdraw from an account; returns the new balance
    pub fn withdraw(&self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            account.withdraw(amount)?;
            Ok(account.balance)
        })
    }

    /// Transfer funds between two accounts
    ///
    /// Both legs happen under the accounts' locks or not at all: the
    /// destination is validated before the source is debited, so a
    /// rejected transfer leaves both accounts untouched. Each side records
    /// the transfer twice, a generic withdrawal/deposit movement plus a
    /// directional audit entry naming the counterparty.
    pub fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<(), LedgerError> {
        for id in [from, to] {
            if !self.accounts.exists(id) {
                return Err(LedgerError::account_not_found(id));
            }
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        let sent = format!("transfer sent to {to}");
        let received = format!("transfer received from {from}");

        let (src_snapshot, dst_snapshot) = if from == to {
            // Both legs on the same aggregate: one lock, net zero
            self.accounts.with_account(from, |account| {
                account.withdraw(amount)?;
                account.deposit(amount)?;
                account.record_movement(sent.as_str(), -amount);
                account.record_movement(received.as_str(), amount);
                Ok((account.clone(), account.clone()))
            })?
        } else {
            self.accounts.with_pair(from, to, |src, dst| {
                // Destination validated before the source is debited; the
                // deposit cannot fail after that
                if dst.closed {
                    return Err(LedgerError::account_closed(&dst.id));
                }
                src.withdraw(amount)?;
                dst.deposit(amount)?;
                src.record_movement(sent.as_str(), -amount);
                dst.record_movement(received.as_str(), amount);
                Ok((src.clone(), dst.clone()))
            })?
        };

        info!(from, to, %amount, "transfer completed");
        if let Some(renderer) = &self.receipts {
            if let Err(error) = renderer.render_transfer(&src_snapshot, &dst_snapshot, amount) {
                warn!(from, to, %error, "transfer receipt could not be rendered");
            }
        }
        Ok(())
    }

    /// Pay a bill identified by its code; returns the new balance
    ///
    /// The movement records the bill code and, when known, its due date.
    pub fn pay_bill(
        &self,
        id: &str,
        code: &str,
        amount: Decimal,
        due: Option<NaiveDate>,
    ) -> Result<Decimal, LedgerError> {
        let mut description = format!("bill payment {code}");
        if let Some(due) = due {
            let _ = write!(description, " (due {due})");
        }
        let snapshot = self.accounts.with_account(id, |account| {
            account.debit_internal(amount, &description)?;
            Ok(account.clone())
        })?;

        info!(account = id, code, %amount, "bill paid");
        if let Some(renderer) = &self.receipts {
            if let Err(error) = renderer.render_payment(&snapshot, code, amount, due) {
                warn!(account = id, code, %error, "payment receipt could not be rendered");
            }
        }
        Ok(snapshot.balance)
    }

    /// Close an account (soft delete)
    ///
    /// Requires a settled account: zero balance, no outstanding credit
    /// card invoice, no remaining savings investment.
    pub fn close_account(&self, id: &str) -> Result<Account, LedgerError> {
        let snapshot = self.accounts.with_account(id, |account| {
            if account.closed {
                return Err(LedgerError::account_closed(&account.id));
            }
            if account.balance != Decimal::ZERO {
                return Err(LedgerError::CannotCloseWithBalance {
                    account: account.id.clone(),
                    balance: account.balance,
                });
            }
            if let Some(card) = &account.credit_card {
                if card.invoice.total > Decimal::ZERO {
                    return Err(LedgerError::CannotCloseWithInvoice {
                        account: account.id.clone(),
                        total: card.invoice.total,
                    });
                }
            }
            let invested = account.investment_balance();
            if invested > Decimal::ZERO {
                return Err(LedgerError::CannotCloseWithInvestment {
                    account: account.id.clone(),
                    invested,
                });
            }
            account.close();
            Ok(account.clone())
        })?;
        self.sessions.unlock(id);
        info!(account = id, "account closed");
        Ok(snapshot)
    }

    /// Issue a credit card on a checking account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `limit <= 0`
    /// - `UnsupportedAccountVariant` for savings accounts
    /// - `CardAlreadyIssued` if the account already has a credit card
    pub fn issue_credit_card(&self, id: &str, limit: Decimal) -> Result<CreditCard, LedgerError> {
        if limit <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(limit));
        }
        let number = self.numbers.card_number();
        let cvv = self.numbers.cvv();
        let card = self.accounts.with_account(id, move |account| {
            if account.closed {
                return Err(LedgerError::account_closed(&account.id));
            }
            if account.variant() == AccountVariant::Savings {
                return Err(LedgerError::unsupported_variant(
                    &account.id,
                    "issue credit card",
                ));
            }
            if account.credit_card.is_some() {
                return Err(LedgerError::CardAlreadyIssued {
                    account: account.id.clone(),
                    card: "credit".to_string(),
                });
            }
            let card = CreditCard::new(limit, number, cvv);
            account.credit_card = Some(card.clone());
            Ok(card)
        })?;
        info!(account = id, %limit, "credit card issued");
        Ok(card)
    }

    /// Issue a debit card
    ///
    /// # Errors
    ///
    /// `CardAlreadyIssued` if the account already has a debit card.
    pub fn issue_debit_card(&self, id: &str) -> Result<DebitCard, LedgerError> {
        let number = self.numbers.card_number();
        let cvv = self.numbers.cvv();
        let card = self.accounts.with_account(id, move |account| {
            if account.closed {
                return Err(LedgerError::account_closed(&account.id));
            }
            if account.debit_card.is_some() {
                return Err(LedgerError::CardAlreadyIssued {
                    account: account.id.clone(),
                    card: "debit".to_string(),
                });
            }
            let card = DebitCard::new(number, cvv);
            account.debit_card = Some(card.clone());
            Ok(card)
        })?;
        info!(account = id, "debit card issued");
        Ok(card)
    }

    /// Record a credit-card purchase; returns the invoice total
    ///
    /// The purchase goes on the current invoice and does not touch the
    /// account balance until the invoice is paid.
    pub fn purchase_credit(
        &self,
        id: &str,
        description: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            if account.closed {
                return Err(LedgerError::account_closed(&account.id));
            }
            let account_id = account.id.clone();
            let Some(card) = account.credit_card.as_mut() else {
                return Err(LedgerError::CreditCardNotIssued {
                    account: account_id,
                });
            };
            card.purchase(&account_id, description, amount)?;
            Ok(card.invoice.total)
        })
    }

    /// Record a debit-card purchase; returns the new balance
    pub fn purchase_debit(
        &self,
        id: &str,
        description: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            if account.debit_card.is_none() {
                return Err(LedgerError::DebitCardNotIssued {
                    account: account.id.clone(),
                });
            }
            account.debit_internal(amount, &format!("debit purchase: {description}"))?;
            Ok(account.balance)
        })
    }

    /// Pay the current credit-card invoice in full; returns the new balance
    pub fn pay_invoice(&self, id: &str) -> Result<Decimal, LedgerError> {
        let balance = self.accounts.with_account(id, |account| {
            account.pay_invoice()?;
            Ok(account.balance)
        })?;
        info!(account = id, "credit card invoice paid");
        Ok(balance)
    }

    /// Move funds into the savings investment sub-ledger; returns the new
    /// investment balance
    pub fn invest(&self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            account.invest(amount)?;
            Ok(account.investment_balance())
        })
    }

    /// Move funds out of the savings investment sub-ledger; returns the new
    /// investment balance
    pub fn redeem(&self, id: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.accounts.with_account(id, |account| {
            account.redeem(amount)?;
            Ok(account.investment_balance())
        })
    }

    /// The account's movement log, oldest first
    pub fn statement(&self, id: &str) -> Result<Vec<Movement>, LedgerError> {
        self.accounts.with_account(id, |account| Ok(account.movements.clone()))
    }

    /// Render the account's statement through the configured renderer
    ///
    /// Returns `None` when no renderer is configured.
    pub fn render_statement(
        &self,
        id: &str,
    ) -> Result<Option<std::path::PathBuf>, LedgerError> {
        let Some(renderer) = &self.receipts else {
            return Ok(None);
        };
        let snapshot = self.accounts.snapshot(id)?;
        renderer.render_statement(&snapshot).map(Some)
    }

    /// Apply one parsed input record
    ///
    /// Dispatches to the matching operation; the record's account is the
    /// target (the source, for transfers).
    pub fn apply(&self, record: OperationRecord) -> Result<(), LedgerError> {
        let account = record.account;
        match record.op {
            Operation::Open {
                variant,
                owner,
                credential,
                initial_deposit,
            } => {
                self.open_account(&account, &owner, &credential, variant, initial_deposit)?;
            }
            Operation::Deposit { amount } => {
                self.deposit(&account, amount)?;
            }
            Operation::Withdraw { amount } => {
                self.withdraw(&account, amount)?;
            }
            Operation::Transfer { to, amount } => self.transfer(&account, &to, amount)?,
            Operation::PayBill { code, amount } => {
                self.pay_bill(&account, &code, amount, None)?;
            }
            Operation::IssueCreditCard { limit } => {
                self.issue_credit_card(&account, limit)?;
            }
            Operation::IssueDebitCard => {
                self.issue_debit_card(&account)?;
            }
            Operation::PurchaseCredit {
                description,
                amount,
            } => {
                self.purchase_credit(&account, &description, amount)?;
            }
            Operation::PurchaseDebit {
                description,
                amount,
            } => {
                self.purchase_debit(&account, &description, amount)?;
            }
            Operation::PayInvoice => {
                self.pay_invoice(&account)?;
            }
            Operation::Invest { amount } => {
                self.invest(&account, amount)?;
            }
            Operation::Redeem { amount } => {
                self.redeem(&account, amount)?;
            }
            Operation::Close => {
                self.close_account(&account)?;
            }
        }
        Ok(())
    }

    /// Current state of one account
    pub fn snapshot(&self, id: &str) -> Result<Account, LedgerError> {
        self.accounts.snapshot(id)
    }

    /// Current state of all accounts, sorted by account number
    pub fn snapshot_all(&self) -> Vec<Account> {
        self.accounts.snapshot_all()
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
