//! Account aggregate and its variants
//!
//! The account is the consistency boundary of the ledger: it owns its
//! movement log and its attached cards, and every balance mutation goes
//! through it. Two variants exist as a closed enum: checking accounts may
//! overdraw down to a fixed limit, while savings accounts carry an
//! investment sub-ledger with a fixed yield rate and no overdraft.

use crate::types::card::{CreditCard, DebitCard};
use crate::types::error::LedgerError;
use crate::types::movement::Movement;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Stable external account identifier (the owner's document number)
pub type AccountId = String;

/// Variant requested when opening an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountVariant {
    /// Checking account with overdraft
    Checking,
    /// Savings account with investment sub-ledger
    Savings,
}

impl AccountVariant {
    /// Parse a variant name; `None` for anything but "checking"/"savings"
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(AccountVariant::Checking),
            "savings" => Some(AccountVariant::Savings),
            _ => None,
        }
    }

    /// Lowercase label for output and messages
    pub fn label(&self) -> &'static str {
        match self {
            AccountVariant::Checking => "checking",
            AccountVariant::Savings => "savings",
        }
    }
}

/// Variant-specific account state
///
/// Withdrawal rules dispatch over this closed set; there is no account
/// hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountKind {
    /// Checking account: withdrawals may drive the balance negative down
    /// to `-overdraft_limit`
    Checking {
        /// Maximum negative balance (>= 0)
        overdraft_limit: Decimal,
    },
    /// Savings account: no overdraft; funds can be moved into an
    /// investment sub-ledger that earns a fixed yield on deposit
    Savings {
        /// Invested funds (>= 0), kept at 2 decimal places
        investment_balance: Decimal,
        /// Fixed yield applied when investing
        yield_rate: Decimal,
    },
}

impl AccountKind {
    /// Checking kind with the default overdraft limit of 500.00
    pub fn checking() -> Self {
        AccountKind::Checking {
            overdraft_limit: Decimal::new(500_00, 2),
        }
    }

    /// Savings kind with the fixed yield rate of 0.5%
    pub fn savings() -> Self {
        AccountKind::Savings {
            investment_balance: Decimal::ZERO,
            yield_rate: Decimal::new(5, 3),
        }
    }

    /// The kind for a requested opening variant
    pub fn for_variant(variant: AccountVariant) -> Self {
        match variant {
            AccountVariant::Checking => Self::checking(),
            AccountVariant::Savings => Self::savings(),
        }
    }
}

/// Account aggregate root
///
/// Owns its movement log and attached cards exclusively. All mutating
/// operations enforce the closed flag and the variant's balance rules;
/// once closed, the balance and history persist but no operation succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Stable external identifier
    pub id: AccountId,

    /// Unique 5-digit account number
    pub number: u32,

    /// Owner's name
    pub owner: String,

    /// Login credential; never leaves the aggregate
    credential: String,

    /// Current balance; may be negative for checking accounts within the
    /// overdraft limit
    pub balance: Decimal,

    /// Whether the account has been closed (terminal state)
    pub closed: bool,

    /// When the account was closed
    pub closed_at: Option<DateTime<Utc>>,

    /// Append-only movement log; append order is chronological order
    pub movements: Vec<Movement>,

    /// Attached credit card, at most one
    pub credit_card: Option<CreditCard>,

    /// Attached debit card, at most one
    pub debit_card: Option<DebitCard>,

    /// Variant-specific state
    pub kind: AccountKind,
}

impl Account {
    /// Open an account with an initial deposit
    ///
    /// A positive initial deposit records an "initial deposit" movement;
    /// zero records nothing.
    ///
    /// # Errors
    ///
    /// `InvalidAmount` if the initial deposit is negative.
    pub fn open(
        id: impl Into<AccountId>,
        number: u32,
        owner: impl Into<String>,
        credential: impl Into<String>,
        initial_deposit: Decimal,
        kind: AccountKind,
    ) -> Result<Self, LedgerError> {
        if initial_deposit < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(initial_deposit));
        }
        let mut account = Account {
            id: id.into(),
            number,
            owner: owner.into(),
            credential: credential.into(),
            balance: initial_deposit,
            closed: false,
            closed_at: None,
            movements: Vec::new(),
            credit_card: None,
            debit_card: None,
            kind,
        };
        if initial_deposit > Decimal::ZERO {
            account.record_movement("initial deposit", initial_deposit);
        }
        Ok(account)
    }

    /// Check a login credential against the stored one
    pub fn verify_credential(&self, credential: &str) -> bool {
        self.credential == credential
    }

    /// The opening variant of this account
    pub fn variant(&self) -> AccountVariant {
        match self.kind {
            AccountKind::Checking { .. } => AccountVariant::Checking,
            AccountKind::Savings { .. } => AccountVariant::Savings,
        }
    }

    /// Funds the variant allows to be withdrawn right now
    ///
    /// Balance plus overdraft headroom for checking accounts, plain
    /// balance for savings.
    pub fn available_for_withdrawal(&self) -> Decimal {
        match &self.kind {
            AccountKind::Checking { overdraft_limit } => self.balance + overdraft_limit,
            AccountKind::Savings { .. } => self.balance,
        }
    }

    /// Invested funds; zero for checking accounts
    pub fn investment_balance(&self) -> Decimal {
        match &self.kind {
            AccountKind::Savings {
                investment_balance, ..
            } => *investment_balance,
            AccountKind::Checking { .. } => Decimal::ZERO,
        }
    }

    /// Credit funds to the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `AccountClosed` if the account is closed
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.ensure_open()?;
        self.balance += amount;
        self.record_movement("deposit", amount);
        Ok(())
    }

    /// Debit funds from the account
    ///
    /// Checking accounts may overdraw down to `-overdraft_limit`; savings
    /// accounts cannot go negative.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`
    /// - `AccountClosed` if the account is closed
    /// - `InsufficientFunds` if `amount` exceeds the variant's available
    ///   funds (overdraft-aware for checking)
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.ensure_can_debit(amount)?;
        self.balance -= amount;
        self.record_movement("withdrawal", -amount);
        Ok(())
    }

    /// Debit funds with a caller-supplied movement description
    ///
    /// Used by card purchases, invoice payments, and bill payments. Same
    /// rule set as [`Account::withdraw`].
    pub fn debit_internal(
        &mut self,
        amount: Decimal,
        description: &str,
    ) -> Result<(), LedgerError> {
        self.ensure_can_debit(amount)?;
        self.balance -= amount;
        self.record_movement(description, -amount);
        Ok(())
    }

    /// Move funds into the savings investment sub-ledger
    ///
    /// Yield is earned immediately on deposit: the investment balance
    /// grows by `amount * yield_rate` on top of the amount, rounded
    /// half-up to 2 decimal places.
    ///
    /// # Errors
    ///
    /// - `UnsupportedAccountVariant` for checking accounts
    /// - `InvalidAmount`, `AccountClosed`, `InsufficientFunds` per the
    ///   base debit rules (no overdraft)
    pub fn invest(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.ensure_open()?;
        let yield_earned;
        {
            let AccountKind::Savings {
                investment_balance,
                yield_rate,
            } = &mut self.kind
            else {
                return Err(LedgerError::unsupported_variant(&self.id, "invest"));
            };
            if amount > self.balance {
                return Err(LedgerError::insufficient_funds(
                    &self.id,
                    self.balance,
                    amount,
                    false,
                ));
            }
            yield_earned = amount * *yield_rate;
            *investment_balance = round2(*investment_balance + amount + yield_earned);
            self.balance -= amount;
        }
        self.record_movement(
            format!("savings investment (yield {:.2})", yield_earned),
            -amount,
        );
        Ok(())
    }

    /// Move funds out of the savings investment sub-ledger
    ///
    /// # Errors
    ///
    /// - `UnsupportedAccountVariant` for checking accounts
    /// - `InvalidAmount` if `amount <= 0`
    /// - `AccountClosed` if the account is closed
    /// - `InvestmentExceeded` if `amount` exceeds the invested balance
    pub fn redeem(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.ensure_open()?;
        {
            let AccountKind::Savings {
                investment_balance, ..
            } = &mut self.kind
            else {
                return Err(LedgerError::unsupported_variant(&self.id, "redeem"));
            };
            if amount > *investment_balance {
                return Err(LedgerError::investment_exceeded(
                    &self.id,
                    *investment_balance,
                    amount,
                ));
            }
            *investment_balance = round2(*investment_balance - amount);
            self.balance += amount;
        }
        self.record_movement("savings redemption", amount);
        Ok(())
    }

    /// Pay the current credit-card invoice in full
    ///
    /// Debits the invoice total through [`Account::debit_internal`]
    /// (inheriting the variant's overdraft rule), then settles the invoice.
    /// On debit failure the invoice is untouched.
    ///
    /// # Errors
    ///
    /// - `CreditCardNotIssued` if the account has no credit card
    /// - `NoOutstandingInvoice` if the invoice total is zero
    /// - the debit errors of [`Account::debit_internal`]
    pub fn pay_invoice(&mut self) -> Result<(), LedgerError> {
        let total = match &self.credit_card {
            Some(card) => card.invoice.total,
            None => {
                return Err(LedgerError::CreditCardNotIssued {
                    account: self.id.clone(),
                })
            }
        };
        if total <= Decimal::ZERO {
            return Err(LedgerError::NoOutstandingInvoice {
                account: self.id.clone(),
            });
        }
        self.debit_internal(total, "credit card invoice payment")?;
        if let Some(card) = &mut self.credit_card {
            card.invoice.settle();
        }
        Ok(())
    }

    /// Mark the account closed (terminal, soft delete)
    ///
    /// Preconditions (zero balance, no outstanding invoice, no remaining
    /// investment) are the ledger service's responsibility. Appends a
    /// zero-amount closure movement.
    pub fn close(&mut self) {
        self.closed = true;
        self.closed_at = Some(Utc::now());
        self.record_movement("account closed", Decimal::ZERO);
    }

    /// Append a movement directly
    ///
    /// Used by the transfer orchestration for the directional audit
    /// entries recorded alongside the generic withdraw/deposit movements.
    pub fn record_movement(&mut self, kind: impl Into<String>, amount: Decimal) {
        self.movements.push(Movement::of(kind, amount));
    }

    fn ensure_open(&self) -> Result<(), LedgerError> {
        if self.closed {
            return Err(LedgerError::account_closed(&self.id));
        }
        Ok(())
    }

    fn ensure_can_debit(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }
        self.ensure_open()?;
        let available = self.available_for_withdrawal();
        if amount > available {
            let overdraft = matches!(self.kind, AccountKind::Checking { .. });
            return Err(LedgerError::insufficient_funds(
                &self.id, available, amount, overdraft,
            ));
        }
        Ok(())
    }
}

/// Round to 2 decimal places, half-up
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn checking(balance: Decimal) -> Account {
        Account::open("c1", 10001, "Ada", "s3cret", balance, AccountKind::checking()).unwrap()
    }

    fn savings(balance: Decimal) -> Account {
        Account::open("s1", 10002, "Grace", "s3cret", balance, AccountKind::savings()).unwrap()
    }

    #[rstest]
    #[case::checking("checking", Some(AccountVariant::Checking))]
    #[case::savings("savings", Some(AccountVariant::Savings))]
    #[case::mixed_case("Savings", Some(AccountVariant::Savings))]
    #[case::unknown("gold", None)]
    fn test_variant_parse(#[case] name: &str, #[case] expected: Option<AccountVariant>) {
        assert_eq!(AccountVariant::parse(name), expected);
    }

    #[test]
    fn test_open_with_positive_deposit_records_movement() {
        let account = checking(dec!(100));
        assert_eq!(account.balance, dec!(100));
        assert_eq!(account.movements.len(), 1);
        assert_eq!(account.movements[0].kind, "initial deposit");
        assert_eq!(account.movements[0].amount, dec!(100));
    }

    #[test]
    fn test_open_with_zero_deposit_records_nothing() {
        let account = checking(Decimal::ZERO);
        assert_eq!(account.balance, Decimal::ZERO);
        assert!(account.movements.is_empty());
    }

    #[test]
    fn test_open_with_negative_deposit_fails() {
        let result = Account::open("x", 1, "X", "p", dec!(-1), AccountKind::checking());
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_deposit_increases_balance_and_logs() {
        let mut account = checking(dec!(100));
        account.deposit(dec!(50.25)).unwrap();

        assert_eq!(account.balance, dec!(150.25));
        let last = account.movements.last().unwrap();
        assert_eq!(last.kind, "deposit");
        assert_eq!(last.amount, dec!(50.25));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(dec!(-10))]
    fn test_deposit_rejects_non_positive(#[case] amount: Decimal) {
        let mut account = checking(dec!(100));
        let result = account.deposit(amount);
        assert_eq!(result, Err(LedgerError::invalid_amount(amount)));
        assert_eq!(account.balance, dec!(100));
    }

    #[test]
    fn test_deposit_on_closed_account_fails() {
        let mut account = checking(Decimal::ZERO);
        account.close();

        let result = account.deposit(dec!(10));
        assert_eq!(result, Err(LedgerError::account_closed("c1")));
    }

    #[test]
    fn test_checking_withdraw_into_overdraft() {
        let mut account = checking(dec!(100));
        account.withdraw(dec!(550)).unwrap();
        assert_eq!(account.balance, dec!(-450));
    }

    #[test]
    fn test_checking_withdraw_exact_overdraft_boundary() {
        let mut account = checking(dec!(100));
        // balance + overdraft = 600: exactly reachable
        account.withdraw(dec!(600)).unwrap();
        assert_eq!(account.balance, dec!(-500));

        // one unit beyond the limit fails
        let result = account.withdraw(dec!(0.01));
        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                "c1",
                dec!(0),
                dec!(0.01),
                true
            ))
        );
        assert_eq!(account.balance, dec!(-500));
    }

    #[test]
    fn test_checking_withdraw_beyond_overdraft_fails_with_overdraft_message() {
        let mut account = checking(dec!(100));
        let error = account.withdraw(dec!(601)).unwrap_err();
        assert!(error.to_string().contains("overdraft limit exceeded"));
    }

    #[test]
    fn test_savings_withdraw_has_no_overdraft() {
        let mut account = savings(dec!(100));
        let result = account.withdraw(dec!(100.01));
        assert_eq!(
            result,
            Err(LedgerError::insufficient_funds(
                "s1",
                dec!(100),
                dec!(100.01),
                false
            ))
        );

        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[rstest]
    #[case::within_balance(dec!(100), dec!(500), dec!(80), true)]
    #[case::exact_limit(dec!(100), dec!(500), dec!(600), true)]
    #[case::beyond_limit(dec!(100), dec!(500), dec!(600.01), false)]
    #[case::deep_overdraft(dec!(-450), dec!(500), dec!(50), true)]
    #[case::exhausted(dec!(-500), dec!(500), dec!(0.01), false)]
    fn test_checking_withdraw_iff_within_balance_plus_limit(
        #[case] balance: Decimal,
        #[case] limit: Decimal,
        #[case] amount: Decimal,
        #[case] succeeds: bool,
    ) {
        let mut account = Account::open(
            "c1",
            1,
            "Ada",
            "p",
            Decimal::ZERO,
            AccountKind::Checking {
                overdraft_limit: limit,
            },
        )
        .unwrap();
        account.balance = balance;

        assert_eq!(account.withdraw(amount).is_ok(), succeeds);
    }

    #[test]
    fn test_withdraw_rule_holds_for_random_triples() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let balance = Decimal::new(rng.gen_range(-50_000..100_000), 2);
            let limit = Decimal::new(rng.gen_range(0..100_000), 2);
            let amount = Decimal::new(rng.gen_range(1..150_000), 2);

            let mut checking = Account::open(
                "c",
                1,
                "C",
                "p",
                Decimal::ZERO,
                AccountKind::Checking {
                    overdraft_limit: limit,
                },
            )
            .unwrap();
            checking.balance = balance;
            assert_eq!(
                checking.withdraw(amount).is_ok(),
                amount <= balance + limit,
                "checking balance={balance} limit={limit} amount={amount}"
            );

            if balance >= Decimal::ZERO {
                let mut savings =
                    Account::open("s", 2, "S", "p", balance, AccountKind::savings()).unwrap();
                assert_eq!(
                    savings.withdraw(amount).is_ok(),
                    amount <= balance,
                    "savings balance={balance} amount={amount}"
                );
            }
        }
    }

    #[test]
    fn test_debit_internal_uses_caller_description() {
        let mut account = checking(dec!(100));
        account.debit_internal(dec!(30), "bill payment 123").unwrap();

        assert_eq!(account.balance, dec!(70));
        let last = account.movements.last().unwrap();
        assert_eq!(last.kind, "bill payment 123");
        assert_eq!(last.amount, dec!(-30));
    }

    #[test]
    fn test_debit_internal_is_overdraft_aware_for_checking() {
        let mut account = checking(dec!(0));
        account.debit_internal(dec!(400), "invoice").unwrap();
        assert_eq!(account.balance, dec!(-400));
    }

    #[test]
    fn test_invest_applies_yield_and_rounds() {
        let mut account = savings(dec!(1000));
        account.invest(dec!(1000)).unwrap();

        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.investment_balance(), dec!(1005.00));
        let last = account.movements.last().unwrap();
        assert_eq!(last.amount, dec!(-1000));
        assert!(last.kind.contains("yield 5.00"));
    }

    #[test]
    fn test_invest_rounds_half_up() {
        // 1.25 * 0.005 = 0.00625 -> invested 1.25625 rounds to 1.26
        let mut account = savings(dec!(10));
        account.invest(dec!(1.25)).unwrap();
        assert_eq!(account.investment_balance(), dec!(1.26));
    }

    #[test]
    fn test_invest_requires_sufficient_balance() {
        let mut account = savings(dec!(100));
        let result = account.invest(dec!(100.01));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(account.investment_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_invest_on_checking_is_unsupported() {
        let mut account = checking(dec!(100));
        let result = account.invest(dec!(10));
        assert_eq!(result, Err(LedgerError::unsupported_variant("c1", "invest")));
    }

    #[test]
    fn test_redeem_moves_funds_back() {
        let mut account = savings(dec!(1000));
        account.invest(dec!(1000)).unwrap();
        account.redeem(dec!(500)).unwrap();

        assert_eq!(account.balance, dec!(500));
        assert_eq!(account.investment_balance(), dec!(505.00));
        let last = account.movements.last().unwrap();
        assert_eq!(last.kind, "savings redemption");
        assert_eq!(last.amount, dec!(500));
    }

    #[test]
    fn test_redeem_beyond_investment_fails() {
        let mut account = savings(dec!(100));
        account.invest(dec!(100)).unwrap();

        let result = account.redeem(dec!(200));
        assert_eq!(
            result,
            Err(LedgerError::investment_exceeded("s1", dec!(100.50), dec!(200)))
        );
    }

    #[test]
    fn test_redeem_on_checking_is_unsupported() {
        let mut account = checking(dec!(100));
        assert_eq!(
            account.redeem(dec!(10)),
            Err(LedgerError::unsupported_variant("c1", "redeem"))
        );
    }

    #[test]
    fn test_close_is_terminal_and_logged() {
        let mut account = checking(Decimal::ZERO);
        account.close();

        assert!(account.closed);
        assert!(account.closed_at.is_some());
        let last = account.movements.last().unwrap();
        assert_eq!(last.kind, "account closed");
        assert_eq!(last.amount, Decimal::ZERO);

        assert!(account.withdraw(dec!(1)).is_err());
        assert!(account.deposit(dec!(1)).is_err());
        assert!(account.debit_internal(dec!(1), "x").is_err());
    }

    #[test]
    fn test_pay_invoice_debits_then_settles() {
        let mut account = checking(dec!(1000));
        let mut card =
            CreditCard::new(dec!(500), "1111 2222 3333 4444".to_string(), "123".to_string());
        card.purchase("c1", "tv", dec!(300)).unwrap();
        account.credit_card = Some(card);

        account.pay_invoice().unwrap();

        assert_eq!(account.balance, dec!(700));
        let card = account.credit_card.as_ref().unwrap();
        assert_eq!(card.invoice.total, Decimal::ZERO);
        assert!(card.invoice.purchases.is_empty());
        let last = account.movements.last().unwrap();
        assert_eq!(last.kind, "credit card invoice payment");
    }

    #[test]
    fn test_pay_invoice_leaves_invoice_untouched_on_debit_failure() {
        let mut account = savings(dec!(100));
        let mut card =
            CreditCard::new(dec!(500), "1111 2222 3333 4444".to_string(), "123".to_string());
        card.purchase("s1", "tv", dec!(300)).unwrap();
        account.credit_card = Some(card);

        let result = account.pay_invoice();

        assert!(matches!(
            result,
            Err(LedgerError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance, dec!(100));
        let card = account.credit_card.as_ref().unwrap();
        assert_eq!(card.invoice.total, dec!(300));
        assert_eq!(card.invoice.purchases.len(), 1);
    }

    #[test]
    fn test_pay_invoice_with_zero_total_fails() {
        let mut account = checking(dec!(100));
        account.credit_card = Some(CreditCard::new(
            dec!(500),
            "1111 2222 3333 4444".to_string(),
            "123".to_string(),
        ));

        assert!(matches!(
            account.pay_invoice(),
            Err(LedgerError::NoOutstandingInvoice { .. })
        ));
    }

    #[test]
    fn test_pay_invoice_without_card_fails() {
        let mut account = checking(dec!(100));
        assert!(matches!(
            account.pay_invoice(),
            Err(LedgerError::CreditCardNotIssued { .. })
        ));
    }

    #[test]
    fn test_movements_replay_to_balance() {
        let mut account = checking(dec!(100));
        account.deposit(dec!(50)).unwrap();
        account.withdraw(dec!(30)).unwrap();
        account.debit_internal(dec!(20), "bill payment 42").unwrap();
        account.deposit(dec!(5.75)).unwrap();

        let replayed: Decimal = account.movements.iter().map(|m| m.amount).sum();
        assert_eq!(replayed, account.balance);
    }

    #[test]
    fn test_movements_replay_excluding_closure_marker() {
        let mut account = checking(dec!(100));
        account.withdraw(dec!(100)).unwrap();
        account.close();

        let replayed: Decimal = account.movements.iter().map(|m| m.amount).sum();
        assert_eq!(replayed, account.balance);
        assert_eq!(replayed, Decimal::ZERO);
    }

    #[test]
    fn test_verify_credential() {
        let account = checking(dec!(0));
        assert!(account.verify_credential("s3cret"));
        assert!(!account.verify_credential("wrong"));
    }
}
