//! CSV format handling for operation input and account output
//!
//! This module centralizes all CSV format concerns:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV rows to typed operation records
//! - Account state output serialization
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Account, AccountVariant, Operation, OperationRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// CSV record structure for deserialization
///
/// Matches the input format with columns:
/// op, account, counterparty, amount, owner, detail
///
/// Only `op` and `account` are present on every row; the remaining
/// columns are optional and their meaning depends on the operation
/// (`detail` carries the credential for open rows, the bill code for
/// pay_bill rows, and the purchase description for purchase rows).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub op: String,
    pub account: String,
    #[serde(default)]
    pub counterparty: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Convert a CsvRecord to an OperationRecord
///
/// Parses the operation name, parses the amount where the operation
/// requires one, and validates that the operation's other columns are
/// present.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<OperationRecord, String> {
    let account = csv_record.account.trim().to_string();
    if account.is_empty() {
        return Err(format!(
            "operation '{}' is missing an account",
            csv_record.op
        ));
    }

    let op_name = csv_record.op.to_lowercase();
    let amount = parse_amount(csv_record.amount.as_deref(), &op_name, &account)?;
    let required =
        |value: Option<String>, column: &str| -> Result<String, String> {
            match value {
                Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                _ => Err(format!(
                    "operation '{}' for account {} requires a {}",
                    op_name, account, column
                )),
            }
        };

    let op = match op_name.as_str() {
        op if op.starts_with("open_") => {
            // The op name carries the variant as its suffix
            let variant = op
                .strip_prefix("open_")
                .and_then(AccountVariant::parse)
                .ok_or_else(|| {
                    format!(
                        "invalid operation '{}' for account {}",
                        csv_record.op, account
                    )
                })?;
            Operation::Open {
                variant,
                owner: required(csv_record.owner, "owner")?,
                credential: required(csv_record.detail, "credential")?,
                initial_deposit: require_amount(amount, &op_name, &account)?,
            }
        }
        "deposit" => Operation::Deposit {
            amount: require_amount(amount, &op_name, &account)?,
        },
        "withdraw" => Operation::Withdraw {
            amount: require_amount(amount, &op_name, &account)?,
        },
        "transfer" => Operation::Transfer {
            to: required(csv_record.counterparty, "counterparty")?,
            amount: require_amount(amount, &op_name, &account)?,
        },
        "pay_bill" => Operation::PayBill {
            code: required(csv_record.detail, "bill code")?,
            amount: require_amount(amount, &op_name, &account)?,
        },
        "issue_credit_card" => Operation::IssueCreditCard {
            limit: require_amount(amount, &op_name, &account)?,
        },
        "issue_debit_card" => Operation::IssueDebitCard,
        "purchase_credit" => Operation::PurchaseCredit {
            description: required(csv_record.detail, "description")?,
            amount: require_amount(amount, &op_name, &account)?,
        },
        "purchase_debit" => Operation::PurchaseDebit {
            description: required(csv_record.detail, "description")?,
            amount: require_amount(amount, &op_name, &account)?,
        },
        "pay_invoice" => Operation::PayInvoice,
        "invest" => Operation::Invest {
            amount: require_amount(amount, &op_name, &account)?,
        },
        "redeem" => Operation::Redeem {
            amount: require_amount(amount, &op_name, &account)?,
        },
        "close" => Operation::Close,
        _ => {
            return Err(format!(
                "invalid operation '{}' for account {}",
                csv_record.op, account
            ))
        }
    };

    Ok(OperationRecord { account, op })
}

fn parse_amount(
    amount: Option<&str>,
    op_name: &str,
    account: &str,
) -> Result<Option<Decimal>, String> {
    match amount {
        Some(amount_str) if !amount_str.trim().is_empty() => {
            Decimal::from_str(amount_str.trim()).map(Some).map_err(|_| {
                format!(
                    "invalid amount '{}' in operation '{}' for account {}",
                    amount_str, op_name, account
                )
            })
        }
        _ => Ok(None),
    }
}

fn require_amount(
    amount: Option<Decimal>,
    op_name: &str,
    account: &str,
) -> Result<Decimal, String> {
    amount.ok_or_else(|| {
        format!(
            "operation '{}' for account {} requires an amount",
            op_name, account
        )
    })
}

/// Write account states to CSV format
///
/// Columns: id, number, variant, balance, investment, closed. Accounts
/// are sorted by account number for deterministic output; monetary values
/// use 2 decimal places.
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["id", "number", "variant", "balance", "investment", "closed"])
        .map_err(|e| format!("failed to write CSV header: {}", e))?;

    let mut sorted_accounts = accounts.to_vec();
    sorted_accounts.sort_by_key(|account| account.number);

    for account in sorted_accounts {
        writer
            .write_record(&[
                account.id.clone(),
                account.number.to_string(),
                account.variant().label().to_string(),
                format!("{:.2}", account.balance),
                format!("{:.2}", account.investment_balance()),
                account.closed.to_string(),
            ])
            .map_err(|e| format!("failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("failed to flush output: {}", e))?;

    Ok(())
}
