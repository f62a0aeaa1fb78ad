//! Transaction model
//!
//! A transaction is a single income or expense record. `NewTransaction` is the
//! same record before the store has assigned it an id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Largest amount a single transaction may carry: one trillion
///
/// Keeps every sum over a session's transactions well inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000);

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(TransactionValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Transaction data supplied by the user, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewTransaction {
    pub fn new(
        title: impl Into<String>,
        amount: Money,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            amount,
            kind,
            category: category.into(),
            date,
            note: None,
        }
    }

    /// Attach a note; blank notes are dropped
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = normalize_note(Some(note.into()));
        self
    }

    /// Check the boundary rules: non-empty title, positive amount
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(&self.title, self.amount)
    }

    /// Trim the title and drop a blank note
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.category = self.category.trim().to_string();
        self.note = normalize_note(self.note);
        self
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, never changes after creation
    pub id: TransactionId,

    /// Display text
    pub title: String,

    /// Always positive; the direction is carried by `kind`
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub category: String,

    pub date: NaiveDate,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Build a stored record from user data and an assigned id
    pub fn from_new(id: TransactionId, data: NewTransaction) -> Self {
        Self {
            id,
            title: data.title,
            amount: data.amount,
            kind: data.kind,
            category: data.category,
            date: data.date,
            note: data.note,
        }
    }

    /// The record without its id, e.g. to pre-fill an edit
    pub fn to_new(&self) -> NewTransaction {
        NewTransaction {
            title: self.title.clone(),
            amount: self.amount,
            kind: self.kind,
            category: self.category.clone(),
            date: self.date,
            note: self.note.clone(),
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(&self.title, self.amount)
    }

    /// Same normalization as [`NewTransaction::normalized`], keeping the id
    pub fn normalized(self) -> Self {
        let id = self.id;
        Self::from_new(id, self.to_new().normalized())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.title,
            self.signed_amount()
        )
    }
}

fn normalize_note(note: Option<String>) -> Option<String> {
    note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

fn validate_fields(title: &str, amount: Money) -> Result<(), TransactionValidationError> {
    if title.trim().is_empty() {
        return Err(TransactionValidationError::EmptyTitle);
    }
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyTitle,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    UnknownKind(String),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Title cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the limit of {}", amount, MAX_AMOUNT)
            }
            Self::UnknownKind(kind) => {
                write!(f, "Unknown transaction type '{}' (use income or expense)", kind)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn july(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    #[test]
    fn test_new_transaction_defaults() {
        let data = NewTransaction::new(
            "Groceries",
            Money::from_cents(15075),
            TransactionKind::Expense,
            "Groceries",
            july(5),
        );
        assert_eq!(data.note, None);
        assert!(data.validate().is_ok());
        assert_eq!(TransactionKind::default(), TransactionKind::Expense);
    }

    #[test]
    fn test_validation_rejects_empty_title() {
        let data = NewTransaction::new(
            "   ",
            Money::from_cents(100),
            TransactionKind::Expense,
            "Other",
            july(1),
        );
        assert_eq!(data.validate(), Err(TransactionValidationError::EmptyTitle));
    }

    #[test]
    fn test_validation_rejects_non_positive_amount() {
        let zero = NewTransaction::new("Refund", Money::zero(), TransactionKind::Income, "Other", july(1));
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let negative = NewTransaction::new(
            "Refund",
            Money::from_cents(-100),
            TransactionKind::Income,
            "Other",
            july(1),
        );
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_amount_above_limit() {
        let at_limit = NewTransaction::new("Windfall", MAX_AMOUNT, TransactionKind::Income, "Other", july(1));
        assert!(at_limit.validate().is_ok());

        let above = NewTransaction::new(
            "Windfall",
            MAX_AMOUNT + Money::from_cents(1),
            TransactionKind::Income,
            "Other",
            july(1),
        );
        assert!(matches!(
            above.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("EXPENSE".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(TransactionValidationError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_normalization() {
        let data = NewTransaction::new(
            "  Rent  ",
            Money::from_cents(120000),
            TransactionKind::Expense,
            " Rent",
            july(1),
        )
        .with_note("   ")
        .normalized();
        assert_eq!(data.title, "Rent");
        assert_eq!(data.category, "Rent");
        assert_eq!(data.note, None);
    }

    #[test]
    fn test_signed_amount() {
        let id = TransactionId::new();
        let income = Transaction::from_new(
            id,
            NewTransaction::new("Salary", Money::from_cents(500000), TransactionKind::Income, "Salary", july(1)),
        );
        assert!(income.is_income());
        assert_eq!(income.signed_amount(), Money::from_cents(500000));

        let mut expense = income.clone();
        expense.kind = TransactionKind::Expense;
        assert!(expense.is_expense());
        assert_eq!(expense.signed_amount(), Money::from_cents(-500000));
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let txn = Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new("Groceries", Money::from_cents(15075), TransactionKind::Expense, "Groceries", july(5))
                .with_note("Weekly shopping"),
        );

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2024-07-05");
        assert_eq!(json["note"], "Weekly shopping");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new("Rent", Money::from_cents(120000), TransactionKind::Expense, "Rent", july(1)),
        );
        assert_eq!(format!("{}", txn), "2024-07-01 Rent -$1200.00");
    }
}
