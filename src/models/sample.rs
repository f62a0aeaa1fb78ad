//! Sample transactions used to seed a demo session

use chrono::NaiveDate;

use super::money::Money;
use super::transaction::{NewTransaction, TransactionKind};

/// Six transactions from July 2024, oldest first
pub fn sample_transactions() -> Vec<NewTransaction> {
    let july = |day| NaiveDate::from_ymd_opt(2024, 7, day).unwrap_or_default();

    vec![
        NewTransaction::new(
            "Monthly Salary",
            Money::from_units_cents(5000, 0),
            TransactionKind::Income,
            "Salary",
            july(1),
        ),
        NewTransaction::new(
            "Groceries",
            Money::from_units_cents(150, 75),
            TransactionKind::Expense,
            "Groceries",
            july(5),
        )
        .with_note("Weekly shopping"),
        NewTransaction::new(
            "Rent",
            Money::from_units_cents(1200, 0),
            TransactionKind::Expense,
            "Rent",
            july(1),
        ),
        NewTransaction::new(
            "Internet Bill",
            Money::from_units_cents(60, 0),
            TransactionKind::Expense,
            "Utilities",
            july(10),
        ),
        NewTransaction::new(
            "Freelance Work",
            Money::from_units_cents(750, 0),
            TransactionKind::Income,
            "Investment",
            july(15),
        ),
        NewTransaction::new(
            "Dinner with friends",
            Money::from_units_cents(85, 0),
            TransactionKind::Expense,
            "Dining Out",
            july(18),
        ),
    ]
}
