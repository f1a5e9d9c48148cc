use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Number of samples in the income and expense series
pub const SERIES_LEN: usize = 7;

/// Upper bound (exclusive) of a generated income sample
pub const INCOME_CEILING: u32 = 1000;

/// Upper bound (exclusive) of a generated expense sample
pub const EXPENSE_CEILING: u32 = 500;

/// Dashboard summary for one email. The series are demo data drawn at write
/// time; the scalar figures are fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRecord {
    pub id: Uuid,
    pub email: String,
    pub income: Vec<i64>,
    pub expense_arr: Vec<i64>,
    pub amount_to_pay: i64,
    pub amount_to_receive: i64,
    pub current_balance: i64,
    pub over_due: i64,
    pub expenses: i64,
    pub followers: i64,
    pub projects: i64,
    pub records: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DashboardRecord {
    /// Build a record from explicit series. Each expense sample is capped at
    /// the income sample with the same index.
    pub fn placeholder(email: impl Into<String>, income: Vec<i64>, raw_expense: &[i64]) -> Self {
        let expense_arr = income
            .iter()
            .zip(raw_expense)
            .map(|(income, expense)| (*expense).min(*income))
            .collect();
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            income,
            expense_arr,
            amount_to_pay: 500,
            amount_to_receive: 500,
            current_balance: 500,
            over_due: 100,
            expenses: 200,
            followers: 300,
            projects: 400,
            records: 500,
            created_at: now,
            updated_at: now,
        }
    }

    /// Build a record with freshly drawn random series
    pub fn generate(email: impl Into<String>) -> Result<Self, getrandom::Error> {
        let income = random_series(INCOME_CEILING)?;
        let raw_expense = random_series(EXPENSE_CEILING)?;
        Ok(Self::placeholder(email, income, &raw_expense))
    }
}

/// Draw `SERIES_LEN` samples from `[0, ceiling)` using the OS RNG
fn random_series(ceiling: u32) -> Result<Vec<i64>, getrandom::Error> {
    let mut buf = [0u8; SERIES_LEN * 4];
    getrandom::fill(&mut buf)?;

    Ok(buf
        .chunks_exact(4)
        .map(|chunk| {
            let sample = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            i64::from(sample % ceiling)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expenses_are_capped_by_income() {
        let record = DashboardRecord::placeholder(
            "u@u.com",
            vec![100, 0, 400, 999, 10, 250, 300],
            &[200, 50, 100, 499, 10, 251, 0],
        );
        assert_eq!(record.expense_arr, vec![100, 0, 100, 499, 10, 250, 0]);
        assert_eq!(record.email, "u@u.com");
    }

    #[test]
    fn fixed_figures_are_populated() {
        let record = DashboardRecord::placeholder("u@u.com", vec![0; SERIES_LEN], &[0; SERIES_LEN]);
        assert_eq!(record.amount_to_pay, 500);
        assert_eq!(record.amount_to_receive, 500);
        assert_eq!(record.current_balance, 500);
        assert_eq!(record.over_due, 100);
        assert_eq!(record.expenses, 200);
        assert_eq!(record.followers, 300);
        assert_eq!(record.projects, 400);
        assert_eq!(record.records, 500);
    }

    #[test]
    fn generated_series_stay_in_range() {
        for _ in 0..50 {
            let record = DashboardRecord::generate("u@u.com").unwrap();
            assert_eq!(record.income.len(), SERIES_LEN);
            assert_eq!(record.expense_arr.len(), SERIES_LEN);
            for (income, expense) in record.income.iter().zip(&record.expense_arr) {
                assert!((0..INCOME_CEILING as i64).contains(income));
                assert!((0..EXPENSE_CEILING as i64).contains(expense));
                assert!(expense <= income);
            }
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = DashboardRecord::placeholder("u@u.com", vec![1; SERIES_LEN], &[1; SERIES_LEN]);
        let value = serde_json::to_value(&record).unwrap();
        for key in [
            "email",
            "income",
            "expenseArr",
            "amountToPay",
            "amountToReceive",
            "currentBalance",
            "overDue",
            "expenses",
            "followers",
            "projects",
            "records",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
