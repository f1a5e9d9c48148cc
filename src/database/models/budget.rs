use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted budget, one per email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub period: String,
    pub description: String,
    pub amount: f64,
    pub expense: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated budget write, keyed by `email`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub name: String,
    pub email: String,
    pub period: String,
    pub description: String,
    pub amount: f64,
    pub expense: f64,
}

impl NewBudget {
    /// Materialize a fresh record for insertion
    pub fn into_record(self) -> BudgetRecord {
        let now = Utc::now();
        BudgetRecord {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            period: self.period,
            description: self.description,
            amount: self.amount,
            expense: self.expense,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the mutable fields of an existing record in place
    pub fn apply_to(self, record: &mut BudgetRecord) {
        record.name = self.name;
        record.period = self.period;
        record.description = self.description;
        record.amount = self.amount;
        record.expense = self.expense;
        record.updated_at = Utc::now();
    }
}

/// Inbound budget form. Every field is optional at decode time so that a
/// missing field becomes a validation error instead of a decode rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub expenses: Option<f64>,
}

impl BudgetSubmission {
    /// Check that every field is present. Blank strings and numeric zero
    /// count as missing. On failure returns the names of all missing fields.
    pub fn validate(self) -> Result<NewBudget, Vec<&'static str>> {
        let mut missing = Vec::new();

        let name = present_text(self.name, "name", &mut missing);
        let email = present_text(self.email, "email", &mut missing);
        let period = present_text(self.period, "period", &mut missing);
        let amount = present_number(self.amount, "amount", &mut missing);
        let description = present_text(self.description, "description", &mut missing);
        let expense = present_number(self.expenses, "expenses", &mut missing);

        match (name, email, period, amount, description, expense) {
            (Some(name), Some(email), Some(period), Some(amount), Some(description), Some(expense)) => {
                Ok(NewBudget {
                    name,
                    email,
                    period,
                    description,
                    amount,
                    expense,
                })
            }
            _ => Err(missing),
        }
    }
}

fn present_text(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

fn present_number(value: Option<f64>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<f64> {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// Accept a JSON number, a numeric string (form posts), or an empty string
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {}", s))),
    }
}
