use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Account standing, stored as an integer column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_i32(self) -> i32 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
        }
    }
}

impl From<i32> for Role {
    fn from(value: i32) -> Self {
        match value {
            1 => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    /// Security answer used by the forgot-password flow
    #[serde(skip_serializing)]
    pub answer: String,
    pub role: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> Role {
        Role::from(self.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub address: String,
    pub answer: String,
    pub role: Role,
}

impl NewUser {
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            phone: self.phone,
            address: self.address,
            answer: self.answer,
            role: self.role.as_i32(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_column_value() {
        assert_eq!(Role::from(Role::Admin.as_i32()), Role::Admin);
        assert_eq!(Role::from(0), Role::User);
        assert_eq!(Role::from(7), Role::User);
    }

    #[test]
    fn secrets_are_not_serialized() {
        let user = NewUser {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            password_hash: "$2b$hash".into(),
            phone: "555".into(),
            address: "1 Loop".into(),
            answer: "blue".into(),
            role: Role::User,
        }
        .into_user();

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("answer").is_none());
        assert_eq!(value["email"], "ada@x.com");
    }
}
