//! User domain entity and related types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User domain entity.
///
/// Immutable once persisted; there is no update or delete use case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub base_salary: Decimal,
}

impl User {
    /// Build a persistable user from a validated draft, assigning a fresh
    /// random id.
    ///
    /// Field values are copied verbatim: validation trims only for its
    /// blank-checks and never alters what gets stored.
    pub fn from_draft(draft: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: draft.first_name.unwrap_or_default(),
            last_name: draft.last_name.unwrap_or_default(),
            birth_date: draft.birth_date,
            address: draft.address,
            phone: draft.phone,
            email: draft.email.unwrap_or_default(),
            base_salary: draft.base_salary.unwrap_or_default(),
        }
    }
}

/// Unvalidated registration draft supplied by a caller.
///
/// Every field is optional so the validator can tell a missing field from
/// a blank one; required-ness is a validation rule, not a deserialization
/// rule.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    /// Given name
    #[schema(example = "Ana")]
    pub first_name: Option<String>,
    /// Family name
    #[schema(example = "Gomez")]
    pub last_name: Option<String>,
    /// ISO-8601 calendar date, accepted as given (no range rule)
    #[schema(example = "1990-01-01")]
    pub birth_date: Option<NaiveDate>,
    /// Free-form address
    #[schema(example = "Street 1")]
    pub address: Option<String>,
    /// Free-form phone number
    #[schema(example = "123")]
    pub phone: Option<String>,
    /// Email address, must look like `local-part@domain`
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    /// Base salary, must lie in [0, 15,000,000]
    #[schema(example = 5000000)]
    pub base_salary: Option<Decimal>,
}

/// User response (shape returned by the registration endpoint)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier, generated at registration
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Gomez")]
    pub last_name: String,
    #[schema(example = "1990-01-01")]
    pub birth_date: Option<NaiveDate>,
    #[schema(example = "Street 1")]
    pub address: Option<String>,
    #[schema(example = "123")]
    pub phone: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[schema(example = 5000000)]
    pub base_salary: Decimal,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            birth_date: user.birth_date,
            address: user.address,
            phone: user.phone,
            email: user.email,
            base_salary: user.base_salary,
        }
    }
}
