use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Gender values accepted on profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Canonical form of an email address, used for storage, lookup and
/// uniqueness. Addresses differing only in case or surrounding
/// whitespace refer to the same account.
pub fn canonical_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Account entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, generated at creation
    pub id: Uuid,
    /// Display name
    pub full_name: String,
    /// Email in canonical form (unique, immutable after creation)
    pub email: String,
    /// Argon2 password hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Postal address
    pub address: String,
    /// Profile gender
    pub gender: Gender,
    /// Contact phone number
    pub phone_number: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account (password must already be hashed by the
    /// service layer). The email is stored in canonical form.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        full_name: String,
        email: String,
        password_hash: String,
        address: String,
        gender: Gender,
        phone_number: String,
        birth_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            full_name,
            email: canonical_email(&email),
            password_hash,
            address,
            gender,
            phone_number,
            birth_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply profile updates (gender already parsed and validated by
    /// the service layer). The email and password hash are never
    /// touched here.
    pub fn apply_update(&mut self, update: UpdateProfileRequest, gender: Option<Gender>) {
        if let Some(full_name) = update.full_name {
            self.full_name = full_name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = birth_date;
        }
        self.updated_at = Utc::now();
    }
}

/// Profile projection returned to the account owner (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub gender: Gender,
    pub phone_number: String,
    pub birth_date: NaiveDate,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            address: user.address,
            gender: user.gender,
            phone_number: user.phone_number,
            birth_date: user.birth_date,
        }
    }
}

/// DTO for account registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
    #[validate(length(max = 255))]
    pub address: String,
    pub gender: String,
    #[validate(length(max = 32))]
    pub phone_number: String,
    pub birth_date: NaiveDate,
}

/// DTO for login
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    pub password: String,
}

/// DTO for profile updates; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    pub gender: Option<String>,
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Response after successful registration/login
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: ProfileResponse,
    pub token: String,
}
