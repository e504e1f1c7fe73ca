use serde::{Deserialize, Serialize};

use crate::{auth::services::normalize_email, i18n::Msg};

/// Signup form. Every field defaults to empty so blanks become a validation flash, not a 422.
#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub role: String,
}

/// Signup data that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct ValidSignup {
    pub name: String,
    pub email: String,
    pub village: String,
    pub password: String,
}

impl SignupForm {
    /// Checks that every field is filled in; the error is the flash to show.
    pub fn validate(&self) -> Result<ValidSignup, Msg> {
        let required = [
            self.fullname.as_str(),
            self.email.as_str(),
            self.password.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
            self.role.as_str(),
        ];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(Msg::FillFields);
        }

        Ok(ValidSignup {
            name: self.fullname.trim().to_string(),
            email: normalize_email(&self.email),
            village: self.address.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct OtpRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct OtpResponse {
    pub message: &'static str,
}
