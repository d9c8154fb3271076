//! HTTP DTOs for the demonstration login.

use serde::{Deserialize, Serialize};

use crate::domain::identity::{LoginStep, User};

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepResponse {
    pub step: LoginStep,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<User>,
}
