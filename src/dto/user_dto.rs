use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::user::UserSummary;

pub const CREATE_FIELDS_REQUIRED: &str = "Name, email, and password are required";
pub const LOGIN_FIELDS_REQUIRED: &str = "name and password are required";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserPayload {
    pub fn into_new_user(self) -> Result<NewUser> {
        self.validate()
            .map_err(|_| Error::BadRequest(CREATE_FIELDS_REQUIRED.into()))?;
        match (self.name, self.email, self.password) {
            (Some(name), Some(email), Some(password)) => Ok(NewUser {
                name,
                email,
                password,
            }),
            _ => Err(Error::BadRequest(CREATE_FIELDS_REQUIRED.into())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl LoginPayload {
    pub fn into_credentials(self) -> Result<Credentials> {
        self.validate()
            .map_err(|_| Error::BadRequest(LOGIN_FIELDS_REQUIRED.into()))?;
        match (self.name, self.password) {
            (Some(name), Some(password)) => Ok(Credentials { name, password }),
            _ => Err(Error::BadRequest(LOGIN_FIELDS_REQUIRED.into())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedUserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
