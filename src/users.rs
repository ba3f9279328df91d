//! User and account operations

use serde::Serialize;

use crate::error::Error;
use crate::fetch::Http;
use crate::models::User;

/// Client for the `/users` resource
pub struct UsersClient {
    http: Http,
}

/// Payload for creating a user
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Email address
    pub email: String,

    /// Initial password
    pub password: String,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Payload for updating a user's profile
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Avatar image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Payload for a password change
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// The user's current password
    pub current_password: String,

    /// The replacement password
    pub new_password: String,
}

impl UsersClient {
    pub(crate) fn new(http: Http) -> Self {
        Self { http }
    }

    /// Fetch all users
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        self.http.get("/users").execute().await
    }

    /// Fetch a single user by id
    pub async fn get(&self, id: &str) -> Result<User, Error> {
        self.http.get(&format!("/users/{}", id)).execute().await
    }

    /// Create a new user
    pub async fn create(&self, payload: &NewUser) -> Result<User, Error> {
        self.http.post("/users").json(payload)?.execute().await
    }

    /// Update a user's profile
    pub async fn update(&self, id: &str, patch: &UserPatch) -> Result<User, Error> {
        self.http
            .put(&format!("/users/{}", id))
            .json(patch)?
            .execute()
            .await
    }

    /// Change a user's password; the backend answers 204 on success
    pub async fn change_password(&self, id: &str, payload: &PasswordChange) -> Result<(), Error> {
        self.http
            .put(&format!("/users/{}/password", id))
            .json(payload)?
            .execute_empty()
            .await
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.http
            .delete(&format!("/users/{}", id))
            .execute_empty()
            .await
    }
}
