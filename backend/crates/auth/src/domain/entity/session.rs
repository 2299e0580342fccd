//! Session Claims
//!
//! The payload signed into the `auth_token` cookie. `iat`/`exp` are added by
//! `platform::token`; only the user id is ours.

use serde::{Deserialize, Serialize};

use crate::domain::value_object::user_id::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

impl SessionClaims {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
