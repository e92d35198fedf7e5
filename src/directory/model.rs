use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

/// One slice of the remote user list, exactly as the directory pages it.
/// A fetch replaces the whole thing, rows and counters never drift apart.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

//single user lookups arrive wrapped in a data field
#[derive(Debug, Deserialize, Serialize)]
pub struct UserEnvelope {
    pub data: User,
}

/// The three fields the editor may change. The id never travels in a body.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

//the error body a rejected login carries, if it carries one at all
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RejectionBody {
    pub error: Option<String>,
}
