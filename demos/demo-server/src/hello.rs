use serde::{Deserialize, Serialize};

/// The record shape every body-binding endpoint works with:
/// `{"username":"hello", "age": 20}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloData {
    pub username: String,
    pub age: i32,
}
