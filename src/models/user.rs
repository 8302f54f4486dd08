use serde::{Deserialize, Serialize};

/// Dashboard operator. Authentication is a stub, see [`crate::front::session`]
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn mock_admin() -> Self {
        Self {
            id: "1".into(),
            email: "admin@veterinaria.com".into(),
            name: "Administrador".into(),
        }
    }

    pub fn from_email(email: &str) -> Self {
        Self {
            id: "1".into(),
            email: email.to_string(),
            name: "Usuario".into(),
        }
    }
}
