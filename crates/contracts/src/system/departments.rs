use serde::{Deserialize, Serialize};

/// Department as listed by the backend; the frontend only reads these for
/// the user form's select and the users-list filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
