use serde::{Deserialize, Serialize};

use super::permissions::PermissionGrid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub role_name: String,
    pub role_code: String,
    pub description: Option<String>,
    /// Persisted grid; may be a subset of the template shape and is
    /// reconciled against it when the edit form loads.
    pub permissions: PermissionGrid,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleDto {
    pub role_name: String,
    pub role_code: String,
    pub description: Option<String>,
    pub permissions: PermissionGrid,
}

/// Role save is last-write-wins: the whole grid is resubmitted, no
/// optimistic-concurrency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleDto {
    pub id: String,
    pub role_name: String,
    pub description: Option<String>,
    pub permissions: PermissionGrid,
}
