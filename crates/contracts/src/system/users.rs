use serde::{Deserialize, Serialize};

/// Maker/checker split used by the booking approval flow.
pub const USER_TYPES: &[(&str, &str)] = &[("MAKER", "Maker"), ("CHECKER", "Checker")];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: String,
    pub role_name: String,
    pub role_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub staff_id: String,
    pub email: String,
    pub full_name: String,
    pub user_type: String,
    pub role: RoleRef,
    pub department: Option<DepartmentRef>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub staff_id: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub user_type: String,
    pub role_id: String,
    pub department_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub user_type: String,
    pub role_id: String,
    pub department_id: Option<String>,
    pub is_active: bool,
}

/// Filter form values for the users list; empty fields are skipped when the
/// query string is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    pub page: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_omits_unset_fields() {
        let filter = UserFilter {
            search: None,
            role_id: None,
            department_id: None,
            page: 1,
            limit: 25,
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(!json.contains("search"));
        assert!(!json.contains("role_id"));
        assert!(!json.contains("department_id"));
        assert!(json.contains("\"page\":1"));
    }

    #[test]
    fn filter_carries_set_fields() {
        let filter = UserFilter {
            search: Some("alice".to_string()),
            role_id: Some("r1".to_string()),
            department_id: Some("d1".to_string()),
            page: 2,
            limit: 25,
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"search\":\"alice\""));
        assert!(json.contains("\"role_id\":\"r1\""));
        assert!(json.contains("\"department_id\":\"d1\""));
    }
}
