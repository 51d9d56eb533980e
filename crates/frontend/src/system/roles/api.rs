use contracts::shared::api::ApiResponse;
use contracts::system::roles::{CreateRoleDto, Role, UpdateRoleDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn bearer() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// The role list is small and unpaginated; it doubles as the option source
/// for the user form's role select.
pub async fn list_roles() -> Result<Vec<Role>, String> {
    let response = Request::get(&format!("{}/api/roles", api_base()))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("List roles failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Vec<Role>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_role(id: &str) -> Result<Role, String> {
    let response = Request::get(&format!("{}/api/roles/{}", api_base(), id))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get role failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Role>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_role(dto: &CreateRoleDto) -> Result<Role, String> {
    let response = Request::post(&format!("{}/api/roles", api_base()))
        .header("Authorization", &bearer()?)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create role failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Role>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_role(dto: &UpdateRoleDto) -> Result<Role, String> {
    let response = Request::put(&format!("{}/api/roles/{}", api_base(), dto.id))
        .header("Authorization", &bearer()?)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update role failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Role>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_role(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/roles/{}", api_base(), id))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete role failed: {}", response.status()));
    }

    Ok(())
}
