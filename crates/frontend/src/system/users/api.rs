use contracts::shared::api::{ApiResponse, Paginated};
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserFilter};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn bearer() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// List users matching the filter. Pagination params ride in the query
/// string together with the optional search and reference filters.
pub async fn list_users(filter: &UserFilter) -> Result<Paginated<User>, String> {
    let query = serde_qs::to_string(filter)
        .map_err(|e| format!("Failed to build query string: {}", e))?;

    let response = Request::get(&format!("{}/api/users?{}", api_base(), query))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("List users failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Paginated<User>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_user(id: &str) -> Result<User, String> {
    let response = Request::get(&format!("{}/api/users/{}", api_base(), id))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get user failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<User>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, String> {
    let response = Request::post(&format!("{}/api/users", api_base()))
        .header("Authorization", &bearer()?)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create user failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<User>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<User, String> {
    let response = Request::put(&format!("{}/api/users/{}", api_base(), dto.id))
        .header("Authorization", &bearer()?)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update user failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<User>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_user(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/users/{}", api_base(), id))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete user failed: {}", response.status()));
    }

    Ok(())
}
