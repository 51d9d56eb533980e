use contracts::shared::api::ApiResponse;
use contracts::system::departments::Department;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn bearer() -> Result<String, String> {
    storage::get_access_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or_else(|| "Not authenticated".to_string())
}

/// Unpaginated department list, used by the user form's select and the
/// users-list filter.
pub async fn list_departments() -> Result<Vec<Department>, String> {
    let response = Request::get(&format!("{}/api/departments", api_base()))
        .header("Authorization", &bearer()?)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("List departments failed: {}", response.status()));
    }

    response
        .json::<ApiResponse<Vec<Department>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
