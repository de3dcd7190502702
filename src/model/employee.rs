use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The signed-in employee shown in the portal header and sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "id": 1, "name": "John Doe", "role": "Employee" }))]
pub struct EmployeeProfile {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Employee")]
    pub role: String,
}
