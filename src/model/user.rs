use serde::{Deserialize, Serialize};

/// The signed-in user as shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}
