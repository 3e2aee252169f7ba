use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub admin: bool,
}

impl UserDto {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            admin: entity.admin,
        }
    }
}
