use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Usuário (armazenado no MongoDB)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// uid emitido pelo provedor de identidade - chave de todas as queries
    pub user_id: String,

    pub email: String,

    pub display_name: String,

    /// Timestamp do último login (epoch ms, carimbado a cada registro)
    pub last_login: i64,
}

/// Request de registro enviado pelo app após o login no provedor
#[derive(Debug, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}
