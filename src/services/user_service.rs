use crate::{
    database::MongoDB,
    models::{RegisterUserRequest, User},
    utils::error::ServiceError,
};
use mongodb::bson::doc;

const COLLECTION: &str = "users";

/// Registra o usuário vindo do provedor de identidade. Upsert chaveado
/// pelo uid: o primeiro login cria o documento, os seguintes só
/// renovam os dados e o last_login.
pub async fn register_user(db: &MongoDB, request: &RegisterUserRequest) -> Result<(), ServiceError> {
    let collection = db.collection::<User>(COLLECTION);
    let now = chrono::Utc::now().timestamp_millis();

    let user = User {
        id: None,
        user_id: request.uid.clone(),
        email: request.email.clone(),
        display_name: request.display_name.clone(),
        last_login: now,
    };

    collection
        .replace_one(doc! { "user_id": &request.uid }, &user)
        .upsert(true)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to upsert user: {}", e)))?;

    Ok(())
}

/// Resolve um email para os uids das contas correspondentes.
/// Pode devolver mais de um uid (emails não são únicos) ou nenhum.
pub async fn find_user_ids_by_email(db: &MongoDB, email: &str) -> Result<Vec<String>, ServiceError> {
    let collection = db.collection::<User>(COLLECTION);

    let mut cursor = collection
        .find(doc! { "email": email })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to query users: {}", e)))?;

    use futures::stream::StreamExt;
    let mut user_ids = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(user) => user_ids.push(user.user_id),
            Err(e) => return Err(ServiceError::Database(format!("Failed to read user: {}", e))),
        }
    }

    Ok(user_ids)
}
