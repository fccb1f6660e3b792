use crate::{
    database::MongoDB,
    models::{Category, CreateCategoryRequest},
    utils::error::ServiceError,
};
use mongodb::bson::doc;

const COLLECTION: &str = "categories";

pub async fn list_categories(db: &MongoDB, user_id: &str) -> Result<Vec<Category>, ServiceError> {
    let collection = db.collection::<Category>(COLLECTION);

    let mut cursor = collection
        .find(doc! { "user_id": user_id })
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to fetch categories: {}", e)))?;

    use futures::stream::StreamExt;
    let mut categories = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(category) => categories.push(category),
            Err(e) => {
                return Err(ServiceError::Database(format!("Failed to read category: {}", e)))
            }
        }
    }

    Ok(categories)
}

pub async fn create_category(
    db: &MongoDB,
    user_id: &str,
    request: &CreateCategoryRequest,
) -> Result<Category, ServiceError> {
    let collection = db.collection::<Category>(COLLECTION);

    let mut category = Category {
        id: None,
        user_id: user_id.to_string(),
        name: request.name.clone(),
        color: request.color.clone(),
        is_default: request.is_default,
    };

    let result = collection
        .insert_one(&category)
        .await
        .map_err(|e| ServiceError::Database(format!("Failed to create category: {}", e)))?;

    category.id = result.inserted_id.as_object_id();

    Ok(category)
}
