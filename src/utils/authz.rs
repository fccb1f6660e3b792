use crate::utils::error::ServiceError;

/// Recurso que pertence a um único usuário
pub trait OwnedResource {
    fn owner_id(&self) -> &str;
}

/// Checagem única de posse usada por todas as rotas de escrita.
///
/// `None` vira 404 ("{label} not found") e dono diferente vira 403,
/// com as mesmas mensagens para qualquer recurso.
pub fn require_owner<T: OwnedResource>(
    resource: Option<T>,
    user_id: &str,
    label: &str,
) -> Result<T, ServiceError> {
    let resource = resource.ok_or_else(|| ServiceError::NotFound(format!("{} not found", label)))?;

    if resource.owner_id() != user_id {
        return Err(ServiceError::Forbidden(format!(
            "Unauthorized - {} does not belong to user",
            label
        )));
    }

    Ok(resource)
}
