use std::env;

use crate::database::MongoDB;
use crate::services::identity_service::IdentityVerifier;

/// Handles compartilhados do backend, construídos uma vez no startup.
pub struct Backend {
    pub db: MongoDB,
    pub verifier: IdentityVerifier,
}

/// Conecta no MongoDB e monta o verificador de tokens a partir do
/// ambiente. Falha de conexão é fatal: sem banco não há serviço.
pub async fn init() -> Backend {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    log::info!("📊 Database: {}", database_url);

    let db = MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    log::info!("✅ MongoDB connected successfully");

    let verifier = IdentityVerifier::from_env();

    Backend { db, verifier }
}
