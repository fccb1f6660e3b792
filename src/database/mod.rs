use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .filter(|s| !s.is_empty())
            .unwrap_or("taskmanager");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates necessary indexes for optimal query performance
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // Index for users: (email) - resolução de email no compartilhamento.
        // Não é único: mais de uma conta pode registrar o mesmo email.
        let users = self.database().collection::<mongodb::bson::Document>("users");

        let users_email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .build();

        match users.create_index(users_email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for tasks: (user_id) - listagem por dono
        let tasks = self.database().collection::<mongodb::bson::Document>("tasks");

        let tasks_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();

        match tasks.create_index(tasks_user_index).await {
            Ok(_) => log::info!("   ✅ Index created: tasks(user_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for categories: (user_id)
        let categories = self.database().collection::<mongodb::bson::Document>("categories");

        let categories_user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .build();

        match categories.create_index(categories_user_index).await {
            Ok(_) => log::info!("   ✅ Index created: categories(user_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for sharedTemplates: (is_public) - listagem pública
        let templates = self.database().collection::<mongodb::bson::Document>("sharedTemplates");

        let templates_public_index = IndexModel::builder()
            .keys(doc! { "is_public": 1 })
            .build();

        match templates.create_index(templates_public_index).await {
            Ok(_) => log::info!("   ✅ Index created: sharedTemplates(is_public)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
