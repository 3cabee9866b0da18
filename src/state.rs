use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::db::Store;
use crate::services::{DocumentService, EvidenceService};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<RwLock<Config>>,

    pub store: Store,

    pub evidence: EvidenceService,

    pub documents: DocumentService,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let evidence = EvidenceService::new(&config.general.uploads_path);
        let documents = DocumentService::new(&config.general.uploads_path);

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            store,
            evidence,
            documents,
        })
    }

    pub async fn config(&self) -> Config {
        self.config.read().await.clone()
    }
}
