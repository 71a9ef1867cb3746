use crate::config::db::StorageConfig;
use std::path::{Path, PathBuf};

/// Root handle for the per-domain store partitions. One SQLite file lives
/// under `root` per audited domain; partitions are opened lazily on access.
#[derive(Debug, Clone)]
pub struct SitePartitions {
    root: PathBuf,
}

impl SitePartitions {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug, Clone)]
pub struct InfraClients {
    pub partitions: SitePartitions,
}

pub async fn init_infra(storage: &StorageConfig) -> Result<InfraClients, String> {
    let root = PathBuf::from(&storage.data_dir);
    tokio::fs::create_dir_all(&root)
        .await
        .map_err(|e| format!("data dir init failed: {e}"))?;

    Ok(InfraClients {
        partitions: SitePartitions { root },
    })
}
