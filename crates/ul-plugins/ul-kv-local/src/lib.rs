//! # ul-kv-local
//! urban-living/crates/ul-plugins/ul-kv-local/src/lib.rs
//! Local filesystem implementation of `KvStore`.
//! One JSON document per key, replaced atomically through a temp file + rename.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use ul_core::traits::KvStore;
use uuid::Uuid;

pub struct LocalKvStore {
    /// Root directory for all documents (e.g., "./data/store")
    root_path: PathBuf,
}

impl LocalKvStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root_path: root }
    }

    /// Maps a key to "<root>/<key>.json", replacing anything that is not
    /// alphanumeric, '-' or '_' so keys cannot escape the root.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root_path.join(format!("{safe}.json"))
    }
}

#[async_trait]
impl KvStore for LocalKvStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // 1. Ensure directory exists
        fs::create_dir_all(&self.root_path).await?;

        // 2. Write next to the target, then swap it in
        let target = self.path_for(key);
        let staging = self.root_path.join(format!(".{}.tmp", Uuid::new_v4()));
        fs::write(&staging, value).await?;
        if let Err(err) = fs::rename(&staging, &target).await {
            let _ = fs::remove_file(&staging).await;
            return Err(err.into());
        }

        tracing::debug!(path = %target.display(), "document written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
