//! File-backed store of members that joined but have not left yet.
//!
//! Every access reads the whole file and every change writes the whole file
//! back. Writes go to a sibling temporary file that is renamed over the
//! target, so a crash leaves either the old or the new contents on disk.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberKey {
    pub user_id: u64,
    pub chat_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipRecord {
    pub user_id: u64,
    pub chat_id: u64,
    /// Seconds since the Unix epoch.
    pub join_time: f64,
}

impl MembershipRecord {
    pub fn key(&self) -> MemberKey {
        MemberKey { user_id: self.user_id, chat_id: self.chat_id }
    }
}

pub type Members = BTreeMap<MemberKey, MembershipRecord>;

pub struct MembershipStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl MembershipStore {
    pub async fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create store directory {}", parent.display()))?;
        }
        Ok(Self { path, lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted members. Missing or unreadable state is an empty store.
    pub async fn load(&self) -> Members {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Members::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read membership store, treating as empty");
                return Members::new();
            }
        };

        match serde_json::from_slice::<Vec<MembershipRecord>>(&bytes) {
            Ok(records) => records.into_iter().map(|r| (r.key(), r)).collect(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "membership store is corrupt, treating as empty");
                Members::new()
            }
        }
    }

    /// Replaces the persisted members with `members`.
    pub async fn save(&self, members: &Members) -> anyhow::Result<()> {
        let records: Vec<&MembershipRecord> = members.values().collect();
        let json = serde_json::to_vec(&records).context("serialize membership store")?;

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &json)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replace {}", self.path.display()))?;
        Ok(())
    }

    /// Runs one load-mutate-save sequence. Sequences never interleave, and
    /// the file is only rewritten when `f` changed something.
    pub async fn update<F, R>(&self, f: F) -> anyhow::Result<R>
    where
        F: FnOnce(&mut Members) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut members = self.load().await;
        let before = members.clone();
        let out = f(&mut members);
        if members != before {
            self.save(&members).await?;
        }
        Ok(out)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
