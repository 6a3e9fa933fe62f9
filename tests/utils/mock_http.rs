use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use leave_guard::services::moderation::Moderation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanRecord {
    pub chat_id: u64,
    pub user_id: u64,
    pub revoke_recent_messages: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMessageRecord {
    pub user_id: u64,
    pub text: String,
}

/// Records every platform call; bans and direct messages can be made to fail.
#[derive(Default)]
pub struct MockModerator {
    pub bans: Mutex<Vec<BanRecord>>,
    pub messages: Mutex<Vec<DirectMessageRecord>>,
    fail_ban: AtomicBool,
    fail_dm: AtomicBool,
}

impl MockModerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_ban() -> Self {
        let m = Self::default();
        m.fail_ban.store(true, Ordering::SeqCst);
        m
    }

    pub fn failing_dm() -> Self {
        let m = Self::default();
        m.fail_dm.store(true, Ordering::SeqCst);
        m
    }

    pub fn bans(&self) -> Vec<BanRecord> {
        self.bans.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<DirectMessageRecord> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Moderation for MockModerator {
    async fn ban_member(
        &self,
        chat_id: u64,
        user_id: u64,
        revoke_recent_messages: bool,
    ) -> anyhow::Result<()> {
        self.bans.lock().unwrap().push(BanRecord { chat_id, user_id, revoke_recent_messages });
        if self.fail_ban.load(Ordering::SeqCst) {
            anyhow::bail!("missing Ban Members permission");
        }
        Ok(())
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> anyhow::Result<()> {
        self.messages
            .lock()
            .unwrap()
            .push(DirectMessageRecord { user_id, text: text.to_owned() });
        if self.fail_dm.load(Ordering::SeqCst) {
            anyhow::bail!("cannot send messages to this user");
        }
        Ok(())
    }
}
