use crate::dbs::{MembershipRecord, MembershipStore};

use super::MemberEvent;

pub async fn record_join(store: &MembershipStore, event: &MemberEvent, now: f64) {
    if event.is_bot {
        tracing::debug!(guild_id = event.chat_id, user_id = event.user_id, "ignoring bot join");
        return;
    }

    let record = MembershipRecord { user_id: event.user_id, chat_id: event.chat_id, join_time: now };
    let key = record.key();

    match store.update(|members| members.insert(key, record)).await {
        Ok(previous) => {
            if previous.is_some() {
                tracing::info!(guild_id = event.chat_id, user_id = event.user_id, "member joined again, replacing earlier join time");
            }
            tracing::info!(guild_id = event.chat_id, user_id = event.user_id, name = %event.display_name, "recorded member join");
            metrics::counter!("guard_joins_total").increment(1);
        }
        Err(e) => {
            tracing::error!(guild_id = event.chat_id, user_id = event.user_id, error = %e, "failed to persist member join");
        }
    }
}
