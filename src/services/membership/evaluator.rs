use crate::configs::guard::GuardConfig;
use crate::dbs::{MemberKey, MembershipStore};
use crate::services::moderation::Moderation;

use super::{MemberEvent, notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Bot accounts are never tracked.
    Ignored,
    /// No join on record for this member.
    Unknown,
    /// Left after the grace window.
    Stayed,
    Banned { notified: bool },
    BanFailed,
}

impl LeaveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveOutcome::Ignored => "ignored",
            LeaveOutcome::Unknown => "unknown",
            LeaveOutcome::Stayed => "stayed",
            LeaveOutcome::Banned { .. } => "banned",
            LeaveOutcome::BanFailed => "ban_failed",
        }
    }
}

/// Clears the member's join record, then bans them if they left before
/// `config.ban_threshold` elapsed. The record is gone from the store before
/// any platform call is made, and the store lock is not held across them.
pub async fn handle_leave<M>(
    store: &MembershipStore,
    moderator: &M,
    config: &GuardConfig,
    event: &MemberEvent,
    now: f64,
) -> LeaveOutcome
where
    M: Moderation + ?Sized,
{
    let outcome = evaluate(store, moderator, config, event, now).await;
    metrics::counter!("guard_leaves_total", "outcome" => outcome.as_str()).increment(1);
    outcome
}

async fn evaluate<M>(
    store: &MembershipStore,
    moderator: &M,
    config: &GuardConfig,
    event: &MemberEvent,
    now: f64,
) -> LeaveOutcome
where
    M: Moderation + ?Sized,
{
    let guild_id = event.chat_id;
    let user_id = event.user_id;

    if event.is_bot {
        tracing::debug!(guild_id, user_id, "ignoring bot leave");
        return LeaveOutcome::Ignored;
    }

    let key = MemberKey { user_id, chat_id: guild_id };
    let mut removed = None;
    // On a failed save the record stays on disk and is evaluated again if the
    // member leaves after a restart.
    if let Err(e) = store.update(|members| removed = members.remove(&key)).await {
        tracing::error!(
            guild_id,
            user_id,
            error = %e,
            "failed to persist removal of join record, continuing with the stale record still on disk"
        );
    }

    let Some(record) = removed else {
        tracing::info!(guild_id, user_id, "member left but no join was recorded, nothing to do");
        return LeaveOutcome::Unknown;
    };

    let elapsed_secs = now - record.join_time;
    let threshold_secs = config.ban_threshold.as_secs_f64();
    tracing::info!(guild_id, user_id, elapsed_secs, "member left");

    if elapsed_secs >= threshold_secs {
        tracing::info!(guild_id, user_id, elapsed_secs, threshold_secs, "member stayed long enough, no ban");
        return LeaveOutcome::Stayed;
    }

    if let Err(e) = moderator.ban_member(guild_id, user_id, true).await {
        tracing::error!(guild_id, user_id, error = %e, "failed to ban member");
        metrics::counter!("guard_bans_total", "result" => "failed").increment(1);
        return LeaveOutcome::BanFailed;
    }
    tracing::info!(guild_id, user_id, elapsed_secs, "banned member for leaving too soon");
    metrics::counter!("guard_bans_total", "result" => "banned").increment(1);

    let text = notice::ban_notice(&event.display_name, config.ban_threshold, &config.admin_contact);
    let notified = match moderator.send_direct_message(user_id, &text).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(guild_id, user_id, error = %e, "failed to notify banned member");
            false
        }
    };

    LeaveOutcome::Banned { notified }
}
