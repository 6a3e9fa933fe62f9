use twilight_model::{
    id::{Id, marker::GuildMarker},
    user::User,
};

use crate::services::membership::MemberEvent;

pub mod interaction_create;
pub mod member_add;
pub mod member_remove;
pub mod ready;

/// Builds the core's event from a gateway user. Discord system users are
/// treated like bots.
pub fn member_event(guild_id: Id<GuildMarker>, user: &User, nick: Option<&str>) -> MemberEvent {
    let display_name = nick
        .or(user.global_name.as_deref())
        .unwrap_or(user.name.as_str())
        .to_owned();
    MemberEvent {
        user_id: user.id.get(),
        display_name,
        is_bot: user.bot || user.system.unwrap_or_default(),
        chat_id: guild_id.get(),
    }
}

#[cfg(test)]
mod tests;
