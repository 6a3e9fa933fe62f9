use leave_guard::services::membership::MemberEvent;
use serde_json::json;
use twilight_gateway::Event;
use twilight_model::{
    gateway::payload::incoming::{MemberAdd, MemberRemove},
    guild::Member,
    id::Id,
    user::User,
};

pub fn human(user_id: u64, chat_id: u64) -> MemberEvent {
    MemberEvent {
        user_id,
        display_name: format!("user{user_id}"),
        is_bot: false,
        chat_id,
    }
}

pub fn bot(user_id: u64, chat_id: u64) -> MemberEvent {
    MemberEvent { is_bot: true, ..human(user_id, chat_id) }
}

pub fn user(id: u64, bot: bool) -> User {
    User {
        accent_color: None,
        avatar: None,
        avatar_decoration: None,
        avatar_decoration_data: None,
        banner: None,
        bot,
        discriminator: 0,
        email: None,
        flags: None,
        global_name: None,
        id: Id::new(id),
        locale: None,
        mfa_enabled: None,
        name: format!("user{id}"),
        premium_type: None,
        public_flags: None,
        system: None,
        verified: None,
    }
}

pub fn member_add(guild_id: u64, user: User, nick: Option<&str>) -> Event {
    let member: Member = serde_json::from_value(json!({
        "avatar": null,
        "communication_disabled_until": null,
        "deaf": false,
        "flags": 0,
        "joined_at": null,
        "mute": false,
        "nick": nick,
        "pending": false,
        "premium_since": null,
        "roles": [],
        "user": serde_json::to_value(&user).expect("serialize user"),
    }))
    .expect("valid member payload");

    Event::MemberAdd(Box::new(MemberAdd { guild_id: Id::new(guild_id), member }))
}

pub fn member_remove(guild_id: u64, user: User) -> Event {
    Event::MemberRemove(MemberRemove { guild_id: Id::new(guild_id), user })
}
