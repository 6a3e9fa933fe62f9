use super::*;

fn dummy_user(id: u64, bot: bool, system: Option<bool>, global_name: Option<&str>) -> User {
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
        global_name: global_name.map(str::to_owned),
        id: Id::new(id),
        locale: None,
        mfa_enabled: None,
        name: "tester".into(),
        premium_type: None,
        public_flags: None,
        system,
        verified: None,
    }
}

#[test]
fn test_member_event_copies_ids() {
    let user = dummy_user(42, false, None, None);
    let event = member_event(Id::new(7), &user, None);
    assert_eq!(event.user_id, 42);
    assert_eq!(event.chat_id, 7);
    assert!(!event.is_bot);
    assert_eq!(event.display_name, "tester");
}

#[test]
fn test_member_event_prefers_nick_then_global_name() {
    let user = dummy_user(1, false, None, Some("Global"));
    assert_eq!(member_event(Id::new(1), &user, None).display_name, "Global");
    assert_eq!(member_event(Id::new(1), &user, Some("Nick")).display_name, "Nick");
}

#[test]
fn test_member_event_flags_bots_and_system_users() {
    let bot = dummy_user(1, true, None, None);
    assert!(member_event(Id::new(1), &bot, None).is_bot);

    let system = dummy_user(2, false, Some(true), None);
    assert!(member_event(Id::new(1), &system, None).is_bot);
}
