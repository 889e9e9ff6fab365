use jiff::civil::date;
use jiff::Timestamp;
use uuid::Uuid;

use steady_core::models::points::{
    already_awarded_on, goal_already_awarded, reason, total, PointAward,
};

fn award(motivo: &str, at: &str, goal_id: Option<Uuid>) -> PointAward {
    PointAward {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        quantity: reason::quantity(motivo),
        reason: motivo.to_string(),
        awarded_at: at.parse::<Timestamp>().expect("valid timestamp literal"),
        goal_id,
        entry_id: None,
    }
}

#[test]
fn one_award_per_reason_per_day() {
    let awards = vec![
        award(reason::CHATBOT_CHAT, "2026-08-30T09:00:00Z", None),
        award(reason::JOURNAL_ENTRY, "2026-08-29T22:00:00Z", None),
    ];

    assert!(already_awarded_on(
        &awards,
        reason::CHATBOT_CHAT,
        date(2026, 8, 30)
    ));
    // Same reason, different day: allowed again.
    assert!(!already_awarded_on(
        &awards,
        reason::CHATBOT_CHAT,
        date(2026, 8, 31)
    ));
    // Different reason on the same day: allowed.
    assert!(!already_awarded_on(
        &awards,
        reason::JOURNAL_ENTRY,
        date(2026, 8, 30)
    ));
}

#[test]
fn goal_completion_award_is_once_per_goal_ever() {
    let goal_id = Uuid::new_v4();
    let awards = vec![award(
        reason::GOAL_COMPLETED,
        "2026-08-01T10:00:00Z",
        Some(goal_id),
    )];

    assert!(goal_already_awarded(&awards, goal_id));
    assert!(!goal_already_awarded(&awards, Uuid::new_v4()));
}

#[test]
fn quantities_follow_the_product_table() {
    assert_eq!(reason::quantity(reason::GOAL_COMPLETED), 5);
    assert_eq!(reason::quantity(reason::JOURNAL_ENTRY), 1);
    assert_eq!(reason::quantity(reason::FORUM_POST), 1);
    assert_eq!(reason::quantity(reason::CHATBOT_CHAT), 1);
}

#[test]
fn total_sums_quantities() {
    let awards = vec![
        award(reason::GOAL_COMPLETED, "2026-08-01T10:00:00Z", None),
        award(reason::CHATBOT_CHAT, "2026-08-02T10:00:00Z", None),
        award(reason::JOURNAL_ENTRY, "2026-08-02T11:00:00Z", None),
    ];
    assert_eq!(total(&awards), 7);
}
