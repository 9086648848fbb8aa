use jiff::Timestamp;
use moodlog_core::error::CoreError;
use moodlog_core::models::diary::DiaryEntry;
use moodlog_core::models::mood::{MoodEntry, MoodLevel};
use uuid::Uuid;

#[test]
fn mood_level_bounds() {
    assert!(MoodLevel::try_from(0).is_err());
    assert_eq!(MoodLevel::try_from(1).unwrap().get(), 1);
    assert_eq!(MoodLevel::try_from(10).unwrap().get(), 10);
    assert!(matches!(
        MoodLevel::try_from(11),
        Err(CoreError::InvalidMoodLevel(11))
    ));
}

#[test]
fn mood_level_rejected_while_parsing() {
    let err = serde_json::from_str::<MoodLevel>("42");
    assert!(err.is_err());
    let ok: MoodLevel = serde_json::from_str("7").unwrap();
    assert_eq!(ok.label(), "Good");
}

#[test]
fn blank_mood_note_is_dropped() {
    let entry = MoodEntry::new(
        Uuid::new_v4(),
        MoodLevel::try_from(5).unwrap(),
        Some("   ".to_string()),
        Timestamp::now(),
    );
    assert_eq!(entry.note, None);
}

#[test]
fn diary_requires_body() {
    let result = DiaryEntry::new(Uuid::new_v4(), "Title", "  \n", Timestamp::now());
    assert!(matches!(result, Err(CoreError::MissingField(f)) if f == "body"));
}

#[test]
fn diary_title_defaults_to_date() {
    let now: Timestamp = "2026-03-10T08:00:00Z".parse().unwrap();
    let entry = DiaryEntry::new(Uuid::new_v4(), "", "Went for a walk.", now).unwrap();
    assert_eq!(entry.title, "2026-03-10");
}

#[test]
fn diary_edit_bumps_updated_at() {
    let created: Timestamp = "2026-03-10T08:00:00Z".parse().unwrap();
    let later: Timestamp = "2026-03-11T08:00:00Z".parse().unwrap();
    let mut entry = DiaryEntry::new(Uuid::new_v4(), "Day one", "Slept well.", created).unwrap();

    entry.edit(None, Some("Slept badly.".to_string()), later).unwrap();

    assert_eq!(entry.title, "Day one");
    assert_eq!(entry.body, "Slept badly.");
    assert_eq!(entry.created_at, created);
    assert_eq!(entry.updated_at, later);
    assert!(entry.edit(None, Some(String::new()), later).is_err());
}
