use jiff::Timestamp;
use moodlog_core::models::checkin::{CheckinRecord, CheckinScores};
use moodlog_core::models::diary::DiaryEntry;
use moodlog_core::models::mood::{MoodEntry, MoodLevel};
use moodlog_core::models::profile::UserProfile;
use moodlog_storage::error::StorageError;
use moodlog_storage::events::{EventLog, LocalEventLog};
use moodlog_storage::journal::JournalStore;
use moodlog_storage::objects::LocalStore;
use moodlog_storage::profiles::{LocalProfileStore, ProfileStore};
use uuid::Uuid;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

const SCORES: CheckinScores = CheckinScores {
    depression: 7,
    anxiety: 5,
    overall: 17,
};

#[tokio::test]
async fn save_scores_merges_into_existing_profile() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = LocalProfileStore::new(LocalStore::new(dir.path()));
    let user_id = Uuid::new_v4();

    let profile = UserProfile::new(user_id, "Robin", ts("2026-01-01T00:00:00Z"));
    profiles.save_profile(&profile).await.unwrap();

    let at = ts("2026-03-10T08:00:00Z");
    let updated = profiles
        .save_scores(user_id, SCORES, "Moderate concerns", at)
        .await
        .unwrap();
    assert_eq!(updated.display_name, "Robin");
    assert_eq!(updated.latest_scores, Some(SCORES));

    let loaded = profiles.load_profile(user_id).await.unwrap().unwrap();
    assert_eq!(loaded, updated);
    assert_eq!(loaded.checkin_count, 1);
}

#[tokio::test]
async fn save_scores_without_profile_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = LocalProfileStore::new(LocalStore::new(dir.path()));

    let result = profiles
        .save_scores(Uuid::new_v4(), SCORES, "x", Timestamp::now())
        .await;
    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn unknown_profile_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = LocalProfileStore::new(LocalStore::new(dir.path()));
    assert!(profiles.load_profile(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn list_profiles_is_oldest_first() {
    let dir = tempfile::tempdir().unwrap();
    let profiles = LocalProfileStore::new(LocalStore::new(dir.path()));
    assert!(profiles.list_profiles().await.unwrap().is_empty());

    let newer = UserProfile::new(Uuid::new_v4(), "Kit", ts("2026-02-01T00:00:00Z"));
    let older = UserProfile::new(Uuid::new_v4(), "Lee", ts("2026-01-01T00:00:00Z"));
    profiles.save_profile(&newer).await.unwrap();
    profiles.save_profile(&older).await.unwrap();

    let names: Vec<String> = profiles
        .list_profiles()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.display_name)
        .collect();
    assert_eq!(names, ["Lee", "Kit"]);
}

#[tokio::test]
async fn event_log_lists_oldest_first_per_user() {
    let dir = tempfile::tempdir().unwrap();
    let log = LocalEventLog::new(LocalStore::new(dir.path()));
    let user_id = Uuid::new_v4();

    let later = CheckinRecord::new(user_id, SCORES, "b", ts("2026-03-10T08:00:00Z"));
    let earlier = CheckinRecord::new(user_id, SCORES, "a", ts("2026-03-03T08:00:00Z"));
    let other_user = CheckinRecord::new(Uuid::new_v4(), SCORES, "c", ts("2026-03-05T08:00:00Z"));
    for record in [&later, &earlier, &other_user] {
        log.record_checkin(record).await.unwrap();
    }

    let records = log.list_checkins(user_id).await.unwrap();
    assert_eq!(records, vec![earlier, later]);
}

#[tokio::test]
async fn moods_list_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let journal = JournalStore::new(LocalStore::new(dir.path()));
    let user_id = Uuid::new_v4();

    let low = MoodEntry::new(user_id, MoodLevel::try_from(3).unwrap(), None, ts("2026-03-09T08:00:00Z"));
    let high = MoodEntry::new(user_id, MoodLevel::try_from(8).unwrap(), None, ts("2026-03-10T08:00:00Z"));
    journal.add_mood(&low).await.unwrap();
    journal.add_mood(&high).await.unwrap();

    let moods = journal.list_moods(user_id).await.unwrap();
    assert_eq!(moods, vec![high, low]);
}

#[tokio::test]
async fn diary_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let journal = JournalStore::new(LocalStore::new(dir.path()));
    let user_id = Uuid::new_v4();

    let mut entry = DiaryEntry::new(user_id, "Monday", "Long day.", ts("2026-03-09T20:00:00Z")).unwrap();
    let second = DiaryEntry::new(user_id, "Tuesday", "Better.", ts("2026-03-10T20:00:00Z")).unwrap();
    journal.add_diary(&entry).await.unwrap();
    journal.add_diary(&second).await.unwrap();

    entry
        .edit(None, Some("Long day, but ok.".to_string()), ts("2026-03-10T21:00:00Z"))
        .unwrap();
    journal.update_diary(&entry).await.unwrap();
    assert_eq!(journal.get_diary(user_id, entry.id).await.unwrap().body, "Long day, but ok.");

    let titles: Vec<String> = journal
        .list_diary(user_id)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Tuesday", "Monday"]);

    journal.delete_diary(user_id, entry.id).await.unwrap();
    assert!(matches!(
        journal.get_diary(user_id, entry.id).await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn updating_unsaved_diary_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let journal = JournalStore::new(LocalStore::new(dir.path()));
    let entry = DiaryEntry::new(Uuid::new_v4(), "Ghost", "Never saved.", Timestamp::now()).unwrap();
    assert!(matches!(
        journal.update_diary(&entry).await,
        Err(StorageError::NotFound { .. })
    ));
}
