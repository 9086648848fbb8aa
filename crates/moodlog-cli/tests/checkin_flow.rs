use std::io::Cursor;

use jiff::Timestamp;
use moodlog_cli::checkin::{WriteOutcome, run_checkin, submit_checkin};
use moodlog_cli::config::MoodlogConfig;
use moodlog_cli::context::AppContext;
use moodlog_core::models::checkin::CheckinScores;
use moodlog_core::models::profile::UserProfile;
use moodlog_instruments::bands::{DepressionBand, band};
use moodlog_instruments::collector::Collector;
use moodlog_instruments::scoring::ScoreResult;
use moodlog_storage::error::StorageError;
use moodlog_storage::events::{EventLog, LocalEventLog};
use moodlog_storage::journal::JournalStore;
use moodlog_storage::objects::LocalStore;
use moodlog_storage::profiles::{LocalProfileStore, ProfileStore};
use uuid::Uuid;

fn drive(input: &str) -> (Option<moodlog_instruments::bands::BandedResult>, String) {
    let mut output = Vec::new();
    let result = run_checkin(Collector::wellness_checkin(), Cursor::new(input), &mut output).unwrap();
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn answering_every_item_produces_a_result() {
    let (result, output) = drive(&"1\n".repeat(10));
    let result = result.unwrap();

    assert_eq!(result.scores.depression, 7);
    assert_eq!(result.depression_band, DepressionBand::Mild);
    assert!(output.contains("[1/10] Little interest or pleasure in doing things"));
    assert!(output.contains("[10/10] Trouble concentrating on things"));
    assert!(output.contains("Depression:  7/28  Mild"));
}

#[test]
fn going_back_prefills_and_last_answer_wins() {
    let input = format!("2\nb\n4\n{}", "0\n".repeat(9));
    let (result, output) = drive(&input);
    let result = result.unwrap();

    assert!(output.contains("(current answer: 2 = Sometimes)"));
    assert_eq!(result.scores.depression, 4);
    assert_eq!(result.scores.overall, 4);
}

#[test]
fn empty_line_keeps_prefilled_answer() {
    let input = format!("3\nb\n\n{}", "0\n".repeat(9));
    let (result, _) = drive(&input);
    assert_eq!(result.unwrap().scores.overall, 3);
}

#[test]
fn invalid_input_reprompts_without_recording() {
    let input = format!("7\nabc\n\n{}", "1\n".repeat(10));
    let (result, output) = drive(&input);

    assert!(output.contains("answer value 7 is outside range [0, 4]"));
    assert!(output.contains("'abc' is not a number"));
    assert!(output.contains("question 'q1' has not been answered"));
    assert_eq!(result.unwrap().scores.overall, 10);
}

#[test]
fn quitting_or_eof_abandons() {
    let (result, output) = drive("1\n2\nq\n");
    assert!(result.is_none());
    assert!(output.contains("Check-in abandoned."));

    let (result, _) = drive("1\n2\n");
    assert!(result.is_none());
}

fn local_context(dir: &std::path::Path) -> AppContext<LocalProfileStore, LocalEventLog> {
    let cfg = MoodlogConfig::new("Sam", dir.join("data"), Timestamp::now());
    AppContext::local(cfg)
}

fn sample_result() -> moodlog_instruments::bands::BandedResult {
    band(&ScoreResult {
        depression: 7,
        anxiety: 5,
        overall: 17,
    })
}

#[tokio::test]
async fn submission_updates_profile_and_event_log() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = local_context(dir.path());
    let now: Timestamp = "2026-03-10T08:00:00Z".parse().unwrap();
    ctx.profiles
        .save_profile(&UserProfile::new(ctx.user_id(), "Sam", now))
        .await
        .unwrap();

    let report = submit_checkin(&ctx, &sample_result(), now).await;
    assert!(report.is_complete());

    let expected = CheckinScores {
        depression: 7,
        anxiety: 5,
        overall: 17,
    };
    let profile = ctx.profiles.load_profile(ctx.user_id()).await.unwrap().unwrap();
    assert_eq!(profile.latest_scores, Some(expected));
    assert_eq!(profile.last_checkin_at, Some(now));

    let records = ctx.events.list_checkins(ctx.user_id()).await.unwrap();
    assert_eq!(records, vec![report.record]);
    assert!(records[0].wellness_description.starts_with("Moderate concerns"));
}

#[tokio::test]
async fn missing_profile_is_reported_but_event_still_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = local_context(dir.path());

    let report = submit_checkin(&ctx, &sample_result(), Timestamp::now()).await;
    assert!(matches!(
        report.profile,
        WriteOutcome::Failed(StorageError::NotFound { .. })
    ));
    assert!(report.event.is_saved());
    assert!(!report.is_complete());
    assert_eq!(report.record.scores.overall, 17);
}

struct StalledProfiles;

impl ProfileStore for StalledProfiles {
    async fn load_profile(&self, _user_id: Uuid) -> Result<Option<UserProfile>, StorageError> {
        Ok(None)
    }

    async fn save_profile(&self, _profile: &UserProfile) -> Result<(), StorageError> {
        Ok(())
    }

    async fn save_scores(
        &self,
        _user_id: Uuid,
        _scores: CheckinScores,
        _wellness_description: &str,
        _at: Timestamp,
    ) -> Result<UserProfile, StorageError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn stalled_profile_store_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    let mut cfg = MoodlogConfig::new("Sam", dir.path().to_path_buf(), Timestamp::now());
    cfg.submit_timeout_secs = 1;
    let ctx = AppContext::new(
        cfg,
        StalledProfiles,
        LocalEventLog::new(store.clone()),
        JournalStore::new(store),
    );

    let result = sample_result();
    let report = submit_checkin(&ctx, &result, Timestamp::now()).await;

    assert!(matches!(report.profile, WriteOutcome::TimedOut));
    assert!(report.event.is_saved());
    assert_eq!(result, sample_result());
}
