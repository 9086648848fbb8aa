//! Interactive check-in and post-scoring submission.

use std::future::Future;
use std::io::{BufRead, Write};
use std::time::Duration;

use jiff::Timestamp;
use moodlog_audit::AuditEvent;
use moodlog_core::models::checkin::{CheckinRecord, CheckinScores};
use moodlog_core::models::profile::UserProfile;
use moodlog_instruments::bands::BandedResult;
use moodlog_instruments::collector::Collector;
use moodlog_storage::error::StorageError;
use moodlog_storage::events::EventLog;
use moodlog_storage::profiles::ProfileStore;

use crate::context::AppContext;

/// Drive `collector` from line-based input until the check-in completes or
/// the user quits.
///
/// Input per item: `0`–`4` answers, an empty line keeps a pre-filled answer,
/// `b` goes back, `q` abandons. End of input also abandons. Returns `None`
/// when abandoned.
pub fn run_checkin<R: BufRead, W: Write>(
    mut collector: Collector,
    mut input: R,
    mut output: W,
) -> eyre::Result<Option<BandedResult>> {
    writeln!(output, "{}", collector.instrument().name())?;
    writeln!(output, "Over the last two weeks, how often have you been bothered by the following?")?;

    while let Some(item) = collector.current() {
        writeln!(output)?;
        writeln!(
            output,
            "[{}/{}] {}",
            collector.position() + 1,
            collector.len(),
            item.prompt
        )?;
        for option in &item.options {
            writeln!(output, "  {} = {}", option.value.get(), option.label)?;
        }
        if let Some(previous) = collector.current_answer() {
            writeln!(output, "  (current answer: {} = {})", previous.get(), previous.label())?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nCheck-in abandoned.")?;
            return Ok(None);
        }

        match line.trim() {
            "q" => {
                writeln!(output, "Check-in abandoned.")?;
                return Ok(None);
            }
            "b" => {
                collector.retreat();
                continue;
            }
            "" => {}
            raw => {
                let recorded = raw
                    .parse::<i64>()
                    .map_err(|_| eyre::eyre!("'{raw}' is not a number"))
                    .and_then(|value| collector.answer_current(value).map_err(eyre::Report::from));
                if let Err(e) = recorded {
                    writeln!(output, "  {e}. Enter 0–4, 'b' to go back, or 'q' to quit.")?;
                    continue;
                }
            }
        }

        if let Err(e) = collector.advance() {
            writeln!(output, "  {e}. Enter 0–4, 'b' to go back, or 'q' to quit.")?;
        }
    }

    let result = collector.finish()?;
    writeln!(output)?;
    write_result(&mut output, &result)?;
    Ok(Some(result))
}

pub fn write_result<W: Write>(output: &mut W, result: &BandedResult) -> std::io::Result<()> {
    writeln!(output, "Depression: {:>2}/28  {}", result.scores.depression, result.depression_band)?;
    writeln!(output, "Anxiety:    {:>2}/20  {}", result.scores.anxiety, result.anxiety_band)?;
    writeln!(output, "Overall:    {:>2}/40  {}", result.scores.overall, result.wellness_band)
}

/// Result of one collaborator write.
#[derive(Debug)]
pub enum WriteOutcome<T> {
    Saved(T),
    Failed(StorageError),
    TimedOut,
}

impl<T> WriteOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// What happened to a scored check-in after it left the scorer.
#[derive(Debug)]
pub struct SubmissionReport {
    pub record: CheckinRecord,
    pub profile: WriteOutcome<UserProfile>,
    pub event: WriteOutcome<()>,
}

impl SubmissionReport {
    pub fn is_complete(&self) -> bool {
        self.profile.is_saved() && self.event.is_saved()
    }
}

async fn bounded<T>(
    limit: Duration,
    write: impl Future<Output = Result<T, StorageError>>,
) -> WriteOutcome<T> {
    match tokio::time::timeout(limit, write).await {
        Ok(Ok(value)) => WriteOutcome::Saved(value),
        Ok(Err(e)) => WriteOutcome::Failed(e),
        Err(_) => WriteOutcome::TimedOut,
    }
}

/// Send a scored check-in to the profile store and the event log.
///
/// The two writes are independent: one failing does not stop the other, and
/// neither touches `result`. Each is cut off after the configured timeout.
pub async fn submit_checkin<P: ProfileStore, E: EventLog>(
    ctx: &AppContext<P, E>,
    result: &BandedResult,
    completed_at: Timestamp,
) -> SubmissionReport {
    let user_id = ctx.user_id();
    let scores = CheckinScores::from(result.scores);
    let description = result.wellness_description();
    let record = CheckinRecord::new(user_id, scores, description.clone(), completed_at);
    let limit = ctx.config.submit_timeout();

    let (profile, event) = tokio::join!(
        bounded(
            limit,
            ctx.profiles
                .save_scores(user_id, scores, &description, completed_at)
        ),
        bounded(limit, ctx.events.record_checkin(&record)),
    );

    match &profile {
        WriteOutcome::Saved(_) => {}
        WriteOutcome::Failed(e) => tracing::warn!(%user_id, error = %e, "profile update failed"),
        WriteOutcome::TimedOut => tracing::warn!(%user_id, ?limit, "profile update timed out"),
    }
    match &event {
        WriteOutcome::Saved(_) => {}
        WriteOutcome::Failed(e) => tracing::warn!(%user_id, error = %e, "check-in event failed"),
        WriteOutcome::TimedOut => tracing::warn!(%user_id, ?limit, "check-in event timed out"),
    }

    AuditEvent::new("complete", "checkin", record.id.to_string(), user_id.to_string())
        .with_details(serde_json::json!({
            "depression": scores.depression,
            "anxiety": scores.anxiety,
            "overall": scores.overall,
            "profile_saved": profile.is_saved(),
            "event_saved": event.is_saved(),
        }))
        .emit();

    SubmissionReport {
        record,
        profile,
        event,
    }
}
