use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use jiff::tz::TimeZone;
use jiff::{SignedDuration, Timestamp};
use moodlog_audit::AuditEvent;
use moodlog_core::models::checkin::{checkin_due, checkin_streak};
use moodlog_core::models::diary::DiaryEntry;
use moodlog_core::models::mood::{MoodEntry, MoodLevel};
use moodlog_core::models::profile::UserProfile;
use moodlog_instruments::collector::Collector;
use moodlog_storage::events::{EventLog, LocalEventLog};
use moodlog_storage::objects::LocalStore;
use moodlog_storage::profiles::{LocalProfileStore, ProfileStore};
use uuid::Uuid;

use crate::checkin::{SubmissionReport, WriteOutcome, run_checkin, submit_checkin};
use crate::config::{self, MoodlogConfig};
use crate::context::AppContext;

#[derive(Parser, Debug)]
#[command(
    name = "moodlog",
    about = "Log moods, keep a diary, and complete periodic wellness check-ins",
    version
)]
pub struct Cli {
    /// Emit logs as JSON instead of human-readable lines
    #[arg(long, global = true)]
    pub json_logs: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a local profile and config
    Init(InitArgs),
    /// Answer the ten-item wellness check-in
    Checkin,
    /// Log a mood on a 1–10 scale
    Mood(MoodArgs),
    /// Write and review diary entries
    Diary {
        #[command(subcommand)]
        command: DiaryCommand,
    },
    /// Show past check-ins, streak, and recent moods
    History(HistoryArgs),
    /// Show the current profile
    Profile,
    /// Forget the local config; stored data is left in place
    Reset,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name shown in greetings
    #[arg(long)]
    pub name: String,
    /// Where to keep profiles, check-ins, and journal entries
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    /// Days between check-ins
    #[arg(long, default_value_t = config::DEFAULT_CHECKIN_INTERVAL_DAYS)]
    pub interval_days: u32,
    /// Attach to this profile instead of the one already in the data directory
    #[arg(long)]
    pub user_id: Option<Uuid>,
    /// Replace an existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct MoodArgs {
    /// Slider position, 1 (lowest) to 10 (highest)
    pub level: i64,
    /// Optional note
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DiaryCommand {
    /// Add an entry; the body is read from stdin when --body is omitted
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long)]
        body: Option<String>,
    },
    /// List entries, newest first
    List,
    /// Print one entry
    Show { id: Uuid },
    /// Change an entry's title or body
    Edit {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Remove an entry
    Delete { id: Uuid },
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// How many check-ins and moods to show
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> eyre::Result<()> {
    let mut out = std::io::stdout();
    let now = Timestamp::now();

    match cli.command {
        Command::Init(args) => init(args, &config::config_dir()?, now, &mut out)
            .await
            .map(|_| ()),
        Command::Checkin => checkin(&local_context()?, &mut out).await,
        Command::Mood(args) => mood(&local_context()?, args, now, &mut out).await,
        Command::Diary { command } => diary(&local_context()?, command, now, &mut out).await,
        Command::History(args) => history(&local_context()?, args.limit, now, &mut out).await,
        Command::Profile => profile(&local_context()?, now, &mut out).await,
        Command::Reset => reset(&config::config_dir()?, &mut out),
    }
}

fn local_context() -> eyre::Result<AppContext<LocalProfileStore, LocalEventLog>> {
    if !config::has_config() {
        return Err(eyre::eyre!("no config found; run `moodlog init --name <name>` first"));
    }
    Ok(AppContext::local(config::load_config()?))
}

/// Write a fresh config to `config_dir`.
///
/// A profile already stored under the data directory is picked up again, so
/// `reset` followed by `init` keeps the user's history. A new profile is
/// created only when the data directory has none.
pub async fn init<W: Write>(
    args: InitArgs,
    config_dir: &Path,
    now: Timestamp,
    out: &mut W,
) -> eyre::Result<MoodlogConfig> {
    if config::has_config_at(config_dir) && !args.force {
        return Err(eyre::eyre!(
            "a config already exists in {}; pass --force to replace it",
            config_dir.display()
        ));
    }

    let data_dir = match args.data_dir {
        Some(dir) => dir,
        None => config::default_data_dir()?,
    };
    let mut cfg = MoodlogConfig::new(args.name.trim(), data_dir, now);
    cfg.checkin_interval_days = args.interval_days;

    let profiles = LocalProfileStore::new(LocalStore::new(&cfg.data_dir));
    let existing = match args.user_id {
        Some(user_id) => {
            cfg.user_id = user_id;
            profiles.load_profile(user_id).await?
        }
        None => {
            let mut found = profiles.list_profiles().await?;
            if found.len() > 1 {
                let ids: Vec<String> = found.iter().map(|p| p.user_id.to_string()).collect();
                return Err(eyre::eyre!(
                    "{} holds {} profiles ({}); pass --user-id to choose one",
                    cfg.data_dir.display(),
                    found.len(),
                    ids.join(", ")
                ));
            }
            found.pop()
        }
    };

    let action = match existing {
        Some(mut profile) => {
            cfg.user_id = profile.user_id;
            profile.display_name = cfg.display_name.clone();
            profile.updated_at = now;
            profiles.save_profile(&profile).await?;
            "restore"
        }
        None => {
            profiles
                .save_profile(&UserProfile::new(cfg.user_id, cfg.display_name.clone(), now))
                .await?;
            "create"
        }
    };
    config::save_config_at(config_dir, &cfg)?;

    AuditEvent::new(action, "profile", cfg.user_id.to_string(), cfg.user_id.to_string()).emit();
    let greeting = if action == "restore" { "Welcome back" } else { "Welcome" };
    writeln!(
        out,
        "{greeting}, {}. Your data lives in {}.",
        cfg.display_name,
        cfg.data_dir.display()
    )?;
    Ok(cfg)
}

/// Remove the config in `config_dir`. Stored profiles and entries are kept.
pub fn reset<W: Write>(config_dir: &Path, out: &mut W) -> eyre::Result<()> {
    if !config::has_config_at(config_dir) {
        writeln!(out, "Nothing to reset.")?;
        return Ok(());
    }
    config::delete_config_at(config_dir)?;
    writeln!(out, "Config removed. Run `moodlog init` to start again.")?;
    Ok(())
}

async fn checkin<P: ProfileStore, E: EventLog, W: Write>(ctx: &AppContext<P, E>, out: &mut W) -> eyre::Result<()> {
    let result = tokio::task::spawn_blocking(|| {
        run_checkin(
            Collector::wellness_checkin(),
            std::io::stdin().lock(),
            std::io::stdout(),
        )
    })
    .await??;

    let Some(result) = result else {
        return Ok(());
    };

    let report = submit_checkin(ctx, &result, Timestamp::now()).await;
    write_report(out, &report)?;
    Ok(())
}

/// Describe what happened to each post-check-in write.
pub fn write_report<W: Write>(out: &mut W, report: &SubmissionReport) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", report.record.wellness_description)?;
    match &report.profile {
        WriteOutcome::Saved(_) => writeln!(out, "Profile updated.")?,
        WriteOutcome::Failed(e) => writeln!(out, "Could not update your profile: {e}")?,
        WriteOutcome::TimedOut => writeln!(out, "Profile update timed out; your scores above are unchanged.")?,
    }
    match &report.event {
        WriteOutcome::Saved(_) => writeln!(out, "Check-in saved to history."),
        WriteOutcome::Failed(e) => writeln!(out, "Could not save this check-in to history: {e}"),
        WriteOutcome::TimedOut => writeln!(out, "Saving to history timed out."),
    }
}

pub async fn mood<P: ProfileStore, E: EventLog, W: Write>(
    ctx: &AppContext<P, E>,
    args: MoodArgs,
    now: Timestamp,
    out: &mut W,
) -> eyre::Result<()> {
    let level = MoodLevel::try_from(args.level)?;
    let entry = MoodEntry::new(ctx.user_id(), level, args.note, now);
    ctx.journal.add_mood(&entry).await?;

    AuditEvent::new("create", "mood_entry", entry.id.to_string(), ctx.user_id().to_string()).emit();
    writeln!(out, "Logged mood {}/10 ({}).", level.get(), level.label())?;
    Ok(())
}

pub async fn diary<P: ProfileStore, E: EventLog, W: Write>(
    ctx: &AppContext<P, E>,
    command: DiaryCommand,
    now: Timestamp,
    out: &mut W,
) -> eyre::Result<()> {
    let user_id = ctx.user_id();
    match command {
        DiaryCommand::Add { title, body } => {
            let body = match body {
                Some(body) => body,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let entry = DiaryEntry::new(user_id, title, body, now)?;
            ctx.journal.add_diary(&entry).await?;
            AuditEvent::new("create", "diary_entry", entry.id.to_string(), user_id.to_string()).emit();
            writeln!(out, "Saved \"{}\" ({}).", entry.title, entry.id)?;
        }
        DiaryCommand::List => {
            let entries = ctx.journal.list_diary(user_id).await?;
            if entries.is_empty() {
                writeln!(out, "No diary entries yet.")?;
            }
            for entry in entries {
                writeln!(out, "{}  {}  {}", entry.created_at.strftime("%Y-%m-%d"), entry.id, entry.title)?;
            }
        }
        DiaryCommand::Show { id } => {
            let entry = ctx.journal.get_diary(user_id, id).await?;
            writeln!(out, "# {}", entry.title)?;
            writeln!(out, "{}", entry.created_at.strftime("%Y-%m-%d %H:%M UTC"))?;
            writeln!(out)?;
            writeln!(out, "{}", entry.body)?;
        }
        DiaryCommand::Edit { id, title, body } => {
            let mut entry = ctx.journal.get_diary(user_id, id).await?;
            entry.edit(title, body, now)?;
            ctx.journal.update_diary(&entry).await?;
            AuditEvent::new("update", "diary_entry", id.to_string(), user_id.to_string()).emit();
            writeln!(out, "Updated \"{}\".", entry.title)?;
        }
        DiaryCommand::Delete { id } => {
            ctx.journal.delete_diary(user_id, id).await?;
            AuditEvent::new("delete", "diary_entry", id.to_string(), user_id.to_string()).emit();
            writeln!(out, "Deleted {id}.")?;
        }
    }
    Ok(())
}

pub async fn history<P: ProfileStore, E: EventLog, W: Write>(
    ctx: &AppContext<P, E>,
    limit: usize,
    now: Timestamp,
    out: &mut W,
) -> eyre::Result<()> {
    let records = ctx.events.list_checkins(ctx.user_id()).await?;
    let today = now.to_zoned(TimeZone::UTC).date();
    let streak = checkin_streak(records.iter().map(|r| r.completed_at), today)?;

    writeln!(out, "Check-ins ({} total, {streak}-day streak)", records.len())?;
    if records.is_empty() {
        writeln!(out, "  none yet")?;
    }
    for record in records.iter().rev().take(limit) {
        writeln!(
            out,
            "  {}  overall {:>2}/40  {}",
            record.completed_at.strftime("%Y-%m-%d"),
            record.scores.overall,
            record.wellness_description
        )?;
    }

    let last = records.last().map(|r| r.completed_at);
    write_due(out, last, now, ctx.config.checkin_interval_days)?;

    let moods = ctx.journal.list_moods(ctx.user_id()).await?;
    writeln!(out, "Recent moods")?;
    if moods.is_empty() {
        writeln!(out, "  none yet")?;
    }
    for entry in moods.iter().take(limit) {
        let note = entry.note.as_deref().unwrap_or("");
        writeln!(
            out,
            "  {}  {:>2}/10  {}  {note}",
            entry.recorded_at.strftime("%Y-%m-%d %H:%M"),
            entry.level.get(),
            entry.level.label()
        )?;
    }
    Ok(())
}

pub async fn profile<P: ProfileStore, E: EventLog, W: Write>(
    ctx: &AppContext<P, E>,
    now: Timestamp,
    out: &mut W,
) -> eyre::Result<()> {
    let Some(profile) = ctx.profiles.load_profile(ctx.user_id()).await? else {
        return Err(eyre::eyre!("no profile for user {}; run `moodlog init`", ctx.user_id()));
    };

    writeln!(out, "{} ({})", profile.display_name, profile.user_id)?;
    writeln!(out, "Check-ins completed: {}", profile.checkin_count)?;
    if let Some(scores) = profile.latest_scores {
        writeln!(
            out,
            "Latest scores: depression {}/28, anxiety {}/20, overall {}/40",
            scores.depression, scores.anxiety, scores.overall
        )?;
    }
    if let Some(description) = &profile.wellness_description {
        writeln!(out, "{description}")?;
    }
    write_due(out, profile.last_checkin_at, now, ctx.config.checkin_interval_days)?;
    Ok(())
}

fn write_due<W: Write>(out: &mut W, last: Option<Timestamp>, now: Timestamp, interval_days: u32) -> eyre::Result<()> {
    if checkin_due(last, now, interval_days) {
        writeln!(out, "A check-in is due.")?;
    } else if let Some(last) = last {
        let next = last.checked_add(SignedDuration::from_hours(i64::from(interval_days) * 24))?;
        writeln!(out, "Next check-in due {}.", next.strftime("%Y-%m-%d"))?;
    }
    Ok(())
}
