use moodlog_storage::events::{EventLog, LocalEventLog};
use moodlog_storage::journal::JournalStore;
use moodlog_storage::objects::LocalStore;
use moodlog_storage::profiles::{LocalProfileStore, ProfileStore};

use crate::config::MoodlogConfig;

/// Everything a command needs, passed explicitly.
pub struct AppContext<P, E> {
    pub config: MoodlogConfig,
    pub profiles: P,
    pub events: E,
    pub journal: JournalStore,
}

impl AppContext<LocalProfileStore, LocalEventLog> {
    /// Build a context backed by the config's data directory.
    pub fn local(config: MoodlogConfig) -> Self {
        let store = LocalStore::new(&config.data_dir);
        Self {
            profiles: LocalProfileStore::new(store.clone()),
            events: LocalEventLog::new(store.clone()),
            journal: JournalStore::new(store),
            config,
        }
    }
}

impl<P: ProfileStore, E: EventLog> AppContext<P, E> {
    pub fn new(config: MoodlogConfig, profiles: P, events: E, journal: JournalStore) -> Self {
        Self {
            config,
            profiles,
            events,
            journal,
        }
    }

    pub fn user_id(&self) -> uuid::Uuid {
        self.config.user_id
    }
}
