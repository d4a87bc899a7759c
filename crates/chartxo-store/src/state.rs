//! Application state with a single mutation API.
//!
//! Every mutation builds the new value, persists it, and only then commits it
//! in memory, so a failed write leaves both disk and state unchanged. The
//! profile scan count bumped by [`AppState::record_scan`] is the one
//! follow-up write whose failure is logged rather than returned.
//! Notifications and the theme live only as long as the process.

use chrono::{DateTime, Utc};

use chartxo_core::ids::{PREFIX_NOTIFICATION, PREFIX_SCAN, unique_prefixed_id};
use chartxo_core::survey::SurveyAnswers;
use chartxo_core::{
    AppNotification, ChartAnalysis, NotificationKind, ScanHistoryEntry, Theme, UserProfile,
};

use crate::error::StoreError;
use crate::local::LocalStore;

pub type Clock = fn() -> DateTime<Utc>;

pub struct AppState {
    store: LocalStore,
    profile: Option<UserProfile>,
    history: Vec<ScanHistoryEntry>,
    theme: Theme,
    notifications: Vec<AppNotification>,
    history_limit: Option<usize>,
    clock: Clock,
}

impl AppState {
    /// Read both records from `store`.
    ///
    /// # Errors
    ///
    /// Propagates [`LocalStore`] read errors; a corrupt record is not
    /// silently replaced.
    pub fn load(store: LocalStore) -> Result<Self, StoreError> {
        let profile = store.load_profile()?;
        let history = store.load_history()?;
        tracing::debug!(
            dir = %store.dir().display(),
            has_profile = profile.is_some(),
            scans = history.len(),
            "state loaded"
        );
        Ok(Self {
            store,
            profile,
            history,
            theme: Theme::default(),
            notifications: Vec::new(),
            history_limit: None,
            clock: Utc::now,
        })
    }

    /// Keep at most `limit` scans, evicting the oldest. `None` keeps all;
    /// zero is treated as one.
    #[must_use]
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &LocalStore {
        &self.store
    }

    // ── Profile ────────────────────────────────────────────────────

    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn has_profile(&self) -> bool {
        self.profile.is_some()
    }

    /// Create the profile from completed survey answers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Core`] for invalid answers, or a write error.
    pub fn complete_survey(&mut self, answers: SurveyAnswers) -> Result<&UserProfile, StoreError> {
        let profile = answers.into_profile()?;
        self.store.save_profile(&profile)?;
        tracing::info!(name = %profile.full_name, "profile created");
        Ok(self.profile.insert(profile))
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NoProfile`] before onboarding, or a write error.
    pub fn update_name(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(chartxo_core::CoreError::Validation("name must not be empty".into()).into());
        }
        self.update_profile(|p| p.full_name = name.to_string())
    }

    /// Replace the profile photo with a data URI.
    ///
    /// # Errors
    ///
    /// See [`Self::update_name`].
    pub fn set_profile_image(&mut self, data_uri: String) -> Result<(), StoreError> {
        self.update_profile(|p| p.profile_image = Some(data_uri))?;
        self.notify(
            "Profile Updated",
            "Your profile photo has been updated.",
            NotificationKind::Profile,
        );
        Ok(())
    }

    /// # Errors
    ///
    /// See [`Self::update_name`].
    pub fn remove_profile_image(&mut self) -> Result<(), StoreError> {
        self.update_profile(|p| p.profile_image = None)?;
        self.notify(
            "Profile Updated",
            "Your profile photo has been removed.",
            NotificationKind::Profile,
        );
        Ok(())
    }

    fn update_profile(&mut self, edit: impl FnOnce(&mut UserProfile)) -> Result<(), StoreError> {
        let mut updated = self.profile.clone().ok_or(StoreError::NoProfile)?;
        edit(&mut updated);
        self.store.save_profile(&updated)?;
        self.profile = Some(updated);
        Ok(())
    }

    // ── History ────────────────────────────────────────────────────

    /// Most recent first.
    #[must_use]
    pub fn history(&self) -> &[ScanHistoryEntry] {
        &self.history
    }

    #[must_use]
    pub fn find_scan(&self, id: &str) -> Option<&ScanHistoryEntry> {
        self.history.iter().find(|e| e.id == id)
    }

    /// Store a fresh analysis at the front of history.
    ///
    /// The entry holds its own copy of `analysis`. A profile, when present,
    /// has its scan count bumped; a failed profile write is logged and leaves
    /// the count as it was without undoing the saved scan.
    ///
    /// # Errors
    ///
    /// Returns a write error. A failed history write commits nothing.
    pub fn record_scan(
        &mut self,
        analysis: &ChartAnalysis,
        image_data_uri: String,
    ) -> Result<&ScanHistoryEntry, StoreError> {
        let now = (self.clock)();
        let id = unique_prefixed_id(PREFIX_SCAN, now, |c| self.find_scan(c).is_some());
        let entry = ScanHistoryEntry::new(id, analysis, image_data_uri, now);

        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(entry);
        history.extend(self.history.iter().cloned());
        if let Some(limit) = self.history_limit {
            if history.len() > limit {
                tracing::debug!(limit, evicted = history.len() - limit, "history trimmed");
                history.truncate(limit.max(1));
            }
        }
        self.store.save_history(&history)?;
        self.history = history;

        if self.profile.is_some() {
            if let Err(e) = self.update_profile(|p| p.total_scans += 1) {
                tracing::warn!(error = %e, "scan saved but profile scan count not updated");
            }
        }

        self.notify(
            "Scan Complete",
            &format!("Successfully analyzed {}", analysis.detected_pattern),
            NotificationKind::Scan,
        );
        Ok(&self.history[0])
    }

    /// Remove the entry with `id`. Unknown ids are a no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Returns a write error; nothing is committed in that case.
    pub fn delete_scan(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.find_scan(id).is_none() {
            return Ok(false);
        }
        let remaining: Vec<ScanHistoryEntry> =
            self.history.iter().filter(|e| e.id != id).cloned().collect();
        self.store.save_history(&remaining)?;
        self.history = remaining;
        self.notify(
            "Scan Deleted",
            "The scan has been removed from your history.",
            NotificationKind::Delete,
        );
        Ok(true)
    }

    // ── Theme ──────────────────────────────────────────────────────

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ── Notifications ──────────────────────────────────────────────

    /// Push a notification to the front of the list.
    pub fn notify(&mut self, title: &str, message: &str, kind: NotificationKind) -> &AppNotification {
        let now = (self.clock)();
        let id = unique_prefixed_id(PREFIX_NOTIFICATION, now, |c| {
            self.notifications.iter().any(|n| n.id == c)
        });
        let notification = AppNotification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            timestamp: now,
            kind,
            read: false,
        };
        tracing::info!(kind = %kind, title, message, "notification");
        self.notifications.insert(0, notification);
        &self.notifications[0]
    }

    /// Newest first.
    #[must_use]
    pub fn notifications(&self) -> &[AppNotification] {
        &self.notifications
    }

    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }
}
