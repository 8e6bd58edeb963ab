//! Reminder batch scheduler
//!
//! Every interval the scheduler walks the enabled subscribers and pushes a
//! reminder to each one whose last notification is older than the
//! threshold. Outcomes are collected per user; one failure never stops the
//! batch.
//!
//! Each message carries an idempotency key made of the user id and the
//! interval slot the batch runs in. A subscriber whose last send already
//! used the current key is skipped, and the messenger refuses keys it has
//! delivered before, so overlapping runs send at most once per slot.

use std::fmt;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, Utc};

use crate::config::settings::ReminderSettings;
use crate::error::{JournalError, JournalResult};

use super::messenger::{Delivery, PushMessage, PushMessenger};
use super::subscriber::{ReminderSubscriber, SubscriberStore};

/// What happened to one subscriber in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    /// Last notification is more recent than the threshold
    NotDue,
    /// Already sent in this slot
    Skipped,
    Failed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::NotDue => write!(f, "not due"),
            Self::Skipped => write!(f, "skipped (already sent this slot)"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// Per-user result line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOutcome {
    pub user_id: String,
    pub outcome: Outcome,
}

/// Result of one batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub ran_at: DateTime<Utc>,
    pub outcomes: Vec<UserOutcome>,
    /// Set when the batch could not run at all
    pub error: Option<String>,
}

impl BatchReport {
    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn sent(&self) -> usize {
        self.count(|o| *o == Outcome::Sent)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn outcome_for(&self, user_id: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.user_id == user_id)
            .map(|o| &o.outcome)
    }

    pub fn summary(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Reminder batch failed: {}", error);
        }
        format!(
            "{} subscribers: {} sent, {} not due, {} skipped, {} failed",
            self.outcomes.len(),
            self.sent(),
            self.count(|o| *o == Outcome::NotDue),
            self.count(|o| *o == Outcome::Skipped),
            self.failed()
        )
    }
}

/// Idempotency key for a user in the slot containing `at`
pub fn send_key(user_id: &str, at: DateTime<Utc>, interval_hours: u32) -> String {
    let slot_secs = i64::from(interval_hours.max(1)) * 3600;
    format!("{}:{}", user_id, at.timestamp().div_euclid(slot_secs))
}

/// Runs reminder batches against a store and a messenger
pub struct ReminderScheduler<S, M> {
    store: S,
    messenger: M,
    settings: ReminderSettings,
}

impl<S: SubscriberStore, M: PushMessenger> ReminderScheduler<S, M> {
    pub fn new(store: S, messenger: M, settings: ReminderSettings) -> JournalResult<Self> {
        if settings.interval_hours == 0 {
            return Err(JournalError::Reminder(
                "Reminder interval must be at least one hour".into(),
            ));
        }
        Ok(Self {
            store,
            messenger,
            settings,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// Run one batch as of `now`
    ///
    /// Never fails: store errors end up in `BatchReport::error`.
    pub fn run_batch(&self, now: DateTime<Utc>) -> BatchReport {
        let subscribers = match self.store.enabled_subscribers() {
            Ok(subscribers) => subscribers,
            Err(e) => {
                tracing::error!(error = %e, "could not load reminder subscribers");
                return BatchReport {
                    ran_at: now,
                    outcomes: Vec::new(),
                    error: Some(e.to_string()),
                };
            }
        };

        let outcomes = subscribers
            .iter()
            .map(|subscriber| {
                let outcome = self.notify(subscriber, now);
                if let Outcome::Failed(reason) = &outcome {
                    tracing::warn!(user = %subscriber.user_id, %reason, "reminder not sent");
                }
                UserOutcome {
                    user_id: subscriber.user_id.clone(),
                    outcome,
                }
            })
            .collect();

        let report = BatchReport {
            ran_at: now,
            outcomes,
            error: None,
        };
        tracing::info!("{}", report.summary());
        report
    }

    fn notify(&self, subscriber: &ReminderSubscriber, now: DateTime<Utc>) -> Outcome {
        let last = subscriber.last_notification_time.unwrap_or_default();
        let threshold = Duration::hours(i64::from(self.settings.threshold_hours));
        if now - last < threshold {
            return Outcome::NotDue;
        }

        let key = send_key(&subscriber.user_id, now, self.settings.interval_hours);
        if subscriber.last_send_key.as_deref() == Some(key.as_str()) {
            return Outcome::Skipped;
        }

        let token = match subscriber.notification_token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => return Outcome::Failed("missing notification token".into()),
        };

        let message = PushMessage {
            token: token.to_string(),
            title: self.settings.title.clone(),
            body: self.settings.body.clone(),
            link: self.settings.link.clone(),
            idempotency_key: key.clone(),
        };

        let delivery = match self.messenger.send(&message) {
            Ok(delivery) => delivery,
            Err(e) => return Outcome::Failed(e.to_string()),
        };

        if let Err(e) = self
            .store
            .record_notification(&subscriber.user_id, now, &key)
        {
            return Outcome::Failed(format!("sent but not recorded: {}", e));
        }

        match delivery {
            Delivery::Delivered => Outcome::Sent,
            Delivery::Duplicate => Outcome::Skipped,
        }
    }

    /// Run a batch every interval, handing each report to `on_report`
    ///
    /// Stops after `max_batches` batches; with `None` it loops forever.
    /// Returns the number of batches run.
    pub fn watch<F>(&self, max_batches: Option<usize>, mut on_report: F) -> usize
    where
        F: FnMut(&BatchReport),
    {
        let pause = StdDuration::from_secs(u64::from(self.settings.interval_hours) * 3600);
        let mut runs = 0;

        loop {
            on_report(&self.run_batch(Utc::now()));
            runs += 1;
            if max_batches.map_or(false, |max| runs >= max) {
                return runs;
            }
            tracing::debug!(hours = self.settings.interval_hours, "sleeping until next batch");
            std::thread::sleep(pause);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        subscribers: RefCell<Vec<ReminderSubscriber>>,
        broken: bool,
    }

    impl SubscriberStore for MemoryStore {
        fn enabled_subscribers(&self) -> JournalResult<Vec<ReminderSubscriber>> {
            if self.broken {
                return Err(JournalError::Storage("store offline".into()));
            }
            Ok(self
                .subscribers
                .borrow()
                .iter()
                .filter(|s| s.notifications_enabled)
                .cloned()
                .collect())
        }

        fn record_notification(
            &self,
            user_id: &str,
            sent_at: DateTime<Utc>,
            send_key: &str,
        ) -> JournalResult<()> {
            let mut subscribers = self.subscribers.borrow_mut();
            let subscriber = subscribers
                .iter_mut()
                .find(|s| s.user_id == user_id)
                .ok_or_else(|| JournalError::item_not_found("Subscriber", user_id))?;
            subscriber.last_notification_time = Some(sent_at);
            subscriber.last_send_key = Some(send_key.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingMessenger {
        sent: RefCell<Vec<PushMessage>>,
    }

    impl PushMessenger for RecordingMessenger {
        fn send(&self, message: &PushMessage) -> JournalResult<Delivery> {
            let mut sent = self.sent.borrow_mut();
            if sent.iter().any(|m| m.idempotency_key == message.idempotency_key) {
                return Ok(Delivery::Duplicate);
            }
            sent.push(message.clone());
            Ok(Delivery::Delivered)
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 9, 13, 0, 0).unwrap()
    }

    fn scheduler(
        subscribers: Vec<ReminderSubscriber>,
        settings: ReminderSettings,
    ) -> ReminderScheduler<MemoryStore, RecordingMessenger> {
        let store = MemoryStore {
            subscribers: RefCell::new(subscribers),
            broken: false,
        };
        ReminderScheduler::new(store, RecordingMessenger::default(), settings).unwrap()
    }

    #[test]
    fn test_never_notified_is_due() {
        let scheduler = scheduler(
            vec![ReminderSubscriber::new("u1", Some("tok".into()))],
            ReminderSettings::default(),
        );

        let report = scheduler.run_batch(now());
        assert_eq!(report.outcome_for("u1"), Some(&Outcome::Sent));

        let sent = scheduler.messenger().sent.borrow();
        assert_eq!(sent[0].title, "Time to H.E.A.L.");
        assert_eq!(
            sent[0].body,
            "Ready for your next healing session? Take a moment to continue your journey."
        );
        assert_eq!(sent[0].token, "tok");
    }

    #[test]
    fn test_threshold() {
        let mut recent = ReminderSubscriber::new("recent", Some("a".into()));
        recent.last_notification_time = Some(now() - Duration::hours(3));
        let mut stale = ReminderSubscriber::new("stale", Some("b".into()));
        stale.last_notification_time = Some(now() - Duration::hours(4));

        let scheduler = scheduler(vec![recent, stale], ReminderSettings::default());
        let report = scheduler.run_batch(now());

        assert_eq!(report.outcome_for("recent"), Some(&Outcome::NotDue));
        assert_eq!(report.outcome_for("stale"), Some(&Outcome::Sent));
    }

    #[test]
    fn test_disabled_subscribers_are_ignored() {
        let mut off = ReminderSubscriber::new("off", Some("a".into()));
        off.notifications_enabled = false;

        let scheduler = scheduler(vec![off], ReminderSettings::default());
        let report = scheduler.run_batch(now());
        assert!(report.outcomes.is_empty());
        assert!(scheduler.messenger().sent.borrow().is_empty());
    }

    #[test]
    fn test_missing_token_fails_alone() {
        let scheduler = scheduler(
            vec![
                ReminderSubscriber::new("a", Some("tok-a".into())),
                ReminderSubscriber::new("no-token", None),
                ReminderSubscriber::new("c", Some("tok-c".into())),
            ],
            ReminderSettings::default(),
        );

        let report = scheduler.run_batch(now());
        assert_eq!(report.sent(), 2);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.outcome_for("no-token"),
            Some(Outcome::Failed(_))
        ));
    }

    #[test]
    fn test_second_run_in_same_slot_sends_nothing() {
        let scheduler = scheduler(
            vec![ReminderSubscriber::new("u1", Some("tok".into()))],
            ReminderSettings::default(),
        );

        assert_eq!(scheduler.run_batch(now()).sent(), 1);
        let again = scheduler.run_batch(now() + Duration::minutes(5));
        assert_eq!(again.sent(), 0);
        assert_eq!(scheduler.messenger().sent.borrow().len(), 1);
    }

    #[test]
    fn test_send_key_guards_zero_threshold() {
        let settings = ReminderSettings {
            threshold_hours: 0,
            ..ReminderSettings::default()
        };
        let scheduler = scheduler(
            vec![ReminderSubscriber::new("u1", Some("tok".into()))],
            settings,
        );

        assert_eq!(scheduler.run_batch(now()).sent(), 1);
        let again = scheduler.run_batch(now() + Duration::minutes(5));
        assert_eq!(again.outcome_for("u1"), Some(&Outcome::Skipped));
        assert_eq!(scheduler.messenger().sent.borrow().len(), 1);
    }

    #[test]
    fn test_store_failure_is_reported() {
        let store = MemoryStore {
            broken: true,
            ..MemoryStore::default()
        };
        let scheduler =
            ReminderScheduler::new(store, RecordingMessenger::default(), ReminderSettings::default())
                .unwrap();

        let report = scheduler.run_batch(now());
        assert!(report.error.is_some());
        assert!(report.summary().contains("store offline"));
    }

    #[test]
    fn test_send_key_slots() {
        let a = send_key("u1", now(), 4);
        let b = send_key("u1", now() + Duration::minutes(59), 4);
        let c = send_key("u1", now() + Duration::hours(4), 4);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("u1:"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let settings = ReminderSettings {
            interval_hours: 0,
            ..ReminderSettings::default()
        };
        let result = ReminderScheduler::new(
            MemoryStore::default(),
            RecordingMessenger::default(),
            settings,
        );
        assert!(matches!(result, Err(JournalError::Reminder(_))));
    }

    #[test]
    fn test_watch_runs_requested_batches() {
        let scheduler = scheduler(
            vec![ReminderSubscriber::new("u1", Some("tok".into()))],
            ReminderSettings::default(),
        );
        let mut sent = Vec::new();
        let runs = scheduler.watch(Some(1), |report| sent.push(report.sent()));
        assert_eq!(runs, 1);
        assert_eq!(sent, vec![1]);
    }
}
