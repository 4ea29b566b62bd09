use crate::settings::BreakReminderConfig;

/// Dismissing a reminder defers it by five minutes, independent of the
/// configured interval.
pub const SNOOZE_SECS: i64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BreakState {
    #[default]
    Idle,
    Due,
}

/// Decides when the break interstitial should interrupt the user.
///
/// The scheduler never owns the reminder configuration; it reads it on every
/// tick and writes `last_break_at` back through the caller's copy. Ticks are
/// externally driven (once per wall-clock minute) with `now` injected, so
/// tests control the clock.
#[derive(Debug, Default)]
pub struct BreakScheduler {
    state: BreakState,
    monitoring_active: bool,
}

impl BreakScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend or resume evaluation. `last_break_at` is left untouched, so a
    /// long pause does not by itself trigger a reminder on resume.
    pub fn set_monitoring_active(&mut self, active: bool) {
        self.monitoring_active = active;
    }

    pub fn monitoring_active(&self) -> bool {
        self.monitoring_active
    }

    /// True while the presentation layer should show the break interstitial.
    pub fn due(&self) -> bool {
        self.state == BreakState::Due
    }

    /// Periodic evaluation. Once due, the flag stays set until `take_break`
    /// or `snooze` clears it; while monitoring is off or reminders are
    /// disabled the elapsed-time check is skipped entirely.
    pub fn tick(&mut self, cfg: &BreakReminderConfig, now: i64) -> bool {
        if !self.monitoring_active || !cfg.enabled {
            return self.due();
        }
        if self.state == BreakState::Idle && now - cfg.last_break_at >= cfg.interval_seconds() {
            tracing::debug!(elapsed = now - cfg.last_break_at, "break reminder due");
            self.state = BreakState::Due;
        }
        self.due()
    }

    /// The user took the break: the full interval restarts from `now`.
    pub fn take_break(&mut self, cfg: &mut BreakReminderConfig, now: i64) {
        cfg.last_break_at = now;
        self.state = BreakState::Idle;
    }

    /// The user dismissed the reminder: defer, don't cancel. The next due
    /// check fires five minutes from `now` regardless of the interval.
    pub fn snooze(&mut self, cfg: &mut BreakReminderConfig, now: i64) {
        cfg.last_break_at = now - cfg.interval_seconds() + SNOOZE_SECS;
        self.state = BreakState::Idle;
    }
}
