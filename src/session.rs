use crate::breaks::BreakScheduler;
use crate::dashboard::active::{ActiveWidget, ActiveWidgetSet};
use crate::dashboard::catalog::{Widget, WidgetCatalog, WidgetSize};
use crate::error::SessionError;
use crate::mode::{ModeGate, ModeMachine, ModeState, PasscodePrompt};
use crate::nav::NavState;
use crate::settings::Settings;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
pub const WIDGETS_FILE: &str = "widgets.json";

/// Composition point for the dashboard session state: navigation, operating
/// mode, the persisted widget set and the break scheduler, all driven from a
/// single cooperative thread by the presentation layer.
pub struct Session {
    settings: Settings,
    settings_path: PathBuf,
    catalog: WidgetCatalog,
    widgets: ActiveWidgetSet,
    breaks: BreakScheduler,
    mode: ModeMachine,
    nav: NavState,
}

impl Session {
    /// Restore a session from the settings and widget files under `dir`.
    /// Missing or corrupt files fall back to defaults; startup never fails
    /// on account of stale state.
    pub fn load(dir: impl AsRef<Path>, catalog: WidgetCatalog) -> Self {
        let dir = dir.as_ref();
        let settings_path = dir.join(SETTINGS_FILE);
        let settings = Settings::load(&settings_path).unwrap_or_else(|e| {
            tracing::warn!("failed to load settings: {e}; using defaults");
            Settings::default()
        });
        let widgets = ActiveWidgetSet::load(dir.join(WIDGETS_FILE), &catalog);
        Self {
            settings,
            settings_path,
            catalog,
            widgets,
            breaks: BreakScheduler::new(),
            mode: ModeMachine::default(),
            nav: NavState::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &WidgetCatalog {
        &self.catalog
    }

    pub fn widgets(&self) -> &[ActiveWidget] {
        self.widgets.widgets()
    }

    /// Instantiate the active widgets for rendering, factories re-attached
    /// from the catalog.
    pub fn instantiate_widgets(&self) -> Vec<(String, Box<dyn Widget>)> {
        self.widgets.instantiate(&self.catalog)
    }

    pub fn mode(&self) -> ModeState {
        self.mode.mode()
    }

    pub fn is_kids_mode(&self) -> bool {
        self.mode.is_kids_mode()
    }

    pub fn passcode_prompt(&self) -> PasscodePrompt {
        self.mode.prompt()
    }

    pub fn active_tab(&self) -> &str {
        self.nav.active_tab()
    }

    pub fn active_sub_tab(&self) -> Option<&str> {
        self.nav.active_sub_tab()
    }

    pub fn break_due(&self) -> bool {
        self.breaks.due()
    }

    pub fn monitoring_active(&self) -> bool {
        self.breaks.monitoring_active()
    }

    /// Add a widget from the catalog to the overview. Returns the new id, or
    /// `None` when the kind is unknown.
    pub fn add_widget(
        &mut self,
        kind: &str,
        size: Option<WidgetSize>,
    ) -> Result<Option<String>, SessionError> {
        self.widgets.add(&self.catalog, kind, size)
    }

    /// Remove a widget from the overview. Idempotent.
    pub fn remove_widget(&mut self, id: &str) -> Result<(), SessionError> {
        self.widgets.remove(id)
    }

    pub fn select_tab(&mut self, tab: &str) {
        let kids = self.mode.is_kids_mode();
        self.nav.select_tab(tab, kids);
    }

    pub fn select_sub_tab(&mut self, sub_tab: &str) {
        let kids = self.mode.is_kids_mode();
        self.nav.select_sub_tab(sub_tab, kids);
    }

    /// The mode-switch button was pressed. Engages kids mode (and pins
    /// navigation) in standard mode; opens the passcode prompt in kids mode.
    pub fn switch_mode(&mut self, gate: &mut dyn ModeGate) -> Result<(), SessionError> {
        self.mode.request_switch(gate, &mut self.nav)
    }

    pub fn passcode_accepted(&mut self, gate: &mut dyn ModeGate) -> Result<(), SessionError> {
        self.mode.passcode_accepted(gate)
    }

    pub fn passcode_cancelled(&mut self) {
        self.mode.passcode_cancelled();
    }

    /// Start or stop monitoring. When monitoring first starts with no break
    /// on record, the clock starts counting from `now` rather than firing a
    /// reminder immediately.
    pub fn set_monitoring_active(&mut self, active: bool, now: i64) {
        if active && self.settings.break_reminder.last_break_at == 0 {
            self.settings.break_reminder.last_break_at = now;
            self.save_settings();
        }
        self.breaks.set_monitoring_active(active);
    }

    /// Per-minute evaluation tick. Returns whether the break interstitial
    /// should currently be shown.
    pub fn tick(&mut self, now: i64) -> bool {
        self.breaks.tick(&self.settings.break_reminder, now)
    }

    pub fn take_break(&mut self, now: i64) {
        self.breaks
            .take_break(&mut self.settings.break_reminder, now);
        self.save_settings();
    }

    pub fn snooze_break(&mut self, now: i64) {
        self.breaks.snooze(&mut self.settings.break_reminder, now);
        self.save_settings();
    }

    pub fn set_break_reminder_enabled(&mut self, enabled: bool) {
        self.settings.break_reminder.enabled = enabled;
        self.save_settings();
    }

    pub fn set_break_interval_minutes(&mut self, minutes: u32) {
        self.settings.break_reminder.interval_minutes = minutes.max(1);
        self.save_settings();
    }

    // Settings persistence failures degrade to in-memory only, like the
    // widget set.
    fn save_settings(&self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::warn!("failed to save settings: {e}");
        }
    }
}
