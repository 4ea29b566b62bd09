/// Top-level dashboard section and its fixed sub-sections.
pub struct TabDef {
    pub id: &'static str,
    pub sub_tabs: &'static [&'static str],
}

/// Tab the session is pinned to while kids mode is engaged.
pub const RESTRICTED_TAB: &str = "kids";

pub const TABS: &[TabDef] = &[
    TabDef {
        id: "overview",
        sub_tabs: &[],
    },
    TabDef {
        id: "monitoring",
        sub_tabs: &["activity", "applications", "websites"],
    },
    TabDef {
        id: "goals",
        sub_tabs: &[],
    },
    TabDef {
        id: "kids",
        sub_tabs: &[],
    },
    TabDef {
        id: "settings",
        sub_tabs: &[],
    },
];

/// Which top-level section and sub-section is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    active_tab: String,
    active_sub_tab: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_tab: "overview".into(),
            active_sub_tab: None,
        }
    }
}

impl NavState {
    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn active_sub_tab(&self) -> Option<&str> {
        self.active_sub_tab.as_deref()
    }

    /// Switch to `tab`. Unknown tabs and, while kids mode is engaged, any
    /// tab other than the restricted one are silent no-ops.
    pub fn select_tab(&mut self, tab: &str, kids_mode: bool) {
        if kids_mode && tab != RESTRICTED_TAB {
            tracing::debug!(tab, "tab change rejected while kids mode engaged");
            return;
        }
        let Some(def) = tab_def(tab) else {
            tracing::debug!(tab, "unknown tab ignored");
            return;
        };
        self.active_tab = def.id.to_string();
        self.active_sub_tab = def.sub_tabs.first().map(|s| s.to_string());
    }

    /// Switch the sub-section of the active tab. Membership is deliberately
    /// not validated: an unknown sub-tab id simply renders nothing, matching
    /// unknown-route semantics.
    pub fn select_sub_tab(&mut self, sub_tab: &str, kids_mode: bool) {
        if kids_mode && self.active_tab != RESTRICTED_TAB {
            tracing::debug!(sub_tab, "sub-tab change rejected while kids mode engaged");
            return;
        }
        self.active_sub_tab = Some(sub_tab.to_string());
    }

    /// Pin navigation to the restricted section. Called by the mode cascade
    /// only; navigation never drives mode.
    pub(crate) fn force_restricted(&mut self) {
        self.active_tab = RESTRICTED_TAB.to_string();
        self.active_sub_tab = tab_def(RESTRICTED_TAB)
            .and_then(|d| d.sub_tabs.first())
            .map(|s| s.to_string());
    }
}

fn tab_def(tab: &str) -> Option<&'static TabDef> {
    TABS.iter().find(|t| t.id == tab)
}
