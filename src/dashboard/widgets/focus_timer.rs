use crate::dashboard::catalog::Widget;

/// Simple countdown panel for focused work sessions.
#[derive(Default)]
pub struct FocusTimerWidget;

impl Widget for FocusTimerWidget {
    fn kind(&self) -> &'static str {
        "focus_timer"
    }
}
