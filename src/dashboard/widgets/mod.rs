mod focus_timer;
mod note_pad;

pub use focus_timer::FocusTimerWidget;
pub use note_pad::NotePadWidget;
