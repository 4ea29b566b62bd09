use crate::dashboard::catalog::Widget;

/// Free-form scratch pad panel. Content is managed by the presentation layer.
#[derive(Default)]
pub struct NotePadWidget;

impl Widget for NotePadWidget {
    fn kind(&self) -> &'static str {
        "note_pad"
    }
}
