use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::dashboard::widgets::{FocusTimerWidget, NotePadWidget};

/// Display footprint of a widget on the overview grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// An instantiable overview panel. Concrete behaviour lives with the
/// presentation layer; the engine only creates these through the catalog.
pub trait Widget: Send {
    fn kind(&self) -> &'static str;
}

/// Catalog entry: how to build a widget of one kind and how it is displayed
/// before the user customises anything.
#[derive(Clone)]
pub struct WidgetDescriptor {
    title: String,
    size: WidgetSize,
    ctor: Arc<dyn Fn() -> Box<dyn Widget> + Send + Sync>,
}

impl WidgetDescriptor {
    pub fn new<T: Widget + Default + 'static>(title: &str, size: WidgetSize) -> Self {
        Self {
            title: title.to_string(),
            size,
            ctor: Arc::new(|| Box::new(T::default())),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn default_size(&self) -> WidgetSize {
        self.size
    }

    pub fn create(&self) -> Box<dyn Widget> {
        (self.ctor)()
    }
}

/// Environment-supplied map from widget kind to descriptor. Built once at
/// startup and never mutated by the engine afterwards.
#[derive(Clone, Default)]
pub struct WidgetCatalog {
    map: HashMap<String, WidgetDescriptor>,
}

impl WidgetCatalog {
    pub fn with_defaults() -> Self {
        let mut catalog = Self::default();
        catalog.register(
            "note_pad",
            WidgetDescriptor::new::<NotePadWidget>("Notes", WidgetSize::Medium),
        );
        catalog.register(
            "focus_timer",
            WidgetDescriptor::new::<FocusTimerWidget>("Focus timer", WidgetSize::Small),
        );
        catalog
    }

    pub fn register(&mut self, kind: &str, descriptor: WidgetDescriptor) {
        self.map.insert(kind.to_string(), descriptor);
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.map.contains_key(kind)
    }

    pub fn descriptor(&self, kind: &str) -> Option<&WidgetDescriptor> {
        self.map.get(kind)
    }

    pub fn create(&self, kind: &str) -> Option<Box<dyn Widget>> {
        self.map.get(kind).map(|d| d.create())
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.keys().cloned().collect();
        names.sort();
        names
    }
}
