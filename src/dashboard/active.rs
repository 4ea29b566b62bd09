use crate::dashboard::catalog::{Widget, WidgetCatalog, WidgetSize};
use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A user-selected instance of a catalog entry. The factory is never stored;
/// it is re-attached on load by joining `kind` against the live catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActiveWidget {
    pub id: String,
    pub kind: String,
    pub size: WidgetSize,
}

/// The set of widgets the user has added to their overview.
///
/// Every mutation is written through to disk immediately, so the durable set
/// never trails what the user saw succeed. A failed write keeps the in-memory
/// mutation and surfaces [`SessionError::Persistence`] to the caller.
pub struct ActiveWidgetSet {
    path: PathBuf,
    widgets: Vec<ActiveWidget>,
}

impl ActiveWidgetSet {
    /// Rehydrate the set from `path`. A missing or corrupt file yields an
    /// empty set; entries whose `kind` is no longer in the catalog are
    /// dropped with a warning.
    pub fn load(path: impl AsRef<Path>, catalog: &WidgetCatalog) -> Self {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        let mut widgets: Vec<ActiveWidget> = if content.trim().is_empty() {
            Vec::new()
        } else {
            match serde_json::from_str(&content) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("failed to parse widget file: {e}; starting empty");
                    Vec::new()
                }
            }
        };
        widgets.retain(|w| {
            if catalog.contains(&w.kind) {
                true
            } else {
                tracing::warn!(kind = %w.kind, "unknown widget kind dropped");
                false
            }
        });
        Self { path, widgets }
    }

    pub fn widgets(&self) -> &[ActiveWidget] {
        &self.widgets
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Add a widget of `kind`, generating a fresh id from the kind and the
    /// creation timestamp. Returns `None` if the kind is not in the catalog.
    ///
    /// On a persistence error the widget is still added in memory.
    pub fn add(
        &mut self,
        catalog: &WidgetCatalog,
        kind: &str,
        size: Option<WidgetSize>,
    ) -> Result<Option<String>, SessionError> {
        let Some(descriptor) = catalog.descriptor(kind) else {
            tracing::warn!(kind, "add ignored: widget kind not in catalog");
            return Ok(None);
        };
        let id = self.fresh_id(kind);
        self.widgets.push(ActiveWidget {
            id: id.clone(),
            kind: kind.to_string(),
            size: size.unwrap_or_else(|| descriptor.default_size()),
        });
        self.save()?;
        Ok(Some(id))
    }

    /// Remove the widget with `id` and persist the set. Removing an unknown
    /// id is a no-op.
    pub fn remove(&mut self, id: &str) -> Result<(), SessionError> {
        let before = self.widgets.len();
        self.widgets.retain(|w| w.id != id);
        if self.widgets.len() == before {
            return Ok(());
        }
        self.save()
    }

    /// Instantiate every active widget through the catalog, in display order.
    /// Resolution cannot fail here: unresolvable kinds were dropped at load
    /// and `add` rejects kinds outside the catalog.
    pub fn instantiate(&self, catalog: &WidgetCatalog) -> Vec<(String, Box<dyn Widget>)> {
        self.widgets
            .iter()
            .filter_map(|w| catalog.create(&w.kind).map(|widget| (w.id.clone(), widget)))
            .collect()
    }

    fn fresh_id(&self, kind: &str) -> String {
        let mut ts = chrono::Utc::now().timestamp_millis();
        loop {
            let id = format!("{kind}-{ts}");
            if !self.widgets.iter().any(|w| w.id == id) {
                return id;
            }
            ts += 1;
        }
    }

    fn save(&self) -> Result<(), SessionError> {
        let write = || -> anyhow::Result<()> {
            let json = serde_json::to_string_pretty(&self.widgets)?;
            std::fs::write(&self.path, json)?;
            Ok(())
        };
        write().map_err(|e| {
            tracing::warn!("widget persistence failed: {e}");
            SessionError::Persistence(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::catalog::WidgetCatalog;

    #[test]
    fn ids_stay_unique_for_rapid_adds_of_one_kind() {
        let catalog = WidgetCatalog::with_defaults();
        let dir = tempfile::tempdir().unwrap();
        let mut set = ActiveWidgetSet::load(dir.path().join("widgets.json"), &catalog);
        for _ in 0..10 {
            set.add(&catalog, "note_pad", None).unwrap();
        }
        let mut ids: Vec<&str> = set.widgets().iter().map(|w| w.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
