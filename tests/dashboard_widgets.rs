use focus_dash::dashboard::active::ActiveWidgetSet;
use focus_dash::dashboard::catalog::{WidgetCatalog, WidgetDescriptor, WidgetSize};
use focus_dash::dashboard::widgets::NotePadWidget;
use focus_dash::SessionError;
use tempfile::tempdir;

#[test]
fn missing_file_yields_empty_set() {
    let dir = tempdir().unwrap();
    let catalog = WidgetCatalog::with_defaults();
    let set = ActiveWidgetSet::load(dir.path().join("widgets.json"), &catalog);
    assert!(set.is_empty());
}

#[test]
fn corrupt_file_yields_empty_set() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    std::fs::write(&path, "{not json").unwrap();
    let catalog = WidgetCatalog::with_defaults();
    let set = ActiveWidgetSet::load(&path, &catalog);
    assert!(set.is_empty());
}

#[test]
fn set_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    let catalog = WidgetCatalog::with_defaults();

    let mut set = ActiveWidgetSet::load(&path, &catalog);
    let note_id = set.add(&catalog, "note_pad", None).unwrap().unwrap();
    let timer_id = set
        .add(&catalog, "focus_timer", Some(WidgetSize::Large))
        .unwrap()
        .unwrap();

    let reloaded = ActiveWidgetSet::load(&path, &catalog);
    assert_eq!(reloaded.widgets(), set.widgets());
    let ids: Vec<&str> = reloaded.widgets().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec![note_id.as_str(), timer_id.as_str()]);
    assert_eq!(reloaded.widgets()[1].size, WidgetSize::Large);
}

#[test]
fn add_uses_catalog_default_size() {
    let dir = tempdir().unwrap();
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(dir.path().join("widgets.json"), &catalog);
    set.add(&catalog, "focus_timer", None).unwrap();
    assert_eq!(set.widgets()[0].size, WidgetSize::Small);
}

#[test]
fn add_of_unknown_kind_is_rejected() {
    let dir = tempdir().unwrap();
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(dir.path().join("widgets.json"), &catalog);
    let id = set.add(&catalog, "does_not_exist", None).unwrap();
    assert!(id.is_none());
    assert!(set.is_empty());
}

#[test]
fn entries_no_longer_in_catalog_are_dropped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    std::fs::write(
        &path,
        r#"[
            {"id": "note_pad-1", "kind": "note_pad", "size": "medium"},
            {"id": "weather-2", "kind": "weather", "size": "small"}
        ]"#,
    )
    .unwrap();
    let catalog = WidgetCatalog::with_defaults();
    let set = ActiveWidgetSet::load(&path, &catalog);
    assert_eq!(set.widgets().len(), 1);
    assert_eq!(set.widgets()[0].kind, "note_pad");
}

#[test]
fn remove_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(&path, &catalog);
    let id = set.add(&catalog, "note_pad", None).unwrap().unwrap();
    set.add(&catalog, "focus_timer", None).unwrap();

    set.remove(&id).unwrap();
    let after_first: Vec<_> = set.widgets().to_vec();
    set.remove(&id).unwrap();
    assert_eq!(set.widgets(), after_first.as_slice());
    assert_eq!(set.widgets().len(), 1);

    let reloaded = ActiveWidgetSet::load(&path, &catalog);
    assert_eq!(reloaded.widgets().len(), 1);
}

#[test]
fn factories_are_reattached_by_kind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(&path, &catalog);
    set.add(&catalog, "focus_timer", None).unwrap();
    set.add(&catalog, "note_pad", None).unwrap();

    let reloaded = ActiveWidgetSet::load(&path, &catalog);
    let instances = reloaded.instantiate(&catalog);
    let kinds: Vec<&str> = instances.iter().map(|(_, w)| w.kind()).collect();
    assert_eq!(kinds, vec!["focus_timer", "note_pad"]);
}

#[test]
fn persisted_form_excludes_factories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("widgets.json");
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(&path, &catalog);
    set.add(&catalog, "note_pad", None).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &raw.as_array().unwrap()[0];
    let mut keys: Vec<&str> = entry.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["id", "kind", "size"]);
}

#[test]
fn failed_persistence_keeps_in_memory_mutation() {
    let dir = tempdir().unwrap();
    // Point the set at a path whose parent directory does not exist so every
    // write fails.
    let path = dir.path().join("missing").join("widgets.json");
    let catalog = WidgetCatalog::with_defaults();
    let mut set = ActiveWidgetSet::load(&path, &catalog);

    let err = set.add(&catalog, "note_pad", None).unwrap_err();
    assert!(matches!(err, SessionError::Persistence(_)));
    assert_eq!(set.widgets().len(), 1);
}

#[test]
fn environment_supplied_catalog_entries_resolve() {
    let dir = tempdir().unwrap();
    let mut catalog = WidgetCatalog::default();
    catalog.register(
        "scratch",
        WidgetDescriptor::new::<NotePadWidget>("Scratch", WidgetSize::Large),
    );
    let mut set = ActiveWidgetSet::load(dir.path().join("widgets.json"), &catalog);
    let id = set.add(&catalog, "scratch", None).unwrap();
    assert!(id.is_some());
    assert_eq!(set.widgets()[0].size, WidgetSize::Large);
}
