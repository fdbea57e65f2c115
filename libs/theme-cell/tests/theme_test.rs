use std::sync::Arc;

use assert_matches::assert_matches;

use shared_dom::stubs::{InMemoryPreferenceStore, StubThemeSink};
use shared_dom::{PreferenceStore, ThemeSink};
use theme_cell::{FilePreferenceStore, Theme, ThemeIcon, ThemeService, THEME_PREFERENCE_KEY};

fn service_with_store(store: InMemoryPreferenceStore) -> (Arc<StubThemeSink>, ThemeService) {
    let sink = Arc::new(StubThemeSink::new());
    let service = ThemeService::new(
        Arc::new(store) as Arc<dyn PreferenceStore>,
        Arc::clone(&sink) as Arc<dyn ThemeSink>,
    );
    (sink, service)
}

#[test]
fn init_defaults_to_light_when_nothing_is_stored() {
    let (sink, service) = service_with_store(InMemoryPreferenceStore::new());

    let theme = service.init().expect("init should succeed");

    assert_eq!(theme, Theme::Light);
    assert_eq!(service.current(), Theme::Light);
    assert_eq!(sink.last_applied().as_deref(), Some("light"));
    assert_eq!(service.icon(), ThemeIcon::Moon);
}

#[test]
fn init_restores_a_persisted_dark_preference() {
    let (sink, service) = service_with_store(InMemoryPreferenceStore::with_value(
        THEME_PREFERENCE_KEY,
        "dark",
    ));

    let theme = service.init().expect("init should succeed");

    assert_eq!(theme, Theme::Dark);
    assert_eq!(sink.last_applied().as_deref(), Some("dark"));
    assert_eq!(service.icon(), ThemeIcon::Sun);
}

#[test]
fn unrecognized_stored_value_falls_back_to_light() {
    let (_, service) = service_with_store(InMemoryPreferenceStore::with_value(
        THEME_PREFERENCE_KEY,
        "solarized",
    ));

    assert_eq!(service.init().expect("init should succeed"), Theme::Light);
}

#[test]
fn toggle_applies_and_persists_the_new_theme() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let sink = Arc::new(StubThemeSink::new());
    let service = ThemeService::new(
        Arc::clone(&store) as Arc<dyn PreferenceStore>,
        Arc::clone(&sink) as Arc<dyn ThemeSink>,
    );
    service.init().expect("init should succeed");

    let theme = service.toggle().expect("toggle should succeed");
    assert_eq!(theme, Theme::Dark);
    assert_eq!(sink.last_applied().as_deref(), Some("dark"));
    assert_eq!(
        store
            .load(THEME_PREFERENCE_KEY)
            .expect("load should succeed")
            .as_deref(),
        Some("dark")
    );

    let theme = service.toggle().expect("toggle should succeed");
    assert_eq!(theme, Theme::Light);
    assert_eq!(sink.applied(), ["light", "dark", "light"]);
}

#[test]
fn icon_classes_match_the_page_toggle() {
    assert_eq!(ThemeIcon::Sun.class_name(), "fas fa-sun");
    assert_eq!(ThemeIcon::Moon.class_name(), "fas fa-moon");
}

#[test]
fn file_store_round_trips_the_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    let store = FilePreferenceStore::new(&path);

    assert_matches!(store.load(THEME_PREFERENCE_KEY), Ok(None));

    store
        .save(THEME_PREFERENCE_KEY, "dark")
        .expect("save should succeed");

    let reopened = FilePreferenceStore::new(&path);
    assert_eq!(
        reopened
            .load(THEME_PREFERENCE_KEY)
            .expect("load should succeed")
            .as_deref(),
        Some("dark")
    );
}

#[test]
fn file_store_keeps_other_flags_on_save() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    let store = FilePreferenceStore::new(&path);

    store.save("other", "value").expect("save should succeed");
    store
        .save(THEME_PREFERENCE_KEY, "dark")
        .expect("save should succeed");

    assert_eq!(
        store.load("other").expect("load should succeed").as_deref(),
        Some("value")
    );
}

#[test]
fn theme_service_over_a_file_store_persists_across_instances() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");

    {
        let service = ThemeService::new(
            Arc::new(FilePreferenceStore::new(&path)) as Arc<dyn PreferenceStore>,
            Arc::new(StubThemeSink::new()) as Arc<dyn ThemeSink>,
        );
        service.init().expect("init should succeed");
        service.toggle().expect("toggle should succeed");
    }

    let service = ThemeService::new(
        Arc::new(FilePreferenceStore::new(&path)) as Arc<dyn PreferenceStore>,
        Arc::new(StubThemeSink::new()) as Arc<dyn ThemeSink>,
    );
    assert_eq!(service.init().expect("init should succeed"), Theme::Dark);
}
