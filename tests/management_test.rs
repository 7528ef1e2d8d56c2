mod common;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use common::artist;
use spolib::management::*;
use spolib::types::{SortColumn, SortDirection, Theme, User};
use spolib::ui::Route;

#[test]
fn test_signal_notifies_subscribers() {
    let signal = Signal::new(1);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = signal.subscribe(move |v| sink.lock().unwrap().push(*v));

    signal.set(2);
    signal.update(|v| *v += 10);

    assert_eq!(*seen.lock().unwrap(), vec![2, 12]);
    assert_eq!(signal.get(), 12);
}

#[test]
fn test_dropping_subscription_unsubscribes() {
    let signal = Signal::new(0);
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let sub = signal.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    signal.set(1);
    drop(sub);
    signal.set(2);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(signal.subscriber_count(), 0);
}

#[test]
fn test_listener_may_read_signal() {
    let signal = Signal::new(String::from("a"));
    let reader = signal.clone();
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&seen);
    let _sub = signal.subscribe(move |_| *sink.lock().unwrap() = reader.get());

    signal.set("b".to_string());
    assert_eq!(*seen.lock().unwrap(), "b");
}

#[test]
fn test_scope_releases_every_subscription_once() {
    let signal = Signal::new(0);
    let calls = Arc::new(AtomicUsize::new(0));

    let mut scope = Scope::new();
    for _ in 0..3 {
        let counter = Arc::clone(&calls);
        scope.add(signal.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
    }
    assert_eq!(scope.len(), 3);
    assert_eq!(signal.subscriber_count(), 3);

    signal.set(1);
    scope.teardown();
    signal.set(2);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(signal.subscriber_count(), 0);
}

#[test]
fn test_subscription_outliving_signal_is_harmless() {
    let signal = Signal::new(0);
    let sub = signal.subscribe(|_| {});
    drop(signal);
    sub.unsubscribe();
}

#[test]
fn test_store_derived_views() {
    let store = LibraryStore::new(Some(vec![
        artist("1", "Muse", 12),
        artist("2", "Air", 3),
        artist("3", "Blur", 7),
    ]));

    assert_eq!(store.totals().total_artists, 3);
    assert_eq!(store.totals().total_tracks, 22);
    assert_eq!(store.top(1)[0].name, "Muse");

    let page = store.view("u", SortColumn::Name, SortDirection::Asc, 1, 10);
    assert_eq!(
        page.items.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["Blur", "Muse"]
    );
    assert_eq!(store.find("air").map(|a| a.id), Some("2".to_string()));
}

#[test]
fn test_store_replace_and_remove_notify() {
    let store = LibraryStore::default();
    let sizes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&sizes);
    let _sub = store.subscribe(move |list| sink.lock().unwrap().push(list.len()));

    store.replace(vec![artist("1", "Muse", 1), artist("2", "Air", 2)]);
    store.remove("1");
    store.remove("unknown");

    assert_eq!(*sizes.lock().unwrap(), vec![2, 1, 1]);
    assert_eq!(store.count_artists(), 1);
    assert_eq!(store.snapshot()[0].name, "Air");
}

#[test]
fn test_guard_redirects_unless_authenticated() {
    assert_eq!(guard(&AuthState::Authenticated(None)), Navigation::Proceed);
    assert_eq!(guard(&AuthState::Unknown), Navigation::Redirect(Route::Login));
    assert_eq!(
        guard(&AuthState::Unauthenticated),
        Navigation::Redirect(Route::Login)
    );
}

#[test]
fn test_session_lifecycle_and_advisory_flag() {
    let prefs = Preferences {
        authenticated: true,
        ..Preferences::default()
    };
    let session = Session::restore(&prefs);
    assert_eq!(session.state(), AuthState::Unknown);
    assert!(!session.is_authenticated());
    assert!(session.advisory_flag());

    let user = User {
        id: "u1".to_string(),
        display_name: Some("Ada".to_string()),
        email: None,
    };
    session.mark_authenticated(Some(user.clone()));
    assert_eq!(session.guard(), Navigation::Proceed);
    assert_eq!(session.user(), Some(user));

    session.force_logout();
    assert_eq!(session.state(), AuthState::Unauthenticated);
    assert!(!session.advisory_flag());
    assert_eq!(session.guard(), Navigation::Redirect(Route::Login));
}

#[test]
fn test_operation_log_keeps_only_last() {
    use spolib::types::PlaylistAction;

    let log = OperationLog::new();
    assert!(log.last().is_none());

    log.record("p1", PlaylistAction::ClearPlaylist);
    log.record("p2", PlaylistAction::ClearPlaylistAndLibrary);

    let last = log.last().unwrap();
    assert_eq!(last.playlist_id, "p2");
    assert_eq!(last.action, PlaylistAction::ClearPlaylistAndLibrary);
}

#[tokio::test]
async fn test_preferences_persist_and_load() {
    let path = std::env::temp_dir().join(format!(
        "spolib-test-{}-{}/preferences.json",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));

    let mut mgr = PreferencesManager::new(Some(path.clone()), None);
    mgr.set_theme(Theme::Light)
        .set_authenticated(true)
        .set_cookies(vec!["sid=abc".to_string()]);
    mgr.persist().await.unwrap();

    let loaded = PreferencesManager::load(Some(path.clone())).await.unwrap();
    assert_eq!(loaded.theme(), Theme::Light);
    assert!(loaded.get().authenticated);
    assert_eq!(loaded.get().cookies, vec!["sid=abc".to_string()]);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_preferences_default_when_missing() {
    let path = std::env::temp_dir().join("spolib-test-missing/none.json");
    assert!(PreferencesManager::load(Some(path.clone())).await.is_err());

    let mgr = PreferencesManager::load_or_default(Some(path)).await;
    assert_eq!(mgr.get(), &Preferences::default());
    assert_eq!(mgr.theme(), Theme::Dark);
}
