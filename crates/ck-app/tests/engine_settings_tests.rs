//! Settings validation and application.

mod support;

use ck_core::{EngineError, Settings};

use support::{initialized_engine, text_item};

#[tokio::test]
async fn out_of_range_settings_are_rejected_untouched() {
    let (engine, ports) = initialized_engine().await;
    let held = engine.settings().await;

    let mut bad = Settings::default();
    bad.retention.max_history_items = 0;
    let err = engine.save_settings(bad).await.unwrap_err();
    assert!(matches!(err, EngineError::SettingsRangeInvalid(_)));

    assert_eq!(engine.settings().await, held);
    assert_eq!(
        ports
            .settings_repo
            .save_count
            .load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn malformed_shortcut_is_rejected() {
    let (engine, _ports) = initialized_engine().await;

    let mut bad = Settings::default();
    bad.interaction.hotkey = "NotAKey++".to_string();
    let err = engine.save_settings(bad).await.unwrap_err();
    assert!(matches!(err, EngineError::SettingsShortcutInvalid(_)));
}

#[tokio::test]
async fn accepted_settings_are_persisted() {
    let (engine, ports) = initialized_engine().await;

    let mut settings = Settings::default();
    settings.retention.max_history_items = 77;
    engine.save_settings(settings.clone()).await.unwrap();

    assert_eq!(engine.settings().await, settings);
    assert_eq!(*ports.settings_repo.settings.lock().unwrap(), settings);
}

#[tokio::test]
async fn shrinking_the_limit_truncates_history_immediately() {
    let (engine, _ports) = initialized_engine().await;

    for n in 0..30 {
        engine.capture(text_item(&format!("item-{n}"))).await.unwrap();
    }
    assert_eq!(engine.clipboard_items().await.len(), 30);

    let mut settings = Settings::default();
    settings.retention.max_history_items = 10;
    engine.save_settings(settings).await.unwrap();

    let items = engine.clipboard_items().await;
    assert_eq!(items.len(), 10);
    // Newest entries survive the truncation.
    assert_eq!(items[0].as_text(), Some("item-29"));
    assert_eq!(items[9].as_text(), Some("item-20"));
}

#[tokio::test]
async fn rich_text_preference_reaches_a_running_monitor() {
    let (engine, ports) = initialized_engine().await;
    engine.start_runtime().await.unwrap();
    assert_eq!(*ports.monitor.rich_text.lock().unwrap(), Some(true));

    let mut settings = Settings::default();
    settings.capture.capture_rich_text = false;
    engine.save_settings(settings).await.unwrap();

    assert_eq!(*ports.monitor.rich_text.lock().unwrap(), Some(false));
}

#[tokio::test]
async fn toggling_encryption_reencrypts_on_next_flush() {
    let (engine, ports) = initialized_engine().await;

    engine.capture(text_item("payload")).await.unwrap();
    engine.flush_settled().await;
    assert!(matches!(
        ports.history_repo.saved_document(),
        Some(ck_core::HistoryDocument::Plain { .. })
    ));

    let mut settings = Settings::default();
    settings.security.encrypt_history = true;
    engine.save_settings(settings).await.unwrap();
    engine.flush_settled().await;

    assert!(matches!(
        ports.history_repo.saved_document(),
        Some(ck_core::HistoryDocument::Encrypted { .. })
    ));
}
