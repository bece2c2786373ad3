//! End-to-end dispatch flows over real on-disk pack files.

use std::io::Write;
use std::path::PathBuf;

use emojihub::adapter::mock::MockEvent;
use emojihub::config::{EmojiEntry, EmojiHubConfig, SessionScope};
use emojihub::hub::{EmojiHub, messages};

fn pack_file(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    path
}

fn hub(entries: Vec<EmojiEntry>) -> EmojiHub {
    EmojiHub::new(EmojiHubConfig {
        emojis: entries,
        session_scope: SessionScope::User,
    })
    .unwrap()
}

fn entry(command: &str, source: PathBuf) -> EmojiEntry {
    EmojiEntry {
        command: command.to_string(),
        source,
    }
}

#[tokio::test]
async fn ambient_match_delivers_with_and_without_slash() {
    let dir = tempfile::tempdir().unwrap();
    let mygo = pack_file(&dir, "mygo.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("mygo", mygo)]);

    for text in ["mygo", "/mygo"] {
        let event = MockEvent::new(text);
        hub.handle_message(&event).await.unwrap();
        assert_eq!(event.images(), vec!["https://foo.com/a.png"]);
        assert!(event.texts().is_empty());
    }
}

#[tokio::test]
async fn near_miss_text_triggers_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mygo = pack_file(&dir, "mygo.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("mygo", mygo)]);

    for text in ["mygos", "my go", "//mygo", "mygo extra"] {
        let event = MockEvent::new(text);
        hub.handle_message(&event).await.unwrap();
        assert!(event.replies().is_empty(), "{text:?} should not dispatch");
    }
}

#[tokio::test]
async fn urls_are_normalized_on_delivery() {
    let dir = tempfile::tempdir().unwrap();
    let doubled = pack_file(&dir, "doubled.txt", &["https:https://example.com/x"]);
    let bare = pack_file(&dir, "bare.txt", &["abc/123.jpg"]);
    let hub = hub(vec![entry("doubled", doubled), entry("bare", bare)]);

    let event = MockEvent::new("doubled");
    hub.handle_message(&event).await.unwrap();
    assert_eq!(event.images(), vec!["https://example.com/x"]);

    let event = MockEvent::new("bare");
    hub.handle_message(&event).await.unwrap();
    assert_eq!(event.images(), vec!["https://i0.hdslb.com/bfs/abc/123.jpg"]);
}

#[tokio::test]
async fn unreadable_source_becomes_retry_text() {
    let dir = tempfile::tempdir().unwrap();
    let hub = hub(vec![entry("mygo", dir.path().join("absent.txt"))]);

    let event = MockEvent::new("mygo");
    hub.handle_message(&event).await.unwrap();

    assert!(event.images().is_empty());
    assert_eq!(event.texts(), vec![messages::FETCH_FAILED]);
}

#[tokio::test]
async fn onemore_without_history_gives_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let mygo = pack_file(&dir, "mygo.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("mygo", mygo)]);

    let event = MockEvent::new("onemore").with_user("S");
    hub.handle_onemore(&event).await.unwrap();

    assert_eq!(event.texts(), vec![messages::NO_PRIOR_COMMAND]);
    assert!(event.images().is_empty());
}

#[tokio::test]
async fn onemore_repeats_only_in_the_same_session() {
    let dir = tempfile::tempdir().unwrap();
    let mygo = pack_file(&dir, "mygo.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("mygo", mygo)]);

    let dispatch = MockEvent::new("mygo").with_user("S");
    hub.handle_message(&dispatch).await.unwrap();

    let again = MockEvent::new("onemore").with_user("S");
    hub.handle_onemore(&again).await.unwrap();
    assert_eq!(again.images(), vec!["https://foo.com/a.png"]);

    let untouched = MockEvent::new("onemore").with_user("T");
    hub.handle_onemore(&untouched).await.unwrap();
    assert_eq!(untouched.texts(), vec![messages::NO_PRIOR_COMMAND]);
}

#[tokio::test]
async fn onemore_with_stale_command_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mygo = pack_file(&dir, "mygo.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("mygo", mygo)]);

    // A command remembered from an earlier configuration of the table.
    hub.sessions().record("S", "ghost");

    let event = MockEvent::new("onemore").with_user("S");
    hub.handle_onemore(&event).await.unwrap();

    assert_eq!(event.texts(), vec![messages::STALE_COMMAND]);
    assert!(event.images().is_empty());
}

#[tokio::test]
async fn onemore_failed_resolution_still_replies() {
    let dir = tempfile::tempdir().unwrap();
    let empty = pack_file(&dir, "empty.txt", &["", "   "]);
    let hub = hub(vec![entry("mygo", empty)]);

    let dispatch = MockEvent::new("mygo").with_user("S");
    hub.handle_message(&dispatch).await.unwrap();
    assert_eq!(dispatch.texts(), vec![messages::FETCH_FAILED]);

    // The failed dispatch was still recorded, so onemore retries it.
    let again = MockEvent::new("onemore").with_user("S");
    hub.handle_onemore(&again).await.unwrap();
    assert_eq!(again.texts(), vec![messages::FETCH_FAILED]);
}

#[tokio::test]
async fn random_over_empty_table_reports_no_configuration() {
    let hub = hub(vec![]);

    let event = MockEvent::new("random");
    hub.handle_random(&event).await.unwrap();

    assert_eq!(event.texts(), vec![messages::EMPTY_CONFIGURATION]);
}

#[tokio::test]
async fn random_always_replies_with_image_or_failure_text() {
    let dir = tempfile::tempdir().unwrap();
    let good = pack_file(&dir, "good.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![
        entry("good", good),
        entry("broken", dir.path().join("absent.txt")),
    ]);

    for _ in 0..16 {
        let event = MockEvent::new("random");
        hub.handle_random(&event).await.unwrap();

        let replies = event.replies();
        assert_eq!(replies.len(), 1);
        match &replies[0] {
            emojihub::adapter::mock::Reply::Image(url) => {
                assert_eq!(url, "https://foo.com/a.png")
            }
            emojihub::adapter::mock::Reply::Text(text) => {
                assert_eq!(text, messages::RANDOM_FAILED)
            }
        }
    }
}

#[tokio::test]
async fn random_does_not_touch_session_memory() {
    let dir = tempfile::tempdir().unwrap();
    let good = pack_file(&dir, "good.txt", &["https://foo.com/a.png"]);
    let hub = hub(vec![entry("good", good)]);

    let event = MockEvent::new("random").with_user("S");
    hub.handle_random(&event).await.unwrap();

    assert_eq!(hub.sessions().last("S"), None);
}

#[tokio::test]
async fn last_command_overwrites_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let a = pack_file(&dir, "a.txt", &["https://foo.com/a.png"]);
    let b = pack_file(&dir, "b.txt", &["https://foo.com/b.png"]);
    let hub = hub(vec![entry("a", a), entry("b", b)]);

    for text in ["a", "b", "a"] {
        let event = MockEvent::new(text).with_user("S");
        hub.handle_message(&event).await.unwrap();
    }

    assert_eq!(hub.sessions().last("S").as_deref(), Some("a"));

    let again = MockEvent::new("onemore").with_user("S");
    hub.handle_onemore(&again).await.unwrap();
    assert_eq!(again.images(), vec!["https://foo.com/a.png"]);
}

#[tokio::test]
async fn duplicate_config_is_rejected_at_startup() {
    let dir = tempfile::tempdir().unwrap();
    let a = pack_file(&dir, "a.txt", &["https://foo.com/a.png"]);

    let result = EmojiHub::new(EmojiHubConfig {
        emojis: vec![entry("a", a.clone()), entry("a", a)],
        session_scope: SessionScope::User,
    });

    assert!(result.is_err());
}

#[tokio::test]
async fn live_edits_to_pack_files_are_visible() {
    let dir = tempfile::tempdir().unwrap();
    let path = pack_file(&dir, "live.txt", &["https://foo.com/old.png"]);
    let hub = hub(vec![entry("live", path.clone())]);

    let before = MockEvent::new("live");
    hub.handle_message(&before).await.unwrap();
    assert_eq!(before.images(), vec!["https://foo.com/old.png"]);

    std::fs::write(&path, "https://foo.com/new.png\n").unwrap();

    let after = MockEvent::new("live");
    hub.handle_message(&after).await.unwrap();
    assert_eq!(after.images(), vec!["https://foo.com/new.png"]);
}
