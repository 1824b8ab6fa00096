use super::helpers::{spawn_app, spawn_app_with};
use blog::{
    config::LedgerSettings,
    domain::{
        identity::{repository::UserRepository, role::Role},
        interaction::{kind::InteractionKind, ledger::InteractionLedger, outcome::InteractionOutcome},
        shared::{
            errors::DomainError,
            ids::{ArticleId, UserId},
        },
    },
};
use std::{sync::Arc, time::Duration};

#[tokio::test]
async fn repeated_reads_are_recorded_once() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;
    let article = app.published_article(&author).await;

    let first = app
        .state
        .ledger
        .record_interaction(reader.id, &reader.username, article.id, InteractionKind::Read)
        .await
        .unwrap();
    assert_eq!(first, InteractionOutcome::recorded(1));

    for _ in 0..4 {
        let again = app
            .state
            .ledger
            .record_interaction(reader.id, &reader.username, article.id, InteractionKind::Read)
            .await
            .unwrap();
        assert_eq!(again, InteractionOutcome::already(1));
    }

    assert_eq!(app.counters(article.id).await, (1, 0));
    assert_eq!(app.event_count("read_events", article.id).await, 1);
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test]
async fn reads_from_different_users_accumulate() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let seven = app.create_user_with_id(7, "user7").await;
    let nine = app.create_user_with_id(9, "user9").await;
    let ledger = &app.state.ledger;

    let outcome = ledger
        .record_interaction(seven.user_id, &seven.username, article.id, InteractionKind::Read)
        .await
        .unwrap();
    assert_eq!(outcome, InteractionOutcome::recorded(1));

    let outcome = ledger
        .record_interaction(seven.user_id, &seven.username, article.id, InteractionKind::Read)
        .await
        .unwrap();
    assert_eq!(outcome, InteractionOutcome::already(1));

    let outcome = ledger
        .record_interaction(nine.user_id, &nine.username, article.id, InteractionKind::Read)
        .await
        .unwrap();
    assert_eq!(outcome, InteractionOutcome::recorded(2));

    assert_eq!(app.counters(article.id).await, (2, 0));
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test]
async fn likes_from_two_users_both_count() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let first = app.create_user("alice", Role::Reader).await;
    let second = app.create_user("bruno", Role::Reader).await;

    for user in [&first, &second] {
        let outcome = app
            .state
            .ledger
            .record_interaction(user.id, &user.username, article.id, InteractionKind::Like)
            .await
            .unwrap();
        assert!(!outcome.already_recorded);
    }

    assert_eq!(app.counters(article.id).await, (0, 2));
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test]
async fn like_dedup_follows_user_id_not_username() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    let ledger = &app.state.ledger;
    ledger
        .record_interaction(reader.id, "SimonK", article.id, InteractionKind::Like)
        .await
        .unwrap();
    // Same account after a rename.
    let renamed = ledger
        .record_interaction(reader.id, "SimonKing", article.id, InteractionKind::Like)
        .await
        .unwrap();
    assert_eq!(renamed, InteractionOutcome::already(1));
    assert_eq!(app.user_event_count("like_events", reader.id, article.id).await, 1);
}

#[tokio::test]
async fn read_and_like_are_tracked_independently() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;
    let ledger = &app.state.ledger;

    for kind in InteractionKind::ALL {
        let outcome = ledger
            .record_interaction(reader.id, &reader.username, article.id, kind)
            .await
            .unwrap();
        assert_eq!(outcome, InteractionOutcome::recorded(1), "{kind}");
        assert!(ledger.has_recorded(reader.id, article.id, kind).await.unwrap());
    }

    let article = app.state.interactions.article_with_counts(article.id).await.unwrap();
    for kind in InteractionKind::ALL {
        assert_eq!(article.count_for(kind), 1, "{kind}");
    }
}

#[tokio::test]
async fn failed_increment_rolls_back_the_event_insert() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    sqlx::query(
        "CREATE TRIGGER fail_like_increment BEFORE UPDATE OF likes ON articles \
         BEGIN SELECT RAISE(ABORT, 'injected counter failure'); END",
    )
    .execute(&app.db)
    .await
    .unwrap();

    let err = app
        .state
        .ledger
        .record_interaction(reader.id, &reader.username, article.id, InteractionKind::Like)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::StorageUnavailable(_)), "{err:?}");

    assert_eq!(app.counters(article.id).await, (0, 0));
    assert_eq!(app.event_count("like_events", article.id).await, 0);
    assert!(
        !app.state
            .ledger
            .has_recorded(reader.id, article.id, InteractionKind::Like)
            .await
            .unwrap()
    );

    // Once the fault is gone the same call succeeds as a first-time like.
    sqlx::query("DROP TRIGGER fail_like_increment")
        .execute(&app.db)
        .await
        .unwrap();
    let outcome = app
        .state
        .ledger
        .record_interaction(reader.id, &reader.username, article.id, InteractionKind::Like)
        .await
        .unwrap();
    assert_eq!(outcome, InteractionOutcome::recorded(1));
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_first_likes_record_exactly_one_event() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    let ledger = app.state.ledger.clone();
    let attempts = (0..8).map(|_| {
        let ledger = Arc::clone(&ledger);
        let username = reader.username.clone();
        let (user_id, article_id) = (reader.id, article.id);
        tokio::spawn(async move {
            ledger
                .record_interaction(user_id, &username, article_id, InteractionKind::Like)
                .await
        })
    });
    let mut outcomes = Vec::new();
    for handle in attempts.collect::<Vec<_>>() {
        outcomes.push(handle.await.unwrap().unwrap());
    }

    let winners = outcomes.iter().filter(|o| !o.already_recorded).count();
    assert_eq!(winners, 1, "{outcomes:?}");
    assert!(outcomes.iter().all(|o| o.new_count == 1), "{outcomes:?}");
    assert_eq!(app.counters(article.id).await, (0, 1));
    assert_eq!(app.event_count("like_events", article.id).await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reads_from_many_users_keep_counters_consistent() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;

    let mut readers = Vec::new();
    for i in 0..6 {
        readers.push(app.create_user(&format!("reader{i}"), Role::Reader).await);
    }

    let mut handles = Vec::new();
    for reader in readers.iter().chain(readers.iter()) {
        let ledger = app.state.ledger.clone();
        let (user_id, username, article_id) = (reader.id, reader.username.clone(), article.id);
        handles.push(tokio::spawn(async move {
            ledger
                .record_interaction(user_id, &username, article_id, InteractionKind::Read)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(app.counters(article.id).await, (6, 0));
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test]
async fn missing_article_is_not_found_and_writes_nothing() {
    let app = spawn_app().await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    let err = app
        .state
        .ledger
        .record_interaction(reader.id, &reader.username, ArticleId(404), InteractionKind::Read)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn unknown_user_is_not_found_and_leaves_counters_alone() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;

    let err = app
        .state
        .ledger
        .record_interaction(UserId(12345), "ghost", article.id, InteractionKind::Like)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)), "{err:?}");
    assert_eq!(app.counters(article.id).await, (0, 0));
    app.assert_counters_consistent(article.id).await;
}

#[tokio::test]
async fn closed_store_surfaces_storage_unavailable() {
    let app = spawn_app_with(LedgerSettings {
        acquire_timeout: Duration::from_millis(200),
        busy_retries: 0,
        retry_backoff: Duration::from_millis(1),
    })
    .await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    app.db.close().await;

    let err = app
        .state
        .ledger
        .record_interaction(reader.id, &reader.username, article.id, InteractionKind::Read)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::StorageUnavailable(_)), "{err:?}");
}

#[tokio::test]
async fn users_with_recorded_events_cannot_be_deleted() {
    let app = spawn_app().await;
    let author = app.create_user("admin", Role::Author).await;
    let article = app.published_article(&author).await;
    let reader = app.create_user("SimonK", Role::Reader).await;

    for kind in InteractionKind::ALL {
        app.state
            .ledger
            .record_interaction(reader.id, &reader.username, article.id, kind)
            .await
            .unwrap();
    }

    let deleted = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(reader.id)
        .execute(&app.db)
        .await;
    assert!(deleted.is_err(), "delete should be refused while events exist");

    assert!(app.state.users.find_by_id(reader.id).await.unwrap().is_some());
    assert_eq!(app.counters(article.id).await, (1, 1));
    app.assert_counters_consistent(article.id).await;

    // An account with no events can still go.
    let idle = app.create_user("idle", Role::Reader).await;
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(idle.id)
        .execute(&app.db)
        .await
        .unwrap();
    assert!(app.state.users.find_by_id(idle.id).await.unwrap().is_none());
}
