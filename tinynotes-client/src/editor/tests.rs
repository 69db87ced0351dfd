use mocks::{RecordingStore, StoreCall, ASSIGNED_ID, EXISTING_ID};

use super::*;


#[tokio::test]
async fn opening_a_new_note_issues_no_reads() {
    let store = RecordingStore::empty();
    let session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    assert_eq!(session.body(), "");
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn opening_an_existing_note_loads_it_once() {
    let store = RecordingStore::with_note("stored text");
    let session = EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
        .await
        .expect("open failed");
    assert_eq!(session.body(), "stored text");
    assert_eq!(store.calls(), vec![StoreCall::Fetch(EXISTING_ID)]);
}

#[tokio::test]
async fn opening_a_missing_note_fails_the_open() {
    let store = RecordingStore::empty();
    let err = EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
        .await
        .expect_err("should fail");
    assert!(matches!(err, StoreError::NotFound), "wrong error: {err:#?}");
}

#[tokio::test]
async fn committing_a_new_note_with_text_creates_it() {
    let store = RecordingStore::empty();
    let mut session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    session.set_body("hello");
    let outcome = session.commit().await.expect("commit failed");

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    let StoreCall::Create(ref payload) = calls[0] else {
        panic!("wrong request: {calls:#?}");
    };
    assert_eq!(payload.body, "hello");
    let CommitOutcome::Created(note) = outcome else {
        panic!("wrong outcome: {outcome:#?}");
    };
    assert_eq!(note.id, ASSIGNED_ID);
    assert_eq!(note.body, "hello");
}

#[tokio::test]
async fn committing_an_existing_note_with_text_updates_it() {
    let store = RecordingStore::with_note("stored text");
    let mut session = EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
        .await
        .expect("open failed");
    session.set_body("updated text");
    let outcome = session.commit().await.expect("commit failed");

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    let StoreCall::Update(id, ref payload) = calls[1] else {
        panic!("wrong request: {calls:#?}");
    };
    assert_eq!(id, EXISTING_ID);
    assert_eq!(payload.body, "updated text");
    assert!(matches!(outcome, CommitOutcome::Updated(_)));
}

#[tokio::test]
async fn committing_an_existing_note_with_cleared_text_deletes_it() {
    let store = RecordingStore::with_note("stored text");
    let mut session = EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
        .await
        .expect("open failed");
    session.set_body("");
    let outcome = session.commit().await.expect("commit failed");

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::Fetch(EXISTING_ID),
            StoreCall::Delete(EXISTING_ID),
        ],
    );
    assert_eq!(outcome, CommitOutcome::Deleted);
}

#[tokio::test]
async fn committing_an_untouched_new_note_issues_nothing() {
    let store = RecordingStore::empty();
    let session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    let outcome = session.commit().await.expect("commit failed");
    assert_eq!(outcome, CommitOutcome::Skipped);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn committing_a_new_note_with_cleared_text_issues_nothing() {
    let store = RecordingStore::empty();
    let mut session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    session.set_body("draft");
    session.set_body("");
    let outcome = session.commit().await.expect("commit failed");
    assert_eq!(outcome, CommitOutcome::Skipped);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn edits_never_issue_requests_and_only_the_last_wins() {
    let store = RecordingStore::empty();
    let mut session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    session.set_body("a");
    session.set_body("ab");
    assert!(store.calls().is_empty());

    session.commit().await.expect("commit failed");
    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    let StoreCall::Create(ref payload) = calls[0] else {
        panic!("wrong request: {calls:#?}");
    };
    assert_eq!(payload.body, "ab");
}

#[tokio::test]
async fn explicit_delete_ignores_the_draft() {
    for body in ["still has text", ""] {
        let store = RecordingStore::with_note("stored text");
        let mut session =
            EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
                .await
                .expect("open failed");
        session.set_body(body);
        let outcome = session.delete().await.expect("delete failed");

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::Fetch(EXISTING_ID),
                StoreCall::Delete(EXISTING_ID),
            ],
        );
        assert_eq!(outcome, CommitOutcome::Deleted);
    }
}

#[tokio::test]
async fn explicit_delete_of_a_new_note_issues_nothing() {
    let store = RecordingStore::empty();
    let mut session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    session.set_body("typed but never persisted");
    let outcome = session.delete().await.expect("delete failed");
    assert_eq!(outcome, CommitOutcome::Skipped);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn a_failed_commit_surfaces_the_error() {
    let store = RecordingStore::empty().failing_mutations();
    let mut session = EditorSession::open(&store, NoteRef::New).await
        .expect("open failed");
    session.set_body("doomed");
    let err = session.commit().await.expect_err("should fail");
    assert!(matches!(err, StoreError::Unexpected(503)), "wrong error: {err:#?}");
}

#[tokio::test]
async fn set_body_preserves_the_loaded_fields() {
    let store = RecordingStore::with_note("stored text");
    let loaded = store.stored_note();
    let mut session = EditorSession::open(&store, NoteRef::Existing(EXISTING_ID))
        .await
        .expect("open failed");
    session.set_body("retyped");
    session.set_body("retyped again");
    assert_eq!(session.body(), "retyped again");

    session.commit().await.expect("commit failed");
    let StoreCall::Update(_, payload) = store.calls().remove(1) else {
        panic!("wrong request");
    };
    assert_eq!(payload.id, Some(loaded.id));
    assert_eq!(payload.updated, Some(loaded.updated));
}
