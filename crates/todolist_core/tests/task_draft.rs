use todolist_core::{
    validate_task_text, CancelOutcome, StoreConfig, SystemClock, TaskDraft, TaskStore,
    TaskTextError,
};

fn demo_store() -> TaskStore {
    TaskStore::with_config(&StoreConfig::demo(), SystemClock).unwrap()
}

#[test]
fn whitespace_only_submission_is_rejected_without_touching_store() {
    let mut store = demo_store();
    let before = store.snapshot();
    let mut draft = TaskDraft::new();
    draft.set_text("   ");

    let err = draft.submit(&mut store).unwrap_err();

    assert_eq!(err, TaskTextError::Empty);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn overlong_text_is_rejected_by_validation() {
    let text = "a".repeat(101);
    let err = validate_task_text(&text).unwrap_err();
    assert_eq!(err, TaskTextError::TooLong { chars: 101, max: 100 });
    assert_eq!(err.message(), "Please keep your task under 100 characters.");
}

#[test]
fn successful_submit_appends_trimmed_text_and_clears_draft() {
    let mut store = demo_store();
    let mut draft = TaskDraft::new();
    draft.set_text("  Call family \t");

    let id = draft.submit(&mut store).unwrap();

    let last = store.tasks().last().unwrap();
    assert_eq!(last.id(), id);
    assert_eq!(last.text(), "Call family");
    assert!(!last.is_done());
    assert_eq!(draft.text(), "");
    assert_eq!(draft.cancel(), CancelOutcome::Close);
    assert_eq!(store.len(), 4);
}

#[test]
fn failed_submit_keeps_pending_text_for_discard_prompt() {
    let mut store = TaskStore::new();
    let mut draft = TaskDraft::new();
    draft.set_text(" ");
    assert!(draft.submit(&mut store).is_err());
    assert_eq!(draft.text(), " ");

    draft.set_text("half typed");
    assert_eq!(draft.cancel(), CancelOutcome::ConfirmDiscard);
    assert!(store.is_empty());
}
