use tempfile::tempdir;

use quill_core::secret_store::MemoryStore;
use quill_core::store::NoteRepository;
use quill_core::verifier::PasswordVerifier;
use quill_core::{QuillError, Session};

const TEST_ITERATIONS: u32 = 1_000;

fn session(dir: &std::path::Path) -> Session<MemoryStore> {
    let verifier = PasswordVerifier::with_iterations(MemoryStore::new(), TEST_ITERATIONS);
    let notes = NoteRepository::open(dir).expect("repository should open");
    Session::new(verifier, notes)
}

#[test]
fn test_full_session_scenario() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());

    // Fresh install: no password, locked.
    assert!(!session.has_password().unwrap());
    assert!(!session.is_unlocked());

    // Set password; session unlocks and can save.
    session.set_password("Secret1").unwrap();
    assert!(session.has_password().unwrap());
    assert!(session.is_unlocked());
    let note = session.save_note(Some("n1".to_string()), "Hello").unwrap();
    assert_eq!(note.id, "n1");

    // Logout drops the key.
    session.lock();
    assert!(!session.is_unlocked());
    assert!(matches!(session.open_note("n1"), Err(QuillError::NoKey)));

    // Wrong password: expected outcome, still locked, content untouched.
    assert!(!session.unlock("Wrong").unwrap());
    assert!(!session.is_unlocked());

    // Correct password: unlocked, content decrypts.
    assert!(session.unlock("Secret1").unwrap());
    assert_eq!(session.open_note("n1").unwrap().as_deref(), Some("Hello"));
}

#[test]
fn test_locked_session_rejects_key_operations_but_lists() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());
    session.set_password("master-password").unwrap();
    session.save_note(Some("n1".to_string()), "body").unwrap();
    session.lock();

    assert!(matches!(
        session.save_note(None, "new"),
        Err(QuillError::NoKey)
    ));
    assert!(matches!(session.open_note("n1"), Err(QuillError::NoKey)));
    assert!(matches!(session.delete_note("n1"), Err(QuillError::NoKey)));

    // Listing reads the plaintext index only.
    let entries = session.list_notes();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "n1");
}

#[test]
fn test_save_without_id_generates_one() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());
    session.set_password("master-password").unwrap();

    let note = session.save_note(None, "body").unwrap();
    assert!(!note.id.is_empty());
    assert_eq!(session.open_note(&note.id).unwrap().as_deref(), Some("body"));
}

#[test]
fn test_delete_note_updates_listing() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());
    session.set_password("master-password").unwrap();

    let note = session.save_note(None, "body").unwrap();
    session.delete_note(&note.id).unwrap();

    assert_eq!(session.open_note(&note.id).unwrap(), None);
    assert!(session.list_notes().is_empty());
}

#[test]
fn test_erase_all_orphans_note_blobs() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());
    session.set_password("master-password").unwrap();
    let note = session.save_note(None, "unrecoverable").unwrap();

    session.erase_all().unwrap();

    // Password gone, session locked; the blob file is untouched but
    // permanently undecryptable without the salt.
    assert!(!session.has_password().unwrap());
    assert!(!session.is_unlocked());
    assert!(!session.unlock("master-password").unwrap());
    assert!(dir.path().join(format!("{}.encrypted", note.id)).exists());

    // A new password derives a fresh key from a fresh salt; the orphan
    // does not decrypt under it.
    session.set_password("master-password").unwrap();
    assert_eq!(session.open_note(&note.id).unwrap(), None);
}

#[test]
fn test_set_password_twice_rejected() {
    let dir = tempdir().unwrap();
    let mut session = session(dir.path());
    session.set_password("master-password").unwrap();

    assert!(matches!(
        session.set_password("another"),
        Err(QuillError::InvalidInput(_))
    ));
}
