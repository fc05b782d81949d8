use super::*;
use std::collections::HashMap;

fn titles(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn session_with(entries: &[(&str, &str)], sections: &[&str]) -> NoteSession {
    let cache = Arc::new(DictionaryCache::new());
    let map: HashMap<String, String> = entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    cache.replace_for_tests(map);
    NoteSession::new(&titles(sections), cache)
}

#[test]
fn test_user_edit_expands_and_updates_preview() {
    let mut session = session_with(&[(":htn ", "Hypertension")], &["CC>", "A>"]);

    let outcome = session
        .apply_edit(1, "patient has :htn ".to_string(), EditSource::User)
        .expect("Edit failed");

    assert!(outcome.expanded);
    assert_eq!(session.field_content(1).unwrap(), "patient has Hypertension ");
    assert_eq!(outcome.caret, Some("patient has Hypertension ".len()));
    assert_eq!(session.preview(), "A> patient has Hypertension");
}

#[test]
fn test_no_double_expansion_without_new_user_edit() {
    let mut session = session_with(&[(":htn ", "Hypertension")], &["A>"]);

    session
        .apply_edit(0, "patient has :htn ".to_string(), EditSource::User)
        .expect("Edit failed");
    let expanded = session.field_content(0).unwrap().to_string();

    // Re-applying the already-expanded content as a user edit is a no-op:
    // no completed trigger remains.
    let outcome = session
        .apply_edit(0, expanded.clone(), EditSource::User)
        .expect("Edit failed");
    assert!(!outcome.expanded);
    assert_eq!(session.field_content(0).unwrap(), expanded);
}

#[test]
fn test_engine_rewrite_source_is_never_rescanned() {
    let mut session = session_with(&[(":cc ", ":cc is recursive ")], &["CC>"]);

    // Content that still contains a completed trigger, applied as an engine
    // rewrite: detection must not fire.
    let outcome = session
        .apply_edit(0, "note :cc here".to_string(), EditSource::EngineRewrite)
        .expect("Edit failed");

    assert!(!outcome.expanded);
    assert_eq!(session.field_content(0).unwrap(), "note :cc here");
    // The aggregator still reacted
    assert_eq!(session.preview(), "CC> note :cc here");
}

#[test]
fn test_unknown_trigger_leaves_content_untouched() {
    let mut session = session_with(&[(":htn ", "Hypertension")], &["S>"]);

    let outcome = session
        .apply_edit(0, "pt :xyzzy ".to_string(), EditSource::User)
        .expect("Edit failed");

    assert!(!outcome.expanded);
    assert_eq!(outcome.caret, None);
    assert_eq!(session.field_content(0).unwrap(), "pt :xyzzy ");
}

#[test]
fn test_preview_skips_blank_fields() {
    let mut session = session_with(&[], &["CC>", "PI>", "S>"]);

    session
        .apply_edit(1, "   ".to_string(), EditSource::User)
        .expect("Edit failed");
    session
        .apply_edit(2, "cough".to_string(), EditSource::User)
        .expect("Edit failed");

    assert_eq!(session.preview(), "S> cough");
}

#[test]
fn test_preview_reflects_every_edit() {
    let mut session = session_with(&[], &["CC>", "P>"]);

    session
        .apply_edit(0, "fever".to_string(), EditSource::User)
        .expect("Edit failed");
    assert_eq!(session.preview(), "CC> fever");

    session
        .apply_edit(1, "fluids".to_string(), EditSource::User)
        .expect("Edit failed");
    assert_eq!(session.preview(), "CC> fever\n\nP> fluids");

    session
        .apply_edit(0, "".to_string(), EditSource::User)
        .expect("Edit failed");
    assert_eq!(session.preview(), "P> fluids");
}

#[test]
fn test_unknown_field_index_is_rejected() {
    let mut session = session_with(&[], &["CC>"]);

    let result = session.apply_edit(5, "text".to_string(), EditSource::User);
    assert_eq!(result, Err(NoteError::UnknownField(5)));
}

#[test]
fn test_admin_update_is_visible_to_live_expansion() {
    use crate::dictionary::AdminAction;
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = EditorConfig {
        data_dir: Some(temp_dir.path().to_path_buf()),
        sections: vec!["CC>".to_string()],
    };

    let (mut session, admin) = NoteSession::bootstrap(&config).expect("Bootstrap failed");

    admin
        .apply(AdminAction::Upsert {
            key: "gerd".to_string(),
            expansion: "Gastroesophageal Reflux Disease".to_string(),
        })
        .expect("Admin upsert failed");

    let outcome = session
        .apply_edit(0, ":gerd ".to_string(), EditSource::User)
        .expect("Edit failed");
    assert!(outcome.expanded);
    assert_eq!(
        session.field_content(0).unwrap(),
        "Gastroesophageal Reflux Disease "
    );
}

#[test]
fn test_bootstrap_seeds_defaults_and_builds_fields() {
    use tempfile::TempDir;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = EditorConfig {
        data_dir: Some(temp_dir.path().to_path_buf()),
        sections: EditorConfig::default().sections,
    };

    let (session, _admin) = NoteSession::bootstrap(&config).expect("Bootstrap failed");

    assert_eq!(session.fields().len(), 10);
    assert_eq!(session.fields()[0].title, "CC>");
    assert!(session.cache().lookup(":htn ").is_some(), "Seed entries must be cached");
}
