use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use inplace::{CommitError, CommitOutcome, FieldMode, InlineField, NoticeKind};

fn press(field: &mut InlineField, code: KeyCode) -> bool {
    field.handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(field: &mut InlineField, text: &str) {
    for ch in text.chars() {
        press(field, KeyCode::Char(ch));
    }
}

#[test]
fn clearing_a_named_field_commits_the_placeholder() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    field.request_edit();
    press(&mut field, KeyCode::Delete);
    let request = field.confirm().expect("commit request");
    assert_eq!(request.value(), "Unnamed");
}

#[test]
fn editing_an_unnamed_field_starts_blank() {
    let mut field = InlineField::new("Team", "Unnamed", "Unnamed");
    field.request_edit();
    assert_eq!(field.draft(), "");
    type_text(&mut field, "Team B");
    assert_eq!(field.confirm().expect("commit request").value(), "Team B");
}

#[test]
fn enter_without_changes_does_not_commit() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    field.request_edit();
    assert!(field.confirm().is_none());
    field.cancel();
    assert_eq!(field.mode(), FieldMode::Viewing);
    assert_eq!(field.display_value(), "Team A");
}

#[test]
fn click_away_restores_the_value_held_before_editing() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    for edits in ["Team C", "", "Team A but longer"] {
        field.request_edit();
        press(&mut field, KeyCode::Delete);
        type_text(&mut field, edits);
        field.cancel();
        assert_eq!(field.display_value(), "Team A");
    }
}

#[test]
fn success_notice_auto_dismisses() {
    let start = Instant::now();
    let mut field =
        InlineField::new("Team", "Unnamed", "Team A").with_notice_duration(Duration::from_secs(3));
    field.request_edit();
    type_text(&mut field, "!");
    field.confirm().expect("commit request");
    assert_eq!(
        field.resolve(&CommitOutcome::Persisted, start),
        Some(NoticeKind::Success)
    );
    assert_eq!(field.display_value(), "Team A!");
    field.tick(start + Duration::from_millis(2500));
    assert!(field.notice().is_some());
    field.tick(start + Duration::from_secs(3));
    assert!(field.notice().is_none());
}

#[test]
fn failure_notice_keeps_the_previous_value() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    field.request_edit();
    type_text(&mut field, "!");
    field.confirm().expect("commit request");
    field.resolve(&CommitOutcome::Declined, Instant::now());
    assert_eq!(field.display_value(), "Team A");
    assert_eq!(
        field.notice().map(|notice| notice.kind()),
        Some(NoticeKind::Failure)
    );
}

#[test]
fn exactly_one_notice_per_resolved_submit() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    field.request_edit();
    type_text(&mut field, "!");
    field.confirm().expect("commit request");
    let now = Instant::now();
    let outcome = CommitOutcome::Rejected(CommitError::WorkerLost);
    assert_eq!(field.resolve(&outcome, now), Some(NoticeKind::Failure));
    assert_eq!(field.resolve(&outcome, now), None);
    assert!(field.dismiss_notice());
    assert!(!field.dismiss_notice());
}

#[test]
fn viewing_field_follows_external_changes() {
    let mut field = InlineField::new("Team", "Unnamed", "Team A");
    field.observe("Team Renamed Elsewhere");
    assert_eq!(field.display_value(), "Team Renamed Elsewhere");
    field.observe("Unnamed");
    assert!(field.shows_placeholder());
}
