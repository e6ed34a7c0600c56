use super::*;

#[test]
fn badge_class_distinguishes_kinds() {
    assert_ne!(badge_class(ProjectKind::Personal), badge_class(ProjectKind::Client));
}

#[test]
fn badge_class_keeps_base_class() {
    for kind in [ProjectKind::Personal, ProjectKind::Client] {
        assert!(badge_class(kind).starts_with("project-card__badge "));
    }
}

#[test]
fn client_badge_uses_client_modifier() {
    assert!(badge_class(ProjectKind::Client).ends_with("--client"));
}
