use pretty_assertions::assert_eq;
use revid_git::{DescribeQuery, GitReferenceType, GitTagState, ParentCommitType, RevisionSettings};
use rstest::rstest;

fn query_for(settings: RevisionSettings) -> String {
    DescribeQuery::from_settings(&settings).command()
}

#[cfg(not(windows))]
#[test]
fn test_default_command() {
    assert_eq!(
        query_for(RevisionSettings::default()),
        "git describe --always --long --candidates=10 --abbrev=7 --dirty='-dirty'"
    );
}

#[rstest]
#[case(GitReferenceType::AnnotatedTags, None)]
#[case(GitReferenceType::Tags, Some("--tags"))]
#[case(GitReferenceType::All, Some("--all"))]
fn test_reference_type_flag(#[case] reference_type: GitReferenceType, #[case] flag: Option<&str>) {
    let command = query_for(RevisionSettings {
        reference_type,
        ..RevisionSettings::default()
    });
    let words: Vec<&str> = command.split(' ').collect();
    assert_eq!(words.contains(&"--tags"), flag == Some("--tags"));
    assert_eq!(words.contains(&"--all"), flag == Some("--all"));
}

#[test]
fn test_first_parent_flag() {
    let any = query_for(RevisionSettings::default());
    let first = query_for(RevisionSettings {
        parent_commit: ParentCommitType::FirstOnly,
        ..RevisionSettings::default()
    });
    assert!(!any.contains("--first-parent"));
    assert!(first.contains(" --first-parent"));
}

#[test]
fn test_contains_drops_long_and_marks() {
    let command = query_for(RevisionSettings {
        tag_state: GitTagState::ContainsCommit,
        broken_mark: "-broken".to_string(),
        ..RevisionSettings::default()
    });
    assert!(command.contains(" --contains"));
    assert!(!command.contains("--long"));
    assert!(!command.contains("--dirty"));
    assert!(!command.contains("--broken"));
}

#[test]
fn test_numbers_are_passed_through() {
    let command = query_for(RevisionSettings {
        candidate_amount: 0,
        abbrev_length: 12,
        ..RevisionSettings::default()
    });
    assert!(command.contains(" --candidates=0"));
    assert!(command.contains(" --abbrev=12"));
}

#[test]
fn test_empty_marks_are_omitted() {
    let command = query_for(RevisionSettings {
        dirty_mark: String::new(),
        broken_mark: String::new(),
        ..RevisionSettings::default()
    });
    assert!(!command.contains("--dirty"));
    assert!(!command.contains("--broken"));
}

#[cfg(not(windows))]
#[test]
fn test_patterns_and_marks_are_quoted() {
    let command = query_for(RevisionSettings {
        match_patterns: vec!["v*".to_string(), "release-*".to_string()],
        exclude_patterns: vec!["*-wip".to_string()],
        broken_mark: "-broken".to_string(),
        ..RevisionSettings::default()
    });
    assert!(command.contains(" --match 'v*' --match 'release-*' --exclude '*-wip'"));
    assert!(command.ends_with(" --dirty='-dirty' --broken='-broken'"));
}
