// crates/shared-kernel/tests/revision_count_parse.rs
use git_versioning_shared_kernel::{DomainError, RevisionCount};

#[test]
fn parses_positive_decimal() {
    let count: RevisionCount = "190".parse().unwrap();
    assert_eq!(count, 190);
    assert_eq!(count.to_string(), "190");
}

#[test]
fn zero_and_garbage_are_rejected() {
    for input in ["0", "-3", "abc", "", "1.5"] {
        let err = input.parse::<RevisionCount>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidRevisionCount { .. }), "{input}");
    }
    assert!(RevisionCount::new(0).is_none());
}
