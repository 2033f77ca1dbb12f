// crates/shared-kernel/tests/serde_roundtrip.rs
use git_versioning_shared_kernel::{RevisionCount, ShortHash};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Wrapper {
    revs: RevisionCount,
    sha: ShortHash,
}

#[test]
fn json_uses_plain_values() {
    let original = Wrapper {
        revs: RevisionCount::new(21).unwrap(),
        sha: ShortHash::from_commit_id("123acf1").unwrap(),
    };
    let json = serde_json::to_string(&original).expect("serializes");
    assert_eq!(json, r#"{"revs":21,"sha":"123acf1"}"#);
    let decoded: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, original);
}

#[test]
fn json_rejects_zero_count() {
    assert!(serde_json::from_str::<Wrapper>(r#"{"revs":0,"sha":"123acf1"}"#).is_err());
}
