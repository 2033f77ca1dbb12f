// crates/shared-kernel/tests/short_hash_truncate.rs
use git_versioning_shared_kernel::{SHORT_HASH_LEN, ShortHash};

#[test]
fn long_commit_id_is_cut_to_seven_chars() {
    let hash = ShortHash::from_commit_id("423abc1f00dbabe9c0ffee1234567890abcdef12").unwrap();
    assert_eq!(hash.as_str().len(), SHORT_HASH_LEN);
    assert_eq!(hash, "423abc1");
}

#[test]
fn short_id_is_kept_and_whitespace_trimmed() {
    let hash = ShortHash::from_commit_id("  abc12\n").unwrap();
    assert_eq!(hash, "abc12");
}

#[test]
fn empty_or_split_ids_are_rejected() {
    assert!(ShortHash::from_commit_id("").is_none());
    assert!(ShortHash::from_commit_id("   ").is_none());
    assert!(ShortHash::from_commit_id("abc def").is_none());
    assert!("".parse::<ShortHash>().is_err());
}
