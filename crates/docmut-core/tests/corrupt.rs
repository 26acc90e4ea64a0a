use std::fs;

use docmut_core::corrupt::{corrupt_bytes, corrupt_header, CorruptMode};
use tempfile::tempdir;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn truncate_drops_the_first_n_bytes() {
    let data = sample(100);
    let out = corrupt_bytes(&data, CorruptMode::Truncate, 10);
    assert_eq!(out.len(), 90);
    assert_eq!(out, &data[10..]);
}

#[test]
fn zero_blanks_the_prefix_and_keeps_the_rest() {
    let data = sample(64);
    let out = corrupt_bytes(&data, CorruptMode::Zero, 16);
    assert_eq!(out.len(), data.len());
    assert!(out[..16].iter().all(|&b| b == 0));
    assert_eq!(&out[16..], &data[16..]);
}

#[test]
fn flip_is_self_inverse() {
    let data = sample(64);
    let once = corrupt_bytes(&data, CorruptMode::Flip, 16);
    assert_ne!(once, data);
    let twice = corrupt_bytes(&once, CorruptMode::Flip, 16);
    assert_eq!(twice, data);
}

#[test]
fn requested_count_is_clamped_to_file_length() {
    let data = sample(16);
    let truncated = corrupt_bytes(&data, CorruptMode::Truncate, 1000);
    assert!(truncated.is_empty());
    let zeroed = corrupt_bytes(&data, CorruptMode::Zero, 1000);
    assert!(zeroed.iter().all(|&b| b == 0));
}

#[test]
fn zero_byte_request_still_damages_one_byte() {
    let data = sample(16);
    let out = corrupt_bytes(&data, CorruptMode::Flip, 0);
    assert_eq!(out[0], data[0] ^ 0xFF);
    assert_eq!(&out[1..], &data[1..]);
}

#[test]
fn empty_input_passes_through_unchanged() {
    for mode in [CorruptMode::Flip, CorruptMode::Zero, CorruptMode::Truncate] {
        assert!(corrupt_bytes(&[], mode, 8).is_empty());
    }
}

#[test]
fn corrupt_header_writes_a_tagged_copy() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("doc.txt");
    let data = sample(100);
    fs::write(&src, &data).expect("write source");

    let dst = corrupt_header(&src, None, CorruptMode::Truncate, 10, false).expect("corrupt");
    assert_eq!(dst, dir.path().join("doc.corrupt.txt"));
    assert_eq!(fs::read(&dst).expect("read output"), &data[10..]);
    assert_eq!(fs::read(&src).expect("read source"), data);
}

#[test]
fn corrupt_header_dry_run_only_plans() {
    let dir = tempdir().expect("tempdir");
    let src = dir.path().join("doc.txt");
    fs::write(&src, sample(10)).expect("write source");

    let dst = corrupt_header(&src, None, CorruptMode::Flip, 4, true).expect("corrupt");
    assert_eq!(dst, dir.path().join("doc.corrupt.txt"));
    assert!(!dst.exists());
}
