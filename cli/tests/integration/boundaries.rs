//! Chunk-boundary integration tests for the safecp CLI.
//!
//! The transfer buffer is 2 MiB; these tests pin down that copies are
//! byte-for-byte identical regardless of how file size aligns with the
//! buffer boundary.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

const BUF: usize = 2 * 1024 * 1024;

fn patterned_bytes(len: usize, mut seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        out.extend_from_slice(&seed.to_le_bytes());
    }
    out.truncate(len);
    out
}

fn round_trip(len: usize, seed: u64) {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    let content = patterned_bytes(len, seed);
    let src_file = src.path().join("in.bin");
    let dst_file = dst.path().join("out.bin");
    fs::write(&src_file, &content).unwrap();

    let mut cmd = cargo_bin_cmd!("safecp");
    cmd.arg(&src_file).arg(&dst_file).assert().success();

    let copied = fs::read(&dst_file).unwrap();
    assert_eq!(copied.len(), len, "size mismatch for {} bytes", len);
    assert_eq!(copied, content, "content mismatch for {} bytes", len);
}

#[test]
fn test_zero_bytes() {
    round_trip(0, 1);
}

#[test]
fn test_one_byte() {
    round_trip(1, 2);
}

#[test]
fn test_one_below_buffer() {
    round_trip(BUF - 1, 3);
}

#[test]
fn test_exact_buffer() {
    round_trip(BUF, 4);
}

#[test]
fn test_one_above_buffer() {
    round_trip(BUF + 1, 5);
}

#[test]
fn test_several_buffers_plus_remainder() {
    round_trip(3 * BUF + 12_345, 6);
}
