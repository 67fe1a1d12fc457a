#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `cutr` command with colors and environment noise disabled.
#[allow(dead_code)]
pub fn cutr_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cutr"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write `contents` to `name` inside `dir` and return its path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

/// Sample tab-separated table used across tests.
#[allow(dead_code)]
pub const SAMPLE_TSV: &str = "f0\tf1\tf2\tf3\tf4\n0\t1\t2\t3\t4\n5\t6\t7\t8\t9\n10\t11\t12\t13\t14\n15\t16\t17\t18\t19\n20\t21\t22\t23\t24\n";
