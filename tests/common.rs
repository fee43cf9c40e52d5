#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::core::store::RecordStore;
use rattendance::models::clock::{CheckInTime, RecordedAt};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// The binary, with HOME pointed at `home` so config and log stay isolated.
pub fn ratt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rattendance_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Attendance file path inside `home`, as a string for `--file`.
pub fn store_file(home: &Path) -> String {
    home.join("attendance.csv").to_string_lossy().to_string()
}

pub fn t(s: &str) -> CheckInTime {
    CheckInTime::parse(s).expect("valid check-in time")
}

pub fn at(s: &str) -> RecordedAt {
    RecordedAt::parse(s).expect("valid timestamp")
}

/// The three students used throughout the tests, in this order.
pub fn sample_store() -> RecordStore {
    let mut store = RecordStore::new();
    store
        .add_at("Riya Sharma", Some(t("09:00 AM")), at("2025-11-12 09:00:05"))
        .unwrap();
    store
        .add_at("Arjun Singh", Some(t("10:15 AM")), at("2025-11-12 10:15:40"))
        .unwrap();
    store
        .add_at("Meena Verma", Some(t("09:20 AM")), at("2025-11-12 09:21:00"))
        .unwrap();
    store
}

/// Add the sample students through the CLI.
pub fn add_sample_via_cli(home: &Path) {
    let file = store_file(home);
    for (name, time) in [
        ("Riya Sharma", "09:00 AM"),
        ("Arjun Singh", "10:15 AM"),
        ("Meena Verma", "09:20 AM"),
    ] {
        ratt(home)
            .args(["--file", &file, "add", name, time])
            .assert()
            .success();
    }
}

/// Write `rattendance.conf` under `home` with the given YAML body.
pub fn write_config(home: &Path, yaml: &str) {
    let dir = home.join(".rattendance");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("rattendance.conf"), yaml).expect("write config");
}
