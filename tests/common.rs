#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Type,Start,End,Duration,Start Condition,Start Location,End Condition,Notes\n";

/// Binary under test, run against an empty home so a user config never leaks in
pub fn rcl() -> Command {
    rcl_in_home(&test_home("default"))
}

/// Binary under test with `yaml` as its configuration file
pub fn rcl_with_config(name: &str, yaml: &str) -> Command {
    let home = test_home(name);
    // Unix reads $HOME/.rcarelog, Windows reads %APPDATA%/rcarelog
    for dir in [home.join(".rcarelog"), home.join("rcarelog")] {
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("rcarelog.conf"), yaml).expect("write config");
    }
    rcl_in_home(&home)
}

fn rcl_in_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rcarelog");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

fn test_home(name: &str) -> PathBuf {
    let home = env::temp_dir().join(format!("rcarelog_home_{name}"));
    fs::create_dir_all(&home).expect("create test home");
    home
}

/// Write a CSV fixture inside the system temp dir and return its path
pub fn write_csv(name: &str, body: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rcarelog.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, body).expect("write csv fixture");
    p
}

/// Fixture with the expected header followed by `rows`
pub fn write_log(name: &str, rows: &str) -> String {
    write_csv(name, &format!("{HEADER}{rows}"))
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two feeds on 2024-01-01 at 03:00 and 14:00, a diaper change just before
/// the second one, a sleep on the next day and one row with a broken Start.
pub const SAMPLE_ROWS: &str = "\
Feed,2024-01-01 03:00,2024-01-01 03:10,10:00,Hungry,Nursery,Full,
Diaper,2024-01-01 13:40,2024-01-01 13:52,,Wet,Nursery,Clean,
Feed,2024-01-01 14:00,2024-01-01 14:20,20:30,Hungry,Nursery,Asleep,\"left, then right\"
Sleep,2024-01-02 20:00,2024-01-03 02:00,,,Crib,,
Feed,unknown,,5:00,,,,
";

pub fn sample_log(name: &str) -> String {
    write_log(name, SAMPLE_ROWS)
}
