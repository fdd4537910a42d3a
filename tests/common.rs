#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use pawlogger::models::category::Category;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn paw() -> Command {
    cargo_bin_cmd!("pawlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pawlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema of a test database.
pub fn init_test_db(db_path: &str) {
    paw()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Seed one event directly through the library API (faster than the CLI,
/// and allows arbitrary timestamps).
pub fn seed_event(db_path: &str, timestamp: &str, category: &str, actor: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let ts = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").expect("timestamp");
    let cat = Category::from_db_str(category).expect("category");
    pawlogger::db::queries::insert_event(&conn, ts, cat, actor).expect("insert event");
}

/// Seed a small single-day dataset useful for many tests:
/// two walks (45 + 40 minutes), pee, poo, feeding, one home incident.
pub fn seed_sample_day(db_path: &str, date: &str) {
    seed_event(db_path, &format!("{date} 07:00:00"), "walk_start", "Anna");
    seed_event(db_path, &format!("{date} 07:45:00"), "walk_end", "Anna");
    seed_event(db_path, &format!("{date} 07:10:00"), "pee", "Anna");
    seed_event(db_path, &format!("{date} 07:20:00"), "poo", "Anna");
    seed_event(db_path, &format!("{date} 08:00:00"), "feed", "Marco");
    seed_event(db_path, &format!("{date} 19:00:00"), "walk_start", "Marco");
    seed_event(db_path, &format!("{date} 19:40:00"), "walk_end", "Marco");
    seed_event(db_path, &format!("{date} 21:30:00"), "pee_home", "Anna");
}
