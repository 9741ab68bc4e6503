use chrono::NaiveDate;
use mindcare_core::{Journal, MoodTracker};
use mindcare_infrastructure::{JsonFileStore, MindcarePaths};
use std::sync::Arc;
use tempfile::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

#[test]
fn test_mood_entries_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let paths = MindcarePaths::under(temp_dir.path());

    {
        let store = Arc::new(JsonFileStore::new(paths.data_dir()));
        let mut tracker = MoodTracker::load(store).unwrap();
        for day in 1..=6 {
            tracker.save_mood_on(date(day), "Okay").unwrap();
        }
        tracker.save_mood_on(date(6), "Happy").unwrap();
    }

    let stored = std::fs::read_to_string(paths.data_dir().join("moodTracker.json")).unwrap();
    assert!(stored.contains("\"2024-03-06\":\"Happy\""));

    let store = Arc::new(JsonFileStore::new(paths.data_dir()));
    let tracker = MoodTracker::load(store).unwrap();
    assert_eq!(tracker.len(), 6);

    let history = tracker.history();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].to_string(), "2024-03-06: Happy");
    assert_eq!(history[4].date, "2024-03-02");
}

#[test]
fn test_journal_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");

    {
        let mut journal = Journal::load(Arc::new(JsonFileStore::new(&data_dir))).unwrap();
        for text in ["a", "b", "c", "d"] {
            assert!(journal.save_entry(text).unwrap());
        }
        assert!(!journal.save_entry("  \n ").unwrap());
    }

    let journal = Journal::load(Arc::new(JsonFileStore::new(&data_dir))).unwrap();
    assert_eq!(journal.entries().len(), 4);
    assert_eq!(journal.history(), vec!["d", "c", "b"]);
}

#[test]
fn test_malformed_files_start_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("moodTracker.json"), "[not an object").unwrap();
    std::fs::write(temp_dir.path().join("moodJournal.json"), "{\"oops\":1}").unwrap();

    let store = Arc::new(JsonFileStore::new(temp_dir.path()));
    assert!(MoodTracker::load(store.clone()).unwrap().is_empty());
    assert!(Journal::load(store).unwrap().entries().is_empty());
}

#[test]
fn test_non_utf8_files_start_empty() {
    let temp_dir = TempDir::new().unwrap();
    let garbage = [0xff, 0xfe, b'{', b'}'];
    std::fs::write(temp_dir.path().join("moodTracker.json"), garbage).unwrap();
    std::fs::write(temp_dir.path().join("moodJournal.json"), garbage).unwrap();

    let store = Arc::new(JsonFileStore::new(temp_dir.path()));
    let mut tracker = MoodTracker::load(store.clone()).unwrap();
    assert!(tracker.is_empty());
    assert!(Journal::load(store.clone()).unwrap().entries().is_empty());

    tracker.save_mood_on(date(1), "Calm").unwrap();
    let reloaded = MoodTracker::load(store).unwrap();
    assert_eq!(reloaded.len(), 1);
}
