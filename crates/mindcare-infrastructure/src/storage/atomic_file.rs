//! Atomic text file writes.
//!
//! Updates are all-or-nothing: content goes to a uniquely named temp file in
//! the same directory, is fsynced, then renamed over the target. Concurrent
//! writers never share a temp file, so the last rename wins.

use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::warn;

/// A handle to a text file that is replaced atomically on save.
#[derive(Debug, Clone)]
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: File exists and is non-empty
    /// - `Ok(None)`: File doesn't exist, is blank or is not valid UTF-8
    /// - `Err`: Failed to read the file
    pub fn load(&self) -> std::io::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored file is not valid UTF-8, treating as empty"
                );
                return Ok(None);
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Writes `content` atomically, creating the parent directory if needed.
    pub fn save(&self, content: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let parent = self.path.parent().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path has no parent directory",
            )
        })?;

        let mut tmp_file = NamedTempFile::new_in(parent)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.as_file().sync_all()?;

        tmp_file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("test.json"));

        file.save(r#"["a"]"#).unwrap();

        assert_eq!(file.load().unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("nonexistent.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_blank_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        assert!(AtomicFile::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_invalid_utf8_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();
        assert!(AtomicFile::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("test.json");
        let file = AtomicFile::new(file_path.clone());

        file.save("{}").unwrap();
        file.save(r#"{"k":"v"}"#).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path().join("nested"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("test.json")]);
        assert_eq!(fs::read_to_string(file_path).unwrap(), r#"{"k":"v"}"#);
    }

    #[test]
    fn test_interleaved_writers_do_not_clobber_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("shared.json");
        let first = AtomicFile::new(file_path.clone());
        let second = AtomicFile::new(file_path.clone());

        let handles: Vec<_> = [(first, "[1]"), (second, "[2]")]
            .into_iter()
            .map(|(file, content)| {
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        file.save(content).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(file_path).unwrap();
        assert!(content == "[1]" || content == "[2]");
    }
}
