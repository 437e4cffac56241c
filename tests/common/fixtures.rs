// Test file fixtures

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Manages temporary test files
pub struct TestFixture {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestFixture {
    /// Create a new temporary file with given content
    pub fn new(filename: &str, content: &str) -> std::io::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join(filename);

        let mut file = fs::File::create(&path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(TestFixture {
            _temp_dir: temp_dir,
            path,
        })
    }

    /// Create a temporary JSON file from any serializable value
    pub fn json<T: Serialize>(filename: &str, value: &T) -> std::io::Result<Self> {
        let content = serde_json::to_string_pretty(value)?;
        Self::new(filename, &content)
    }

    /// Read the current content of the file
    pub fn read_content(&self) -> std::io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_new() {
        let fixture = TestFixture::new("test.json", "{}").unwrap();
        assert_eq!(fixture.read_content().unwrap(), "{}");
    }

    #[test]
    fn test_fixture_json() {
        let fixture = TestFixture::json("rows.json", &vec![1, 2, 3]).unwrap();
        let parsed: Vec<i32> = serde_json::from_str(&fixture.read_content().unwrap()).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }
}
