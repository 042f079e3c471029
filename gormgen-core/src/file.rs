use std::path::{Path, PathBuf};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous output.
    ///
    /// Returns the path that was written.
    fn write(&self, base: &Path) -> std::io::Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// A rendered file held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the file, replacing any previous content
    pub fn write(&self) -> std::io::Result<()> {
        write_file(&self.path, &self.content)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note(&'static str);

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("notes").join("note.txt")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_write_overwrites() {
        let temp = TempDir::new().unwrap();

        Note("first").write(temp.path()).unwrap();
        let path = Note("second").write(temp.path()).unwrap();

        assert_eq!(path, temp.path().join("notes").join("note.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.go");

        let file = File::new(&path, "package models\n");
        file.write().unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package models\n");
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let file = File::new(blocker.join("out.go"), "x");
        assert!(file.write().is_err());
    }
}
