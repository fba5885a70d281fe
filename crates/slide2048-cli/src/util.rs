use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Writes `value` as JSON, creating parent directories as needed.
pub fn write_json_file<T, P>(file_kind: &str, path: P, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {} file: {}", file_kind, path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)
        .with_context(|| format!("Failed to write {} JSON to {}", file_kind, path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush {} file: {}", file_kind, path.display()))?;
    Ok(())
}

/// Scratch directory under the system temp dir, removed on drop.
#[cfg(test)]
pub(crate) struct TestDir {
    path: std::path::PathBuf,
}

#[cfg(test)]
impl TestDir {
    pub(crate) fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("slide2048-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn join(&self, name: &str) -> std::path::PathBuf {
        self.path.join(name)
    }
}

#[cfg(test)]
impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_dir_is_removed_on_drop() {
        let dir = TestDir::new("util-drop");
        let path = dir.join("nested/value.json");
        write_json_file("test", &path, &42).unwrap();
        assert_eq!(read_json_file::<u32, _>("test", &path).unwrap(), 42);

        let root = dir.path().to_path_buf();
        drop(dir);
        assert!(!root.exists());
    }
}
