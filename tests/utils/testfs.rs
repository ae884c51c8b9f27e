use std::path::{Component, Path, PathBuf};

/// Scratch directory for a single test under the cargo target directory.
#[derive(Debug, Clone)]
pub struct TestFs {
    root: PathBuf,
}

impl TestFs {
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut root = PathBuf::from(env!("CARGO_TARGET_TMPDIR"))
            .join("raidtimes")
            .join("testout");
        root.push(normalize(path.as_ref()));
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Writes `contents` to `path` inside the test directory and returns the
    /// full path.
    pub fn write(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> std::io::Result<PathBuf> {
        let path = self.join_path(path);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn join_path(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(normalize(path.as_ref()))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if !normalized.pop() {
                    panic!("path normalization traversed outside of root");
                }
            }
            Component::Normal(p) => {
                normalized.push(p);
            }
            _ => continue,
        }
    }

    normalized
}
