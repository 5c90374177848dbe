use std::{
    collections::HashSet,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

/// Literal that marks an environment variable access on a line of source.
pub const ENV_MARKER: &str = "process.env.";

pub const OUTPUT_FILE_NAME: &str = ".env.example";

/// Base names that are never read or descended into.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".gitignore",
    "package-lock.json",
    "logs",
    "node_modules",
    "dist",
    "build",
    "out",
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    OUTPUT_FILE_NAME,
    ".vscode",
    ".idea",
    "README.md",
    "envy",
    "target",
];

/// Set of file and directory base names skipped during a scan.
///
/// Matching is exact on the base name only: `node_modules` excludes every
/// directory called `node_modules` at any depth, but `node_modules/foo`
/// or `*.log` never match anything.
///
/// Single files can also be excluded by path with [`ExclusionSet::with_path`];
/// those only match that one file, not others sharing its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
    paths: HashSet<PathBuf>,
}

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            paths: HashSet::new(),
        }
    }

    /// Add more names on top of the current set.
    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Exclude one existing file by path. A path that does not exist yet
    /// cannot be inside the tree and is ignored.
    pub fn with_path(mut self, path: &Path) -> Self {
        if let Ok(path) = fs::canonicalize(path) {
            self.paths.insert(path);
        }
        self
    }

    /// Names that are not valid UTF-8 are never excluded.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }

    /// Whether `path` is one of the files added with [`ExclusionSet::with_path`].
    pub fn contains_path(&self, path: &Path) -> bool {
        let name = path.file_name();
        if !self.paths.iter().any(|p| p.file_name() == name) {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| self.paths.contains(&p))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.paths.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}
