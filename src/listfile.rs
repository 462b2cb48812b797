//! Lists on disk: plain text, one item per line.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ListError;

const LIST_EXTENSION: &str = ".txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// The directory list files are kept in.
#[derive(Debug, Clone)]
pub struct ListDir {
    root: PathBuf,
}

impl ListDir {
    pub fn new(root: impl Into<PathBuf>) -> ListDir {
        ListDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the list called `name` lives. `.txt` is added unless present.
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(filename(name))
    }
}

pub fn filename(name: &str) -> String {
    if name.ends_with(LIST_EXTENSION) {
        name.to_string()
    } else {
        format!("{}{}", name, LIST_EXTENSION)
    }
}

/// Read a list back. Lines are trimmed and blank ones dropped.
pub fn load(path: &Path) -> Result<Vec<String>, ListError> {
    let text = fs::read_to_string(path).map_err(|e| ListError::file(path, e))?;
    let items: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    info!(path = %path.display(), items = items.len(), "loaded list");
    Ok(items)
}

/// Write every item followed by a line separator, creating the directory first.
pub fn save(path: &Path, items: &[String]) -> Result<(), ListError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ListError::file(parent, e))?;
    }
    let mut text = String::new();
    for item in items {
        text.push_str(item);
        text.push_str(LINE_ENDING);
    }
    fs::write(path, text).map_err(|e| ListError::file(path, e))?;
    info!(path = %path.display(), items = items.len(), "saved list");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_get_one_extension() {
        let dir = ListDir::new("lists");
        assert_eq!(dir.resolve("groceries"), Path::new("lists/groceries.txt"));
        assert_eq!(dir.resolve("groceries.txt"), Path::new("lists/groceries.txt"));
        assert_eq!(filename("notes.md"), "notes.md.txt");
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = ListDir::new(tmp.path().join("nested"));
        let path = dir.resolve("todo");
        let items: Vec<String> = vec!["eggs".into(), "milk".into(), "eggs".into()];
        save(&path, &items).unwrap();
        assert_eq!(load(&path).unwrap(), items);
    }

    #[test]
    fn one_line_per_item() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.txt");
        save(&path, &["x".to_string(), "y z".to_string()]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("x{0}y z{0}", LINE_ENDING));

        save(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn load_skips_blank_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("hand.txt");
        fs::write(&path, "  first \r\n\n   \nsecond").unwrap();
        assert_eq!(load(&path).unwrap(), ["first", "second"]);
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.txt");
        assert_matches!(load(&path), Err(ListError::File { path: p, .. }) if p == path);
    }
}
