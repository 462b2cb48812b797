use std::path::{Path, PathBuf};

use chrono::prelude::*;

use crate::error::ListError;

pub type DTUtc = DateTime<Utc>;

/// The list being edited and what it is tied to on disk.
///
/// Positions in this API are 1-based, the way they are shown to the user.
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<String>,
    file: Option<PathBuf>,
    dirty: bool,
    synced_at: Option<DTUtc>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// A clean session holding what was just read from `path`.
    pub fn from_file(path: PathBuf, items: Vec<String>) -> Session {
        let mut session = Session::new();
        session.replace(path, items);
        session
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// When the list last matched its file.
    pub fn synced_at(&self) -> Option<DTUtc> {
        self.synced_at
    }

    fn check(&self, position: usize, len: usize) -> Result<usize, ListError> {
        if position == 0 || position > len {
            return Err(ListError::Position { position, len });
        }
        Ok(position - 1)
    }

    pub fn add(&mut self, item: String) {
        self.items.push(item);
        self.dirty = true;
    }

    /// Insert so that `item` ends up at `position`, anywhere in `1..=len+1`.
    pub fn insert(&mut self, position: usize, item: String) -> Result<(), ListError> {
        let index = self.check(position, self.len() + 1)?;
        self.items.insert(index, item);
        self.dirty = true;
        Ok(())
    }

    pub fn delete(&mut self, position: usize) -> Result<String, ListError> {
        let index = self.check(position, self.len())?;
        let removed = self.items.remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Move the item at `from` so that it sits at `to` in the resulting list.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        let from = self.check(from, self.len())?;
        let to = self.check(to, self.len())?;
        // The list is one shorter after the removal, so inserting at `to`
        // already leaves the item at final slot `to`.
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.dirty = true;
        Ok(())
    }

    /// Drop every item and forget the file. The emptied list counts as unsaved.
    pub fn clear(&mut self) {
        self.items.clear();
        self.file = None;
        self.synced_at = None;
        self.dirty = true;
    }

    /// Swap in a freshly loaded list.
    pub fn replace(&mut self, path: PathBuf, items: Vec<String>) {
        self.items = items;
        self.mark_saved(path);
    }

    /// Record that the list now matches the contents of `path`.
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file = Some(path);
        self.dirty = false;
        self.synced_at = Some(Utc::now());
    }

    /// The numbered listing, or `[empty]`.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return String::from("[empty]\n");
        }
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            out = format!("{}{}: {}\n", out, i + 1, item);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn session_of(items: &[&str]) -> Session {
        Session::from_file(
            PathBuf::from("lists/test.txt"),
            items.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn grocery_scenario() {
        let mut s = Session::new();
        s.add("milk".into());
        s.add("eggs".into());
        s.insert(1, "bread".into()).unwrap();
        assert_eq!(s.items(), ["bread", "milk", "eggs"]);
        s.move_item(3, 1).unwrap();
        assert_eq!(s.items(), ["eggs", "bread", "milk"]);
        assert_eq!(s.delete(2).unwrap(), "bread");
        assert_eq!(s.items(), ["eggs", "milk"]);
        assert!(s.is_dirty());
    }

    #[test]
    fn move_lands_on_the_destination_slot() {
        let names = ["a", "b", "c", "d", "e"];
        for from in 1..=names.len() {
            for to in 1..=names.len() {
                let mut s = session_of(&names);
                let moved = s.items()[from - 1].clone();
                s.move_item(from, to).unwrap();
                assert_eq!(s.len(), names.len());
                assert_eq!(s.items()[to - 1], moved, "move {} -> {}", from, to);
                assert!(s.is_dirty());
            }
        }
    }

    #[test]
    fn move_keeps_the_other_items_in_order() {
        let mut s = session_of(&["a", "b", "c", "d"]);
        s.move_item(1, 3).unwrap();
        assert_eq!(s.items(), ["b", "c", "a", "d"]);
        s.move_item(2, 3).unwrap();
        assert_eq!(s.items(), ["b", "a", "c", "d"]);
        s.move_item(4, 4).unwrap();
        assert_eq!(s.items(), ["b", "a", "c", "d"]);
    }

    #[test]
    fn insert_shows_up_at_its_numbered_line() {
        for position in 1..=4 {
            let mut s = session_of(&["a", "b", "c"]);
            s.insert(position, "new".into()).unwrap();
            let line = format!("{}: new", position);
            assert!(s.render().lines().any(|l| l == line), "{}", s.render());
        }
    }

    #[test]
    fn edits_add_up() {
        let mut s = session_of(&["a", "b"]);
        s.add("c".into());
        s.insert(2, "d".into()).unwrap();
        s.delete(1).unwrap();
        s.move_item(1, 3).unwrap();
        s.add("e".into());
        assert_eq!(s.len(), 2 + 2 + 1 - 1);
    }

    #[test]
    fn positions_outside_the_list_are_refused() {
        let mut s = session_of(&["a"]);
        assert_matches!(s.delete(0), Err(ListError::Position { position: 0, len: 1 }));
        assert_matches!(s.delete(2), Err(ListError::Position { position: 2, len: 1 }));
        assert_matches!(s.insert(3, "x".into()), Err(ListError::Position { .. }));
        assert_matches!(s.move_item(1, 2), Err(ListError::Position { .. }));
        assert_eq!(s.items(), ["a"]);
        assert!(!s.is_dirty());

        let mut empty = Session::new();
        assert!(empty.insert(1, "x".into()).is_ok());
    }

    #[test]
    fn save_and_load_leave_it_clean() {
        let mut s = Session::new();
        s.add("a".into());
        assert!(s.is_dirty());
        s.mark_saved(PathBuf::from("lists/a.txt"));
        assert!(!s.is_dirty());
        assert!(s.synced_at().is_some());
        assert_eq!(s.file(), Some(Path::new("lists/a.txt")));

        s.replace(PathBuf::from("lists/b.txt"), vec!["x".into()]);
        assert!(!s.is_dirty());
        assert_eq!(s.items(), ["x"]);
    }

    #[test]
    fn clear_forgets_the_file() {
        let mut s = session_of(&["a", "b"]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.file(), None);
        assert_eq!(s.synced_at(), None);
        assert!(s.is_dirty());
        assert_eq!(s.render(), "[empty]\n");
    }

    #[test]
    fn render_numbers_from_one() {
        assert_eq!(session_of(&["x", "y"]).render(), "1: x\n2: y\n");
    }
}
