use super::{decode, encode, BookStore};
use crate::book::AddressBook;
use crate::error::{RolodexError, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "book".to_string());
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(RolodexError::Io)?;
        }

        let tmp = self.tmp_path(&dir);
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        });
        if let Err(e) = written.and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(RolodexError::Io(e));
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no address book yet, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(RolodexError::CorruptStore {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(RolodexError::Io(e)),
        };

        let book = decode(&content, &self.path)?;
        info!(path = %self.path.display(), contacts = book.len(), "address book loaded");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let content = encode(book)?;
        self.write_atomic(&content)?;
        info!(path = %self.path.display(), contacts = book.len(), "address book saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("AddressBook.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        let book = store.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let (_dir, mut store) = setup();
        let mut book = AddressBook::new();
        book.add_contact("Alice", "12345").unwrap();
        book.add_contact("Bob", "222").unwrap();
        book.get_mut("Bob").unwrap().add_phone("333").unwrap();
        book.get_mut("Alice")
            .unwrap()
            .set_birthday(Some("1997-05-03"))
            .unwrap();

        store.save(&book).unwrap();
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn empty_book_roundtrips() {
        let (_dir, mut store) = setup();
        store.save(&AddressBook::new()).unwrap();
        assert!(store.path().exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_overwrites_and_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        let mut book = AddressBook::new();
        book.add_contact("Alice", "1").unwrap();
        store.save(&book).unwrap();

        book.add_contact("Alice", "2").unwrap();
        store.save(&book).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.get("Alice").unwrap().phones()[0].as_str(), "2");

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/book.json"));
        store.save(&AddressBook::new()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_dir, store) = setup();
        fs::write(store.path(), "\u{0}\u{1}garbage").unwrap();
        assert!(matches!(
            store.load(),
            Err(RolodexError::CorruptStore { .. })
        ));
    }

    #[test]
    fn non_utf8_file_is_reported_as_corrupt() {
        let (_dir, store) = setup();
        fs::write(store.path(), [0xff, 0xfe, 0x80]).unwrap();
        assert!(matches!(
            store.load(),
            Err(RolodexError::CorruptStore { .. })
        ));
    }

    #[test]
    fn failed_save_keeps_previous_file() {
        let (dir, mut store) = setup();
        let mut book = AddressBook::new();
        book.add_contact("Alice", "1").unwrap();
        store.save(&book).unwrap();

        // A directory where the file should be makes the rename fail.
        let blocked = FileStore::new(dir.path().join("blocked"));
        fs::create_dir(blocked.path()).unwrap();
        fs::write(blocked.path().join("keep"), "x").unwrap();
        let mut blocked = blocked;
        assert!(blocked.save(&book).is_err());

        assert_eq!(store.load().unwrap(), book);
        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }
}
