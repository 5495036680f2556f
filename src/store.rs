use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::AbookResult;
use crate::model::AddressBook;

/// Reads the book from `path`. A missing file is an empty book; a file
/// that exists but cannot be parsed is an error, so a broken book is
/// never silently replaced.
pub fn load(path: &Path) -> AbookResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Writes the whole book to `path`, replacing previous contents.
pub fn save(path: &Path, book: &AddressBook) -> AbookResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    Ok(())
}
