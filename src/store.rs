pub mod json;

use crate::domain::{PeopleBook, Person};
use crate::errors::AppError;
use std::fs;
use std::path::Path;

pub use json::JsonStore;

pub trait PeopleStore {
    /// Reads everything. A missing file is an empty book, not an error.
    fn load(&self) -> Result<PeopleBook, AppError>;

    /// Replaces the stored contents with `people`.
    fn save(&self, people: &[Person]) -> Result<(), AppError>;

    fn exists(&self) -> bool;

    fn path(&self) -> &Path;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
