pub mod csv_file;
pub mod memory;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use csv_file::CsvStore;
pub use memory::MemStore;

pub const DEFAULT_BOOK_PATH: &str = "Rubrica/Address_book.csv";

/// Operations over the persisted collection of contacts.
///
/// Existence and duplicate checks compare names after trimming and
/// lowercasing. `update` and `delete` only touch rows whose stored first
/// and last names are byte-for-byte equal to the ones given, so a key can
/// exist while no row is changed; both return how many rows they touched.
/// Rows are rewritten field by field, so columns beyond the three known ones
/// survive both operations.
pub trait ContactStore {
    fn exists(&self, first_name: &str, last_name: &str) -> bool;

    fn save(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<(), AppError>;

    fn list_all(&self) -> Result<Vec<Contact>, AppError>;

    fn update(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_first_name: &str,
        new_last_name: &str,
        new_phone_number: &str,
    ) -> Result<usize, AppError>;

    fn delete(&mut self, first_name: &str, last_name: &str) -> Result<usize, AppError>;
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

fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}
