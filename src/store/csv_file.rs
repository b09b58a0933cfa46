use super::*;

use csv::{Reader, StringRecord, WriterBuilder};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::contact::HEADER;

/// Contact store backed by a single CSV file.
///
/// The file is opened and closed inside every call, nothing is cached
/// between operations.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn needs_header(&self) -> Result<bool, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(true);
        }
        Ok(fs::metadata(&self.path)?.len() == 0)
    }

    fn read_raw(&self) -> Result<(StringRecord, Vec<StringRecord>), AppError> {
        let mut reader = Reader::from_path(&self.path)?;
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for row in reader.records() {
            rows.push(row?);
        }
        Ok((headers, rows))
    }

    /// Replaces the file with `headers` followed by `rows`.
    ///
    /// Rows are written to a temporary file in the same directory which is
    /// then renamed over the book, so readers never see a half-written
    /// table.
    fn rewrite(&self, headers: &StringRecord, rows: &[StringRecord]) -> Result<(), AppError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;

        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            writer.write_record(headers)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }

        // The temp file is created 0600, keep the book's own mode
        fs::set_permissions(tmp.path(), fs::metadata(&self.path)?.permissions())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Raw first/last field comparison, extra columns are ignored.
fn row_matches(row: &StringRecord, first_name: &str, last_name: &str) -> bool {
    row.get(0) == Some(first_name) && row.get(1) == Some(last_name)
}

impl ContactStore for CsvStore {
    fn exists(&self, first_name: &str, last_name: &str) -> bool {
        match self.list_all() {
            Ok(contacts) => contacts
                .iter()
                .any(|contact| contact.matches_key(first_name, last_name)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Error reading the address book");
                false
            }
        }
    }

    fn save(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<(), AppError> {
        if self.exists(first_name, last_name) {
            return Err(AppError::DuplicateContact(display_name(first_name, last_name)));
        }

        create_file_parent(&self.path)?;
        let write_header = self.needs_header()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if write_header {
            writer.write_record(HEADER)?;
        }
        writer.serialize(Contact::new(
            first_name.to_string(),
            last_name.to_string(),
            phone_number.to_string(),
        ))?;
        writer.flush()?;

        debug!(path = %self.path.display(), write_header, "appended contact");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let mut reader = Reader::from_path(&self.path)?;
        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let contact: Contact = result?;
            contacts.push(contact);
        }
        Ok(contacts)
    }

    fn update(
        &mut self,
        first_name: &str,
        last_name: &str,
        new_first_name: &str,
        new_last_name: &str,
        new_phone_number: &str,
    ) -> Result<usize, AppError> {
        if !self.exists(first_name, last_name) {
            return Err(AppError::NotFound(display_name(first_name, last_name)));
        }

        let (headers, rows) = self.read_raw()?;
        let mut updated = 0;
        let rows: Vec<StringRecord> = rows
            .into_iter()
            .map(|row| {
                if !row_matches(&row, first_name, last_name) {
                    return row;
                }
                updated += 1;
                row.iter()
                    .enumerate()
                    .map(|(i, field)| match i {
                        0 => new_first_name,
                        1 => new_last_name,
                        2 => new_phone_number,
                        _ => field,
                    })
                    .collect()
            })
            .collect();

        if updated > 0 {
            self.rewrite(&headers, &rows)?;
        }

        debug!(path = %self.path.display(), updated, "updated contacts");
        Ok(updated)
    }

    fn delete(&mut self, first_name: &str, last_name: &str) -> Result<usize, AppError> {
        if !self.exists(first_name, last_name) {
            return Err(AppError::NotFound(display_name(first_name, last_name)));
        }

        let (headers, rows) = self.read_raw()?;
        let before = rows.len();
        let kept: Vec<StringRecord> = rows
            .into_iter()
            .filter(|row| !row_matches(row, first_name, last_name))
            .collect();
        let removed = before - kept.len();

        if removed > 0 {
            self.rewrite(&headers, &kept)?;
        }

        debug!(path = %self.path.display(), removed, "deleted contacts");
        Ok(removed)
    }
}
