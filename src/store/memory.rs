use super::*;

/// In-memory contact store with the same matching rules as [`CsvStore`].
#[derive(Debug, Default)]
pub struct MemStore {
    pub data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }
}

impl ContactStore for MemStore {
    fn exists(&self, first_name: &str, last_name: &str) -> bool {
        self.data
            .iter()
            .any(|contact| contact.matches_key(first_name, last_name))
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
        self.data.push(Contact::new(
            first_name.to_string(),
            last_name.to_string(),
            phone_number.to_string(),
        ));
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.clone())
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

        let mut updated = 0;
        for contact in self
            .data
            .iter_mut()
            .filter(|c| c.matches_exactly(first_name, last_name))
        {
            contact.first_name = new_first_name.to_string();
            contact.last_name = new_last_name.to_string();
            contact.phone_number = new_phone_number.to_string();
            updated += 1;
        }
        Ok(updated)
    }

    fn delete(&mut self, first_name: &str, last_name: &str) -> Result<usize, AppError> {
        if !self.exists(first_name, last_name) {
            return Err(AppError::NotFound(display_name(first_name, last_name)));
        }

        let before = self.data.len();
        self.data
            .retain(|contact| !contact.matches_exactly(first_name, last_name));
        Ok(before - self.data.len())
    }
}
