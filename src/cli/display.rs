use crate::domain::contact::{Contact, HEADER};

const COLUMN_WIDTH: usize = 15;

pub fn format_contact_row(first: &str, last: &str, phone: &str) -> String {
    format!(
        "{:<w$} {:<w$} {:<w$}",
        first,
        last,
        phone,
        w = COLUMN_WIDTH
    )
}

/// Fixed-width table of contacts, header and rule included.
pub fn format_contact_table(contacts: &[Contact]) -> String {
    let mut table = format_contact_row(HEADER[0], HEADER[1], HEADER[2]);
    table.push('\n');
    table.push_str(&"-".repeat(COLUMN_WIDTH * 3));
    table.push('\n');

    for c in contacts {
        table.push_str(&format_contact_row(&c.first_name, &c.last_name, &c.phone_number));
        table.push('\n');
    }
    table
}
