use std::io::Write;

use crate::errors::AppError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    SaveContact,
    ShowContacts,
    UpdateContact,
    DeleteContact,
    Exit,
}

pub fn show_menu<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(out, "------ Address Book ------")?;
    writeln!(out, "1. Save new contact")?;
    writeln!(out, "2. Show all contact")?;
    writeln!(out, "3. Update a contact")?;
    writeln!(out, "4. Delete a contact")?;
    writeln!(out, "5. Exit")?;
    Ok(())
}

pub fn parse_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action.trim() {
        "1" => Ok(MenuChoice::SaveContact),
        "2" => Ok(MenuChoice::ShowContacts),
        "3" => Ok(MenuChoice::UpdateContact),
        "4" => Ok(MenuChoice::DeleteContact),
        "5" => Ok(MenuChoice::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_five_choices() -> Result<(), AppError> {
        assert_eq!(parse_choice("1")?, MenuChoice::SaveContact);
        assert_eq!(parse_choice("2")?, MenuChoice::ShowContacts);
        assert_eq!(parse_choice(" 3 ")?, MenuChoice::UpdateContact);
        assert_eq!(parse_choice("4")?, MenuChoice::DeleteContact);
        assert_eq!(parse_choice("5")?, MenuChoice::Exit);
        Ok(())
    }

    #[test]
    fn rejects_anything_else() {
        for bad in ["", "0", "6", "one", "1 2", "exit"] {
            assert!(matches!(parse_choice(bad), Err(AppError::ParseCommand(_))));
        }
    }
}
