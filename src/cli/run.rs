use crate::{
    cli::{
        command::Cli,
        display::format_contact_table,
        menu::{MenuChoice, parse_choice, show_menu},
    },
    prelude::{
        AppError, ContactStore, CsvStore,
        contact::{ValidationReq, validate_phone_number},
    },
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// What the loop does after a cycle.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let store = CsvStore::new(&cli.file);
    debug!(path = %store.path().display(), "opening address book");

    let stdin = io::stdin();
    let mut control = ControlLoop::new(store, stdin.lock(), io::stdout());
    control.run()
}

/// Menu-driven read-eval-print loop over a [`ContactStore`].
pub struct ControlLoop<S, R, W> {
    store: S,
    input: R,
    output: W,
}

impl<S, R, W> ControlLoop<S, R, W>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (S, W) {
        (self.store, self.output)
    }

    /// Runs cycles until the user exits or input ends.
    ///
    /// A failed cycle is reported and the menu shown again. Only a failure to
    /// write that report ends the loop with an error.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            match self.cycle() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.output, "Exit from program.")?;
                    self.output.flush()?;
                    return Ok(());
                }
                Err(e) => {
                    warn!(error = %e, "menu cycle failed");
                    match &e {
                        AppError::ParseCommand(_) => writeln!(self.output, "{e}")?,
                        _ => writeln!(self.output, ">>> {e}")?,
                    }
                    writeln!(self.output)?;
                }
            }
        }
    }

    pub fn cycle(&mut self) -> Result<Flow, AppError> {
        show_menu(&mut self.output)?;
        let Some(action) = self.prompt("Enter your choice (1 to 5): ")? else {
            return Ok(Flow::Exit);
        };

        match parse_choice(&action)? {
            MenuChoice::SaveContact => self.save_contact(),
            MenuChoice::ShowContacts => self.show_contacts(),
            MenuChoice::UpdateContact => self.update_contact(),
            MenuChoice::DeleteContact => self.delete_contact(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn save_contact(&mut self) -> Result<Flow, AppError> {
        let Some(fields) = self.prompt_fields(&[
            "Enter first name: ",
            "Enter last name: ",
            "Enter phone number: ",
        ])?
        else {
            return Ok(Flow::Exit);
        };
        let [first_name, last_name, phone_number] = &fields[..] else {
            return Ok(Flow::Exit);
        };

        check_phone_number(phone_number)?;

        self.store.save(first_name, last_name, phone_number)?;
        writeln!(self.output, ">>> New contact saved.")?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn show_contacts(&mut self) -> Result<Flow, AppError> {
        let contacts = self.store.list_all()?;

        if contacts.is_empty() {
            writeln!(self.output, ">>> No contacts found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\n>>> Contact List:")?;
        write!(self.output, "{}", format_contact_table(&contacts))?;
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn update_contact(&mut self) -> Result<Flow, AppError> {
        writeln!(self.output, "Enter credential of contact to update")?;
        let Some(current) = self.prompt_fields(&["First name: ", "Last name: "])? else {
            return Ok(Flow::Exit);
        };
        writeln!(self.output)?;

        writeln!(self.output, "Enter new credentials")?;
        let Some(replacement) =
            self.prompt_fields(&["New first name: ", "New last name: ", "New number: "])?
        else {
            return Ok(Flow::Exit);
        };

        let ([first_name, last_name], [new_first, new_last, new_number]) =
            (&current[..], &replacement[..])
        else {
            return Ok(Flow::Exit);
        };

        check_phone_number(new_number)?;

        let updated = self
            .store
            .update(first_name, last_name, new_first, new_last, new_number)?;
        if updated == 0 {
            writeln!(
                self.output,
                ">>> No contact named exactly '{} {}', nothing was updated.",
                first_name, last_name
            )?;
        } else {
            writeln!(self.output, ">>> Contact updated successfully")?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> Result<Flow, AppError> {
        let Some(fields) = self.prompt_fields(&["Enter first name: ", "Enter last name: "])?
        else {
            return Ok(Flow::Exit);
        };
        let [first_name, last_name] = &fields[..] else {
            return Ok(Flow::Exit);
        };

        let removed = self.store.delete(first_name, last_name)?;
        if removed == 0 {
            writeln!(
                self.output,
                ">>> No contact named exactly '{} {}', nothing was removed.",
                first_name, last_name
            )?;
        } else {
            writeln!(self.output, ">>> Contact removed successfully.")?;
        }
        writeln!(self.output)?;
        Ok(Flow::Continue)
    }

    /// Prints `prompt` and reads one line. `None` once input has ended.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                writeln!(self.output)?;
                return Ok(None);
            }
            Ok(_) => {}
            // A broken stdin fails the same way on every read
            Err(e) => {
                warn!(error = %e, "cannot read input, leaving the menu");
                writeln!(self.output)?;
                return Ok(None);
            }
        }

        // Only the line terminator is dropped, names keep their spaces
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn prompt_fields(&mut self, prompts: &[&str]) -> Result<Option<Vec<String>>, AppError> {
        let mut fields = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.prompt(prompt)? {
                Some(field) => fields.push(field),
                None => return Ok(None),
            }
        }
        Ok(Some(fields))
    }
}

fn check_phone_number(phone: &str) -> Result<(), AppError> {
    if !validate_phone_number(phone)? {
        return Err(AppError::Validation(ValidationReq::phone_req()));
    }
    Ok(())
}
