use clap::Parser;

use crate::store::DEFAULT_BOOK_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "address-book",
    version,
    about = "Save, show, update and delete contacts in a CSV address book"
)]
pub struct Cli {
    /// Path to the address book file (created on first save)
    #[arg(long, env = "ADDRESS_BOOK_PATH", default_value_t = String::from(DEFAULT_BOOK_PATH))]
    pub file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_defaults_to_rubrica() {
        let cli = Cli::try_parse_from(["address-book"]).unwrap();
        // ADDRESS_BOOK_PATH may be set by the environment running the tests
        if std::env::var_os("ADDRESS_BOOK_PATH").is_none() {
            assert_eq!(cli.file, "Rubrica/Address_book.csv");
        }
    }

    #[test]
    fn file_flag_overrides_default() {
        let cli = Cli::try_parse_from(["address-book", "--file", "/tmp/book.csv"]).unwrap();
        assert_eq!(cli.file, "/tmp/book.csv");
    }

    #[test]
    fn rejects_subcommands() {
        assert!(Cli::try_parse_from(["address-book", "add"]).is_err());
    }
}
