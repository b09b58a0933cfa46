use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn seed(book: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(
        book,
        "First Name,Last Name,Phone Number\n\
         Jane,Doe,5550000\n\
         John,Smith,5551111\n",
    )?;
    Ok(())
}

#[test]
fn updating_a_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("book.csv");
    seed(&book)?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .write_stdin("3\nJane\nDoe\nJanet\nDoe\n5551234567\n5\n")
        .assert()
        .success()
        .stdout(contains(">>> Contact updated successfully"));

    let data = fs::read_to_string(&book)?;
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(
        lines,
        vec![
            "First Name,Last Name,Phone Number",
            "Janet,Doe,5551234567",
            "John,Smith,5551111",
        ]
    );
    Ok(())
}

#[test]
fn update_rejects_bad_number() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("book.csv");
    seed(&book)?;
    let before = fs::read(&book)?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .write_stdin("3\nJane\nDoe\nJanet\nDoe\n555-1234567\n5\n")
        .assert()
        .success()
        .stdout(contains(">>> Validation failed:"));

    assert_eq!(fs::read(&book)?, before);
    Ok(())
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("book.csv");
    seed(&book)?;
    let before = fs::read(&book)?;

    // Missing contact leaves the file untouched
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .write_stdin("4\nAlice\nWonder\n5\n")
        .assert()
        .success()
        .stdout(contains(">>> Contact 'Alice Wonder' not found."));
    assert_eq!(fs::read(&book)?, before);

    // Different casing finds the contact but removes no row
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .write_stdin("4\njane\ndoe\n5\n")
        .assert()
        .success()
        .stdout(contains("nothing was removed"));
    assert_eq!(fs::read(&book)?, before);

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .write_stdin("4\nJane\nDoe\n2\n5\n")
        .assert()
        .success()
        .stdout(contains(">>> Contact removed successfully."))
        .stdout(contains("John"));

    let data = fs::read_to_string(&book)?;
    let lines: Vec<&str> = data.lines().collect();
    assert_eq!(
        lines,
        vec!["First Name,Last Name,Phone Number", "John,Smith,5551111"]
    );
    Ok(())
}
