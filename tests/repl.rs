//! End-to-end tests driving the rolodex binary through its stdin/stdout
//! interface, with the data directory pointed at a temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rolodex(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.env("ROLODEX_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn add_and_list_contacts() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 1234567890\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the assistant bot!"))
        .stdout(predicate::str::contains("Contact John added."))
        .stdout(predicate::str::contains(
            "Contact name: John, phone: 1234567890, birthday: ",
        ))
        .stdout(predicate::str::contains("Data has been saved. Good bye!"));
}

#[test]
fn contacts_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 1234567890\nadd-birthday John 15.05.1990\nclose\n")
        .assert()
        .success();

    rolodex(&dir)
        .write_stdin("phone John\nshow-birthday John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("Birthday for John: 15.05.1990"));
}

#[test]
fn add_on_existing_name_reports_updated() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 1234567890\nadd John 5551234567\nphone John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact John updated."))
        .stdout(predicate::str::contains("1234567890, 5551234567"));
}

#[test]
fn invalid_phone_is_reported_and_loop_continues() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 123\nhello\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The phone number must consist of 10 digits.",
        ))
        .stdout(predicate::str::contains("How can I help you?"));
}

#[test]
fn invalid_date_is_reported() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 1234567890\nadd-birthday John 1990-05-15\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date format. Use DD.MM.YYYY"));
}

#[test]
fn wrong_argument_count_prints_usage_hint() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter the command, name and number.",
        ));
}

#[test]
fn unknown_command_is_rejected() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("frobnicate\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn missing_contact_messages() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("phone Ghost\nchange Ghost 1234567890\nshow-birthday Ghost\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("This contact doesn't exist."))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("Contact 'Ghost' not found."));
}

#[test]
fn empty_book_listings() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("all\nbirthdays\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."))
        .stdout(predicate::str::contains("No upcoming birthdays."));
}

#[test]
fn eof_saves_and_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    // no exit command: the pipe just closes
    rolodex(&dir)
        .write_stdin("add John 1234567890\n")
        .assert()
        .success();

    rolodex(&dir)
        .write_stdin("phone John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .write_stdin("add John 1234567890\nexit\n")
        .assert()
        .success();

    rolodex(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name,Phones,Birthday"))
        .stdout(predicate::str::contains("John,1234567890,"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    rolodex(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("contacts.json"))
        .stdout(predicate::str::contains("Upcoming window (days): 7"));
}
