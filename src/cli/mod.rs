pub mod commands;

use std::io::{self, Write};
use std::path::Path;

use crate::model::AddressBook;
use crate::store;

/// Run the interactive assistant: load the book, take commands until
/// the user leaves, save on the way out.
pub fn run(book_path: &Path) {
    let mut book = match store::load(book_path) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Error loading {}: {}", book_path.display(), e);
            return;
        }
    };

    println!("Welcome to the assistant bot!");
    println!("Type 'help' for commands, 'exit' to quit.");

    repl_loop(&mut book);

    println!("Good bye!");
    if let Err(e) = store::save(book_path, &book) {
        eprintln!("Error saving {}: {}", book_path.display(), e);
    }
}

fn repl_loop(book: &mut AddressBook) {
    loop {
        let input = match read_line("Enter a command: ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);
        let command = command.to_ascii_lowercase();

        match command.as_str() {
            "close" | "exit" | "quit" => break,
            "hello" => println!("How can I help you?"),
            "help" | "?" => print_help(),
            _ => run_command(book, &command, args),
        }
    }
}

/// Dispatch one command and print its outcome. Command errors become
/// user-facing text here and nowhere else.
fn run_command(book: &mut AddressBook, command: &str, args: &str) {
    let result = match command {
        "add" => commands::add(book, args),
        "change" => commands::change(book, args),
        "phone" => commands::phone(book, args),
        "all" => commands::all(book),
        "add-birthday" => commands::add_birthday(book, args),
        "show-birthday" => commands::show_birthday(book, args),
        "birthdays" => commands::birthdays(book),
        "delete" | "remove" => commands::delete(book, args),
        "remove-phone" => commands::remove_phone(book, args),
        _ => {
            println!("Invalid command.");
            return;
        }
    };

    match result {
        Ok(message) => println!("{}", message),
        Err(e) => println!("{}", e),
    }
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  Contacts:
    add <name> <phone>                   Add a contact, or a number to one
    change <name> <old> <new>            Replace a contact's phone number
    remove-phone <name> <phone>          Drop a phone number
    phone <name>                         Show a contact's phone number
    all                                  List every contact
    delete <name>                        Delete a contact (alias: remove)

  Birthdays:
    add-birthday <name> <DD.MM.YYYY>     Set a contact's birthday
    show-birthday <name>                 Show a contact's birthday
    birthdays                            Birthdays in the next 7 days

  Other:
    hello                                Say hello
    help                                 Show this help
    close / exit / quit                  Save and exit"#
    );
}
