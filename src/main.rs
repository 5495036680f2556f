use std::path::PathBuf;

const DEFAULT_BOOK_FILE: &str = "addressbook.json";

fn main() {
    let mut args = std::env::args().skip(1);
    let mut book_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                book_path = args.next().map(PathBuf::from);
                if book_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("abook - address book assistant");
                println!();
                println!("Usage: abook [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -f, --file <PATH>   Address book file (default: {})",
                    DEFAULT_BOOK_FILE
                );
                println!("  -h, --help          Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let book_path = book_path.unwrap_or_else(|| PathBuf::from(DEFAULT_BOOK_FILE));
    abook::cli::run(&book_path);
}
