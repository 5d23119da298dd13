//! Contact book - command line entry point
//!
//! Runs one command against the address book file and exits. All output
//! goes to stdout; logs go to stderr.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use contact_book::repositories::{BookRepository, JsonFileRepository};
use contact_book::{Config, ContactService, Record};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "contact-book", version, about = "Personal contact book")]
struct Cli {
    /// Address book file (overrides CONTACT_BOOK_PATH)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Start from an empty book if the file can't be read or parsed.
    /// The file is replaced on the next save.
    #[arg(long, global = true)]
    start_empty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a contact with its first phone
    Add { name: String, phone: String },
    /// Delete a contact
    Delete { name: String },
    /// Add another phone to a contact
    AddPhone { name: String, phone: String },
    /// Remove a phone from a contact
    RemovePhone { name: String, phone: String },
    /// Replace one of a contact's phones
    EditPhone { name: String, old: String, new: String },
    /// Set a contact's birthday (YYYY-MM-DD)
    SetBirthday { name: String, date: String },
    /// Remove a contact's birthday
    ClearBirthday { name: String },
    /// Find contacts whose name contains the query
    SearchName { query: String },
    /// Find contacts with a phone containing the query
    SearchPhone { query: String },
    /// List every contact
    List,
    /// Show birthdays coming up soon
    Upcoming {
        /// Window in days (overrides UPCOMING_BIRTHDAY_DAYS)
        #[arg(long)]
        days: Option<i64>,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so command output stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = cli.file.clone().unwrap_or_else(|| config.book_path.clone());
    info!("Using address book at {}", path.display());

    let repository = Arc::new(JsonFileRepository::new()) as Arc<dyn BookRepository>;
    let mut service = ContactService::new(repository, path.clone(), config.autosave);
    if cli.start_empty {
        if let Err(e) = service.load_or_empty(&path) {
            eprintln!("Could not load {} ({}), starting with an empty book", path.display(), e);
        }
    } else if let Err(e) = service.load(&path) {
        error!("Failed to load address book: {}", e);
        return Err(e.into());
    }

    let today = Local::now().date_naive();
    run(&mut service, cli.command, &config, today)?;

    if !config.autosave {
        let location = service.location().to_path_buf();
        service.save(&location)?;
    }
    Ok(())
}

fn run(
    service: &mut ContactService,
    command: Command,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    match command {
        Command::Add { name, phone } => {
            service.add_contact(&name, &phone)?;
            println!("Added {}", name);
        }
        Command::Delete { name } => {
            let removed = service.delete_contact(&name)?;
            println!("Deleted {}", removed.name());
        }
        Command::AddPhone { name, phone } => {
            if service.add_phone(&name, &phone)? {
                println!("Added {} to {}", phone, name);
            } else {
                println!("{} already has {}", name, phone);
            }
        }
        Command::RemovePhone { name, phone } => {
            if service.remove_phone(&name, &phone)? {
                println!("Removed {} from {}", phone, name);
            } else {
                println!("{} has no phone {}", name, phone);
            }
        }
        Command::EditPhone { name, old, new } => {
            service.edit_phone(&name, &old, &new)?;
            println!("Changed {} to {} for {}", old, new, name);
        }
        Command::SetBirthday { name, date } => {
            service.set_birthday(&name, &date)?;
            println!("Birthday for {} set to {}", name, date);
        }
        Command::ClearBirthday { name } => {
            if service.clear_birthday(&name)? {
                println!("Cleared birthday for {}", name);
            } else {
                println!("{} has no birthday set", name);
            }
        }
        Command::SearchName { query } => print_records(&service.search_by_name(&query), today),
        Command::SearchPhone { query } => print_records(&service.search_by_phone(&query), today),
        Command::List => print_records(&service.list_all(), today),
        Command::Upcoming { days } => {
            let window = days.unwrap_or(config.upcoming_birthday_days);
            let upcoming = service.upcoming_birthdays(today, window);
            if upcoming.is_empty() {
                println!("No birthdays in the next {} days", window);
            }
            for entry in upcoming {
                println!(
                    "{} - {} (in {} days, congratulate on {} {})",
                    entry.record.name(),
                    entry.date,
                    entry.days_until,
                    entry.congratulate_on.format("%A"),
                    entry.congratulate_on
                );
            }
        }
    }
    Ok(())
}

fn print_records(records: &[&Record], today: NaiveDate) {
    if records.is_empty() {
        println!("No contacts found");
        return;
    }
    for record in records {
        let birthday = match (record.birthday(), record.days_to_next_birthday(today)) {
            (Some(b), Some(days)) => format!("{} ({} days to go)", b, days),
            _ => "no birthday".to_string(),
        };
        println!("{}: {} | {}", record.name(), record.list_phones().join(", "), birthday);
    }
}
