use crate::{
    cli::value_or_prompt,
    prelude::{
        AppError, JsonStore, PeopleStore, Person,
        command::{Cli, Commands},
        parse_date,
        query::{list_all, select_by_month},
        validate_month,
    },
};
use std::path::Path;
use tracing::debug;

/// Runs one parsed command line against its data file.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Add {
            file,
            last_name,
            first_name,
            phone_number,
            birthdate,
            interactive: _,
        } => {
            let surname = value_or_prompt(last_name, "Surname")?;
            let first_name = value_or_prompt(first_name, "First name")?;
            let phone_number = value_or_prompt(phone_number, "Phone number")?;
            let birthdate = value_or_prompt(birthdate, "Birthdate (DD.MM.YYYY)")?;

            // Bad dates stop here, before the file is touched
            let birthdate = parse_date(&birthdate)?;

            let store = JsonStore::new(file.file);
            let mut book = store.load()?;

            book.add(Person::new(surname, first_name, phone_number, birthdate));
            store.save(book.people())?;

            println!("Person added successfully");
            Ok(())
        }

        Commands::List { file } => {
            let store = existing_store(&file.file)?;
            let book = store.load()?;

            print!("{}", list_all(book.people()));
            Ok(())
        }

        Commands::Select {
            file,
            month,
            interactive: _,
        } => {
            let month = match month {
                Some(m) => m,
                None => value_or_prompt(None, "Month")?.parse::<i64>().map_err(|e| {
                    AppError::InvalidArgument(format!("month must be a number: {e}"))
                })?,
            };
            let month = validate_month(month)?;

            let store = existing_store(&file.file)?;
            let book = store.load()?;

            print!("{}", select_by_month(book.people(), month));
            Ok(())
        }
    }
}

/// Read-only commands refuse a missing file instead of treating it as empty.
fn existing_store(path: &Path) -> Result<JsonStore, AppError> {
    let store = JsonStore::new(path);
    if !store.exists() {
        debug!(path = ?store.path(), "data file missing");
        return Err(AppError::NotFound(store.path().to_path_buf()));
    }
    Ok(store)
}
