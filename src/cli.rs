pub mod command;
pub mod run;

use crate::errors::AppError;
use std::io::{self, BufRead, Write};

pub use run::run_app;

// INPUT FUNCTIONS
pub fn get_input() -> Result<String, AppError> {
    read_trimmed(&mut io::stdin().lock())
}

fn read_trimmed(reader: &mut impl BufRead) -> Result<String, AppError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(AppError::InvalidArgument(
            "input ended before a value was given".to_string(),
        ));
    }
    Ok(input.trim().to_string())
}

/// Returns `given`, or asks for it on stdin when absent.
pub fn value_or_prompt(given: Option<String>, label: &str) -> Result<String, AppError> {
    if let Some(value) = given {
        return Ok(value);
    }

    print!("{label}: ");
    io::stdout().flush()?;
    get_input()
}
