use super::*;
use std::borrow::Cow;
use std::fmt::{self, Write};

/// A calendar month, 1 (January) to 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month(u32);

impl Month {
    pub fn new(month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Month(month))
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const WIDTHS: [usize; 5] = [4, 25, 15, 15, 15];
const HEADERS: [&str; 5] = ["No", "Surname", "First name", "Phone number", "Birthdate"];

fn border() -> String {
    let mut line = String::from("+");
    for width in WIDTHS {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Cuts a cell to `width` characters, marking the cut with `…`.
fn clip(cell: &str, width: usize) -> Cow<'_, str> {
    if cell.chars().count() <= width {
        return Cow::Borrowed(cell);
    }
    let mut clipped: String = cell.chars().take(width - 1).collect();
    clipped.push('…');
    Cow::Owned(clipped)
}

fn row(cells: [&str; 5]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(WIDTHS) {
        let cell = clip(cell, width);
        // Infallible for String
        let _ = write!(line, " {cell:^width$} |");
    }
    line
}

/// Table of everyone, in the order held. Empty input renders a notice
/// instead of a bare header.
pub fn list_all(people: &[Person]) -> String {
    if people.is_empty() {
        return "No people yet\n".to_string();
    }

    let line = border();
    let mut out = String::new();

    out.push_str(&line);
    out.push('\n');
    out.push_str(&row(HEADERS));
    out.push('\n');

    for (mut i, p) in people.iter().enumerate() {
        i += 1;
        let number = i.to_string();
        let birthdate = p.birthdate_str();

        out.push_str(&line);
        out.push('\n');
        out.push_str(&row([
            &number,
            &p.surname,
            &p.first_name,
            &p.phone_number,
            &birthdate,
        ]));
        out.push('\n');
    }
    out.push_str(&line);
    out.push('\n');

    out
}

/// People whose birthday falls in `month`, order preserved.
pub fn born_in(people: &[Person], month: Month) -> Vec<&Person> {
    people
        .iter()
        .filter(|p| p.birth_month() == month.number())
        .collect()
}

pub fn select_by_month(people: &[Person], month: Month) -> String {
    let matches = born_in(people, month);

    if matches.is_empty() {
        return format!("No people born in month {month}.\n");
    }

    let mut out = format!("People born in month {month}:\n");
    for p in matches {
        let _ = writeln!(
            out,
            "Surname: {}, First name: {}, Phone number: {}, Birthdate: {}",
            p.surname,
            p.first_name,
            p.phone_number,
            p.birthdate_str()
        );
    }
    out
}
