pub use crate::cli::{command, run_app};
pub use crate::domain::{
    PeopleBook,
    person::{self, Person, format_date, parse_date},
    query::{self, Month},
};
pub use crate::errors::AppError;
pub use crate::store::{self, JsonStore, PeopleStore};
pub use crate::validation::validate_month;
