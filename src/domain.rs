pub mod book;
pub mod person;
pub mod query;

use crate::errors::AppError;

pub use book::PeopleBook;
pub use person::Person;
