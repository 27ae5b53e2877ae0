mod dates;
mod question;

pub use dates::{format_creation_date, format_creation_date_in, CREATION_DATE_FORMAT};
pub use question::{Owner, Question, SearchResponse};
