//! Query length rules.

/// Minimum number of characters a query needs before it is sent.
pub const MIN_QUERY_CHARS: usize = 3;

pub const EMPTY_QUERY_MESSAGE: &str = "Enter three or more characters";
pub const ONE_CHAR_MESSAGE: &str = "Two more character required";
pub const TWO_CHAR_MESSAGE: &str = "One more character required";

/// Check a query before searching.
///
/// Length counts characters, not bytes. No trimming is applied.
pub fn validate_query(query: &str) -> Result<(), &'static str> {
    match query.chars().count() {
        0 => Err(EMPTY_QUERY_MESSAGE),
        1 => Err(ONE_CHAR_MESSAGE),
        2 => Err(TWO_CHAR_MESSAGE),
        _ => Ok(()),
    }
}
