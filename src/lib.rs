pub mod number_set;
pub mod runs;
pub mod summary;

pub use {
    number_set::NumberSet,
    runs::{Run, Runs, RunsExt},
    summary::{expand, summarize, summarize_partial},
};

/// Parses an optional comma separated list. `None` behaves like blank input.
pub fn parse(input: Option<&str>) -> number_set::Result<NumberSet> {
    match input {
        Some(input) => NumberSet::parse(input),
        None => Ok(NumberSet::new()),
    }
}
