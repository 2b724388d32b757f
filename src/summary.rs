use {
    crate::{
        number_set::NumberSet,
        runs::{Run, RunsExt},
    },
    lazy_static::lazy_static,
    regex::Regex,
};

lazy_static! {
    // The range separator is the first `-` right after a digit, which keeps
    // `-3--1` and `-3-2` unambiguous.
    static ref SUMMARY_ITEM: Regex = Regex::new(r#"^([+-]?\d+)(?:-([+-]?\d+))?$"#).unwrap();
}

/// Upper bound on how many numbers [`expand`] will materialize.
pub const EXPAND_LIMIT: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Missing value at position {index}")]
    MissingValue { index: usize },

    #[error("Values must be strictly ascending: {value} at position {index} follows {previous}")]
    Unordered {
        index: usize,
        previous: i32,
        value: i32,
    },

    #[error("Invalid range summary item: {item:?}")]
    Expand { item: String },

    #[error("Range {first}-{last} ends before it starts")]
    ReversedRange { first: i32, last: i32 },

    #[error("Summary covers more than {limit} numbers")]
    TooLarge { limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Summarizes ascending, duplicate free values as runs joined by `", "`.
///
/// Out of order or repeated values are rejected instead of producing a
/// misleading summary.
pub fn summarize(values: &[i32]) -> Result<String> {
    if let Some((i, pair)) = values
        .windows(2)
        .enumerate()
        .find(|(_, pair)| pair[0] >= pair[1])
    {
        return Err(Error::Unordered {
            index: i + 1,
            previous: pair[0],
            value: pair[1],
        });
    }

    let summary = values
        .iter()
        .copied()
        .runs()
        .map(|run| run.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    log::debug!("Summarized {} values as {:?}", values.len(), summary);
    Ok(summary)
}

/// Like [`summarize`], for sequences that may have holes. Any `None` is an
/// error.
pub fn summarize_partial(values: &[Option<i32>]) -> Result<String> {
    let values = values
        .iter()
        .enumerate()
        .map(|(index, v)| v.ok_or(Error::MissingValue { index }))
        .collect::<Result<Vec<_>>>()?;
    summarize(&values)
}

/// Expands a range summary such as `1, 3, 6-8` back into its numbers.
///
/// Fails with [`Error::TooLarge`] once the items add up to more than
/// [`EXPAND_LIMIT`] numbers, overlaps counted twice.
pub fn expand(summary: &str) -> Result<NumberSet> {
    let mut set = NumberSet::new();
    let mut total = 0_u64;
    for item in summary.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }

        let invalid = || Error::Expand { item: item.into() };
        let captures = SUMMARY_ITEM.captures(item).ok_or_else(invalid)?;
        let first = captures[1].parse::<i32>().map_err(|_e| invalid())?;
        let last = match captures.get(2) {
            Some(m) => m.as_str().parse::<i32>().map_err(|_e| invalid())?,
            None => first,
        };
        let run = Run::new(first, last).ok_or(Error::ReversedRange { first, last })?;
        total += run.len();
        if total > EXPAND_LIMIT {
            return Err(Error::TooLarge {
                limit: EXPAND_LIMIT,
            });
        }
        set.extend(run.range());
    }

    log::debug!("Expanded {:?} into {} numbers", summary, set.len());
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(summarize(&[]).unwrap(), "");
        assert_eq!(summarize_partial(&[]).unwrap(), "");
    }

    #[test]
    fn single_values() {
        assert_eq!(summarize(&[5]).unwrap(), "5");
        assert_eq!(summarize(&[1, 3]).unwrap(), "1, 3");
    }

    #[test]
    fn ranges() {
        assert_eq!(summarize(&[1, 2]).unwrap(), "1-2");
        assert_eq!(summarize(&[1, 2, 3, 4, 5]).unwrap(), "1-5");
        assert_eq!(summarize(&[1, 2, 4, 5, 7]).unwrap(), "1-2, 4-5, 7");
        assert_eq!(
            summarize(&[1, 2, 3, 5, 7, 8, 9, 11, 13, 14, 15]).unwrap(),
            "1-3, 5, 7-9, 11, 13-15"
        );
        assert_eq!(summarize(&[1, 3, 4, 5]).unwrap(), "1, 3-5");
        assert_eq!(summarize(&[1000, 1001, 1003, 1004, 1005]).unwrap(), "1000-1001, 1003-1005");
    }

    #[test]
    fn long_range() {
        let values = (0..100).collect::<Vec<_>>();
        assert_eq!(summarize(&values).unwrap(), "0-99");
    }

    #[test]
    fn negative_bounds_are_literal() {
        assert_eq!(summarize(&[-3, -2, -1]).unwrap(), "-3--1");
        assert_eq!(summarize(&[-3, -2, -1, 0, 1]).unwrap(), "-3-1");
        assert_eq!(summarize(&[-7, -5]).unwrap(), "-7, -5");
    }

    #[test]
    fn integer_bounds() {
        assert_eq!(
            summarize(&[i32::MAX - 1, i32::MAX]).unwrap(),
            "2147483646-2147483647"
        );
        assert_eq!(
            summarize(&[i32::MIN, i32::MIN + 1]).unwrap(),
            "-2147483648--2147483647"
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            summarize(&[1, 2, 2, 3, 4]),
            Err(Error::Unordered {
                index: 2,
                previous: 2,
                value: 2
            })
        );
        assert!(summarize(&[7, 7, 7, 7]).is_err());
    }

    #[test]
    fn rejects_unsorted() {
        assert_eq!(
            summarize(&[3, 1]),
            Err(Error::Unordered {
                index: 1,
                previous: 3,
                value: 1
            })
        );
    }

    #[test]
    fn missing_values() {
        assert_eq!(summarize_partial(&[None]), Err(Error::MissingValue { index: 0 }));
        assert_eq!(
            summarize_partial(&[Some(1), Some(2), None, Some(4)]),
            Err(Error::MissingValue { index: 2 })
        );
        assert_eq!(summarize_partial(&[Some(1), Some(2), Some(4)]).unwrap(), "1-2, 4");
    }

    #[test]
    fn expand_items() {
        assert!(expand("").unwrap().is_empty());
        assert_eq!(expand("1, 3, 6-8").unwrap().to_vec(), vec![1, 3, 6, 7, 8]);
        assert_eq!(expand("-3--1").unwrap().to_vec(), vec![-3, -2, -1]);
        assert_eq!(expand("-3-1").unwrap().to_vec(), vec![-3, -2, -1, 0, 1]);
        assert_eq!(expand("-5").unwrap().to_vec(), vec![-5]);
        assert_eq!(expand("2-4, 3-5").unwrap().to_vec(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn expand_limit() {
        let too_large = Err(Error::TooLarge {
            limit: EXPAND_LIMIT,
        });
        assert_eq!(expand("-2147483648-2147483647"), too_large);
        assert_eq!(expand("1-1000001"), too_large);
        assert_eq!(expand("1-600000, 700000-1300000"), too_large);
        assert_eq!(expand("1-1000000").unwrap().len(), 1_000_000);
    }

    #[test]
    fn expand_errors() {
        assert_eq!(
            expand("1, x-3"),
            Err(Error::Expand {
                item: "x-3".into()
            })
        );
        assert!(expand("1 - 3").is_err());
        assert!(expand("1-2-3").is_err());
        assert!(expand("99999999999").is_err());
        assert_eq!(
            expand("5-3"),
            Err(Error::ReversedRange { first: 5, last: 3 })
        );
    }
}
