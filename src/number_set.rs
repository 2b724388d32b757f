use {
    crate::runs::RunsExt,
    std::{
        collections::{btree_set, BTreeSet},
        fmt,
        iter::FromIterator,
        num::ParseIntError,
        str::FromStr,
    },
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Cannot parse numbers from: {input}")]
    Parse {
        input: String,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Deduplicated integers, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberSet(BTreeSet<i32>);

impl NumberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma separated list of integers.
    ///
    /// Tokens are trimmed and empty ones are skipped, so `""`, `"  "` and
    /// `"1,,2"` are all valid. A single token that is not a base-10 integer
    /// fails the whole input.
    pub fn parse(input: &str) -> Result<Self> {
        let mut numbers = BTreeSet::new();
        if input.trim().is_empty() {
            return Ok(Self(numbers));
        }

        let mut tokens = 0_usize;
        for token in input.split(',') {
            let cleaned = token.trim();
            if cleaned.is_empty() {
                continue;
            }
            tokens += 1;
            let n = cleaned.parse::<i32>().map_err(|source| Error::Parse {
                input: input.into(),
                token: cleaned.into(),
                source,
            })?;
            numbers.insert(n);
        }

        log::debug!(
            "Parsed {} distinct numbers from {} tokens",
            numbers.len(),
            tokens
        );
        Ok(Self(numbers))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = i32> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Range summary of the set, e.g. `1, 3, 6-8`.
    ///
    /// The set is already ascending and duplicate free, so unlike
    /// [`crate::summarize`] this can't fail.
    pub fn summary(&self) -> String {
        let summary = self
            .iter()
            .runs()
            .map(|run| run.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        log::debug!("Summarized {} numbers as {:?}", self.len(), summary);
        summary
    }
}

impl FromStr for NumberSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromIterator<i32> for NumberSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<i32> for NumberSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for NumberSet {
    type Item = i32;
    type IntoIter = btree_set::IntoIter<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Serialized form, accepted back by [`NumberSet::parse`]: `1,2,3`.
impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
