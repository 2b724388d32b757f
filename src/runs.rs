use std::{fmt, ops::RangeInclusive};

/// A block of consecutive integers, `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    first: i32,
    last: i32,
}

impl Run {
    /// `None` if `last` comes before `first`.
    pub fn new(first: i32, last: i32) -> Option<Self> {
        if first <= last {
            Some(Self { first, last })
        } else {
            None
        }
    }

    pub fn single(n: i32) -> Self {
        Self { first: n, last: n }
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn len(&self) -> u64 {
        (i64::from(self.last) - i64::from(self.first)) as u64 + 1
    }

    pub fn is_single(&self) -> bool {
        self.first == self.last
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }
}

/// `5` for a single value, `first-last` otherwise. Negative bounds are
/// written as is, so `-3..=-1` renders as `-3--1`.
impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

/// Groups an ascending, duplicate free stream of integers into [`Run`]s.
///
/// The input order is not checked here; callers that can't guarantee it go
/// through [`crate::summarize`].
pub struct Runs<I: Iterator<Item = i32>> {
    inner: I,
    pending: Option<i32>,
}

impl<I: Iterator<Item = i32>> Iterator for Runs<I> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let mut run = Run::single(self.pending.take().or_else(|| self.inner.next())?);
        for n in &mut self.inner {
            // i32::MAX has no successor, so it always ends its run.
            if run.last.checked_add(1) == Some(n) {
                run.last = n;
            } else {
                self.pending = Some(n);
                break;
            }
        }
        Some(run)
    }
}

pub trait RunsExt: Iterator<Item = i32> + Sized {
    fn runs(self) -> Runs<Self> {
        Runs {
            inner: self,
            pending: None,
        }
    }
}

impl<I: Iterator<Item = i32>> RunsExt for I {}
