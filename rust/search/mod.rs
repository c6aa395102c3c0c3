//! Locate the leftmost occurrence of an integer in a sorted sequence.
//!
//! ### Basic usage
//!
//! Three strategies are provided. They return identical results for every sorted input and
//! differ only in control flow:
//!
//! ```rust
//! # use karatechop::search::{binary_search_iterative, binary_search_bounded_recursion, binary_search_subsequence_recursion};
//! let data = [1, 3, 3, 3, 5, 7];
//! assert_eq!(binary_search_iterative(3, &data), 1);
//! assert_eq!(binary_search_bounded_recursion(3, &data), 1);
//! assert_eq!(binary_search_subsequence_recursion(3, &data), 1);
//! ```
//!
//! Absence is signalled by the sentinel [`NOT_FOUND`], i.e. `-1`. Callers preferring an
//! `Option` can use [`position`]:
//!
//! ```rust
//! # use karatechop::search::{position, Strategy};
//! assert_eq!(position(Strategy::Iterative, 4, &[1, 3, 5, 7]), None);
//! assert_eq!(position(Strategy::SubsequenceRecursion, 5, &[1, 3, 5, 7]), Some(2));
//! ```
//!
//! Behaviour on unsorted input is unspecified, although no strategy will index out of bounds.

mod bounded_recursive;
mod iterative;
mod subsequence_recursive;

pub use crate::search::bounded_recursive::binary_search_bounded_recursion;
pub use crate::search::iterative::binary_search_iterative;
pub use crate::search::subsequence_recursive::binary_search_subsequence_recursion;

#[cfg(feature = "py")]
pub(crate) mod search_py;

use crate::json::JSON;
use num_traits::PrimInt;
#[cfg(feature = "py")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel returned by every strategy when the query is not present.
pub const NOT_FOUND: isize = -1;

/// Enumerable type naming the control-flow strategy used to perform a search.
#[cfg_attr(
    feature = "py",
    pyclass(module = "karatechop.rs", eq, eq_int, hash, frozen)
)]
#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Narrow explicit low and high indices in a loop.
    Iterative = 0,
    /// Recurse over shrinking `(start, end)` bounds on the original slice.
    BoundedRecursion = 1,
    /// Recurse over owned copies of each half, re-offsetting indices on return.
    SubsequenceRecursion = 2,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Iterative,
        Strategy::BoundedRecursion,
        Strategy::SubsequenceRecursion,
    ];

    /// Return the leftmost index of `query` in `data`, or [`NOT_FOUND`].
    pub fn search<T: PrimInt>(&self, query: T, data: &[T]) -> isize {
        match self {
            Strategy::Iterative => binary_search_iterative(query, data),
            Strategy::BoundedRecursion => binary_search_bounded_recursion(query, data),
            Strategy::SubsequenceRecursion => binary_search_subsequence_recursion(query, data),
        }
    }

    /// The kebab-case name accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Iterative => "iterative",
            Strategy::BoundedRecursion => "bounded-recursion",
            Strategy::SubsequenceRecursion => "subsequence-recursion",
        }
    }
}

impl JSON for Strategy {}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string does not name a [`Strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyParseError(pub String);

impl fmt::Display for StrategyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a search strategy. Expected one of: iterative, bounded-recursion, subsequence-recursion.",
            self.0
        )
    }
}

impl std::error::Error for StrategyParseError {}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| StrategyParseError(s.to_string()))
    }
}

/// Return the leftmost index of `query` in `data` as an `Option`, using the given strategy.
pub fn position<T: PrimInt>(strategy: Strategy, query: T, data: &[T]) -> Option<usize> {
    usize::try_from(strategy.search(query, data)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_matches_free_functions() {
        let data = [1, 1, 3, 5, 7];
        assert_eq!(Strategy::Iterative.search(1, &data), binary_search_iterative(1, &data));
        assert_eq!(
            Strategy::BoundedRecursion.search(7, &data),
            binary_search_bounded_recursion(7, &data)
        );
        assert_eq!(
            Strategy::SubsequenceRecursion.search(4, &data),
            binary_search_subsequence_recursion(4, &data)
        );
    }

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "linear".parse::<Strategy>().unwrap_err();
        assert_eq!(err, StrategyParseError("linear".to_string()));
        assert!(err.to_string().contains("'linear'"));
    }

    #[test]
    fn position_converts_sentinel() {
        for strategy in Strategy::ALL {
            assert_eq!(position(strategy, 3, &[1, 3, 5, 7]), Some(1));
            assert_eq!(position(strategy, 3, &[] as &[i32]), None);
        }
    }

    #[test]
    fn strategy_json() {
        let json = Strategy::BoundedRecursion.to_json().unwrap();
        assert_eq!(json, "\"bounded-recursion\"");
        assert_eq!(Strategy::from_json(&json).unwrap(), Strategy::BoundedRecursion);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_json().unwrap(), format!("\"{}\"", strategy));
        }
    }
}
