use crate::json::JSON;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single search case: the leftmost index of `query` in `data` should be `expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub query: i64,
    pub data: Vec<i64>,
    pub expected: isize,
}

impl Scenario {
    pub fn new(query: i64, data: Vec<i64>, expected: isize) -> Self {
        Scenario {
            query,
            data,
            expected,
        }
    }

    /// Create a scenario whose expectation is found by scanning `data` from the left.
    pub fn scanned(query: i64, data: Vec<i64>) -> Self {
        let expected = leftmost_by_scan(query, &data);
        Scenario::new(query, data, expected)
    }
}

/// An ordered collection of [`Scenario`] that every search strategy must satisfy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    pub scenarios: Vec<Scenario>,
}

impl JSON for Battery {}

impl Battery {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Battery { scenarios }
    }

    /// The fixed set of cases every strategy is verified against.
    pub fn standard() -> Self {
        let s = |query: i64, data: &[i64], expected: isize| {
            Scenario::new(query, data.to_vec(), expected)
        };
        let odd = [1, 3, 5];
        let even = [1, 3, 5, 7];
        Battery::new(vec![
            s(3, &[], -1),
            s(3, &[1], -1),
            s(1, &[1], 0),
            s(1, &odd, 0),
            s(3, &odd, 1),
            s(5, &odd, 2),
            s(0, &odd, -1),
            s(2, &odd, -1),
            s(4, &odd, -1),
            s(6, &odd, -1),
            s(1, &even, 0),
            s(3, &even, 1),
            s(5, &even, 2),
            s(7, &even, 3),
            s(0, &even, -1),
            s(2, &even, -1),
            s(4, &even, -1),
            s(6, &even, -1),
            s(8, &even, -1),
            s(1, &[1, 1, 3, 5, 7], 0),
            s(3, &[1, 3, 3, 3, 5, 7], 1),
        ])
    }

    /// Every sorted sequence of length up to `max_len` drawn from `values`, queried with each
    /// value in `values` and with one value either side of the range.
    ///
    /// Sorted sequences are exactly the combinations with replacement of an ascending range,
    /// so no explicit sort is needed. Expectations come from [`leftmost_by_scan`].
    pub fn exhaustive(max_len: usize, values: Range<i64>) -> Self {
        // `values.end` is never in `values`, so it is always a valid query above the range;
        // the query below is dropped when the range starts at `i64::MIN`.
        let queries = values.start.saturating_sub(1)..=values.end;
        let scenarios = std::iter::once(Vec::new())
            .chain((1..=max_len).flat_map(|len| values.clone().combinations_with_replacement(len)))
            .cartesian_product(queries)
            .map(|(data, query)| Scenario::scanned(query, data))
            .collect();
        Battery::new(scenarios)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

/// Reference answer used to build expectations: a linear scan for the first equal element.
pub fn leftmost_by_scan(query: i64, data: &[i64]) -> isize {
    data.iter()
        .position(|value| *value == query)
        .map_or(-1, |i| i as isize)
}
