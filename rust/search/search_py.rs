//! Wrapper module to export the search functions to Python using pyo3 bindings.

use crate::search::{
    binary_search_bounded_recursion, binary_search_iterative, binary_search_subsequence_recursion,
    Strategy,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

macro_rules! create_interface {
    ($name: ident, $func: ident, $type: ident) => {
        #[pyfunction]
        pub fn $name(query: $type, data: Vec<$type>) -> isize {
            $func(query, &data[..])
        }
    };
}

create_interface!(binary_search_iterative_i64, binary_search_iterative, i64);
create_interface!(
    binary_search_bounded_recursion_i64,
    binary_search_bounded_recursion,
    i64
);
create_interface!(
    binary_search_subsequence_recursion_i64,
    binary_search_subsequence_recursion,
    i64
);

/// Search with a strategy given by its kebab-case name.
#[pyfunction]
#[pyo3(name = "binary_search")]
pub(crate) fn binary_search_py(strategy: &str, query: i64, data: Vec<i64>) -> PyResult<isize> {
    let strategy: Strategy = strategy
        .parse()
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    Ok(strategy.search(query, &data[..]))
}
