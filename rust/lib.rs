//! This is the documentation for karatechop-rs
//!
//! Leftmost-occurrence binary search over sorted integer sequences, written three ways, with a
//! verification battery that checks the three agree.

#[cfg(test)]
mod tests;

pub mod json;

pub mod search;
pub use search::{
    binary_search_bounded_recursion, binary_search_iterative, binary_search_subsequence_recursion,
    position, Strategy, NOT_FOUND,
};

pub mod verify;

#[cfg(feature = "py")]
use pyo3::prelude::*;

#[cfg(feature = "py")]
#[pymodule]
fn rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use search::search_py::{
        binary_search_bounded_recursion_i64, binary_search_iterative_i64, binary_search_py,
        binary_search_subsequence_recursion_i64,
    };
    use verify::verify_py::{battery_from_json_py, battery_to_json_py, verify_battery_py};

    // Search
    m.add_class::<Strategy>()?;
    m.add_function(wrap_pyfunction!(binary_search_iterative_i64, m)?)?;
    m.add_function(wrap_pyfunction!(binary_search_bounded_recursion_i64, m)?)?;
    m.add_function(wrap_pyfunction!(binary_search_subsequence_recursion_i64, m)?)?;
    m.add_function(wrap_pyfunction!(binary_search_py, m)?)?;

    // Verification
    m.add_function(wrap_pyfunction!(verify_battery_py, m)?)?;
    m.add_function(wrap_pyfunction!(battery_to_json_py, m)?)?;
    m.add_function(wrap_pyfunction!(battery_from_json_py, m)?)?;

    Ok(())
}
