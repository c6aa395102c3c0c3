//! Wrapper to allow scenario batteries to be built and verified from Python using pyo3
//! bindings.

use crate::json::JSON;
use crate::verify::{run_battery, run_json, Battery, VerificationError};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<VerificationError> for PyErr {
    fn from(err: VerificationError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Run every strategy against the standard battery, or against `json` if one is given.
#[pyfunction]
#[pyo3(name = "verify_battery", signature = (json=None))]
pub(crate) fn verify_battery_py(json: Option<&str>) -> PyResult<()> {
    match json {
        Some(json) => run_json(json)?,
        None => run_battery(&Battery::standard())?,
    }
    Ok(())
}

/// Return the standard battery as a JSON string.
#[pyfunction]
#[pyo3(name = "battery_to_json")]
pub(crate) fn battery_to_json_py() -> PyResult<String> {
    Battery::standard()
        .to_json()
        .map_err(|e| PyValueError::new_err(format!("{}", e)))
}

/// Validate a battery JSON string, returning the number of scenarios it holds.
#[pyfunction]
#[pyo3(name = "battery_from_json")]
pub(crate) fn battery_from_json_py(json: &str) -> PyResult<usize> {
    match Battery::from_json(json) {
        Ok(battery) => Ok(battery.len()),
        Err(e) => Err(VerificationError::Json(e).into()),
    }
}

#[cfg(all(test, feature = "py"))]
mod tests {
    use super::*;

    fn assert_value_error(err: PyErr, contains: &str) {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(err.value(py).to_string().contains(contains));
        });
    }

    #[test]
    fn standard_battery_verifies() {
        verify_battery_py(None).unwrap();
        let json = battery_to_json_py().unwrap();
        verify_battery_py(Some(json.as_str())).unwrap();
    }

    #[test]
    fn mismatch_raises_value_error() {
        let json = "{\"scenarios\":[{\"query\":3,\"data\":[1,3,3,3,5,7],\"expected\":2}]}";
        let err = verify_battery_py(Some(json)).unwrap_err();
        assert_value_error(err, "returned 1, expected 2");
    }

    #[test]
    fn bad_json_raises_value_error() {
        let err = verify_battery_py(Some("not json")).unwrap_err();
        assert_value_error(err, "Could not create Battery from given JSON.");
        let err = battery_from_json_py("{\"scenarios\":").unwrap_err();
        assert_value_error(err, "Could not create Battery from given JSON.");
    }

    #[test]
    fn battery_from_json_counts_scenarios() {
        let json = battery_to_json_py().unwrap();
        assert_eq!(battery_from_json_py(&json).unwrap(), 21);
        assert_eq!(battery_from_json_py("{\"scenarios\":[]}").unwrap(), 0);
    }
}
