use std::borrow::Cow;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList, PyString};

use encstring_codec::{EncryptionScheme, ParseError, PayloadForm, PayloadText};

fn parse_error_to_py(e: ParseError) -> PyErr {
    PyValueError::new_err(format!("{}:{}", e.kind.as_str(), e.position))
}

fn form_str(f: PayloadForm) -> &'static str {
    match f {
        PayloadForm::Typed => "typed",
        PayloadForm::Legacy => "legacy",
    }
}

/// Textual form of an arbitrary Python value: `None` is the absent value,
/// `str` is used as is, anything else goes through `str()`.
struct PyText(Option<String>);

impl PyText {
    fn extract(value: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let Some(value) = value else {
            return Ok(Self(None));
        };
        if value.is_none() {
            return Ok(Self(None));
        }
        if let Ok(s) = value.downcast::<PyString>() {
            return Ok(Self(Some(s.to_str()?.to_owned())));
        }
        Ok(Self(Some(value.str()?.to_str()?.to_owned())))
    }
}

impl PayloadText for PyText {
    fn payload_text(&self) -> Option<Cow<'_, str>> {
        self.0.as_deref().map(Cow::Borrowed)
    }
}

fn scheme_to_dict(py: Python<'_>, scheme: EncryptionScheme) -> PyResult<Bound<'_, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("code", scheme.code())?;
    dict.set_item("name", scheme.name())?;
    dict.set_item("required_segments", scheme.required_segments())?;
    dict.set_item("has_mac", scheme.has_mac())?;
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (value=None))]
fn is_valid_encrypted_payload(value: Option<&Bound<'_, PyAny>>) -> PyResult<bool> {
    let text = PyText::extract(value)?;
    Ok(encstring_codec::is_valid_encrypted_payload(&text))
}

#[pyfunction]
fn validate_native(value: &str) -> PyResult<()> {
    encstring_codec::validate(Some(value)).map_err(parse_error_to_py)
}

#[pyfunction]
fn parse_native(py: Python<'_>, value: &str) -> PyResult<Py<PyDict>> {
    let payload = encstring_codec::parse_payload(value).map_err(parse_error_to_py)?;

    let dict = scheme_to_dict(py, payload.scheme)?;
    dict.set_item("form", form_str(payload.form))?;
    let segments = PyList::empty(py);
    for segment in payload.segments.iter() {
        segments.append(*segment)?;
    }
    dict.set_item("segments", segments)?;

    Ok(dict.into())
}

#[pyfunction]
fn scheme_info_native(py: Python<'_>, token: &str) -> PyResult<Py<PyDict>> {
    let scheme = EncryptionScheme::from_token(token)
        .ok_or_else(|| PyValueError::new_err(format!("unknown_scheme_token:{token}")))?;
    Ok(scheme_to_dict(py, scheme)?.into())
}

#[pyfunction]
fn schemes_native(py: Python<'_>) -> PyResult<Py<PyList>> {
    let list = PyList::empty(py);
    for scheme in EncryptionScheme::ALL {
        list.append(scheme_to_dict(py, scheme)?)?;
    }
    Ok(list.into())
}

#[pymodule]
fn _encstring_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(is_valid_encrypted_payload, m)?)?;
    m.add_function(wrap_pyfunction!(validate_native, m)?)?;
    m.add_function(wrap_pyfunction!(parse_native, m)?)?;
    m.add_function(wrap_pyfunction!(scheme_info_native, m)?)?;
    m.add_function(wrap_pyfunction!(schemes_native, m)?)?;
    Ok(())
}
