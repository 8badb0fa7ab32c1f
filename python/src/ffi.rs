//! Python surface of the four carrier operations.
//!
//! Each call releases the GIL while the codec runs. Failures are raised as
//! subclasses of `SoundPixelError`, one per error kind, so the HTTP layer can
//! pick a status code from the class alone. Telemetry is returned as JSON.

use pyo3::create_exception;
use pyo3::exceptions::{PyException, PyRuntimeError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use soundpixel_core::types::{CodecError, ErrorKind};
use soundpixel_core::telemetry::TelemetrySnapshot;

create_exception!(soundpixel, SoundPixelError, PyException);
create_exception!(soundpixel, FormatMismatchError, SoundPixelError);
create_exception!(soundpixel, UnsupportedVersionError, SoundPixelError);
create_exception!(soundpixel, TruncatedError, SoundPixelError);
create_exception!(soundpixel, CorruptedError, SoundPixelError);
create_exception!(soundpixel, NotEncodedError, SoundPixelError);
create_exception!(soundpixel, InvalidPasswordError, SoundPixelError);
create_exception!(soundpixel, DecryptionFailedError, SoundPixelError);
create_exception!(soundpixel, InternalError, SoundPixelError);

fn to_py_err(e: CodecError) -> PyErr {
    let msg = e.to_string();
    match e.kind() {
        ErrorKind::FormatMismatch     => FormatMismatchError::new_err(msg),
        ErrorKind::UnsupportedVersion => UnsupportedVersionError::new_err(msg),
        ErrorKind::Truncated          => TruncatedError::new_err(msg),
        ErrorKind::Corrupted          => CorruptedError::new_err(msg),
        ErrorKind::NotEncoded         => NotEncodedError::new_err(msg),
        ErrorKind::InvalidPassword    => InvalidPasswordError::new_err(msg),
        ErrorKind::DecryptionFailed   => DecryptionFailedError::new_err(msg),
        ErrorKind::Internal           => InternalError::new_err(msg),
    }
}

fn telemetry_json(t: &TelemetrySnapshot) -> PyResult<String> {
    t.to_json().map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// pack_to_image(data, filename, password=None)
///     -> (png, width, height, total_pixels, payload_size, telemetry_json)
#[pyfunction]
#[pyo3(signature = (data, filename, password=None))]
fn pack_to_image<'py>(
    py: Python<'py>,
    data: &[u8],
    filename: &str,
    password: Option<&str>,
) -> PyResult<(Bound<'py, PyBytes>, u32, u32, u64, usize, String)> {
    let out = py
        .allow_threads(|| soundpixel_core::pack_to_image(data, filename, password))
        .map_err(to_py_err)?;
    Ok((
        PyBytes::new_bound(py, &out.png),
        out.width,
        out.height,
        out.total_pixels,
        out.payload_size,
        telemetry_json(&out.telemetry)?,
    ))
}

/// unpack_from_image(png, password=None) -> (data, filename, data_length, telemetry_json)
#[pyfunction]
#[pyo3(signature = (png, password=None))]
fn unpack_from_image<'py>(
    py: Python<'py>,
    png: &[u8],
    password: Option<&str>,
) -> PyResult<(Bound<'py, PyBytes>, String, u64, String)> {
    let out = py
        .allow_threads(|| soundpixel_core::unpack_from_image(png, password))
        .map_err(to_py_err)?;
    let telemetry = telemetry_json(&out.telemetry)?;
    Ok((PyBytes::new_bound(py, &out.data), out.filename, out.data_length, telemetry))
}

/// embed_in_audio(host, payload, filename, password=None)
///     -> (carrier, host_size, payload_size, total_size, telemetry_json)
#[pyfunction]
#[pyo3(signature = (host, payload, filename, password=None))]
fn embed_in_audio<'py>(
    py: Python<'py>,
    host: &[u8],
    payload: &[u8],
    filename: &str,
    password: Option<&str>,
) -> PyResult<(Bound<'py, PyBytes>, usize, usize, usize, String)> {
    let out = py
        .allow_threads(|| soundpixel_core::embed_in_audio(host, payload, filename, password))
        .map_err(to_py_err)?;
    Ok((
        PyBytes::new_bound(py, &out.carrier),
        out.host_size,
        out.payload_size,
        out.total_size,
        telemetry_json(&out.telemetry)?,
    ))
}

/// extract_from_audio(carrier, password=None) -> (payload, filename, payload_size, telemetry_json)
#[pyfunction]
#[pyo3(signature = (carrier, password=None))]
fn extract_from_audio<'py>(
    py: Python<'py>,
    carrier: &[u8],
    password: Option<&str>,
) -> PyResult<(Bound<'py, PyBytes>, String, u64, String)> {
    let out = py
        .allow_threads(|| soundpixel_core::extract_from_audio(carrier, password))
        .map_err(to_py_err)?;
    let telemetry = telemetry_json(&out.telemetry)?;
    Ok((PyBytes::new_bound(py, &out.payload), out.filename, out.payload_size, telemetry))
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("SoundPixelError", py.get_type_bound::<SoundPixelError>())?;
    m.add("FormatMismatchError", py.get_type_bound::<FormatMismatchError>())?;
    m.add("UnsupportedVersionError", py.get_type_bound::<UnsupportedVersionError>())?;
    m.add("TruncatedError", py.get_type_bound::<TruncatedError>())?;
    m.add("CorruptedError", py.get_type_bound::<CorruptedError>())?;
    m.add("NotEncodedError", py.get_type_bound::<NotEncodedError>())?;
    m.add("InvalidPasswordError", py.get_type_bound::<InvalidPasswordError>())?;
    m.add("DecryptionFailedError", py.get_type_bound::<DecryptionFailedError>())?;
    m.add("InternalError", py.get_type_bound::<InternalError>())?;

    m.add_function(wrap_pyfunction!(pack_to_image, m)?)?;
    m.add_function(wrap_pyfunction!(unpack_from_image, m)?)?;
    m.add_function(wrap_pyfunction!(embed_in_audio, m)?)?;
    m.add_function(wrap_pyfunction!(extract_from_audio, m)?)?;
    Ok(())
}
