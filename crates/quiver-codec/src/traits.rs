//! Common traits for the text codec.
//!
//! The canonical form is symmetric: for every encodable value,
//! `Decode::decode(&value.encode())` reconstructs an equal value. Encoding
//! delegates to the types' canonical `Display` rendering, so `to_string`
//! and `encode` always agree.

use quiver_core::QuiverResult;

/// Renders the canonical text form.
pub trait Encode {
    fn encode(&self) -> String;
}

/// Parses the canonical text form.
///
/// All rejections are [`quiver_core::QuiverError::Format`]: wrong type
/// name, wrong field count, unknown or misordered field name, or a value
/// that does not parse as the backend's numeric text. Decoding never
/// returns a partial result.
pub trait Decode: Sized {
    fn decode(text: &str) -> QuiverResult<Self>;
}
