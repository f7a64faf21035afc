use std::io;
use thiserror::Error;

/// Top-level error of the wire translation layer.
///
/// Transports return it from call creation and request sending; the
/// converter produces it while serializing or interpreting headers. It
/// never escapes `commit` — failures there are logged and degrade the
/// uniform response instead of propagating.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("format error: {source}")]
    FormatError {
        #[from]
        source: FormatError,
    },

    #[error("parse error: {source}")]
    ParseError {
        #[from]
        source: ParseError,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// A uniform value could not be serialized into a wire header.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("quality {quality} out of range for preference {value}")]
    QualityOutOfRange { value: String, quality: f32 },

    #[error("invalid header value: {reason}")]
    InvalidHeaderValue { reason: String },
}

impl FormatError {
    pub fn quality_out_of_range<S: ToString>(value: S, quality: f32) -> Self {
        Self::QualityOutOfRange { value: value.to_string(), quality }
    }

    pub fn invalid_header_value<S: ToString>(str: S) -> Self {
        Self::InvalidHeaderValue { reason: str.to_string() }
    }
}

/// A wire header could not be interpreted into uniform call data.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid cookie setting: {reason}")]
    InvalidCookieSetting { reason: String },

    #[error("invalid challenge: {reason}")]
    InvalidChallenge { reason: String },

    #[error("invalid method token: {reason}")]
    InvalidMethod { reason: String },

    #[error("invalid header value: {reason}")]
    InvalidHeaderValue { reason: String },
}

impl ParseError {
    pub fn invalid_cookie_setting<S: ToString>(str: S) -> Self {
        Self::InvalidCookieSetting { reason: str.to_string() }
    }

    pub fn invalid_challenge<S: ToString>(str: S) -> Self {
        Self::InvalidChallenge { reason: str.to_string() }
    }

    pub fn invalid_method<S: ToString>(str: S) -> Self {
        Self::InvalidMethod { reason: str.to_string() }
    }

    pub fn invalid_header_value<S: ToString>(str: S) -> Self {
        Self::InvalidHeaderValue { reason: str.to_string() }
    }
}
