// crates/radiogcc-core/src/error.rs

use std::io;
use thiserror::Error;

/// Fatal errors raised while loading a country dataset.
///
/// Any of these leaves the directory unusable; there is no partially loaded
/// state.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read country dataset: {0}")]
    Io(#[from] io::Error),

    #[error("malformed dataset row {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("duplicate ISO country code {0:?} in dataset")]
    DuplicateIso(String),

    #[error("adjacency entry references unknown country {0:?}")]
    UnknownNeighbor(String),

    #[error("dataset contains no countries")]
    Empty,
}

/// Errors raised while configuring a [`Resolver`](crate::Resolver) or
/// resolving a query.
///
/// The `Invalid*` variants are caller programming errors and surface at
/// set-time. `MissingLocation` / `MissingSignal` are precondition violations
/// raised by the resolve operation. `UnknownLocation` and `NoMatch` are
/// expected, recoverable outcomes: well-formed input for which no country can
/// be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("invalid country code {0:?}; must be an ISO 3166-1 alpha-2 country code")]
    InvalidCountryCode(String),

    #[error("invalid ECC {0:?}; must be two hexadecimal digits")]
    InvalidEcc(String),

    #[error("invalid PI value {0:?}; must be a four digit hexadecimal RDS Programme Identification code")]
    InvalidPi(String),

    #[error("invalid SId value {0:?}; must be a four or eight digit hexadecimal DAB Service Identifier")]
    InvalidSid(String),

    #[error("no broadcast signal set; supply an RDS PI code or a DAB SId before resolving")]
    MissingSignal,

    #[error("no location set; supply an ISO country code or an ECC before resolving")]
    MissingLocation,

    #[error("the supplied ISO country code {0:?} is not in the country table")]
    UnknownLocation(String),

    #[error("no country matches the given location and broadcast signal")]
    NoMatch,
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ResolutionError> = std::result::Result<T, E>;
