// crates/radiogcc-core/src/lib.rs

//! Resolution of broadcast country identity for RDS/FM and DAB radio
//! services.
//!
//! A station's broadcast signalling only carries a single hex "country
//! nibble" (the leading digit of an RDS PI code, or the country field of a
//! DAB SId), and near a border that nibble is ambiguous: several neighboring
//! countries may share it. Given the listener's believed location, either an
//! ISO 3166-1 alpha-2 country code or an RDS Extended Country Code (ECC),
//! this crate resolves the Global Country Code (GCC) candidates for the
//! service, consulting a border-adjacency table to break ties.
//!
//! ```
//! use radiogcc_core::{CountryDirectory, Resolver};
//!
//! let directory = CountryDirectory::bundled();
//!
//! let mut resolver = Resolver::new(directory);
//! resolver.set_location_iso_code("CH")?;
//! resolver.set_signal_rds_pi("4479")?;
//!
//! let matches = resolver.resolve_gcc()?;
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].gcc, "4e1");
//! assert_eq!(matches[0].iso_country_code, "CH");
//! # Ok::<(), radiogcc_core::ResolutionError>(())
//! ```
//!
//! The [`CountryDirectory`] is built once, from the bundled reference table
//! or from a caller-supplied CSV dataset, and is then shared read-only by
//! any number of [`Resolver`] sessions.

pub mod codes;
pub mod directory;
pub mod error;
pub mod model;
pub mod resolver;

mod loader;

// Re-exports
pub use crate::codes::CountryId;
pub use crate::directory::{CountryDirectory, DirectoryStats};
pub use crate::error::{DatasetError, ResolutionError, Result};
pub use crate::model::{Adjacency, CountryRecord, Match};
pub use crate::resolver::{Location, Resolver, Signal};
