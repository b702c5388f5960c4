// crates/radiogcc-core/src/directory.rs

//! The in-memory country reference table and its two lookup indices.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::codes::CountryId;
use crate::error::DatasetError;
use crate::loader;
use crate::model::CountryRecord;

#[cfg(feature = "bundled")]
use once_cell::sync::OnceCell;

#[cfg(feature = "bundled")]
static BUNDLED: OnceCell<CountryDirectory> = OnceCell::new();

#[cfg(feature = "bundled")]
const BUNDLED_CSV: &str = include_str!("../data/countries.csv");

/// Simple aggregate statistics for a loaded directory.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DirectoryStats {
    pub countries: usize,
    /// Distinct `(country id, ECC)` pairs, i.e. the size of the fast lookup
    /// index for ECC-based resolution.
    pub broadcast_ids: usize,
}

/// The static reference table: one record per country, indexed by ISO code
/// and by `(country id, ECC)` pair.
///
/// Built once from a dataset and read-only thereafter; safe to share across
/// any number of [`Resolver`](crate::Resolver) sessions.
#[derive(Clone, Debug)]
pub struct CountryDirectory {
    records: Vec<CountryRecord>,
    by_iso: HashMap<String, usize>,
    by_id_ecc: HashMap<String, usize>,
}

impl CountryDirectory {
    /// Parses a dataset from CSV text.
    pub fn parse(input: &str) -> Result<Self, DatasetError> {
        Self::build(loader::parse(input)?)
    }

    /// Reads and parses a dataset from any reader.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, DatasetError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::parse(&buf)
    }

    /// Reads and parses a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// The reference table shipped with the crate, parsed on first use and
    /// shared for the lifetime of the process.
    #[cfg(feature = "bundled")]
    pub fn bundled() -> &'static Self {
        BUNDLED.get_or_init(|| {
            Self::parse(BUNDLED_CSV).expect("bundled country table must parse")
        })
    }

    fn build(records: Vec<CountryRecord>) -> Result<Self, DatasetError> {
        let mut by_iso = HashMap::with_capacity(records.len());
        let mut by_id_ecc = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if by_iso.insert(record.iso_code.clone(), idx).is_some() {
                return Err(DatasetError::DuplicateIso(record.iso_code.clone()));
            }
            for &id in &record.country_ids {
                by_id_ecc.insert(gcc_key(id, &record.ecc), idx);
            }
        }
        debug!(
            "country directory loaded: {} countries, {} broadcast ids",
            records.len(),
            by_id_ecc.len()
        );
        Ok(CountryDirectory {
            records,
            by_iso,
            by_id_ecc,
        })
    }

    /// Looks up a record by ISO 3166-1 alpha-2 code. Case-insensitive, O(1).
    pub fn by_iso_code(&self, code: &str) -> Option<&CountryRecord> {
        let idx = *self.by_iso.get(&code.to_ascii_lowercase())?;
        Some(&self.records[idx])
    }

    /// Looks up a record by broadcast country id and ECC. Case-insensitive,
    /// O(1).
    pub fn by_country_id_and_ecc(&self, id: CountryId, ecc: &str) -> Option<&CountryRecord> {
        let idx = *self.by_id_ecc.get(&gcc_key(id, &ecc.to_ascii_lowercase()))?;
        Some(&self.records[idx])
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats {
            countries: self.records.len(),
            broadcast_ids: self.by_id_ecc.len(),
        }
    }
}

fn gcc_key(id: CountryId, ecc: &str) -> String {
    format!("{}{}", id.as_char(), ecc)
}
