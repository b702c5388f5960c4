// crates/radiogcc-core/src/loader.rs

//! Versioned parser for the country reference table.
//!
//! Two row schemas exist in the wild:
//!
//! - current, five fields: `id,iso,ecc,countryIds,nearbyCountries` where the
//!   leading field is a numeric row id and `nearbyCountries` entries are
//!   `countryId:isoCode` pairs;
//! - legacy, four fields: `iso,ecc,countryIds,nearbyCountries` where
//!   `nearbyCountries` entries are bare ISO codes.
//!
//! Both parse into one canonical in-memory form. A legacy bare-ISO entry
//! means "candidate if the nibble is any of that neighbor's own country
//! ids", so once the whole table is read it expands into one canonical
//! [`Adjacency`] per country id of the referenced neighbor.
//!
//! Top-level fields are comma-separated; a missing trailing field is treated
//! as empty, not an error. Sublist fields are semicolon-separated; an empty
//! field yields an empty list. Blank lines and `#` comments are skipped.

use std::collections::HashMap;

use log::debug;

use crate::codes::{self, CountryId};
use crate::error::DatasetError;
use crate::model::{Adjacency, CountryRecord};

/// id, iso, ecc, country ids, nearby countries
const FIELDS: usize = 5;

struct RawRecord {
    iso_code: String,
    ecc: String,
    country_ids: Vec<CountryId>,
    nearby: Vec<RawAdjacency>,
}

enum RawAdjacency {
    /// Current schema: `countryId:isoCode`.
    Pair(Adjacency),
    /// Legacy schema: bare ISO code, expanded after the full table is read.
    Bare(String),
}

pub(crate) fn parse(input: &str) -> Result<Vec<CountryRecord>, DatasetError> {
    let mut raws = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        raws.push(parse_row(idx + 1, line)?);
    }
    if raws.is_empty() {
        return Err(DatasetError::Empty);
    }
    let records = canonicalize(raws)?;
    debug!("parsed {} country rows", records.len());
    Ok(records)
}

fn parse_row(line: usize, row: &str) -> Result<RawRecord, DatasetError> {
    let malformed = |reason: &str| DatasetError::MalformedRow {
        line,
        reason: reason.to_string(),
    };

    let mut fields: Vec<&str> = row.split(',').map(str::trim).collect();
    if fields.len() > FIELDS {
        return Err(malformed("too many fields"));
    }
    // A five-field row carries the current schema's numeric row id; drop it.
    if fields.len() == FIELDS {
        if fields[0].is_empty() || !fields[0].chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed("leading field of a five-field row must be numeric"));
        }
        fields.remove(0);
    }
    // Short rows are padded, not rejected.
    fields.resize(FIELDS - 1, "");

    let iso_code =
        codes::norm_iso(fields[0]).ok_or_else(|| malformed("invalid ISO country code"))?;
    let ecc = codes::norm_ecc(fields[1]).ok_or_else(|| malformed("invalid ECC"))?;

    let mut country_ids = Vec::new();
    for part in split_list(fields[2]) {
        let id = CountryId::parse(part)
            .ok_or_else(|| malformed("country id must be a single hex digit"))?;
        country_ids.push(id);
    }
    if country_ids.is_empty() {
        return Err(malformed("no country ids"));
    }

    let mut nearby = Vec::new();
    for part in split_list(fields[3]) {
        nearby.push(parse_adjacency(part).ok_or_else(|| malformed("invalid adjacency entry"))?);
    }

    Ok(RawRecord {
        iso_code,
        ecc,
        country_ids,
        nearby,
    })
}

/// Splits a semicolon-delimited sublist field; an empty field yields no
/// items, not one empty item.
fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field.split(';').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_adjacency(entry: &str) -> Option<RawAdjacency> {
    match entry.split_once(':') {
        Some((id, iso)) => {
            let country_id = CountryId::parse(id.trim())?;
            let iso_code = codes::norm_iso(iso.trim())?;
            Some(RawAdjacency::Pair(Adjacency {
                country_id,
                iso_code,
            }))
        }
        None => codes::norm_iso(entry).map(RawAdjacency::Bare),
    }
}

/// Expands legacy bare-ISO adjacency entries against the fully read table.
/// A bare entry referencing a country absent from the table fails the load;
/// the directory must not be partially usable.
fn canonicalize(raws: Vec<RawRecord>) -> Result<Vec<CountryRecord>, DatasetError> {
    let ids_by_iso: HashMap<&str, &[CountryId]> = raws
        .iter()
        .map(|r| (r.iso_code.as_str(), r.country_ids.as_slice()))
        .collect();

    let mut records = Vec::with_capacity(raws.len());
    for raw in &raws {
        let mut nearby = Vec::with_capacity(raw.nearby.len());
        for entry in &raw.nearby {
            match entry {
                RawAdjacency::Pair(adjacency) => nearby.push(adjacency.clone()),
                RawAdjacency::Bare(iso) => {
                    let ids = ids_by_iso
                        .get(iso.as_str())
                        .ok_or_else(|| DatasetError::UnknownNeighbor(iso.clone()))?;
                    nearby.extend(ids.iter().map(|&country_id| Adjacency {
                        country_id,
                        iso_code: iso.clone(),
                    }));
                }
            }
        }
        records.push(CountryRecord {
            iso_code: raw.iso_code.clone(),
            ecc: raw.ecc.clone(),
            country_ids: raw.country_ids.clone(),
            nearby,
        });
    }
    Ok(records)
}
