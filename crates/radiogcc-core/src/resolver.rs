// crates/radiogcc-core/src/resolver.rs

//! Adjacency-aware resolution of broadcast country identity.

use log::trace;

use crate::codes::{self, CountryId};
use crate::directory::CountryDirectory;
use crate::error::{ResolutionError, Result};
use crate::model::Match;

/// The listener's believed physical location, one of two descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    /// Lowercase ISO 3166-1 alpha-2 country code.
    IsoCode(String),
    /// Lowercase two-digit hex Extended Country Code.
    Ecc(String),
}

/// The received broadcast signal, one of two descriptors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// Lowercase four-digit hex RDS Programme Identification code.
    RdsPi(String),
    /// Lowercase four- or eight-digit hex DAB Service Identifier.
    DabSid(String),
}

impl Signal {
    /// The broadcast country nibble carried by this signal. An eight-digit
    /// SId reserves its first two digits for the ECC; the country id is the
    /// third.
    fn country_id(&self) -> CountryId {
        let (code, pos) = match self {
            Signal::RdsPi(pi) => (pi, 0),
            Signal::DabSid(sid) if sid.len() == 8 => (sid, 2),
            Signal::DabSid(sid) => (sid, 0),
        };
        // Codes are validated lowercase hex at set-time.
        CountryId::from_hex_unchecked(code.as_bytes()[pos] as char)
    }
}

/// One resolution session: a location axis and a signal axis, each an
/// exclusive choice, over a shared read-only [`CountryDirectory`].
///
/// Setters validate their input and replace the whole axis, so a session can
/// never hold, say, both an ISO code and an ECC. Sessions are cheap; create
/// one per resolution request and discard it.
///
/// ```
/// use radiogcc_core::{CountryDirectory, Resolver};
///
/// let directory = CountryDirectory::bundled();
/// let mut resolver = Resolver::new(directory);
/// resolver.set_location_ecc("E0")?;
/// resolver.set_signal_rds_pi("D479")?;
/// assert_eq!(resolver.resolve_gcc()?[0].gcc, "de0");
/// # Ok::<(), radiogcc_core::ResolutionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Resolver<'a> {
    directory: &'a CountryDirectory,
    location: Option<Location>,
    signal: Option<Signal>,
}

impl<'a> Resolver<'a> {
    pub fn new(directory: &'a CountryDirectory) -> Self {
        Resolver {
            directory,
            location: None,
            signal: None,
        }
    }

    /// Sets the location axis from an ISO 3166-1 alpha-2 country code,
    /// replacing any previously set location descriptor.
    pub fn set_location_iso_code(&mut self, code: &str) -> Result<()> {
        let code = codes::norm_iso(code)
            .ok_or_else(|| ResolutionError::InvalidCountryCode(code.to_string()))?;
        self.location = Some(Location::IsoCode(code));
        Ok(())
    }

    /// Sets the location axis from an Extended Country Code, replacing any
    /// previously set location descriptor.
    pub fn set_location_ecc(&mut self, ecc: &str) -> Result<()> {
        let ecc = codes::norm_ecc(ecc).ok_or_else(|| ResolutionError::InvalidEcc(ecc.to_string()))?;
        self.location = Some(Location::Ecc(ecc));
        Ok(())
    }

    /// Sets the signal axis from an RDS PI code, replacing any previously
    /// set signal descriptor.
    pub fn set_signal_rds_pi(&mut self, pi: &str) -> Result<()> {
        let pi = codes::norm_pi(pi).ok_or_else(|| ResolutionError::InvalidPi(pi.to_string()))?;
        self.signal = Some(Signal::RdsPi(pi));
        Ok(())
    }

    /// Sets the signal axis from a DAB SId, replacing any previously set
    /// signal descriptor.
    ///
    /// An eight-digit SId embeds its own ECC in the first two hex digits; it
    /// is authoritative for the location and overwrites that axis too.
    pub fn set_signal_dab_sid(&mut self, sid: &str) -> Result<()> {
        let sid = codes::norm_sid(sid).ok_or_else(|| ResolutionError::InvalidSid(sid.to_string()))?;
        if sid.len() == 8 {
            self.location = Some(Location::Ecc(sid[..2].to_string()));
        }
        self.signal = Some(Signal::DabSid(sid));
        Ok(())
    }

    /// The currently configured location descriptor, if any.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// The currently configured signal descriptor, if any.
    pub fn signal(&self) -> Option<&Signal> {
        self.signal.as_ref()
    }

    /// Resolves the candidate countries for the configured session.
    ///
    /// Returns one or more [`Match`]es in a significant, reproducible order:
    /// a direct match is always a single entry; adjacency candidates appear
    /// in dataset declaration order.
    pub fn resolve_gcc(&self) -> Result<Vec<Match>> {
        let signal = self.signal.as_ref().ok_or(ResolutionError::MissingSignal)?;
        let country_id = signal.country_id();
        let location = self
            .location
            .as_ref()
            .ok_or(ResolutionError::MissingLocation)?;

        match location {
            Location::IsoCode(iso) => self.resolve_by_iso(iso, country_id),
            Location::Ecc(ecc) => self.resolve_by_ecc(ecc, country_id),
        }
    }

    /// Resolves only the ISO country codes of the candidates, in the same
    /// order as [`Resolver::resolve_gcc`].
    pub fn resolve_country_code(&self) -> Result<Vec<String>> {
        let matches = self.resolve_gcc()?;
        Ok(matches.into_iter().map(|m| m.iso_country_code).collect())
    }

    fn resolve_by_iso(&self, iso: &str, country_id: CountryId) -> Result<Vec<Match>> {
        let reported = self
            .directory
            .by_iso_code(iso)
            .ok_or_else(|| ResolutionError::UnknownLocation(iso.to_string()))?;

        // The received nibble matches the reported location directly.
        if reported.carries(country_id) {
            return Ok(vec![Match::new(country_id, &reported.ecc, &reported.iso_code)]);
        }

        // Border proximity: the nibble may belong to a country adjacent to
        // the reported location. Every matching neighbor is a candidate.
        let mut matches = Vec::new();
        for adjacency in &reported.nearby {
            if adjacency.country_id != country_id {
                continue;
            }
            match self.directory.by_iso_code(&adjacency.iso_code) {
                Some(neighbor) => {
                    matches.push(Match::new(country_id, &neighbor.ecc, &neighbor.iso_code))
                }
                None => trace!(
                    "adjacency of {} references unknown country {}",
                    reported.iso_code,
                    adjacency.iso_code
                ),
            }
        }
        if matches.is_empty() {
            return Err(ResolutionError::NoMatch);
        }
        trace!(
            "resolved {}/{} via adjacency: {} candidate(s)",
            reported.iso_code,
            country_id,
            matches.len()
        );
        Ok(matches)
    }

    // The ECC is already a precise signal; no adjacency fallback applies.
    fn resolve_by_ecc(&self, ecc: &str, country_id: CountryId) -> Result<Vec<Match>> {
        match self.directory.by_country_id_and_ecc(country_id, ecc) {
            Some(record) => Ok(vec![Match::new(country_id, &record.ecc, &record.iso_code)]),
            None => Err(ResolutionError::NoMatch),
        }
    }
}
