// crates/radiogcc-core/src/model.rs

use serde::{Deserialize, Serialize};

use crate::codes::CountryId;

/// An adjacency entry of a [`CountryRecord`]: "if the received broadcast
/// nibble equals `country_id`, the neighbor `iso_code` is a candidate".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjacency {
    pub country_id: CountryId,
    /// Lowercase ISO 3166-1 alpha-2 code of the neighboring country.
    pub iso_code: String,
}

/// One country of the reference table. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Lowercase ISO 3166-1 alpha-2 code; unique across the directory.
    pub iso_code: String,
    /// Lowercase two-digit hex RDS Extended Country Code.
    pub ecc: String,
    /// The nibbles this country's broadcasts may carry. Non-empty.
    pub country_ids: Vec<CountryId>,
    /// Border-proximity candidates, in dataset declaration order.
    pub nearby: Vec<Adjacency>,
}

impl CountryRecord {
    /// True if this country's broadcasts may carry the given nibble.
    #[inline]
    pub fn carries(&self, id: CountryId) -> bool {
        self.country_ids.contains(&id)
    }
}

/// A resolved candidate country.
///
/// `gcc` is derived at construction and always equals the lowercase
/// concatenation of the broadcast nibble and the ECC.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Match {
    /// The nibble that matched.
    pub broadcast_country_id: CountryId,
    /// Lowercase ECC of the resolved country.
    pub ecc: String,
    /// Uppercase ISO 3166-1 alpha-2 code of the resolved country.
    pub iso_country_code: String,
    /// The Global Country Code: `broadcast_country_id ++ ecc`, lowercase.
    pub gcc: String,
}

impl Match {
    pub fn new(id: CountryId, ecc: &str, iso_code: &str) -> Self {
        let ecc = ecc.to_ascii_lowercase();
        let gcc = format!("{}{}", id.as_char(), ecc);
        Match {
            broadcast_country_id: id,
            ecc,
            iso_country_code: iso_code.to_ascii_uppercase(),
            gcc,
        }
    }
}
