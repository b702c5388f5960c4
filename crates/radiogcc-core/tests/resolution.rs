//! Integration tests against the bundled reference table.

use radiogcc_core::{CountryDirectory, CountryId, Match, ResolutionError, Resolver};

fn resolve_iso_pi(iso: &str, pi: &str) -> Result<Vec<Match>, ResolutionError> {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    resolver.set_location_iso_code(iso)?;
    resolver.set_signal_rds_pi(pi)?;
    resolver.resolve_gcc()
}

fn gccs(matches: &[Match]) -> Vec<&str> {
    matches.iter().map(|m| m.gcc.as_str()).collect()
}

#[test]
fn direct_match_resolves_the_reported_country() {
    // the received nibble matches the reported location
    assert_eq!(gccs(&resolve_iso_pi("CH", "4479").unwrap()), ["4e1"]);
    assert_eq!(gccs(&resolve_iso_pi("GB", "C479").unwrap()), ["ce1"]);
    assert_eq!(gccs(&resolve_iso_pi("KR", "E479").unwrap()), ["ef1"]);
}

#[test]
fn direct_match_carries_the_full_identity() {
    let matches = resolve_iso_pi("CH", "4479").unwrap();
    assert_eq!(
        matches,
        vec![Match::new(CountryId::new('4').unwrap(), "e1", "ch")]
    );
    assert_eq!(matches[0].iso_country_code, "CH");
    assert_eq!(matches[0].ecc, "e1");
}

#[test]
fn adjacent_country_resolves_on_nibble_mismatch() {
    // the nibble belongs to a neighbor of the reported location
    assert_eq!(gccs(&resolve_iso_pi("CH", "D479").unwrap()), ["de0"]);
    assert_eq!(gccs(&resolve_iso_pi("GB", "2479").unwrap()), ["2e3"]);
    assert_eq!(gccs(&resolve_iso_pi("KP", "E479").unwrap()), ["ef1"]);

    let matches = resolve_iso_pi("CH", "D479").unwrap();
    assert_eq!(matches[0].iso_country_code, "DE");
}

#[test]
fn shared_nibble_yields_every_adjacent_candidate_in_order() {
    // Austria borders both Italy (5, e0) and Slovakia (5, e2)
    let matches = resolve_iso_pi("AT", "5479").unwrap();
    assert_eq!(gccs(&matches), ["5e0", "5e2"]);
    assert_eq!(matches[0].iso_country_code, "IT");
    assert_eq!(matches[1].iso_country_code, "SK");
}

#[test]
fn resolution_is_case_insensitive() {
    let upper = resolve_iso_pi("CH", "D479").unwrap();
    let lower = resolve_iso_pi("ch", "d479").unwrap();
    let mixed = resolve_iso_pi("cH", "D479").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn gcc_is_the_lowercase_nibble_and_ecc() {
    for (iso, pi) in [("CH", "4479"), ("AT", "5479"), ("KP", "E479")] {
        for m in resolve_iso_pi(iso, pi).unwrap() {
            let expected = format!("{}{}", m.broadcast_country_id.as_char(), m.ecc);
            assert_eq!(m.gcc, expected.to_ascii_lowercase());
        }
    }
}

#[test]
fn ecc_location_resolves_through_the_fast_index() {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    resolver.set_location_ecc("E0").unwrap();
    resolver.set_signal_rds_pi("D479").unwrap();

    let matches = resolver.resolve_gcc().unwrap();
    assert_eq!(
        matches,
        vec![Match::new(CountryId::new('d').unwrap(), "e0", "de")]
    );
}

#[test]
fn ecc_location_never_yields_more_than_one_match() {
    let directory = CountryDirectory::bundled();
    for record in directory.records() {
        for &id in &record.country_ids {
            let mut resolver = Resolver::new(directory);
            resolver.set_location_ecc(&record.ecc).unwrap();
            resolver
                .set_signal_rds_pi(&format!("{}479", id.as_char()))
                .unwrap();
            assert_eq!(resolver.resolve_gcc().unwrap().len(), 1);
        }
    }
}

#[test]
fn every_carried_nibble_resolves_its_own_country() {
    // exhaustive over the bundled table: a nibble in a country's own id set
    // always direct-matches that country
    let directory = CountryDirectory::bundled();
    for record in directory.records() {
        for &id in &record.country_ids {
            let mut resolver = Resolver::new(directory);
            resolver.set_location_iso_code(&record.iso_code).unwrap();
            resolver
                .set_signal_rds_pi(&format!("{}123", id.as_char()))
                .unwrap();

            let matches = resolver.resolve_gcc().unwrap();
            assert_eq!(matches.len(), 1, "{}", record.iso_code);
            assert_eq!(
                matches[0].iso_country_code,
                record.iso_code.to_ascii_uppercase()
            );
            assert_eq!(
                matches[0].gcc,
                format!("{}{}", id.as_char(), record.ecc)
            );
        }
    }
}

#[test]
fn eight_digit_sid_resolves_from_its_embedded_ecc() {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    // location reported as Switzerland, but the SId carries ECC e0 and
    // country id d: Germany
    resolver.set_location_iso_code("CH").unwrap();
    resolver.set_signal_dab_sid("E0D47901").unwrap();

    let matches = resolver.resolve_gcc().unwrap();
    assert_eq!(gccs(&matches), ["de0"]);
    assert_eq!(matches[0].iso_country_code, "DE");
}

#[test]
fn four_digit_sid_behaves_like_a_pi_code() {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    resolver.set_location_iso_code("CH").unwrap();
    resolver.set_signal_dab_sid("4479").unwrap();
    assert_eq!(gccs(&resolver.resolve_gcc().unwrap()), ["4e1"]);
}

#[test]
fn unmatched_nibble_is_no_match() {
    // b is neither Switzerland's nibble nor any Swiss neighbor's
    assert_eq!(resolve_iso_pi("CH", "B479"), Err(ResolutionError::NoMatch));
}

#[test]
fn unknown_iso_code_is_unknown_location() {
    assert_eq!(
        resolve_iso_pi("XX", "C479"),
        Err(ResolutionError::UnknownLocation("xx".into()))
    );
}

#[test]
fn malformed_codes_are_rejected_before_any_lookup() {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    assert!(matches!(
        resolver.set_location_iso_code("X"),
        Err(ResolutionError::InvalidCountryCode(_))
    ));
    assert!(matches!(
        resolver.set_location_iso_code("XXX"),
        Err(ResolutionError::InvalidCountryCode(_))
    ));
    assert!(matches!(
        resolver.set_signal_rds_pi("A"),
        Err(ResolutionError::InvalidPi(_))
    ));
    assert!(matches!(
        resolver.set_signal_rds_pi("AAAAA"),
        Err(ResolutionError::InvalidPi(_))
    ));
    assert!(matches!(
        resolver.set_signal_rds_pi("XXXX"),
        Err(ResolutionError::InvalidPi(_))
    ));
    assert!(matches!(
        resolver.set_signal_dab_sid("C47"),
        Err(ResolutionError::InvalidSid(_))
    ));
}

#[test]
fn resolve_country_code_mirrors_the_legacy_api() {
    let mut resolver = Resolver::new(CountryDirectory::bundled());
    resolver.set_location_iso_code("CH").unwrap();
    resolver.set_signal_rds_pi("D479").unwrap();
    assert_eq!(resolver.resolve_country_code().unwrap(), vec!["DE"]);

    resolver.set_signal_rds_pi("4479").unwrap();
    assert_eq!(resolver.resolve_country_code().unwrap(), vec!["CH"]);
}
