//! radiogcc-cli
//! ============
//!
//! Command-line interface for the `radiogcc-core` broadcast country
//! resolver.
//!
//! This crate primarily provides a binary (`radiogcc`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! radiogcc --help
//! radiogcc stats
//! radiogcc country ch
//! radiogcc resolve --country CH --pi 4479
//! radiogcc resolve --ecc E0 --sid D479 --json
//! ```
//!
//! For programmatic access to the resolution engine, use the
//! `radiogcc-core` crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
