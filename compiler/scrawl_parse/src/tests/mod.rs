//! Parser tests.
//!
//! - `scenarios`: complete protocols and the trees they produce
//! - `errors`: error kinds, messages and positions
//! - `properties`: property tests over generated protocols


use crate::{parse, Allowlist, Error};
use scrawl_ir::Root;

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn parse_ok(source: &str) -> Root {
    parse(source, &Allowlist::new()).unwrap()
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn parse_with_ok(source: &str, allowlist: &Allowlist) -> Root {
    parse(source, allowlist).unwrap()
}

#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
fn parse_err(source: &str, allowlist: &Allowlist) -> Error {
    parse(source, allowlist).unwrap_err()
}
