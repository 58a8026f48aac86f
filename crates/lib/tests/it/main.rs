/*! Integration tests for Kisan.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * - cart: cart operations through the public `Store` API
 * - favorites: favorite operations and queries
 * - persistence: snapshot round-trips through memory and file slots
 * - totals: cart summaries over store snapshots
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("kisan=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod cart;
mod favorites;
mod persistence;
