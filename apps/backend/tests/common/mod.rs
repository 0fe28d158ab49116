#![allow(dead_code)]

// Each integration binary links this module; the hook runs before any test.
#[ctor::ctor]
fn install_test_subscriber() {
    backend_test_support::logging::init();
}
