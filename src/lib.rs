#![doc(test(attr(deny(warnings))))]

//! Hogar Core models a household inventory: items grouped into rooms and a
//! house, linear depreciation per item kind, and JSON/console reports.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod inventory;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Hogar Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
