pub mod builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use builders::{skater, GameLogBuilder};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
