// crates/lfconv-cli/src/cmd/mod.rs

pub mod check;
pub mod convert;
pub mod scan;
