// crates/lfconv-cli/src/io/mod.rs

pub mod stream;
