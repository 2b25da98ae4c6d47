//! Runnable examples for the option-schema workspace.
//!
//! See `resolve_basics.rs` and `generated_cli.rs`; run them with
//! `cargo run -p option-schema-demos --example <name>`.
