//! Core library for the `trackreplay` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, the position model and its HTTP source, the
//! replay state machine, and the terminal view. The primary user-facing
//! interface is the `trackreplay` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod positions;
pub mod replay;
pub mod shutdown;
pub mod ui;
