//! # cqrsgen
//!
//! Command-line tool for scaffolding CQRS features in layered C# solutions.
//!
//! This crate provides the `cqrsgen` binary:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cqrsgen add feature <name>` | Generate a command or query feature (handler, validator, request/response) and optionally wire an endpoint into an existing controller |
//!
//! ## Architecture
//!
//! - [`commands::feature`] — generation orchestration (`cqrsgen add feature`)
//! - [`commands::locate`] — solution layout discovery
//! - [`commands::templates`] — string helpers and C# code templates
//! - [`augment`] — the controller augmentation engine: brace scanning,
//!   namespace style detection and single-offset snippet splicing into
//!   files the tool does not own

pub mod augment;
pub mod commands;
