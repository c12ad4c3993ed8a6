//! Command implementations for the `cqrsgen` CLI.

/// Feature generation — `cqrsgen add feature <name>`.
///
/// Generates the command/query, handler, optional validator and the
/// request/response classes, then optionally wires an endpoint method
/// into an existing controller via [`crate::augment`].
pub mod feature;

/// Solution layout discovery.
///
/// Finds the `src` directory and the Application/Abstraction/Controllers
/// layers below the working directory.
pub mod locate;

/// Shared template helpers and code templates.
///
/// String utilities (`to_kebab_case`, `parse_properties`) plus the C#
/// source templates for feature files and the endpoint snippet.
pub mod templates;
