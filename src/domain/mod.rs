//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — page-type tag plus report/output structs.
//! - `constants.rs` — stable constants (folder name, env var names, wire headers).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
