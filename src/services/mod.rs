//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `pages.rs` — code page folder enumeration.
//! - `payload.rs` — XML payload assembly.
//! - `quickbase.rs` — blocking HTTP client for the page API.
//! - `deploy.rs` — the per-file deploy loop.
//! - `check.rs` — readiness report assembly.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod check;
pub mod deploy;
pub mod output;
pub mod pages;
pub mod payload;
pub mod quickbase;
