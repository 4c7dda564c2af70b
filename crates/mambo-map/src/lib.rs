//! Header resolution for contact exports.
//!
//! Turns the raw header row of an arbitrary export into a [`HeaderMap`]:
//! one entry per input column naming the canonical field it feeds, or
//! marking it unmapped.

#![deny(unsafe_code)]

pub mod engine;
pub mod patterns;
pub mod types;

pub use engine::{HeaderResolver, resolve_headers};
pub use patterns::{canonical_name_match, is_email_header};
pub use types::{ColumnMapping, HeaderMap, Resolution};
