//! Contact value normalization.
//!
//! Two groups of pure, total functions:
//!
//! - **Name parsing**: split a free-form full name into prefix, first,
//!   middle, last and suffix, honoring surname particles such as `de la`
//! - **Field cleaning**: emails, phone numbers and free text, selected by
//!   the [`FieldKind`](mambo_model::FieldKind) of the target column
//!
//! Nothing here returns an error. The worst case for any input is the
//! trimmed input itself, or an empty name.

#![deny(unsafe_code)]

pub mod casing;
pub mod fields;
pub mod name;

pub use casing::{NameCasing, apply_name_casing, title_case_part};
pub use fields::{
    NormalizedEmail, email_key, normalize_email, normalize_for_kind, normalize_phone,
    normalize_text,
};
pub use name::{NameParser, parse_name};
