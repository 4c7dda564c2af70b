//! Header resolution engine.

use std::collections::BTreeSet;

use tracing::{debug, info_span};

use mambo_model::CanonicalField;
use mambo_standards::{AliasMap, normalize_header_key};

use crate::patterns::{canonical_name_match, is_email_header};
use crate::types::{ColumnMapping, HeaderMap, Resolution};

/// Maps raw input headers to canonical fields.
///
/// Resolution runs in two passes so the alias table always beats the
/// heuristics, whatever the column order:
///
/// 1. exact matches, either an alias-table entry or a header that already is
///    a canonical field name;
/// 2. the email heuristic for the remaining columns, in column order:
///    the first email-like header takes `email` if no column claimed it,
///    the next takes `email_2`, any further ones stay unmapped.
///
/// Unresolved columns are reported as [`Resolution::Unmapped`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderResolver<'a> {
    aliases: &'a AliasMap,
}

impl<'a> HeaderResolver<'a> {
    pub fn new(aliases: &'a AliasMap) -> Self {
        Self { aliases }
    }

    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> HeaderMap {
        let span = info_span!("resolve", columns = headers.len());
        let _guard = span.enter();

        let mut columns: Vec<ColumnMapping> = headers
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let raw = raw.as_ref();
                let normalized = normalize_header_key(raw);
                let (target, resolution) = self.exact_match(&normalized);
                ColumnMapping {
                    index,
                    raw_header: raw.to_string(),
                    normalized,
                    target,
                    resolution,
                }
            })
            .collect();

        let mut claimed: BTreeSet<CanonicalField> =
            columns.iter().filter_map(|column| column.target).collect();
        for column in columns.iter_mut() {
            if column.target.is_some() || !is_email_header(&column.normalized) {
                continue;
            }
            let slot = [CanonicalField::Email, CanonicalField::Email2]
                .into_iter()
                .find(|field| !claimed.contains(field));
            if let Some(field) = slot {
                claimed.insert(field);
                column.target = Some(field);
                column.resolution = Resolution::Heuristic;
            }
        }

        for column in &columns {
            match column.target {
                Some(field) => debug!(
                    header = %column.raw_header,
                    field = %field,
                    resolution = ?column.resolution,
                    "header resolved"
                ),
                None => debug!(header = %column.raw_header, "header unmapped, column dropped"),
            }
        }
        HeaderMap { columns }
    }

    fn exact_match(&self, normalized: &str) -> (Option<CanonicalField>, Resolution) {
        if normalized.is_empty() {
            return (None, Resolution::Unmapped);
        }
        if let Some(field) = self.aliases.get(normalized) {
            return (Some(field), Resolution::Alias);
        }
        if let Some(field) = canonical_name_match(normalized) {
            return (Some(field), Resolution::CanonicalName);
        }
        (None, Resolution::Unmapped)
    }
}

/// Resolve `headers` against `aliases`.
pub fn resolve_headers<S: AsRef<str>>(headers: &[S], aliases: &AliasMap) -> HeaderMap {
    HeaderResolver::new(aliases).resolve(headers)
}
