use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use mambo_cli::format::{FormatRequest, FormatResult, default_source_label, format_contacts};
use mambo_core::{NameCasing, PipelineOptions};
use mambo_model::{CanonicalField, FieldKind};
use mambo_standards::{LookupReport, default_lookups_root, load_lookups_with_policy};

use crate::cli::{FormatArgs, LookupsArgs, LookupsDirArgs};
use crate::summary::{apply_table_style, print_lookup_report};

pub fn run_format(args: &FormatArgs) -> Result<FormatResult> {
    let source_label = args
        .source
        .clone()
        .unwrap_or_else(|| default_source_label(&args.input));
    let options = PipelineOptions::new(source_label)
        .with_dedupe(!args.no_dedupe)
        .with_name_casing(if args.title_case_names {
            NameCasing::Title
        } else {
            NameCasing::Preserve
        })
        .with_collision_notes(!args.no_collision_notes);
    let request = FormatRequest {
        input: args.input.clone(),
        output: args.output.clone(),
        lookups_dir: lookups_dir(&args.lookups),
        alias_conflicts: args.lookups.alias_conflicts.map(Into::into),
        options,
        dry_run: args.dry_run,
    };
    format_contacts(&request)
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Field", "Kind"]);
    apply_table_style(&mut table);
    for (idx, field) in CanonicalField::ALL.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            field.as_str().to_string(),
            kind_label(field.kind()).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_lookups(args: &LookupsArgs) -> Result<()> {
    let dir = lookups_dir(&args.lookups);
    let policy = args.lookups.alias_conflicts.map(Into::into);
    let lookups = load_lookups_with_policy(&dir, policy)
        .with_context(|| format!("load lookups from {}", dir.display()))?;
    let report = LookupReport::from_lookups(&lookups);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize lookup report")?;
        println!("{json}");
    } else {
        print_lookup_report(&dir, &report);
    }
    Ok(())
}

fn lookups_dir(args: &LookupsDirArgs) -> PathBuf {
    args.dir.clone().unwrap_or_else(default_lookups_root)
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Source => "source label",
        FieldKind::Name => "name",
        FieldKind::Email => "email",
        FieldKind::Phone => "phone",
        FieldKind::Text => "text",
    }
}
