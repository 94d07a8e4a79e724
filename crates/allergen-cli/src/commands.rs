use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use allergen_cli::report::{alias_rows, allergen_rows, certainty_row, resolve_row};
use allergen_standards::{DoctorReport, canonical_allergens, default_registry};

use crate::cli::{AliasesArgs, CertaintyArgs, OutputArgs, ResolveArgs};
use crate::summary::{
    print_aliases, print_allergens, print_certainties, print_doctor, print_resolutions,
};

pub fn run_list(args: &OutputArgs) -> Result<()> {
    let rows = allergen_rows(canonical_allergens());
    if args.json {
        return print_json(&rows);
    }
    print_allergens(&rows);
    Ok(())
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let rows: Vec<_> = args
        .terms
        .iter()
        .map(|term| resolve_row(term, args.label_only))
        .collect();
    let unmatched = rows.iter().filter(|row| row.matched.is_none()).count();
    info!(terms = rows.len(), unmatched, "resolved terms");
    if args.output.json {
        return print_json(&rows);
    }
    print_resolutions(&rows);
    Ok(())
}

pub fn run_certainty(args: &CertaintyArgs) -> Result<()> {
    let rows: Vec<_> = args
        .values
        .iter()
        .map(String::as_str)
        .map(certainty_row)
        .collect();
    if args.output.json {
        return print_json(&rows);
    }
    print_certainties(&rows);
    Ok(())
}

pub fn run_aliases(args: &AliasesArgs) -> Result<()> {
    let registry = default_registry();
    if let Some(slug) = &args.slug
        && registry.get(slug).is_none()
    {
        anyhow::bail!("unknown allergen slug: {slug}");
    }
    let rows = alias_rows(registry, args.slug.as_deref());
    if args.output.json {
        return print_json(&rows);
    }
    print_aliases(&rows);
    Ok(())
}

/// Returns whether the tables are healthy.
pub fn run_doctor(args: &OutputArgs) -> Result<bool> {
    let report = DoctorReport::from_registry(default_registry());
    for issue in &report.issues {
        warn!(%issue, "table integrity problem");
    }
    if args.json {
        print_json(&report)?;
    } else {
        print_doctor(&report);
    }
    Ok(report.is_healthy())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
