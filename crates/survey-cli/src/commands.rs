use anyhow::Result;
use comfy_table::Table;

use survey_cli::pipeline::{RunResult, ValidateOptions, load_rules, run_validation};
use survey_model::{Variant, VariantSchema};

use crate::cli::{RulesArgs, ValidateArgs};
use crate::summary::apply_table_style;

pub fn run_validate(args: &ValidateArgs) -> Result<RunResult> {
    let options = ValidateOptions {
        input: args.input.clone(),
        rules: args.rules.clone(),
        output: args.output.clone(),
        exclude_critical: args.exclude_critical,
        dry_run: args.dry_run,
    };
    run_validation(&options)
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let rules = load_rules(args.rules.as_deref())?;
    if let Some(path) = rules.source() {
        println!("Rules: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec!["Class", "Rules"]);
    apply_table_style(&mut table);
    for (class, count) in rules.counts_by_class() {
        table.add_row(vec![class.to_string(), count.to_string()]);
    }
    table.add_row(vec!["TOTAL".to_string(), rules.len().to_string()]);
    println!("{table}");

    if args.check {
        let report = rules.doctor();
        if report.is_clean() {
            println!("No findings.");
        } else {
            println!("Findings ({}):", report.findings.len());
            for finding in &report.findings {
                println!("- {finding}");
            }
        }
    }
    Ok(())
}

pub fn run_variants() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Variant", "Field groups", "Fields"]);
    apply_table_style(&mut table);
    for variant in Variant::ALL {
        let groups: Vec<&str> = variant.groups().iter().map(|group| group.name()).collect();
        let schema = VariantSchema::for_variant(variant);
        table.add_row(vec![
            variant.name().to_string(),
            groups.join(", "),
            schema.len().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
