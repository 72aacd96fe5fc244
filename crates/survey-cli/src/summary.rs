use std::collections::BTreeMap;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use survey_cli::pipeline::RunResult;
use survey_model::{Severity, Variant};

/// Per-variant tallies for the summary table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VariantTally {
    pub records: usize,
    pub clean: usize,
    pub non_critical: usize,
    pub critical: usize,
    pub failures: usize,
}

impl VariantTally {
    fn add(&mut self, other: Self) {
        self.records += other.records;
        self.clean += other.clean;
        self.non_critical += other.non_critical;
        self.critical += other.critical;
        self.failures += other.failures;
    }
}

/// Tallies keyed by variant name; unresolved records are keyed `-`.
pub fn tally(result: &RunResult) -> BTreeMap<&'static str, VariantTally> {
    let mut tallies: BTreeMap<&'static str, VariantTally> = BTreeMap::new();
    for outcome in &result.outcomes {
        let key = outcome.variant.map_or(UNRESOLVED, Variant::name);
        let entry = tallies.entry(key).or_default();
        entry.records += 1;
        if outcome.failure.is_some() {
            entry.failures += 1;
            continue;
        }
        match outcome.severity {
            Severity::None => entry.clean += 1,
            Severity::NonCritical => entry.non_critical += 1,
            Severity::Critical => entry.critical += 1,
        }
    }
    tallies
}

const UNRESOLVED: &str = "-";

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.rules {
        println!("Rules: {} ({} rules)", path.display(), result.rule_count);
    }
    match &result.output {
        Some(path) => println!("Output: {} ({} records)", path.display(), result.written),
        None => println!("Output: dry run, nothing written"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variant"),
        header_cell("Records"),
        header_cell("None"),
        header_cell("Non-Critical"),
        header_cell("Critical"),
        header_cell("Failed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut total = VariantTally::default();
    for (variant, counts) in tally(result) {
        total.add(counts);
        table.add_row(vec![
            variant_cell(variant),
            Cell::new(counts.records),
            count_cell(counts.clean, Color::Green),
            count_cell(counts.non_critical, Color::Yellow),
            count_cell(counts.critical, Color::Red),
            count_cell(counts.failures, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total.records).add_attribute(Attribute::Bold),
        count_cell(total.clean, Color::Green).add_attribute(Attribute::Bold),
        count_cell(total.non_critical, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total.critical, Color::Red).add_attribute(Attribute::Bold),
        count_cell(total.failures, Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if result.has_failures() {
        eprintln!("Failed records:");
        for outcome in result.failures() {
            let id = outcome
                .respondent_id
                .map_or_else(|| "unknown".to_string(), |id| id.to_string());
            let message = outcome.failure.as_deref().unwrap_or_default();
            eprintln!("- respondent {id}: {message}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn variant_cell(name: &str) -> Cell {
    if name == UNRESOLVED {
        Cell::new("(unresolved)").fg(Color::DarkGrey)
    } else {
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
