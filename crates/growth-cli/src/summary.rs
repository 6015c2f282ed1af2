use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use growth_model::{BloodPressureResult, ChannelThresholds, IndicatorResult, Severity};

use crate::commands::{ClassifyReport, TableRow};

pub fn print_classification(report: &ClassifyReport) {
    let classification = &report.classification;
    match &report.age_label {
        Some(label) => println!(
            "Sex: {}  Age: {} ({:.1} months)",
            classification.sex, label, classification.age_months
        ),
        None => println!(
            "Sex: {}  Age: {:.1} months",
            classification.sex, classification.age_months
        ),
    }
    if classification.growth.is_empty() {
        println!("No growth indicators apply.");
    } else {
        println!("{}", growth_table(classification.growth.iter()));
    }
    if let Some(result) = &classification.blood_pressure {
        println!("{}", blood_pressure_table(result));
    }
}

pub fn print_tables(rows: &[TableRow]) {
    println!("{}", reference_table(rows));
}

pub fn growth_table<'a>(results: impl Iterator<Item = &'a IndicatorResult>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Z-score"),
        header_cell("Percentile"),
        header_cell("Category"),
        header_cell("Severity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for result in results {
        table.add_row(vec![
            Cell::new(&result.label),
            Cell::new(format!("{:+.2}", result.z_score)),
            Cell::new(format!("{:.1}", result.percentile)),
            Cell::new(result.status).fg(severity_color(result.severity)),
            severity_cell(result.severity),
        ]);
    }
    table
}

pub fn blood_pressure_table(result: &BloodPressureResult) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    match &result.thresholds {
        Some(thresholds) => {
            table.set_header(vec![
                header_cell("Blood pressure"),
                header_cell("Mean"),
                header_cell("P90"),
                header_cell("P95"),
                header_cell("P95 + 12"),
            ]);
            for column in 1..5 {
                align_column(&mut table, column, CellAlignment::Right);
            }
            table.add_row(threshold_row("Systolic", &thresholds.systolic));
            table.add_row(threshold_row("Diastolic", &thresholds.diastolic));
            table.add_row(vec![
                Cell::new(result.status)
                    .fg(severity_color(result.severity))
                    .add_attribute(Attribute::Bold),
                Cell::new(result.band),
                dim_cell(format!("height z {:+.2}", thresholds.height_z)),
                dim_cell("-"),
                dim_cell("-"),
            ]);
        }
        None => {
            table.set_header(vec![
                header_cell("Blood pressure"),
                header_cell("Adult band"),
                header_cell("Severity"),
            ]);
            table.add_row(vec![
                Cell::new(result.status).fg(severity_color(result.severity)),
                Cell::new(result.band),
                severity_cell(result.severity),
            ]);
        }
    }
    table
}

pub fn reference_table(rows: &[TableRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Indicator"),
        header_cell("Sex"),
        header_cell("Key"),
        header_cell("L"),
        header_cell("M"),
        header_cell("S"),
        header_cell("-2 SD"),
        header_cell("+2 SD"),
    ]);
    apply_table_style(&mut table);
    for column in 2..8 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            Cell::new(row.indicator.as_code()),
            Cell::new(row.sex),
            Cell::new(format!("{} {}", row.key, row.indicator.key_kind().unit())),
            Cell::new(row.l),
            Cell::new(row.m),
            Cell::new(row.s),
            centile_cell(row.minus_two_sd),
            centile_cell(row.plus_two_sd),
        ]);
    }
    table
}

fn threshold_row(channel: &str, thresholds: &ChannelThresholds) -> Vec<Cell> {
    vec![
        Cell::new(channel),
        Cell::new(format!("{:.1}", thresholds.expected_mean)),
        Cell::new(format!("{:.1}", thresholds.p90)),
        Cell::new(format!("{:.1}", thresholds.p95)),
        Cell::new(format!("{:.1}", thresholds.p95_plus_12)),
    ]
}

fn centile_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell("-"),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Mild => Color::Yellow,
        Severity::Moderate => Color::DarkYellow,
        Severity::Severe => Color::Red,
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity).fg(severity_color(severity));
    if severity == Severity::Severe {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}
