//! Terminal summary of association results

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{AssociationMatrix, AssociationMethod, CorrelatedFeatures};

/// Association results ready for display
#[derive(Debug)]
pub struct AssociationSummary<'a> {
    pub matrix: &'a AssociationMatrix,
    pub correlated: &'a CorrelatedFeatures,
    pub method: AssociationMethod,
    pub threshold: f64,
}

impl<'a> AssociationSummary<'a> {
    pub fn new(
        matrix: &'a AssociationMatrix,
        correlated: &'a CorrelatedFeatures,
        method: AssociationMethod,
        threshold: f64,
    ) -> Self {
        Self {
            matrix,
            correlated,
            method,
            threshold,
        }
    }

    /// Number of off-diagonal cells computed
    pub fn evaluated_cells(&self) -> usize {
        let n = self.matrix.len();
        if self.method.is_symmetric() {
            n * n.saturating_sub(1) / 2
        } else {
            n * n.saturating_sub(1)
        }
    }

    /// Off-diagonal cells whose statistic is undefined
    pub fn undefined_cells(&self) -> usize {
        let n = self.matrix.len();
        let mut count = 0;
        for i in 0..n {
            let start = if self.method.is_symmetric() { i + 1 } else { 0 };
            for j in start..n {
                if i != j && self.matrix.get(i, j).is_nan() {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn display(&self) {
        self.display_overview();
        self.display_matrix();
        self.display_correlated();
    }

    fn display_overview(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("ASSOCIATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📐 Method"),
            Cell::new(self.method.display_name()),
        ]);
        table.add_row(vec![
            Cell::new("📁 Features"),
            Cell::new(self.matrix.len()),
        ]);
        table.add_row(vec![
            Cell::new("🔢 Pairs Evaluated"),
            Cell::new(self.evaluated_cells()),
        ]);

        let undefined = self.undefined_cells();
        table.add_row(vec![
            Cell::new("⚠️  Undefined (NaN)"),
            Cell::new(undefined).fg(if undefined == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🔗 Associated Features"),
            Cell::new(self.correlated.len())
                .fg(if self.correlated.is_empty() {
                    Color::Green
                } else {
                    Color::Red
                })
                .add_attribute(Attribute::Bold),
        ]);

        print_indented(&table);
    }

    fn display_matrix(&self) {
        if self.matrix.is_empty() {
            return;
        }

        println!();
        println!(
            "    {} {}",
            style("🧮").cyan(),
            style("ASSOCIATION MATRIX").white().bold()
        );
        if !self.method.is_symmetric() {
            println!(
                "    {}",
                style("row = known feature, column = predicted feature").dim()
            );
        }
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let features = self.matrix.features();
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);

        let mut header = vec![Cell::new("")];
        header.extend(
            features
                .iter()
                .map(|f| Cell::new(f).add_attribute(Attribute::Bold)),
        );
        table.set_header(header);

        for (i, feature) in features.iter().enumerate() {
            let mut row = vec![Cell::new(feature).add_attribute(Attribute::Bold)];
            for j in 0..features.len() {
                let value = self.matrix.get(i, j);
                let cell = Cell::new(format_value(value)).set_alignment(CellAlignment::Right);
                let cell = if i == j {
                    cell.fg(Color::DarkGrey)
                } else if value.is_nan() {
                    cell.fg(Color::Yellow)
                } else if value > self.threshold {
                    cell.fg(Color::Red).add_attribute(Attribute::Bold)
                } else {
                    cell
                };
                row.push(cell);
            }
            table.add_row(row);
        }

        print_indented(&table);
    }

    fn display_correlated(&self) {
        println!();
        println!(
            "    {} {}",
            style("📝").cyan(),
            style("HIGHLY ASSOCIATED FEATURES").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        if self.correlated.is_empty() {
            println!();
            println!(
                "      {}",
                style(format!("No feature pairs above {:.2}", self.threshold)).dim()
            );
            return;
        }

        for (feature, others) in self.correlated {
            println!();
            println!(
                "      {} {}:",
                style(feature).yellow(),
                style(format!("({})", others.len())).dim()
            );
            let i = self.matrix.index_of(feature);
            for other in others {
                let value = i
                    .zip(self.matrix.index_of(other))
                    .map(|(i, j)| self.matrix.get(i, j))
                    .unwrap_or(f64::NAN);
                println!(
                    "        {} {} {}",
                    style("•").dim(),
                    other,
                    style(format_value(value)).dim()
                );
            }
        }
    }
}

/// Format a matrix value for display
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.3}", value)
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
