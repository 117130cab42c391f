//! Aligned plain-text table.

use netsift_client::ResultRecord;

use super::{Column, MISSING_PLACEHOLDER, ReportLayout};

const COLUMN_GAP: &str = "  ";

fn cell<'a>(column: &Column, record: &'a ResultRecord) -> &'a str {
    match record.get(column.field) {
        Some(value) if column.timestamp => value.split('.').next().unwrap_or(value),
        Some(value) => value,
        None => MISSING_PLACEHOLDER,
    }
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (i, (value, width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(value);
        let pad = width.saturating_sub(value.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    output.push_str(line.trim_end());
    output.push('\n');
}

pub(super) fn render(layout: &ReportLayout, records: &[ResultRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", layout.empty_message);
    }

    let rows: Vec<Vec<&str>> = records
        .iter()
        .map(|record| layout.columns.iter().map(|c| cell(c, record)).collect())
        .collect();

    let widths: Vec<usize> = layout
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    push_row(&mut output, layout.headers(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut output, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut output, row.iter().copied(), &widths);
    }
    output
}
