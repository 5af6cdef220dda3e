//! Table rendering: aligned columns, centered headers, trimmed lines.

use unicode_width::UnicodeWidthStr;

use crate::types::MonthBlock;

/// Render one block: centered header, label row, one line per week row.
pub fn render_block(block: &MonthBlock) -> Vec<String> {
    let widths = column_widths(block);
    let table_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

    let mut lines = Vec::with_capacity(block.rows.len() + 2);
    lines.push(center_text(&block.header, table_width));

    let labels: Vec<&str> = block.columns.iter().map(String::as_str).collect();
    lines.push(format_line(&labels, &widths));

    for row in &block.rows {
        let cells: Vec<&str> = block
            .columns
            .iter()
            .map(|label| row.get(label).unwrap_or(""))
            .collect();
        lines.push(format_line(&cells, &widths));
    }
    lines
}

/// Print blocks to stdout, one blank line between months.
pub fn print_blocks(blocks: &[MonthBlock]) {
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in render_block(block) {
            println!("{}", line);
        }
    }
}

/// Width of each column: the widest of its label and its cells.
fn column_widths(block: &MonthBlock) -> Vec<usize> {
    block
        .columns
        .iter()
        .map(|label| {
            block
                .rows
                .iter()
                .filter_map(|row| row.get(label))
                .map(UnicodeWidthStr::width)
                .chain([label.width()])
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Right-align entries to their column widths, single-space separated,
/// trailing whitespace trimmed.
fn format_line(entries: &[&str], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, (entry, width)) in entries.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push(' ');
        }
        for _ in 0..width.saturating_sub(entry.width()) {
            line.push(' ');
        }
        line.push_str(entry);
    }
    line.trim_end().to_string()
}

/// Center text over a width, accounting for Unicode character widths.
/// Only the leading padding is emitted; output lines carry no trailing
/// whitespace.
fn center_text(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left_padding = (width - text_width).div_ceil(2);
    format!("{}{}", " ".repeat(left_padding), text)
}
