use std::io::Write;

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};

use super::{OutputFormat, Printer};
use crate::error::Result;

/// Build a table sized to the current terminal.
pub fn build_table(headers: &[String], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    table.set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Write `printer` to `out` in the requested format.
pub fn render<P, W>(printer: &P, format: OutputFormat, out: &mut W) -> Result<()>
where
    P: Printer + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", printer.to_json()?)?;
        }
        OutputFormat::Yaml => {
            write!(out, "{}", printer.to_yaml()?)?;
        }
        OutputFormat::Table => {
            let table = build_table(&printer.column_headers(), &printer.rows());
            writeln!(out, "\n{table}")?;
            write_paging(&printer.paging_rows(), out)?;
        }
    }
    Ok(())
}

// Leading single-cell rows are printed as plain lines; the first wider row
// becomes the header of the paging table.
fn write_paging<W: Write>(rows: &[Vec<String>], out: &mut W) -> Result<()> {
    let mut header: Option<&Vec<String>> = None;
    let mut body = Vec::new();
    for row in rows {
        match header {
            None if row.len() == 1 => writeln!(out, "{}", row[0])?,
            None => header = Some(row),
            Some(_) => body.push(row.clone()),
        }
    }
    if let Some(h) = header {
        let table = build_table(h, &body);
        writeln!(out, "{table}")?;
    }
    writeln!(out)?;
    Ok(())
}
