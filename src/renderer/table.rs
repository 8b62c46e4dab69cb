// Tabular layouts for the text-ish output types
use std::io::{
    self,
    Write,
};

/// The table flavors the renderer knows how to draw.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TableFormat {
    /// Bordered grid with a rule after every row.
    Text,

    /// Bordered grid with rules only around the header and at the bottom.
    CompressedText,

    /// Markdown table.
    Markdown,

    /// Backlog wiki table; the header row carries the `h` suffix.
    Backlog,
}

/// Draw `rows` under `header` in the requested format.
pub(crate) fn write_table<W: Write>(
    w: &mut W,
    format: TableFormat,
    header: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let widths = column_widths(header, rows);

    match format {
        TableFormat::Text => {
            write_border(w, &widths)?;
            write_cells(w, header.iter().copied(), &widths, "")?;
            write_border(w, &widths)?;

            for row in rows {
                write_cells(w, row.iter().map(String::as_str), &widths, "")?;
                write_border(w, &widths)?;
            }

            if rows.is_empty() {
                write_border(w, &widths)?;
            }
        },
        TableFormat::CompressedText => {
            write_border(w, &widths)?;
            write_cells(w, header.iter().copied(), &widths, "")?;
            write_border(w, &widths)?;

            for row in rows {
                write_cells(w, row.iter().map(String::as_str), &widths, "")?;
            }

            write_border(w, &widths)?;
        },
        TableFormat::Markdown => {
            write_cells(w, header.iter().copied(), &widths, "")?;

            let separators: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
            write_cells(w, separators.iter().map(String::as_str), &widths, "")?;

            for row in rows {
                write_cells(w, row.iter().map(String::as_str), &widths, "")?;
            }
        },
        TableFormat::Backlog => {
            write_cells(w, header.iter().copied(), &widths, "h")?;

            for row in rows {
                write_cells(w, row.iter().map(String::as_str), &widths, "")?;
            }
        },
    }

    Ok(())
}

// Widest cell per column, header included.
fn column_widths(header: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    widths
}

fn write_border<W: Write>(w: &mut W, widths: &[usize]) -> io::Result<()> {
    for width in widths {
        write!(w, "+{}", "-".repeat(width + 2))?;
    }

    writeln!(w, "+")
}

fn write_cells<'a, W: Write>(
    w: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    suffix: &str,
) -> io::Result<()> {
    for (cell, &width) in cells.zip(widths) {
        write!(w, "| {cell:<width$} ")?;
    }

    writeln!(w, "|{suffix}")
}
