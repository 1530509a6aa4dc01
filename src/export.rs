use crate::error::Result;
use crate::results::TenderRecord;
use csv::{Reader, Writer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column headers, in output order
pub const HEADERS: [&str; 4] = ["Titel", "Frist", "Ort", "Link"];

/// Default file name offered for the CSV download
pub const DEFAULT_CSV_FILE: &str = "kunst_am_bau_ausschreibungen.csv";

/// Writes records as comma-delimited UTF-8 CSV with a header row and no
/// index column. The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[TenderRecord], writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record([
            &record.title,
            &record.deadline,
            &record.location,
            &record.url,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// CSV export as bytes, ready to hand to a download
pub fn to_csv_bytes(records: &[TenderRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    Ok(buf)
}

/// Writes the CSV export to `path`
pub fn export_csv<P: AsRef<Path>>(records: &[TenderRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    ::log::debug!("Exporting {} records to CSV: {}", records.len(), path.display());

    let file = File::create(path)?;
    write_csv(records, file)?;

    ::log::info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Reads records back from a CSV export
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TenderRecord>> {
    let mut rdr = Reader::from_reader(reader);
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<TenderRecord>, csv::Error>>()?;
    Ok(records)
}

/// Renders records as a plain-text table with the CSV headers
pub fn render_table(records: &[TenderRecord]) -> String {
    let rows = records
        .iter()
        .map(|r| {
            [
                r.title.as_str(),
                r.deadline.as_str(),
                r.location.as_str(),
                r.url.as_str(),
            ]
        })
        .collect::<Vec<_>>();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(HEADERS)];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    lines.extend(rows.into_iter().map(format_row));
    lines.join("\n")
}
