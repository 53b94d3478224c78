//! Record list, show and delete handlers.

use super::OutputFormat;
use botcommand::{DashboardResult, JsonError, PanelRecord, ResourceStore};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> DashboardResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Render records as an aligned text table.
pub fn render_table<R: PanelRecord>(records: &[R]) -> String {
    let mut header = vec!["ID".to_string()];
    header.extend(R::columns().iter().map(|c| c.to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            let mut row = vec![r.id().to_string()];
            row.extend(r.cells());
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(&header)];
    out.extend(rows.iter().map(|row| line(row)));
    out.join("\n")
}

/// Print every record of one type.
pub async fn list_records<R: PanelRecord>(
    store: &dyn ResourceStore<R>,
    format: OutputFormat,
) -> DashboardResult<()> {
    let records = store.list().await?;
    match format {
        OutputFormat::Json => print_json(&records)?,
        OutputFormat::Human => {
            println!("{}", R::TITLE);
            println!("{:-<80}", "");
            println!("{}", render_table(&records));
            println!("Total: {} {}", records.len(), R::PLURAL);
        }
    }
    Ok(())
}

/// Print one record.
pub async fn show_record<R: PanelRecord>(
    store: &dyn ResourceStore<R>,
    id: &str,
    format: OutputFormat,
) -> DashboardResult<()> {
    let record = store.get(id).await?;
    match format {
        OutputFormat::Json => print_json(&record)?,
        OutputFormat::Human => {
            println!("ID: {}", record.id());
            for (label, value) in R::columns().iter().zip(record.cells()) {
                println!("{}: {}", label, value);
            }
        }
    }
    Ok(())
}

/// Delete one record and print the confirmation.
pub async fn delete_record<R: PanelRecord>(store: &dyn ResourceStore<R>, id: &str) -> DashboardResult<()> {
    let ack = store.delete(id).await?;
    println!("{}", ack);
    Ok(())
}
