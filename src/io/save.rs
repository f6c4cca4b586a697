//! Strategy tables (record sink)

use crate::frontier::{Strategy, NOT_APPLICABLE};
use crate::{Error, Result};
use std::io::Write;
use std::path::Path;

const ORIGINAL_HEADER: [&str; 3] = ["Label", "Benefit", "Cost"];
const FRONTIER_HEADER: [&str; 4] = ["Label", "Benefit", "Cost", "ICER"];

/// Save the input snapshot as `Label,Benefit,Cost`
pub fn save_original(strategies: &[Strategy], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_table(create(path)?, strategies, false)?;
    tracing::info!(path = %path.display(), rows = strategies.len(), "wrote original data");
    Ok(())
}

/// Save frontier members as `Label,Benefit,Cost,ICER`
///
/// The baseline's ICER is written as the literal `N/A`.
///
/// # Example
///
/// ```no_run
/// use frontera::frontier::{Frontier, Strategy};
/// use frontera::io::save_frontier;
///
/// let frontier = Frontier::build(vec![Strategy::new("A", 1.0, 10.0)])?;
/// save_frontier(frontier.strategies(), "frontier_strategies.csv")?;
/// # Ok::<(), frontera::Error>(())
/// ```
pub fn save_frontier(frontier: &[Strategy], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_table(create(path)?, frontier, true)?;
    tracing::info!(path = %path.display(), rows = frontier.len(), "wrote frontier table");
    Ok(())
}

/// Write a strategy table to any writer, optionally with the ICER column
pub fn write_table<W: Write>(writer: W, strategies: &[Strategy], with_icer: bool) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    let csv_err = |e: csv::Error| Error::Csv(e.to_string());

    if with_icer {
        writer.write_record(FRONTIER_HEADER).map_err(csv_err)?;
    } else {
        writer.write_record(ORIGINAL_HEADER).map_err(csv_err)?;
    }

    for strategy in strategies {
        let mut row = vec![
            strategy.label.clone(),
            strategy.benefit.to_string(),
            strategy.cost.to_string(),
        ];
        if with_icer {
            row.push(
                strategy
                    .icer
                    .map_or_else(|| NOT_APPLICABLE.to_string(), |icer| icer.to_string()),
            );
        }
        writer.write_record(&row).map_err(csv_err)?;
    }

    writer.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(std::fs::File::create(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::Frontier;
    use crate::io::read_strategies;
    use tempfile::TempDir;

    fn frontier() -> Frontier {
        Frontier::build(vec![
            Strategy::new("A", 10.0, 100.0),
            Strategy::new("B", 20.0, 150.0),
            Strategy::new("C", 15.0, 140.0),
            Strategy::new("D", 30.0, 400.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_frontier_table_marks_baseline() {
        let mut buf = Vec::new();
        write_table(&mut buf, frontier().strategies(), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Label,Benefit,Cost,ICER");
        assert_eq!(lines[1], "A,10,100,N/A");
        assert_eq!(lines[2], "B,20,150,5");
        assert_eq!(lines[3], "D,30,400,25");
    }

    #[test]
    fn test_original_table_has_no_icer_column() {
        let mut buf = Vec::new();
        let data = vec![Strategy::new("A", 1.5, 2.25)];
        write_table(&mut buf, &data, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Label,Benefit,Cost\nA,1.5,2.25\n");
    }

    #[test]
    fn test_labels_with_commas_are_quoted() {
        let mut buf = Vec::new();
        let data = vec![Strategy::new("Drug A, low dose", 1.0, 2.0)];
        write_table(&mut buf, &data, false).unwrap();
        let back = read_strategies(buf.as_slice(), true).unwrap();
        assert_eq!(back[0].label, "Drug A, low dose");
    }

    #[test]
    fn test_label_whitespace_survives_roundtrip() {
        let mut buf = Vec::new();
        let data = vec![Strategy::new("  Drug A ", 1.0, 2.0).with_icer(0.5)];
        write_table(&mut buf, &data, true).unwrap();
        let back = read_strategies(buf.as_slice(), true).unwrap();
        assert_eq!(back[0].label, "  Drug A ");
        assert_eq!((back[0].benefit, back[0].cost), (1.0, 2.0));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out/frontier.csv");
        save_frontier(frontier().strategies(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_original_writes_every_row() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("original.csv");
        let data = vec![
            Strategy::new("x", 3.0, 1.0),
            Strategy::new("y", 1.0, 3.0),
        ];
        save_original(&data, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("x,3,1"));
    }
}
