//! Table and JSON output

use std::io::Write;

use anyhow::Result;
use localdns_core::Tabular;
use serde::Serialize;

/// Render rows as an aligned text table with a header line
pub fn table<T: Tabular>(rows: &[T]) -> String {
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();
    let mut widths: Vec<usize> = T::COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = T::COLUMNS.iter().map(|c| c.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    for line in std::iter::once(&header).chain(std::iter::once(&rule)).chain(&cells) {
        out.push_str(&format_line(line, &widths));
        out.push('\n');
    }
    out
}

fn format_line(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Write a listing; `empty` is printed instead of an empty table
pub fn rows<T: Tabular + Serialize>(
    out: &mut dyn Write,
    rows: &[T],
    json: bool,
    empty: &str,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
    } else if rows.is_empty() {
        writeln!(out, "{}", empty)?;
    } else {
        write!(out, "{}", table(rows))?;
    }
    Ok(())
}

/// Write the outcome of a create command
pub fn created<T: Serialize>(
    out: &mut dyn Write,
    value: &T,
    json: bool,
    message: &str,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}

/// Write the outcome of a create the remote accepted without returning a body
pub fn created_without_body(out: &mut dyn Write, kind: &str, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "created": kind });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{} created (no content returned).", kind)?;
    }
    Ok(())
}

/// Write the outcome of a delete command
pub fn deleted(out: &mut dyn Write, kind: &str, id: &str, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "deleted": kind, "id": id });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
    } else {
        writeln!(out, "{} {} deleted.", kind, id)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use localdns_core::UNASSIGNED;
    use localdns_core::views::ProfileWithNetwork;

    fn staging() -> ProfileWithNetwork {
        ProfileWithNetwork {
            profile_id: "prof-5".to_string(),
            name: "Staging".to_string(),
            network_id: UNASSIGNED.to_string(),
            network_name: UNASSIGNED.to_string(),
        }
    }

    #[test]
    fn test_table_aligns_columns() {
        let text = table(&[staging()]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Profile ID  Name     Network ID    Network Name");
        assert!(lines[1].starts_with("----------  -------  ------------"));
        assert_eq!(lines[2], "prof-5      Staging  [unassigned]  [unassigned]");
    }

    #[test]
    fn test_empty_listing_prints_message() {
        let mut out = Vec::new();
        rows::<ProfileWithNetwork>(&mut out, &[], false, "No profiles found.").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No profiles found.\n");
    }

    #[test]
    fn test_json_listing_uses_display_names() {
        let mut out = Vec::new();
        rows(&mut out, &[staging()], true, "unused").unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["Profile ID"], "prof-5");
        assert_eq!(value[0]["Network Name"], UNASSIGNED);
    }

    #[test]
    fn test_empty_json_listing_is_empty_array() {
        let mut out = Vec::new();
        rows::<ProfileWithNetwork>(&mut out, &[], true, "No profiles found.").unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }

    #[test]
    fn test_created_without_body_message() {
        let mut out = Vec::new();
        created_without_body(&mut out, "Profile", false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Profile created (no content returned).\n"
        );

        let mut out = Vec::new();
        created_without_body(&mut out, "Assignment", true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, serde_json::json!({"created": "Assignment"}));
    }

    #[test]
    fn test_deleted_message() {
        let mut out = Vec::new();
        deleted(&mut out, "Record", "rec-1", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Record rec-1 deleted.\n");
    }
}
