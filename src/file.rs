// src/file.rs
//
// Export of the final table: CSV/TSV through `csv`, or a standalone HTML
// page whose Links column is clickable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::options::{ExportFormat, ExportOptions, Locale},
    core::sanitize::escape_html,
    csv::rows_to_string,
    data::{LINKS_COL, ResultTable},
    error::Result,
};

/// `<a href="url">url</a>`
pub fn make_clickable(url: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, url, url)
}

/// Render the table in the chosen format.
pub fn render(table: &ResultTable, locale: Locale, format: ExportFormat, include_headers: bool) -> String {
    let headers = table.headers(locale);
    let cells = table.to_cells();
    match format.delim() {
        Some(sep) => {
            let hdr = include_headers.then_some(headers.as_slice());
            rows_to_string(hdr, &cells, sep)
        }
        None => to_html(&headers, &cells, include_headers),
    }
}

fn to_html(headers: &[String], rows: &[Vec<String>], include_headers: bool) -> String {
    let mut out = s!("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>Wattpad Mate</title></head>\n<body><center>\n<table border=\"1\" class=\"dataframe\">\n");
    if include_headers {
        out.push_str("<thead><tr>");
        for h in headers {
            out.push_str(&join!("<th>", &escape_html(h), "</th>"));
        }
        out.push_str("</tr></thead>\n");
    }
    out.push_str("<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for (ci, cell) in row.iter().enumerate() {
            let inner = if ci == LINKS_COL && !cell.is_empty() {
                make_clickable(&escape_html(cell))
            } else {
                escape_html(cell)
            };
            out.push_str(&join!("<td>", &inner, "</td>"));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</center></body></html>\n");
    out
}

/// Write the table where `export` says. Returns the path written.
pub fn export_table(export: &ExportOptions, locale: Locale, table: &ResultTable) -> Result<PathBuf> {
    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render(table, locale, export.format, export.include_headers);
    fs::write(&path, contents)?;
    logf!("Export: {} rows → {}", table.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ResultRow;

    fn table() -> ResultTable {
        ResultTable {
            rows: vec![ResultRow {
                alias: Some(s!("Ana <3")),
                username: Some(s!("ana")),
                gender: Some(s!("F")),
                visits: Some(50.0),
                votes: Some(12.0),
                works: Some(2),
                followers: vec![7],
                link: Some(s!("https://www.wattpad.com/user/ana")),
            }],
        }
    }

    #[test]
    fn clickable() {
        let url = "http://example.com";
        assert_eq!(make_clickable(url), format!(r#"<a href="{url}">{url}</a>"#));
    }

    #[test]
    fn csv_with_and_without_headers() {
        let t = table();
        let with = render(&t, Locale::En, ExportFormat::Csv, true);
        assert!(with.starts_with("Alias,Name,Gender,Visits,Votes,Works,Followers,Links\n"));
        assert!(with.contains("Ana <3,ana,F,50,12,2,7,https://www.wattpad.com/user/ana"));

        let without = render(&t, Locale::Es, ExportFormat::Tsv, false);
        assert_eq!(without.lines().count(), 1);
        assert!(without.starts_with("Ana <3\tana\t"));
    }

    #[test]
    fn html_links_are_clickable_and_text_escaped() {
        let html = render(&table(), Locale::Es, ExportFormat::Html, true);
        assert!(html.contains("<th>Enlaces</th>"));
        assert!(html.contains("<td>Ana &lt;3</td>"));
        assert!(html.contains(
            r#"<td><a href="https://www.wattpad.com/user/ana">https://www.wattpad.com/user/ana</a></td>"#
        ));
    }
}
