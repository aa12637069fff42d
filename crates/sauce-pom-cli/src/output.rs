//! Output formatting

use std::io::Write;

use console::style;
use serde::Serialize;

use sauce_pom::LocatorDocument;

use crate::error::CliResult;
use crate::handlers::{CheckOutcome, CheckReport, PageListing, SelectorReport};

/// Write `value` as pretty JSON followed by a newline
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Render the page registry
pub fn write_pages<W: Write>(out: &mut W, listings: &[PageListing]) -> CliResult<()> {
    for listing in listings {
        let marker = if listing.exists {
            style("✓").green()
        } else {
            style("✗").red()
        };
        writeln!(
            out,
            "{marker} {:<14} {}",
            listing.page.as_str(),
            style(listing.path.display()).dim()
        )?;
    }
    Ok(())
}

/// Render a whole document as `key: selector` lines in key order
pub fn write_document<W: Write>(out: &mut W, document: &LocatorDocument) -> CliResult<()> {
    let width = document.keys().map(str::len).max().unwrap_or(0);
    for (key, selector) in document.iter() {
        writeln!(out, "{:<width$}  {selector}", style(key).cyan())?;
    }
    Ok(())
}

/// Render one selector, bare so it can be piped
pub fn write_selector<W: Write>(out: &mut W, report: &SelectorReport) -> CliResult<()> {
    writeln!(out, "{}", report.selector)?;
    Ok(())
}

/// Render validation results and a summary line
pub fn write_check<W: Write>(out: &mut W, reports: &[CheckReport]) -> CliResult<()> {
    for report in reports {
        match &report.outcome {
            CheckOutcome::Ok { locators } => writeln!(
                out,
                "{} {} ({locators} locators)",
                style("PASS").green().bold(),
                report.page
            )?,
            CheckOutcome::MissingKeys { missing } => {
                writeln!(
                    out,
                    "{} {} {}",
                    style("FAIL").red().bold(),
                    report.page,
                    style(report.path.display()).dim()
                )?;
                for key in missing {
                    writeln!(out, "     missing key: {key}")?;
                }
            }
            CheckOutcome::Unloadable { error } => {
                writeln!(out, "{} {}", style("FAIL").red().bold(), report.page)?;
                writeln!(out, "     {error}")?;
            }
        }
    }

    let passed = reports.iter().filter(|r| r.is_ok()).count();
    writeln!(out, "\n{passed}/{} pages passed", reports.len())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use sauce_pom::PageId;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> CliResult<()>) -> String {
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_document_sorted() {
        let document: LocatorDocument = [("title", ".title"), ("cartLink", ".shopping_cart_link")]
            .into_iter()
            .collect();
        let text = render(|out| write_document(out, &document));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("cartLink"));
        assert!(lines[1].ends_with(".title"));
    }

    #[test]
    fn test_write_check_summary() {
        let reports = vec![
            CheckReport {
                page: PageId::LoginPage,
                path: PathBuf::from("LoginPageLocator.yaml"),
                outcome: CheckOutcome::Ok { locators: 6 },
            },
            CheckReport {
                page: PageId::CartPage,
                path: PathBuf::from("CartPageLocator.yaml"),
                outcome: CheckOutcome::MissingKeys {
                    missing: vec!["checkoutButton".to_string()],
                },
            },
        ];
        let text = render(|out| write_check(out, &reports));
        assert!(text.contains("PASS LoginPage (6 locators)"));
        assert!(text.contains("missing key: checkoutButton"));
        assert!(text.contains("1/2 pages passed"));
    }

    #[test]
    fn test_write_json() {
        let text = render(|out| write_json(out, &["a", "b"]));
        assert!(text.ends_with("]\n"));
    }
}
