//! Text renderings of the failure catalog.
//!
//! Rows are collected from a [`FailureRegistry`] and rendered in one of the
//! [`OutputFormat`]s. Rendering returns a `String`; printing is left to the
//! caller.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::definition::{Chapter, FailureIdentifier};
use crate::error::Result;
use crate::registry::FailureRegistry;

/// One line of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    /// Chapter, absent for failures that are not selectable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<Chapter>,
    /// Failure identifier.
    pub identifier: FailureIdentifier,
    /// Symbolic name.
    pub name: &'static str,
    /// Display label, absent for failures that are not selectable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    /// Whether the failure is offered in the catalog.
    pub selectable: bool,
}

impl CatalogRow {
    /// Row for a named failure, filled in from the catalog when selectable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownIdentifier`] if the identifier has no
    /// named entry.
    pub fn for_identifier(
        registry: &FailureRegistry,
        identifier: FailureIdentifier,
    ) -> Result<Self> {
        let name = registry.name_of(identifier)?;
        let definition = registry.definition_of(identifier);
        Ok(Self {
            chapter: definition.map(|d| d.chapter),
            identifier,
            name,
            label: definition.map(|d| d.label),
            selectable: definition.is_some(),
        })
    }
}

/// Chapter with the number of definitions filed under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterSummary {
    /// The chapter.
    pub chapter: Chapter,
    /// Number of catalog definitions in it.
    pub count: usize,
}

/// What a catalog listing should contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    /// Restrict to these chapters; empty means all.
    pub chapters: Vec<Chapter>,
    /// Append named failures that are not selectable.
    pub include_unselectable: bool,
}

/// Collect catalog rows in display order.
///
/// Definitions come first, in catalog order. Unselectable failures, when
/// requested, follow in declaration order; they carry no chapter and so are
/// only included when no chapter filter is set.
///
/// # Errors
///
/// Returns an error if a definition has no named entry, which a validated
/// registry rules out.
pub fn catalog_rows(registry: &FailureRegistry, filter: &ListingFilter) -> Result<Vec<CatalogRow>> {
    let mut rows = Vec::new();
    for definition in registry.definitions() {
        if !filter.chapters.is_empty() && !filter.chapters.contains(&definition.chapter) {
            continue;
        }
        rows.push(CatalogRow {
            chapter: Some(definition.chapter),
            identifier: definition.identifier,
            name: registry.name_of(definition.identifier)?,
            label: Some(definition.label),
            selectable: true,
        });
    }

    if filter.include_unselectable && filter.chapters.is_empty() {
        rows.extend(registry.unselectable().map(|entry| CatalogRow {
            chapter: None,
            identifier: entry.identifier,
            name: entry.name,
            label: None,
            selectable: false,
        }));
    }

    Ok(rows)
}

/// Chapters in first-appearance order with their definition counts.
#[must_use]
pub fn chapter_summaries(registry: &FailureRegistry) -> Vec<ChapterSummary> {
    registry
        .chapters()
        .into_iter()
        .map(|chapter| ChapterSummary {
            chapter,
            count: registry.by_chapter(chapter).count(),
        })
        .collect()
}

/// Render catalog rows.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_rows(rows: &[CatalogRow], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => out = serde_json::to_string_pretty(rows)?,
        OutputFormat::Plain => {
            for row in rows {
                let chapter = row.chapter.map_or_else(|| "--".to_string(), |c| c.to_string());
                let _ = writeln!(
                    out,
                    "{chapter} {} {} {}",
                    row.identifier,
                    row.name,
                    row.label.unwrap_or("(not selectable)")
                );
            }
        }
        OutputFormat::Table => {
            let name_width = rows
                .iter()
                .map(|row| row.name.len())
                .chain(std::iter::once("NAME".len()))
                .max()
                .unwrap_or_default();
            let _ = writeln!(out, "CH  ID     {:name_width$}  LABEL", "NAME");
            for row in rows {
                let chapter = row.chapter.map_or_else(|| "--".to_string(), |c| c.to_string());
                let _ = writeln!(
                    out,
                    "{chapter:<3} {:<6} {:name_width$}  {}",
                    row.identifier.to_string(),
                    row.name,
                    row.label.unwrap_or("-")
                );
            }
        }
    }
    Ok(out)
}

/// Render chapter summaries.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_chapters(summaries: &[ChapterSummary], format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => out = serde_json::to_string_pretty(summaries)?,
        OutputFormat::Plain => {
            for summary in summaries {
                let _ = writeln!(out, "{} {}", summary.chapter, summary.count);
            }
        }
        OutputFormat::Table => {
            let _ = writeln!(out, "CHAPTER  FAILURES");
            for summary in summaries {
                let _ = writeln!(out, "{:<7}  {}", summary.chapter.to_string(), summary.count);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a380::{self, A380Failure};

    fn chapter(value: u32) -> Chapter {
        Chapter::new(value)
    }

    #[test]
    fn test_catalog_rows_follow_catalog_order() {
        let registry = a380::registry();
        let rows = catalog_rows(registry, &ListingFilter::default()).unwrap();
        assert_eq!(rows.len(), registry.definitions().len());
        for (row, definition) in rows.iter().zip(registry.definitions()) {
            assert_eq!(row.identifier, definition.identifier);
            assert_eq!(row.label, Some(definition.label));
            assert!(row.selectable);
        }
    }

    #[test]
    fn test_catalog_rows_chapter_filter() {
        let filter = ListingFilter {
            chapters: vec![chapter(31)],
            include_unselectable: true,
        };
        let rows = catalog_rows(a380::registry(), &filter).unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["LeftPfdDisplay", "RightPfdDisplay"]);
    }

    #[test]
    fn test_catalog_rows_unselectable_appended() {
        let filter = ListingFilter {
            chapters: Vec::new(),
            include_unselectable: true,
        };
        let registry = a380::registry();
        let rows = catalog_rows(registry, &filter).unwrap();
        assert_eq!(rows.len(), registry.len());

        let hidden: Vec<_> = rows.iter().filter(|r| !r.selectable).map(|r| r.name).collect();
        assert_eq!(hidden.len(), 3);
        assert_eq!(hidden[0], "GearProxSensorDamageGearUplockLeft1");
        assert!(rows[..registry.definitions().len()].iter().all(|r| r.selectable));
    }

    #[test]
    fn test_row_for_identifier() {
        let registry = a380::registry();
        let row = CatalogRow::for_identifier(
            registry,
            A380Failure::GearProxSensorDamageDoorUplockLeft2.identifier(),
        )
        .unwrap();
        assert!(!row.selectable);
        assert_eq!(row.chapter, None);
        assert_eq!(row.name, "GearProxSensorDamageDoorUplockLeft2");

        let row = CatalogRow::for_identifier(registry, A380Failure::Vhf1.identifier()).unwrap();
        assert_eq!(row.label, Some("VHF 1"));
        assert_eq!(row.chapter, Some(chapter(23)));
    }

    #[test]
    fn test_row_for_unknown_identifier() {
        let result = CatalogRow::for_identifier(a380::registry(), FailureIdentifier::new(1));
        assert!(result.is_err());
    }

    #[test]
    fn test_chapter_summaries() {
        let summaries = chapter_summaries(a380::registry());
        let counts: Vec<_> = summaries
            .iter()
            .map(|s| (s.chapter.value(), s.count))
            .collect();
        assert_eq!(
            counts,
            vec![(22, 3), (23, 8), (24, 3), (29, 18), (31, 2), (32, 5), (34, 4)]
        );
    }

    #[test]
    fn test_render_plain() {
        let filter = ListingFilter {
            chapters: vec![chapter(22)],
            include_unselectable: false,
        };
        let rows = catalog_rows(a380::registry(), &filter).unwrap();
        let out = render_rows(&rows, OutputFormat::Plain).unwrap();
        assert_eq!(
            out,
            "22 22000 FmcA FMC-A\n22 22001 FmcB FMC-B\n22 22002 FmcC FMC-C\n"
        );
    }

    #[test]
    fn test_render_table_has_header() {
        let rows = catalog_rows(a380::registry(), &ListingFilter::default()).unwrap();
        let out = render_rows(&rows, OutputFormat::Table).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("CH  ID"));
        assert!(lines.next().unwrap().contains("FMC-A"));
    }

    #[test]
    fn test_render_json() {
        let filter = ListingFilter {
            chapters: vec![chapter(24)],
            include_unselectable: false,
        };
        let rows = catalog_rows(a380::registry(), &filter).unwrap();
        let out = render_rows(&rows, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["label"], "ESS TR");
        assert_eq!(value[2]["identifier"], 24_002);
    }

    #[test]
    fn test_render_json_omits_missing_fields() {
        let row = CatalogRow::for_identifier(
            a380::registry(),
            A380Failure::GearProxSensorDamageGearUplockLeft1.identifier(),
        )
        .unwrap();
        let out = render_rows(&[row], OutputFormat::Json).unwrap();
        assert!(!out.contains("label"));
        assert!(!out.contains("chapter"));
        assert!(out.contains("\"selectable\": false"));
    }

    #[test]
    fn test_render_chapters() {
        let summaries = chapter_summaries(a380::registry());
        let plain = render_chapters(&summaries, OutputFormat::Plain).unwrap();
        assert!(plain.starts_with("22 3\n"));

        let table = render_chapters(&summaries, OutputFormat::Table).unwrap();
        assert!(table.starts_with("CHAPTER  FAILURES\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_rows(&[], OutputFormat::Plain).unwrap(), "");
        assert_eq!(render_rows(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
