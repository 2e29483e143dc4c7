//! Plain-text output for the non-interactive subcommands.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use re_catalogue::{Catalogue, CatalogueView, Item, Rarity, coverage, coverage_by_class};

/// Filters accepted by [`write_list`], as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListFilters {
    pub search: String,
    /// Rarity name or `any`.
    pub rarity: String,
    /// Spec name or `any`.
    pub spec: String,
}

fn paint(rarity: Rarity, text: &str) -> ColoredString {
    let (r, g, b) = rarity.rgb();
    text.truecolor(r, g, b).bold()
}

fn write_item(out: &mut impl Write, item: &Item) -> io::Result<()> {
    let location = if item.has_location() {
        item.location.normal()
    } else {
        item.location_or_unknown().dimmed()
    };
    writeln!(
        out,
        "  {:<10} {}  {}",
        paint(item.rarity, item.rarity.label()),
        item.name.bold(),
        location
    )?;
    if !item.specs.is_empty() {
        writeln!(out, "             {}", item.specs.join(", ").dimmed())?;
    }
    Ok(())
}

/// Apply `filters` to `view` and print the visible items of its class.
pub fn write_list(
    out: &mut impl Write,
    view: &mut CatalogueView,
    filters: &ListFilters,
) -> anyhow::Result<()> {
    view.set_search_text(filters.search.as_str());
    view.set_rarity_filter_str(&filters.rarity)?;
    view.set_spec_filter(Some(filters.spec.as_str()));

    let class = view.current_class();
    let items = view.visible_items();
    writeln!(
        out,
        "{} ({} of {} items)",
        class.name.bold(),
        items.len(),
        class.items.len()
    )?;
    if items.is_empty() {
        writeln!(out, "  {}", "no items match the filters".dimmed())?;
    }
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

/// Print every class with its specs.
pub fn write_classes(out: &mut impl Write, catalogue: &Catalogue) -> io::Result<()> {
    for class in &catalogue.classes {
        let specs: Vec<&str> = class.spec_names().collect();
        writeln!(
            out,
            "{:<14} {:>3} items  {}",
            class.name.bold(),
            class.items.len(),
            specs.join(", ").dimmed()
        )?;
    }
    Ok(())
}

/// Print global and per-class location coverage.
pub fn write_stats(out: &mut impl Write, catalogue: &Catalogue) -> io::Result<()> {
    writeln!(out, "Known locations: {}", coverage(catalogue).to_string().bold())?;
    for (name, cov) in coverage_by_class(catalogue) {
        let line = format!("  {name:<14} {cov}");
        if cov.is_complete() {
            writeln!(out, "{}", line.green())?;
        } else if cov.missing() > 0 {
            let missing = format!("{} unknown", cov.missing());
            writeln!(out, "{line}  {}", missing.yellow())?;
        } else {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use re_catalogue::ClassEntry;

    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>)) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    fn bundled_view(class: &str) -> CatalogueView {
        CatalogueView::new(Arc::new(Catalogue::bundled().unwrap()), class).unwrap()
    }

    #[test]
    fn test_list_applies_filters() {
        let mut view = bundled_view("Paladin");
        let filters = ListFilters {
            search: "ASH".into(),
            rarity: "any".into(),
            spec: "any".into(),
        };
        let text = output(|buf| write_list(buf, &mut view, &filters).unwrap());
        assert!(text.starts_with("Paladin (1 of 6 items)"));
        assert!(text.contains("Ashbringer"));
        assert!(text.contains("Naxxramas"));
        assert!(!text.contains("Seal of Light"));
    }

    #[test]
    fn test_list_unknown_location() {
        let mut view = bundled_view("Paladin");
        let filters = ListFilters {
            search: String::new(),
            rarity: "legendary".into(),
            spec: "Holy".into(),
        };
        let text = output(|buf| write_list(buf, &mut view, &filters).unwrap());
        assert!(text.contains("Seal of Light"));
        assert!(text.contains("Unknown"));
    }

    #[test]
    fn test_list_rejects_bad_rarity() {
        let mut view = bundled_view("Paladin");
        let filters = ListFilters {
            rarity: "mythic".into(),
            ..Default::default()
        };
        let mut buf = Vec::new();
        assert!(write_list(&mut buf, &mut view, &filters).is_err());
    }

    #[test]
    fn test_stats_empty_catalogue() {
        let text = output(|buf| write_stats(buf, &Catalogue::default()).unwrap());
        assert_eq!(text, "Known locations: 0/0 (n/a)\n");
    }

    #[test]
    fn test_stats_marks_unknown_locations() {
        let catalogue = Catalogue::bundled().unwrap();
        let text = output(|buf| write_stats(buf, &catalogue).unwrap());
        assert_eq!(text.lines().count(), catalogue.classes.len() + 1);
        let paladin = text.lines().find(|l| l.contains("Paladin")).unwrap();
        assert!(paladin.ends_with("2 unknown"));
    }

    #[test]
    fn test_stats_empty_class_is_not_complete() {
        let catalogue = Catalogue {
            classes: vec![ClassEntry {
                name: "Hunter".into(),
                icon: String::new(),
                specs: Vec::new(),
                items: Vec::new(),
            }],
        };
        let (_, cov) = coverage_by_class(&catalogue)[0];
        assert!(!cov.is_complete());
        let text = output(|buf| write_stats(buf, &catalogue).unwrap());
        assert_eq!(
            text,
            format!("Known locations: 0/0 (n/a)\n  {:<14} 0/0 (n/a)\n", "Hunter")
        );
    }

    #[test]
    fn test_classes_lists_specs() {
        let catalogue = Catalogue::bundled().unwrap();
        let text = output(|buf| write_classes(buf, &catalogue).unwrap());
        assert_eq!(text.lines().count(), catalogue.classes.len());
        assert!(text.contains("Holy, Protection, Retribution"));
    }
}
