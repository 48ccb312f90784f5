use std::io::{self, Write};

use clap::ValueEnum;
use platform_i18n::{LanguageSignal, Localizer};
use products_hr::{Employee, ListingPage};

/// Layout for a listing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Aligned columns, one row per employee.
    #[default]
    Table,
    /// One compact card per employee.
    List,
}

impl View {
    fn label_key(self) -> &'static str {
        match self {
            View::Table => "button_view_table",
            View::List => "button_view_list",
        }
    }
}

const COLUMNS: [&str; 9] = [
    "employee_id",
    "employee_firstName",
    "employee_lastName",
    "employee_dateOfEmployment",
    "employee_dateOfBirth",
    "employee_phoneNumber",
    "employee_email",
    "employee_department",
    "employee_position",
];

fn cells<S: LanguageSignal>(employee: &Employee, l10n: &Localizer<S>) -> [String; 9] {
    [
        employee.id.clone(),
        employee.first_name.clone(),
        employee.last_name.clone(),
        employee.date_of_employment.to_string(),
        employee.date_of_birth.to_string(),
        employee.phone_number.clone(),
        employee.email.clone(),
        l10n.t(employee.department.label_key()),
        l10n.t(employee.position.label_key()),
    ]
}

/// One listing page in the chosen layout, followed by the page indicator.
/// A page past the end of a non-empty result only shows the indicator.
pub fn listing<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    page: &ListingPage<'_>,
    term: &str,
    view: View,
) -> io::Result<()> {
    writeln!(out, "{}", l10n.t("page_title_employee_list"))?;
    if page.total_matches == 0 {
        let message = if term.trim().is_empty() {
            l10n.t("no_employees_found")
        } else {
            l10n.translate("no_employees_found_search", &[("term", term.trim())])
        };
        return writeln!(out, "{message}");
    }

    writeln!(out, "[{}]", l10n.t(view.label_key()))?;
    match view {
        View::Table => table(out, l10n, &page.items)?,
        View::List => cards(out, l10n, &page.items)?,
    }

    let current = page.page.to_string();
    let total = page.page_count.to_string();
    writeln!(
        out,
        "{}",
        l10n.translate(
            "pagination_page_of",
            &[("page", current.as_str()), ("total", total.as_str())]
        )
    )
}

fn table<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    items: &[&Employee],
) -> io::Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    let header: Vec<String> = COLUMNS.iter().map(|key| l10n.t(key)).collect();
    let rows: Vec<[String; 9]> = items.iter().map(|e| cells(e, l10n)).collect();
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(out, &rule, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

/// Name and id on the first line, then labelled pairs indented below.
fn cards<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    items: &[&Employee],
) -> io::Result<()> {
    let labels: Vec<String> = COLUMNS.iter().map(|key| l10n.t(key)).collect();
    for employee in items {
        let row = cells(employee, l10n);
        writeln!(out, "{} {} ({}: {})", row[1], row[2], labels[0], row[0])?;
        for (a, b) in [(7, 8), (6, 5), (3, 4)] {
            writeln!(out, "  {}: {}  |  {}: {}", labels[a], row[a], labels[b], row[b])?;
        }
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())
}

/// `label: value` lines for a single record.
pub fn detail<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    employee: &Employee,
) -> io::Result<()> {
    let labels: Vec<String> = COLUMNS.iter().map(|key| l10n.t(key)).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, value) in labels.iter().zip(cells(employee, l10n)) {
        let pad = width - label.chars().count();
        writeln!(out, "{label}:{} {value}", " ".repeat(pad))?;
    }
    Ok(())
}
