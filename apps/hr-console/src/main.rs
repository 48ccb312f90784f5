mod config;
mod render;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use platform_db::KeyValueStore;
use platform_i18n::{Catalog, LanguageSignal, Localizer, StaticSignal};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{
    Department, EmployeeUpdate, ListingQuery, LoadOutcome, NewEmployee, Position, RecordStore,
    validation::{self, FieldError},
};
use tracing::{info, warn};

use crate::{
    config::{AppConfig, parse_page_size},
    render::View,
};

#[derive(Parser, Debug)]
#[command(name = "hr-console", version, about = "Employee records from the command line")]
struct Cli {
    /// Directory holding the backing store.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Display language (overrides HR_LANG).
    #[arg(long, global = true, value_name = "LANG")]
    lang: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show one page of employees, optionally filtered.
    List(ListArgs),
    /// Show a single employee.
    Show { id: String },
    /// Add an employee.
    Add(AddArgs),
    /// Change fields of an existing employee.
    Update(UpdateArgs),
    /// Delete an employee.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Drop all records and restore the seed dataset.
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// List the available display languages.
    Languages,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long, short = 's', default_value = "")]
    search: String,
    #[arg(long, short = 'p', default_value_t = 1)]
    page: usize,
    #[arg(long, value_parser = parse_page_size)]
    page_size: Option<usize>,
    #[arg(long, value_enum, default_value_t = View::Table)]
    view: View,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_employment: NaiveDate,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_birth: NaiveDate,
    #[arg(long)]
    phone_number: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    department: Department,
    #[arg(long)]
    position: Position,
}

impl From<AddArgs> for NewEmployee {
    fn from(args: AddArgs) -> Self {
        NewEmployee {
            first_name: args.first_name,
            last_name: args.last_name,
            date_of_employment: args.date_of_employment,
            date_of_birth: args.date_of_birth,
            phone_number: args.phone_number,
            email: args.email,
            department: args.department,
            position: args.position,
        }
    }
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: String,
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_employment: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    phone_number: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<Department>,
    #[arg(long)]
    position: Option<Position>,
    /// Skip the confirmation prompt.
    #[arg(long)]
    yes: bool,
}

impl UpdateArgs {
    fn into_parts(self) -> (String, EmployeeUpdate, bool) {
        let update = EmployeeUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email: self.email,
            department: self.department,
            position: self.position,
        };
        (self.id, update, self.yes)
    }
}

fn main() -> Result<ExitCode> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_overrides(cli.data_dir, cli.lang);

    let backend = config
        .store_settings()
        .open()
        .with_context(|| format!("failed to open data directory {}", config.data_dir.display()))?;
    let mut store = RecordStore::open(backend).context("failed to load employee store")?;
    if let LoadOutcome::RecoveredFromCorrupt { reason, .. } = store.load_outcome() {
        warn!(%reason, "stored employees were unreadable; seed data restored");
    }

    let signal = config.language.clone().map(StaticSignal::new).unwrap_or_default();
    let l10n = Localizer::new(Arc::new(Catalog::builtin()), signal);
    info!(lang = l10n.current_language(), "console ready");

    let stdout = io::stdout();
    let stdin = io::stdin();
    let ok = run(
        cli.command,
        &mut store,
        &l10n,
        &config,
        &mut stdout.lock(),
        &mut stdin.lock(),
    )?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Executes one command. Returns `false` for a handled failure (unknown id,
/// rejected input, declined confirmation) that should end with a non-zero exit.
fn run<K: KeyValueStore, S: LanguageSignal>(
    command: Command,
    store: &mut RecordStore<K>,
    l10n: &Localizer<S>,
    config: &AppConfig,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> Result<bool> {
    match command {
        Command::List(args) => {
            let mut query = ListingQuery::new(args.page_size.unwrap_or(config.page_size));
            query.set_term(args.search.clone());
            query.set_page(args.page);
            let page = query.run(store.records());
            render::listing(out, l10n, &page, &args.search, args.view)?;
            Ok(true)
        }
        Command::Show { id } => match store.get_by_id(&id) {
            Some(employee) => {
                render::detail(out, l10n, employee)?;
                Ok(true)
            }
            None => not_found(out, l10n, &id),
        },
        Command::Add(args) => {
            let data = NewEmployee::from(args);
            let errors = validation::validate_new(&data);
            if !errors.is_empty() {
                return report_invalid(out, l10n, &errors);
            }
            let employee = store.add(data)?;
            let name = employee.full_name();
            writeln!(
                out,
                "{}",
                l10n.translate("employee_added", &[("name", &name), ("id", &employee.id)])
            )?;
            Ok(true)
        }
        Command::Update(args) => {
            let (id, update, yes) = args.into_parts();
            let errors = validation::validate_update(&update);
            if !errors.is_empty() {
                return report_invalid(out, l10n, &errors);
            }
            if store.get_by_id(&id).is_none() {
                return not_found(out, l10n, &id);
            }
            if !yes && !confirm(out, input, &l10n.t("confirm_update_employee"))? {
                return Ok(false);
            }
            match store.update(&id, update)? {
                Some(employee) => {
                    let name = employee.full_name();
                    writeln!(out, "{}", l10n.translate("employee_updated", &[("name", &name)]))?;
                    Ok(true)
                }
                None => not_found(out, l10n, &id),
            }
        }
        Command::Delete { id, yes } => {
            let Some(name) = store.get_by_id(&id).map(|e| e.full_name()) else {
                return not_found(out, l10n, &id);
            };
            let prompt = l10n.translate("confirm_delete_employee", &[("name", &name)]);
            if !yes && !confirm(out, input, &prompt)? {
                return Ok(false);
            }
            if store.delete(&id)? {
                writeln!(out, "{}", l10n.translate("employee_deleted", &[("name", &name)]))?;
                Ok(true)
            } else {
                writeln!(out, "{}", l10n.translate("error_delete_employee", &[("name", &name)]))?;
                Ok(false)
            }
        }
        Command::Reset { yes } => {
            if !yes && !confirm(out, input, &l10n.t("confirm_reset_store"))? {
                return Ok(false);
            }
            let outcome = store.reset()?;
            let count = outcome.count().to_string();
            writeln!(out, "{}", l10n.translate("store_reset", &[("count", &count)]))?;
            Ok(true)
        }
        Command::Languages => {
            for lang in l10n.supported_languages() {
                let marker = if lang == l10n.current_language() { "*" } else { " " };
                writeln!(out, "{marker} {lang}")?;
            }
            Ok(true)
        }
    }
}

fn not_found<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    id: &str,
) -> Result<bool> {
    writeln!(out, "{}", l10n.translate("error_employee_not_found", &[("id", id)]))?;
    Ok(false)
}

fn report_invalid<S: LanguageSignal>(
    out: &mut impl Write,
    l10n: &Localizer<S>,
    errors: &[FieldError],
) -> Result<bool> {
    for error in errors {
        writeln!(out, "{}", l10n.t(error.message_key))?;
    }
    Ok(false)
}

fn confirm(out: &mut impl Write, input: &mut impl BufRead, prompt: &str) -> Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "e" | "evet"
    ))
}

#[cfg(test)]
mod tests {
    use platform_db::MemoryStore;

    use super::*;

    struct Harness {
        store: RecordStore<MemoryStore>,
        l10n: Localizer,
        config: AppConfig,
    }

    impl Harness {
        fn new(lang: &str) -> Self {
            Self {
                store: RecordStore::open(MemoryStore::new()).unwrap(),
                l10n: Localizer::new(Arc::new(Catalog::builtin()), StaticSignal::new(lang)),
                config: AppConfig::from_lookup(|_| None).unwrap(),
            }
        }

        fn exec(&mut self, args: &[&str], input: &str) -> (bool, String) {
            let argv = std::iter::once("hr-console").chain(args.iter().copied());
            let cli = Cli::try_parse_from(argv).unwrap();
            let mut out = Vec::new();
            let ok = run(
                cli.command,
                &mut self.store,
                &self.l10n,
                &self.config,
                &mut out,
                &mut input.as_bytes(),
            )
            .unwrap();
            (ok, String::from_utf8(out).unwrap())
        }
    }

    #[test]
    fn list_shows_first_page_with_indicator() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["list"], "");
        assert!(ok);
        assert!(out.starts_with("Employee List\n"));
        assert!(out.contains("John"));
        assert!(out.contains("Page 1 of 2"));
        assert!(!out.contains("Michael"));
    }

    #[test]
    fn page_past_the_end_is_not_reported_as_no_employees() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["list", "--page", "3"], "");
        assert!(ok);
        assert!(!out.contains("No employees found"));
        assert!(out.contains("Page 3 of 2"));
        assert!(!out.contains("John"));
    }

    #[test]
    fn list_view_renders_cards() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["list", "--view", "list"], "");
        assert!(ok);
        assert!(out.contains("[List View]"));
        assert!(out.contains("John Doe (ID: 1)"));
        assert!(out.contains("  Department: Tech  |  Position: Senior"));
        assert!(out.contains("Page 1 of 2"));

        let (_, out) = h.exec(&["list"], "");
        assert!(out.contains("[Table View]"));
    }

    #[test]
    fn list_search_and_empty_result_are_localized() {
        let mut h = Harness::new("tr");
        let (_, out) = h.exec(&["list", "--search", "ayşe"], "");
        assert!(out.contains("Kaya"));
        assert!(out.contains("Analitik"));
        assert!(out.contains("Sayfa 1 / 1"));

        let (_, out) = h.exec(&["list", "--search", "XYZ"], "");
        assert!(out.contains("\"XYZ\" ile eşleşen çalışan bulunamadı."));
    }

    #[test]
    fn add_validates_then_stores() {
        let mut h = Harness::new("en");
        let base = [
            "add",
            "--first-name",
            "Test",
            "--last-name",
            "User",
            "--date-of-employment",
            "2024-01-01",
            "--date-of-birth",
            "1995-01-01",
            "--phone-number",
            "123-4567",
            "--department",
            "tech",
            "--position",
            "junior",
            "--email",
        ];
        let mut bad = base.to_vec();
        bad.push("broken");
        let (ok, out) = h.exec(&bad, "");
        assert!(!ok);
        assert_eq!(out.trim(), "Please enter a valid email address.");
        assert_eq!(h.store.len(), 10);

        let mut good = base.to_vec();
        good.push("test.user@example.com");
        let (ok, out) = h.exec(&good, "");
        assert!(ok);
        assert!(out.starts_with("Added Test User with ID "));
        assert_eq!(h.store.len(), 11);
    }

    #[test]
    fn update_asks_for_confirmation() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["update", "1", "--last-name", "Updated"], "n\n");
        assert!(!ok);
        assert!(out.contains("Are you sure you want to update this employee record?"));
        assert_eq!(h.store.get_by_id("1").unwrap().last_name, "Doe");

        let (ok, out) = h.exec(&["update", "1", "--last-name", "Updated"], "y\n");
        assert!(ok);
        assert!(out.contains("Updated John Updated."));
        assert_eq!(h.store.get_by_id("1").unwrap().last_name, "Updated");
    }

    #[test]
    fn delete_confirms_with_name_and_reports_missing_ids() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["delete", "1"], "yes\n");
        assert!(ok);
        assert!(out.contains("Are you sure you want to delete John Doe?"));
        assert!(out.contains("Deleted John Doe."));
        assert!(h.store.get_by_id("1").is_none());

        let (ok, out) = h.exec(&["delete", "1", "--yes"], "");
        assert!(!ok);
        assert_eq!(out.trim(), "No employee with ID 1.");
    }

    #[test]
    fn show_and_languages() {
        let mut h = Harness::new("en");
        let (ok, out) = h.exec(&["show", "2"], "");
        assert!(ok);
        assert!(out.contains("First Name"));
        assert!(out.contains("jane.smith@example.com"));

        let (_, out) = h.exec(&["languages"], "");
        assert_eq!(out, "* en\n  tr\n");
    }

    #[test]
    fn reset_restores_seed() {
        let mut h = Harness::new("en");
        h.exec(&["delete", "1", "--yes"], "");
        let (ok, out) = h.exec(&["reset", "--yes"], "");
        assert!(ok);
        assert_eq!(out.trim(), "Store reset to 10 seed records.");
        assert!(h.store.get_by_id("1").is_some());
    }
}
