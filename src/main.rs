use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use onelink_search::scoring::{score_fields, ScoringFields};
use onelink_search::{
    Catalog, CatalogStatus, NewService, RedirectPolicy, SearchConfig, ServicePatch, ServiceRecord, ServiceStore,
    Session, StoredService,
};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, StoreAction};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("ONELINK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => SearchConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            catalog,
            query,
            region,
            filters,
            limit,
            json,
        } => run_search(config, &catalog, &query, &region, &filters, limit, json),
        Commands::Suggest { catalog, query, limit } => run_suggest(config, &catalog, &query, limit),
        Commands::Inspect { catalog } => run_inspect(&catalog),
        Commands::Redirect { url } => run_redirect(&config, &url),
        Commands::Store { file, action } => run_store(&ServiceStore::open(file), action),
    }
}

/// Load a catalog into a fresh session, failing loudly if it is unavailable.
fn open_session(config: SearchConfig, path: &Path) -> Result<Session> {
    let mut session = Session::new(config);
    session.load_path(path);
    if let CatalogStatus::Failed(reason) = session.status() {
        bail!("catalog unavailable: {}", reason);
    }
    Ok(session)
}

fn run_search(
    config: SearchConfig,
    path: &Path,
    query: &str,
    region: &str,
    filters: &[String],
    limit: usize,
    json: bool,
) -> Result<()> {
    let max_distance = config.max_edit_distance;
    let mut session = open_session(config, path)?;
    session.set_region(region);
    for key in filters {
        session.toggle_category_filter(key);
    }
    session.set_query(query);

    let mut outcome = session.outcome();
    let tokens = session.state().tokens();

    if json {
        outcome.results.truncate(limit);
        let out = serde_json::to_string_pretty(&outcome).context("serializing results")?;
        println!("{}", out);
        return Ok(());
    }

    double_header();
    title(&format!("{} service(s) for \"{}\"", outcome.count(), query));
    double_footer();

    let label = format!("RESULTS · region {}", session.state().region);
    section_top(&label);
    if outcome.results.is_empty() {
        row(&muted(" no matches"));
    }
    for record in outcome.results.iter().take(limit) {
        let score = score_fields(&ScoringFields::from_record(record), &tokens, max_distance);
        print_result_row(record, score);
    }
    if outcome.count() > limit {
        row(&muted(&format!(" … {} more", outcome.count() - limit)));
    }

    if !outcome.did_you_mean.is_empty() {
        section_mid("DID YOU MEAN");
        for record in &outcome.did_you_mean {
            row(&format!(" {} {}", region_badge(record.region), truncate(&record.name, 60)));
        }
    }
    section_bot();
    Ok(())
}

fn print_result_row(record: &ServiceRecord, score: u32) {
    let name = pad_right(&truncate(&record.name, 34), 34);
    let link = if record.is_actionable() {
        truncate(record.url_str(), 22)
    } else {
        muted("no link")
    };
    row(&format!(
        " {} {} {} {} {}",
        score_value(score),
        region_badge(record.region),
        name,
        status_badge(record.status),
        link
    ));
}

fn run_suggest(mut config: SearchConfig, path: &Path, query: &str, limit: Option<usize>) -> Result<()> {
    if let Some(limit) = limit {
        config.autocomplete_limit = limit;
    }
    let mut session = open_session(config, path)?;
    session.set_query(query);

    for record in session.suggestions() {
        println!("{}\t{}", record.id, record.name);
    }
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))?;
    let stats = catalog.stats();

    double_header();
    title(&format!("{}", path.display()));
    double_footer();

    section_top("OVERVIEW");
    row(&format!(" services    {}", stats.total));
    row(&format!(" with links  {}", stats.actionable));
    section_mid("REGIONS");
    for (region, count) in &stats.by_region {
        row(&format!(" {} {:>5}  {}", region_badge(*region), count, muted(region.label())));
    }
    section_mid("CATEGORIES");
    for (category, count) in &stats.by_category {
        row(&format!(" {} {:>5}", pad_right(&truncate(category, 30), 30), count));
    }
    section_mid("STATUS");
    for (status, count) in &stats.by_status {
        row(&format!(" {} {:>5}", pad_right(&status_badge(*status), 14), count));
    }
    section_bot();
    Ok(())
}

fn run_redirect(config: &SearchConfig, url: &str) -> Result<()> {
    let policy = RedirectPolicy::new(&config.allowed_redirect_domains);
    let target = policy.check(url)?;
    println!("✅ {}", target);
    Ok(())
}

fn run_store(store: &ServiceStore, action: StoreAction) -> Result<()> {
    match action {
        StoreAction::List { json } => {
            let services = store.list()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&services)?);
                return Ok(());
            }
            section_top(&format!("STORE · {}", store.path().display()));
            if services.is_empty() {
                row(&muted(" empty"));
            }
            for service in &services {
                print_stored_row(service);
            }
            section_bot();
        }
        StoreAction::Add {
            id,
            name_ar,
            name_en,
            url,
            category,
            icon,
            order,
            disabled,
        } => {
            let created = store.create(NewService {
                id,
                name_ar,
                name_en,
                category,
                url,
                icon,
                enabled: Some(!disabled),
                order,
            })?;
            println!("✅ added {}", created.id);
        }
        StoreAction::Update {
            id,
            name_ar,
            name_en,
            url,
            category,
            icon,
            order,
        } => {
            let updated = store.update(
                &id,
                ServicePatch {
                    name_ar,
                    name_en,
                    category,
                    url,
                    icon,
                    enabled: None,
                    order,
                },
            )?;
            println!("✅ updated {}", updated.id);
        }
        StoreAction::Toggle { id } => {
            let service = store.toggle(&id)?;
            let state = if service.enabled { "enabled" } else { "disabled" };
            println!("✅ {} {}", service.id, state);
        }
        StoreAction::Remove { id } => {
            let removed = store.delete(&id)?;
            println!("✅ removed {}", removed.id);
        }
    }
    Ok(())
}

fn print_stored_row(service: &StoredService) {
    let marker = if service.enabled {
        themed(GREEN, &[], "●")
    } else {
        themed(GRAY, &[], "○")
    };
    row(&format!(
        " {:>4} {} {} {}",
        service.order,
        marker,
        pad_right(&truncate(&service.id, 20), 20),
        truncate(&service.name_ar, 40)
    ));
}
