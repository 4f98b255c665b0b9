use clap::{Parser, Subcommand, ValueEnum};
use portal_nav::config::{self, NavConfig};
use portal_nav::pagination::Pagination;
use portal_nav::{output, render};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing_subscriber` syntax).
const LOG_ENV: &str = "PORTAL_NAV_LOG";

#[derive(Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "portal-nav")]
#[command(about = "Pager ranges and breadcrumb trails for portal navigation")]
#[command(long_about = "\
Pager ranges and breadcrumb trails for portal navigation

Labels for dynamic routes and the acronym list come from portal-nav.toml:

  [pagination]
  page_size = 10
  sibling_count = 1

  [title_case]
  acronyms = [\"FAQ\", \"HSA\", \"FSA\", \"ID\", \"SSN\"]

  [routes]
  \"/members/[memberId]\" = \"Member Detail\"

Run 'portal-nav gen-config' to print a documented config file.
Set PORTAL_NAV_LOG=debug to trace label decisions.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Log decisions to stderr (same as PORTAL_NAV_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the page numbers a pager shows
    Paginate {
        /// Total number of items
        #[arg(long)]
        total: usize,
        /// Items per page (default from config)
        #[arg(long)]
        page_size: Option<usize>,
        /// Current page, 1-based
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Pages shown on each side of the current page (default from config)
        #[arg(long)]
        siblings: Option<usize>,
        /// Base link for page hrefs in HTML output
        #[arg(long, default_value = "")]
        href: String,
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// Build the breadcrumb trail for a path
    Breadcrumbs {
        /// Path, optionally with a query string
        path: String,
        /// Extra route label, e.g. "/members/[memberId]=Member Detail"
        #[arg(long = "label", value_parser = parse_label)]
        labels: Vec<(String, String)>,
        /// Label for a leading home link in HTML output
        #[arg(long)]
        home: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: Format,
    },
    /// Validate the config file and show the resolved route table
    Check,
    /// Print a stock portal-nav.toml with all options documented
    GenConfig,
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    let (pattern, label) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PATTERN=LABEL, got {raw:?}"))?;
    Ok((pattern.trim().to_string(), label.trim().to_string()))
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Paginate {
            total,
            page_size,
            page,
            siblings,
            href,
            format,
        } => {
            let nav = config::load_config(&cli.config)?;
            let pagination = Pagination::new(total, page_size.unwrap_or(nav.pagination.page_size))?
                .with_page(page)
                .with_siblings(siblings.unwrap_or(nav.pagination.sibling_count));
            match format {
                Format::Text => output::print_pagination(&pagination)?,
                Format::Json => println!("{}", serde_json::to_string(&pagination.range()?)?),
                Format::Html => println!(
                    "{}",
                    render::render_pager(&pagination, &href)?.into_string()
                ),
            }
        }
        Command::Breadcrumbs {
            path,
            labels,
            home,
            format,
        } => {
            let nav = config::load_config(&cli.config)?;
            let mut ctx = nav.context()?;
            for (pattern, label) in &labels {
                ctx.routes.insert(pattern, label.as_str())?;
            }
            let trail = ctx.breadcrumbs(&path);
            match format {
                Format::Text => output::print_breadcrumbs(&trail),
                Format::Json => println!("{}", serde_json::to_string_pretty(&trail)?),
                Format::Html => println!(
                    "{}",
                    render::render_breadcrumbs(&trail, home.as_deref()).into_string()
                ),
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            let nav: NavConfig = config::load_config(&cli.config)?;
            println!(
                "Pagination: {} per page, {} sibling(s)",
                nav.pagination.page_size, nav.pagination.sibling_count
            );
            println!("Acronyms: {}", nav.title_case.acronyms.join(", "));
            output::print_route_table(&nav.route_labels()?);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
