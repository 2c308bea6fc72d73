use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use pizzeria::render::{new_renderer, PageFormat};
use pizzeria::{session, Action, Catalog, Storefront, StorefrontConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pizzeria", version, about = "Pizzeria storefront: menu, cart, and page rendering")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone)]
struct Sources {
    /// JSON configuration overriding the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON catalog replacing the built-in menu
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List featured pizzas and the menu
    Menu {
        #[command(flatten)]
        sources: Sources,
    },
    /// Apply actions to a fresh storefront and write the page
    Render {
        #[command(flatten)]
        sources: Sources,
        /// Action to apply, in order (e.g. "add Wagyu Wonder"); repeatable
        #[arg(long = "action", short = 'a')]
        actions: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Read actions from stdin, one per line, and answer with JSON state reports
    Session {
        #[command(flatten)]
        sources: Sources,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Text,
}

impl From<Format> for PageFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Html => PageFormat::Html,
            Format::Text => PageFormat::Text,
        }
    }
}

fn load_catalog(sources: &Sources) -> anyhow::Result<Catalog> {
    match &sources.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

fn open_storefront(sources: &Sources) -> anyhow::Result<Storefront> {
    let config = match &sources.config {
        Some(path) => StorefrontConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StorefrontConfig::default(),
    };
    Ok(Storefront::new(config, load_catalog(sources)?)?)
}

fn print_menu(store: &Storefront) {
    let currency = &store.config().currency_symbol;
    let catalog = store.catalog();
    println!("Featured");
    for item in catalog.featured() {
        println!("  {:<24} {}{:>8}  {}", item.name, currency, item.price.to_string(), item.description);
    }
    for category in catalog.menu() {
        println!("\n{}", category.category);
        for item in &category.items {
            println!("  {:<24} {}{:>8}  {}", item.name, currency, item.price.to_string(), item.description);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Menu { sources } => {
            print_menu(&open_storefront(&sources)?);
        }
        Command::Render {
            sources,
            actions,
            format,
            out,
        } => {
            let mut store = open_storefront(&sources)?;
            for raw in &actions {
                let action: Action = raw.parse().with_context(|| format!("parsing action '{}'", raw))?;
                store
                    .dispatch(action)
                    .with_context(|| format!("applying action '{}'", raw))?;
            }

            let page = new_renderer(format.into()).render(&store)?;
            log::info!("rendered {} bytes, sha256 {}", page.content.len(), page.digest);
            match out {
                Some(path) => std::fs::write(&path, &page.content)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{}", page.content),
            }
        }
        Command::Session { sources } => {
            let mut store = open_storefront(&sources)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            session::run(&mut store, stdin.lock(), stdout.lock())?;
        }
    }
    Ok(())
}
