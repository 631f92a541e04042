use clap::{Args as ClapArgs, Parser, Subcommand};
use doclist_api::{RestApi, ServerConfig};
use doclist_browser::{Controller, Event, TextPresenter};
use doclist_core::{FilterCriteria, RecordId};
use doclist_storage::{DataStore, HttpSource};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Doctor directory: serve the record set or browse it
#[derive(Parser, Debug)]
#[command(name = "doclist")]
#[command(about = "Doctor directory with similar-doctor recommendations", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve /api/doctors from a JSON file
    Serve {
        /// JSON array of doctor records
        #[arg(short, long, default_value = "data/doctors.json")]
        data_file: PathBuf,

        /// Directory with index.html and browser assets
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// HTTP API port
        #[arg(long, default_value_t = 5000)]
        http_port: u16,
    },
    /// Fetch the directory and print the list, optionally with one detail view
    Browse(BrowseArgs),
}

#[derive(ClapArgs, Debug)]
struct BrowseArgs {
    /// Server base URL
    #[arg(long, default_value = "http://localhost:5000")]
    url: String,

    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    name: String,

    #[arg(long)]
    specialty: Option<String>,

    #[arg(long)]
    area: Option<String>,

    /// Minimum rating; unparseable input counts as 0
    #[arg(long, default_value = "")]
    min_rating: String,

    /// Show the detail view of this doctor id
    #[arg(long)]
    show: Option<String>,

    /// Print the available specialties and areas
    #[arg(long)]
    list_filters: bool,
}

impl BrowseArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name_query: self.name.clone(),
            specialty: self.specialty.clone(),
            area: self.area.clone(),
            min_rating: FilterCriteria::parse_min_rating(&self.min_rating),
        }
    }

    fn has_filters(&self) -> bool {
        self.criteria() != FilterCriteria::default()
    }
}

fn parse_level(level: &str) -> Level {
    match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

async fn browse(args: BrowseArgs) -> anyhow::Result<()> {
    let store = Arc::new(DataStore::new());
    let presenter = TextPresenter::new(std::io::stdout()).with_filter_options(args.list_filters);
    let mut controller = Controller::new(store.clone(), HttpSource::new(&args.url), presenter);

    controller.start().await?;
    if controller.session().load_failed() {
        anyhow::bail!("could not load doctors from {}", args.url);
    }
    if store.is_empty() {
        return Ok(());
    }

    if args.has_filters() {
        println!();
        controller.dispatch(Event::FilterSubmit(args.criteria())).await?;
    }

    if let Some(id) = &args.show {
        controller.dispatch(Event::ItemSelected(RecordId::parse(id))).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // browse output goes to stdout, keep logs on stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&args.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Commands::Serve { data_file, static_dir, http_port } => {
            info!("Starting DocList v{}", env!("CARGO_PKG_VERSION"));
            info!("Data file: {:?}", data_file);
            info!("HTTP API: http://localhost:{}/", http_port);

            let config = ServerConfig {
                data_file,
                static_dir,
                port: http_port,
            };

            // actix runs on its own system thread
            let http_handle = std::thread::spawn(move || {
                let sys = actix_web::rt::System::new();
                sys.block_on(RestApi::start(config))
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
                joined = tokio::task::spawn_blocking(move || http_handle.join()) => {
                    if let Ok(Ok(Err(e))) = joined {
                        return Err(e.into());
                    }
                    info!("HTTP server stopped");
                }
            }
            info!("Shutting down...");
        }
        Commands::Browse(browse_args) => browse(browse_args).await?,
    }

    Ok(())
}
