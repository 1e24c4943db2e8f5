use clap::{Parser, Subcommand};
use std::net::IpAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use clockd::api;
use clockd::clock::{Clock, SystemClock};
use clockd::config::{ServerConfig, DEFAULT_PORT};
use clockd::server;

#[derive(Parser)]
#[command(name = "clockd")]
#[command(about = "Current server time over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// TCP port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Address to bind the listener to
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: IpAddr,
    },
    /// Print the current time in the server's wire format and exit
    Now,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clockd API",
        description = "Current server time over HTTP",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_time),
    components(schemas(api::TimeResponse)),
    tags(
        (name = "Time", description = "Current server time")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port, bind }) => run_server(ServerConfig::new(bind, port)).await,
        Some(Commands::Now) => {
            run_now_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Print the timestamp the server would return, without starting it
fn run_now_command() {
    let response = api::TimeResponse::from_instant(SystemClock.now());
    println!("{}", response.current_time);
}

/// Display status and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Clockd v{VERSION} - current server time over HTTP\n");

    println!("Endpoints:");
    println!("  GET /time      {{\"currentTime\": \"<UTC ISO-8601>\"}}");
    println!("  GET /health    Liveness probe");

    println!("\nCommands:");
    println!("  clockd serve   Start the HTTP server (default port {DEFAULT_PORT})");
    println!("  clockd now     Print the current time and exit");
    println!("\nRun 'clockd --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clockd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = server::create_app_state();

    // Build router: shared API routes plus production-only OpenAPI docs
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    server::serve(&config, app).await?;

    Ok(())
}
