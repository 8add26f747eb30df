//! CLI commands for butterfly-trip

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::summary::{RouteSummary, DEFAULT_SPEED_KMPH};
use crate::core::{optimize, to_gpx, OptimizeRequest, OptimizeResponse};
use crate::logging::LogFormat;
use crate::server::{ServerConfig, DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_STOPS, DEFAULT_PORT};

#[derive(Parser, Debug)]
#[command(name = "butterfly-trip")]
#[command(about = "Order stops into a closed nearest-neighbor tour", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server and web page
    Serve(ServeArgs),

    /// Order the stops of a JSON request ({"stops": [...]}) and print the result
    Solve {
        /// Request file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

/// What `solve` prints
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `{"optimized_route": [...], "total_distance": ...}`
    #[default]
    Json,
    /// GPX 1.1 track of the ordered stops
    Gpx,
    /// Approximate distance in km and travel time at 40 km/h
    Summary,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory with the web page (index.html, script.js, ...)
    #[arg(long, default_value = "static")]
    pub static_dir: PathBuf,

    /// Do not serve static files, API only
    #[arg(long, conflicts_with = "static_dir")]
    pub no_static: bool,

    /// Largest accepted request body in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Most stops accepted in one request
    #[arg(long, default_value_t = DEFAULT_MAX_STOPS)]
    pub max_stops: usize,
}

impl ServeArgs {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            static_dir: (!self.no_static).then(|| self.static_dir.clone()),
            max_body_bytes: self.max_body_bytes,
            max_stops: self.max_stops,
        }
    }
}

/// Read a request from a file or stdin ("-")
fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(input)?)
    }
}

/// Decode a request body and order its stops
pub fn solve_bytes(bytes: &[u8]) -> Result<OptimizeResponse> {
    let request = OptimizeRequest::from_slice(bytes)?;
    let stop_count = request.stops.len();
    let response = optimize(request)?;
    tracing::info!(
        stops = stop_count,
        total_distance = response.total_distance,
        "route optimized"
    );
    Ok(response)
}

/// Render a solved request in the chosen format
pub fn render(response: &OptimizeResponse, format: OutputFormat, pretty: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(response)?,
        OutputFormat::Json => serde_json::to_string(response)?,
        OutputFormat::Gpx => to_gpx(&response.optimized_route),
        OutputFormat::Summary => {
            RouteSummary::from_degrees(response.total_distance, DEFAULT_SPEED_KMPH).to_string()
        }
    };
    Ok(out)
}

/// `solve` subcommand: read, order, write to stdout
pub fn run_solve(input: &str, format: OutputFormat, pretty: bool) -> Result<()> {
    let bytes = read_input(input)?;
    let response = solve_bytes(&bytes)?;
    let out = render(&response, format, pretty)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", out.trim_end())?;
    stdout.flush()?;
    Ok(())
}
