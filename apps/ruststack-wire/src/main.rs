//! RustStack wire - print the HTTP request an AWS operation sends.
//!
//! Reads a JSON parameter map keyed by API member names, validates it
//! against the operation's input shape, and prints the request line,
//! headers, and body. Nothing is sent.
//!
//! # Usage
//!
//! ```text
//! echo '{"Bucket":"b","Key":"k","Body":"hello"}' | ruststack-wire s3 PutObject
//! ruststack-wire sns Publish --params publish.json --region eu-west-1
//! ruststack-wire athena            # list operations
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` / `AWS_DEFAULT_REGION` | `us-east-1` | Region, unless `--region` is given |
//! | `AWS_ENDPOINT_URL[_<SERVICE>]` | *(unset)* | Endpoint overrides, unless `--endpoint` is given |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod dispatch;

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bytes::Bytes;
use clap::Parser;
use ruststack_sdk_core::ClientConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::dispatch::ServiceName;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "ruststack-wire", version, about)]
struct Cli {
    /// Target service.
    #[arg(value_enum)]
    service: ServiceName,

    /// Operation name, e.g. `PutObject`. Omit to list the operations.
    operation: Option<String>,

    /// JSON parameter file, `-` for stdin. Defaults to `{}`.
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Region override.
    #[arg(long)]
    region: Option<String>,

    /// Endpoint override for every service.
    #[arg(long)]
    endpoint: Option<String>,

    /// Log level filter, used when `RUST_LOG` is unset.
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(region) = &self.region {
            config.region.clone_from(region);
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
            config.service_endpoints.clear();
        }
        config
    }

    fn read_params(&self) -> Result<serde_json::Value> {
        let raw = match &self.params {
            None => return Ok(serde_json::Value::Object(serde_json::Map::new())),
            Some(path) if path.as_os_str() == "-" => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("failed to read parameters from stdin")?;
                raw
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
        };
        serde_json::from_str(&raw).context("parameters are not valid JSON")
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    Ok(())
}

/// Write the request as it would appear on the wire.
///
/// Bodies that are not UTF-8 are summarized by size.
fn render(request: &http::Request<Bytes>, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{} {} {:?}",
        request.method(),
        request.uri(),
        request.version()
    )?;
    for (name, value) in request.headers() {
        match value.to_str() {
            Ok(value) => writeln!(out, "{name}: {value}")?,
            Err(_) => writeln!(out, "{name}: <{} opaque bytes>", value.len())?,
        }
    }
    writeln!(out)?;
    let body = request.body();
    match std::str::from_utf8(body) {
        Ok(text) => out.write_all(text.as_bytes())?,
        Err(_) => write!(out, "<{} bytes of binary data>", body.len())?,
    }
    if !body.is_empty() {
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let mut stdout = io::stdout().lock();
    let Some(operation) = cli.operation.as_deref() else {
        for name in cli.service.operations() {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    };

    let config = cli.client_config();
    debug!(region = %config.region, endpoint = ?config.endpoint, "resolved client config");

    let params = cli.read_params()?;
    let request = cli
        .service
        .build_request(operation, params, &config)
        .with_context(|| format!("cannot build {operation} request"))?;
    render(&request, &mut stdout)?;
    Ok(())
}
