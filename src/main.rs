#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{Level as TraceLevel, info, warn};
use tracing_subscriber::FmtSubscriber;

use importer_embed::theme::{DocumentStyle, HostColorMode, MemoryThemeStore};
use importer_embed::{
    ColorModeToggle, Embed, EmbedHost, MemoryConfigStore, NormalizedConfiguration, RawParameters,
    ThemeMode, ThemeStore, UpdateReport,
};

#[derive(Parser, Debug)]
#[command(name = "importer-embed", version, about = "Normalize importer embed parameters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a single embed URL or query string
    Normalize {
        /// Full embed URL, bare query string, or JSON object with --json
        input: String,
        #[command(flatten)]
        host: RunArgs,
    },
    /// Feed one URL or query string per stdin line to a single mounted embed
    Replay {
        #[command(flatten)]
        host: RunArgs,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Start the host color mode in dark mode
    #[arg(long)]
    host_dark: bool,
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
    /// Read each input as a JSON object keyed by parameter name
    #[arg(long)]
    json: bool,
}

fn read_params(input: &str, args: &RunArgs) -> Result<RawParameters> {
    if args.json {
        RawParameters::from_json(input)
    } else {
        RawParameters::parse(input)
    }
}

/// Host-side state after an update
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a UpdateReport>,
    config: Option<&'a NormalizedConfiguration>,
    theme: ThemeMode,
    host_color_mode: ThemeMode,
    style: &'a DocumentStyle,
}

struct Host {
    config: MemoryConfigStore,
    theme: MemoryThemeStore,
    style: DocumentStyle,
    color_mode: HostColorMode,
}

impl Host {
    fn new(host_dark: bool) -> Self {
        let mode = ThemeMode::from_dark(host_dark);
        Self {
            config: MemoryConfigStore::new(),
            theme: MemoryThemeStore::new(mode),
            style: DocumentStyle::new(),
            color_mode: HostColorMode::new(mode),
        }
    }

    fn update(&mut self, embed: &mut Embed, params: &RawParameters) -> UpdateReport {
        let mut host = EmbedHost {
            config: &mut self.config,
            theme: &mut self.theme,
            style: &mut self.style,
            color_mode: &mut self.color_mode,
        };
        embed.update(params, &mut host)
    }

    fn snapshot<'a>(&'a self, report: Option<&'a UpdateReport>) -> Snapshot<'a> {
        Snapshot {
            report,
            config: self.config.current(),
            theme: self.theme.theme(),
            host_color_mode: self.color_mode.color_mode(),
            style: &self.style,
        }
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    writeln!(out, "{text}").context("Failed to write output")?;
    Ok(())
}

fn normalize(input: &str, args: &RunArgs) -> Result<()> {
    let params = read_params(input, args)?;
    let mut host = Host::new(args.host_dark);
    let mut embed = Embed::new();

    host.update(&mut embed, &params);
    info!(importer_id = %params.importer_id, "Normalized embed parameters");

    write_json(&mut io::stdout().lock(), &host.snapshot(None), args.pretty)
}

fn replay(args: &RunArgs) -> Result<()> {
    let mut host = Host::new(args.host_dark);
    let mut embed = Embed::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let params = match read_params(&line, args) {
            Ok(params) => params,
            Err(e) => {
                warn!(line = index + 1, error = %e, "Skipping unparseable input");
                continue;
            }
        };

        let report = host.update(&mut embed, &params);
        info!(line = index + 1, published = report.published, idle = report.is_idle(), "Processed input");
        write_json(&mut stdout, &host.snapshot(Some(&report)), args.pretty)?;
    }

    embed.unmount();
    Ok(())
}

fn main() -> Result<()> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Normalize { input, host } => normalize(&input, &host),
        Command::Replay { host } => replay(&host),
    }
}
