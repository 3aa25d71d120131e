use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use ipre::config::Config;
use ipre::config::SAMPLE;
use ipre::render::Format;
use ipre::render::Render;
use tracing::debug;

use crate::args::GlobalArgs;
use crate::args::QueryArgs;

/// Get a domain's IPs from multiple name servers and show where their
/// answers differ.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Domain to query
    domain: Option<String>,

    /// Use <FILE> instead of the default configuration file
    #[clap(short = 'l', long = "load", value_name = "FILE")]
    load: Option<Utf8PathBuf>,

    /// Output format: std (table), json, or ip (addresses only)
    #[clap(short, long, default_value_t = Format::Std)]
    format: Format,

    /// Print a sample configuration to stdout
    #[clap(short, long)]
    sample: bool,

    /// Print the path and content of the configuration file
    #[clap(short, long)]
    config: bool,

    #[clap(flatten)]
    query_args: QueryArgs,

    #[clap(flatten)]
    global_args: GlobalArgs,
}

pub async fn run() -> Result<()> {
    let program = program_name();
    let matches = Cli::command()
        .after_help(after_help(&program))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    cli.global_args.init_tracing()?;

    cli.run(&program).await
}

impl Cli {
    async fn run(&self, program: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();

        if self.sample {
            writeln!(stdout, "{SAMPLE}")?;
            return Ok(());
        }

        let config = match &self.load {
            Some(path) => Config::load(path)?,
            None => Config::discover()?,
        };
        debug!(path = %config.path, servers = config.servers.len(), "loaded config");

        if self.config {
            let json = config.to_json().context("error occurred when generating json")?;
            writeln!(stdout, "{}", config.path)?;
            writeln!(stdout, "{json}")?;
            return Ok(());
        }

        let Some(domain) = &self.domain else {
            bail!("Please input a domain for querying, use '{program} -h' for help");
        };

        let results = self.query_args.engine().query(&config.servers, domain).await;
        self.format.renderer().render(&results, &mut stdout)?;
        stdout.flush()?;

        Ok(())
    }
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|path| path.file_name()?.to_str().map(str::to_owned))
        .unwrap_or_else(|| "ipre".to_owned())
}

fn after_help(program: &str) -> String {
    format!(
        "\
Configuration file:
    A JSON array of {{\"name\", \"address\"}} objects; use '-s' to see a sample.
    Without '-l <FILE>' the first existing file of these is used:
    1. $XDG_CONFIG_HOME/ipre.conf (or ~/.config/ipre.conf)
    2. ~/.ipre
    3. /etc/ipre.conf

Examples:
    {program} www.example.com
    {program} -l config.json -f json --tcp www.example.com
    {program} -l config.json -c
    {program} -s > ~/.ipre && {program} www.example.com"
    )
}
