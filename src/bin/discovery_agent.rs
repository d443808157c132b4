//! discovery-agent CLI — run the discovery or threat-model agent against
//! application documentation.
//!
//! Usage:
//!   discovery-agent [--agent discovery|threat-model] [--docs-url <url>]
//!                   [--model <name>] [--app-name <name>] [--prompt <text>]
//!
//! Environment defaults: DISCOVERY_AGENT_TYPE, DISCOVERY_DOCS_URL,
//! OPENAI_MODEL, OPENAI_API_KEY (required), OPENAI_BASE_URL.

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};

use discovery_agent::config::DEFAULT_MODEL;
use discovery_agent::{DiscoveryAgent, HttpTransport, ThreatModelAgent};

struct Args {
    agent: String,
    docs_url: Option<String>,
    model: String,
    app_name: Option<String>,
    prompt: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    }
}

fn run() -> Result<String> {
    let args = parse_args(env::args().skip(1))?;

    let docs_url = args
        .docs_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("documentation URL missing; set --docs-url or DISCOVERY_DOCS_URL"))?
        .to_string();
    url::Url::parse(&docs_url).with_context(|| format!("invalid documentation URL: {docs_url}"))?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(async {
        let transport = Arc::new(HttpTransport::from_env()?);

        let output = if args.agent == "threat-model" {
            let mut agent = ThreatModelAgent::new(&docs_url, &args.model, transport);
            match args.prompt.as_deref() {
                Some(prompt) => agent.ask(prompt).await?,
                None => agent.model_threats(args.app_name.as_deref()).await?,
            }
        } else {
            let mut agent = DiscoveryAgent::new(&docs_url, &args.model, transport);
            match args.prompt.as_deref() {
                Some(prompt) => agent.ask(prompt).await?,
                None => agent.discover_ttps(args.app_name.as_deref()).await?,
            }
        };
        Ok(output)
    })
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        agent: env::var("DISCOVERY_AGENT_TYPE").unwrap_or_else(|_| "discovery".into()),
        docs_url: env::var("DISCOVERY_DOCS_URL").ok(),
        model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        app_name: None,
        prompt: None,
    };

    while let Some(flag) = argv.next() {
        match flag.as_str() {
            "--agent" => args.agent = expect_value(&flag, argv.next())?,
            "--docs-url" => args.docs_url = Some(expect_value(&flag, argv.next())?),
            "--model" => args.model = expect_value(&flag, argv.next())?,
            "--app-name" => args.app_name = Some(expect_value(&flag, argv.next())?),
            "--prompt" => args.prompt = Some(expect_value(&flag, argv.next())?),
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => bail!("unknown argument: {other}"),
        }
    }

    if args.agent != "discovery" && args.agent != "threat-model" {
        bail!("--agent must be 'discovery' or 'threat-model', got '{}'", args.agent);
    }
    Ok(args)
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| anyhow!("{flag} requires a value"))
}

fn print_usage() {
    println!(
        r#"discovery-agent — STRIDE threat modeling over application documentation

USAGE:
    discovery-agent [OPTIONS]

OPTIONS:
    --agent <type>       discovery (STRIDE->MITRE TTP JSON) or threat-model
                         (structured STRIDE threat statements)
                         [env: DISCOVERY_AGENT_TYPE] [default: discovery]
    --docs-url <url>     Documentation URL to fetch [env: DISCOVERY_DOCS_URL]
    --model <name>       Model name [env: OPENAI_MODEL] [default: gpt-5.2]
    --app-name <name>    Optional app name to include in analysis context
    --prompt <text>      Custom prompt replacing the built-in default
    -h, --help           Show this help message

ENVIRONMENT:
    OPENAI_API_KEY       Required. API key for the model service.
    OPENAI_BASE_URL      Optional. Override the model service endpoint."#
    );
}
