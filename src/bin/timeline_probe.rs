use art_timeline::api::{TimelineEngine, TimelineEngineConfig, ViewCommand};
use art_timeline::core::JsonNodeSource;
use art_timeline::detail::NullDetailPresenter;
use art_timeline::storage::InMemorySessionStore;
use std::fs;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    nodes: PathBuf,
    config: Option<PathBuf>,
    query: Option<String>,
    advance_ms: u64,
    output: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let _ = art_timeline::telemetry::init_default_tracing();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            TimelineEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => TimelineEngineConfig::default(),
    };
    let raw = fs::read_to_string(&args.nodes)
        .map_err(|err| format!("failed to read `{}`: {err}", args.nodes.display()))?;

    let mut engine = TimelineEngine::new(
        NullDetailPresenter::default(),
        InMemorySessionStore::new(),
        config,
    )
    .map_err(|err| err.to_string())?;
    engine
        .load_nodes(&mut JsonNodeSource::new(raw))
        .map_err(|err| err.to_string())?;
    engine.mount();
    if let Some(query) = &args.query {
        let outcome = engine.apply_query(query);
        eprintln!("query `{query}`: {outcome:?}");
    }
    for command in engine.advance_time(args.advance_ms) {
        report_command(&command);
    }

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn report_command(command: &ViewCommand) {
    match command {
        ViewCommand::ScrollNodeIntoView { node_id, behavior } => {
            eprintln!("scroll `{node_id}` into view ({behavior:?})");
        }
        ViewCommand::HighlightExpired { node_id } => {
            eprintln!("highlight on `{node_id}` expired");
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    const USAGE: &str = "usage: timeline_probe --nodes <path> [--config <path>] [--query <query>] [--advance-ms <ms>] [--output <path>]";

    let mut args = std::env::args().skip(1);
    let mut nodes = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut query = None::<String>;
    let mut advance_ms = 0_u64;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--nodes" => nodes = Some(PathBuf::from(value()?)),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--query" => query = Some(value()?),
            "--advance-ms" => {
                let raw = value()?;
                advance_ms = raw
                    .parse()
                    .map_err(|err| format!("invalid --advance-ms `{raw}`: {err}"))?;
            }
            "--output" => output = Some(PathBuf::from(value()?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown flag `{other}`\n{USAGE}")),
        }
    }

    let nodes = nodes.ok_or_else(|| format!("missing --nodes\n{USAGE}"))?;
    Ok(CliArgs {
        nodes,
        config,
        query,
        advance_ms,
        output,
    })
}
