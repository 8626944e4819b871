mod debug_report;

use botlang::{Lexicon, LexiconSource, Options, Pipeline};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOTLANG_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let lexicon = match load_lexicon(config.lexicon.as_ref()) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let pipeline = Pipeline::new(&lexicon);
    let options = Options::default();

    match config.stage {
        Stage::Clean => println!("{}", botlang::clean(&config.input)),
        Stage::Replace => println!("{}", pipeline.replace(&botlang::clean(&config.input))),
        Stage::Tag => {
            for tag in pipeline.tag_all(&config.input) {
                println!("{tag}");
            }
        }
        Stage::All if config.json => {
            let out = pipeline.process(&config.input, &options);
            match serde_json::to_string_pretty(&out) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: failed to encode result: {err}");
                    std::process::exit(1);
                }
            }
        }
        Stage::All => {
            let run = pipeline.process_verbose(&config.input, &options);
            debug_report::print_run(&run, config.color);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    All,
    Clean,
    Replace,
    Tag,
}

struct CliConfig {
    input: String,
    stage: Stage,
    lexicon: Option<PathBuf>,
    json: bool,
    color: bool,
}

fn load_lexicon(path: Option<&PathBuf>) -> Result<Lexicon, String> {
    let mut source = LexiconSource::builtin();
    if let Some(path) = path {
        let json = std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read lexicon '{}': {err}", path.display()))?;
        let user = LexiconSource::from_json(&json)
            .map_err(|err| format!("error: invalid lexicon '{}': {err}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = user.len(), "loaded user lexicon");
        source.extend(user);
    }
    Lexicon::compile(&source).map_err(|err| format!("error: lexicon failed to compile: {err}"))
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut stage = Stage::All;
    let mut lexicon = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("botlang {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--stage" => {
                let value = args.next().ok_or_else(|| "error: --stage expects a value".to_string())?;
                stage = parse_stage(&value)?;
            }
            "--lexicon" => {
                let value = args.next().ok_or_else(|| "error: --lexicon expects a value".to_string())?;
                lexicon = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--stage=") => {
                stage = parse_stage(arg.trim_start_matches("--stage="))?;
            }
            _ if arg.starts_with("--lexicon=") => {
                lexicon = Some(PathBuf::from(arg.trim_start_matches("--lexicon=")));
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                set_input(&mut input, value)?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if json && stage != Stage::All {
        return Err("error: --json only applies to --stage all".to_string());
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, stage, lexicon, json, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_stage(value: &str) -> Result<Stage, String> {
    match value {
        "all" => Ok(Stage::All),
        "clean" => Ok(Stage::Clean),
        "replace" => Ok(Stage::Replace),
        "tag" => Ok(Stage::Tag),
        _ => Err(format!("error: invalid --stage '{value}' (expected all, clean, replace or tag)")),
    }
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "botlang {version}

Clean, normalize and tag chatbot input.

Usage:
  botlang [OPTIONS] [--] <input...>
  botlang [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --stage <stage>            all (report, default), clean, replace or tag.
                             Single stages print their bare output.
  --lexicon <file.json>      Extra rule tables, tried before the built-in ones.
  --json                     Print the full result as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                Log filter for diagnostics on stderr (default: warn).

Exit codes:
  0  Success.
  1  Internal error (lexicon could not be read or compiled).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
