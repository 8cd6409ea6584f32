//! `rcschema` command-line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rc_migrate::Resolution;
use rc_schema::{SchemaBuilder, SchemaConfig, SettingsSchema};
use semver::Version;
use serde_json::{json, Value as JsonValue};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let key = || Arg::new("key").required(true).help("Setting key, e.g. grid.color");
    Command::new("rcschema")
        .version(rc_schema::VERSION)
        .about("Inspect the settings key space of the plotting library")
        .subcommand_required(true)
        .arg(
            Arg::new("host-version")
                .long("host-version")
                .global(true)
                .value_parser(value_parser!(Version))
                .help("Host plotting library version; overrides the config file"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML schema config file"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("list")
                .about("List registered settings")
                .arg(
                    Arg::new("namespace")
                        .long("namespace")
                        .help("Only settings under this namespace, e.g. grid"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("describe")
                .about("Show default, validator and description of a setting")
                .arg(key()),
        )
        .subcommand(
            Command::new("children")
                .about("Keys refreshed when a setting changes")
                .arg(key()),
        )
        .subcommand(
            Command::new("resolve")
                .about("Migration status of a key")
                .arg(key()),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a value for a setting")
                .arg(key())
                .arg(
                    Arg::new("value")
                        .required(true)
                        .help("JSON value; bare words are taken as strings"),
                ),
        )
        .subcommand(Command::new("check").about("Build the schema and run consistency checks"))
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn load_config(matches: &ArgMatches) -> Result<SchemaConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SchemaConfig::from_file(path)?,
        None => SchemaConfig::default(),
    };
    if let Some(version) = matches.get_one::<Version>("host-version") {
        config.host_version = version.clone();
    }
    Ok(config)
}

fn parse_value(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

fn key_arg(args: &ArgMatches) -> Result<&str> {
    args.get_one::<String>("key")
        .map(String::as_str)
        .context("missing setting key")
}

fn list(schema: &SettingsSchema, args: &ArgMatches) -> Result<()> {
    let options: Vec<_> = match args.get_one::<String>("namespace") {
        Some(namespace) => schema.registry().namespace(namespace).collect(),
        None => schema.registry().iter().collect(),
    };
    if args.get_flag("json") {
        let out: Vec<JsonValue> = options
            .iter()
            .map(|option| {
                json!({
                    "key": option.key(),
                    "default": option.default_value(),
                    "validator": option.validator().describe(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for option in options {
            println!("{} = {}", option.key(), option.default_value());
        }
    }
    Ok(())
}

fn describe(schema: &SettingsSchema, key: &str) -> Result<()> {
    let option = schema.describe(key)?;
    println!("Key: {}", option.key());
    println!("Default: {}", option.default_value());
    println!("Validator: {}", option.validator().describe());
    if !option.description().is_empty() {
        println!("Description: {}", option.description());
    }
    let children = schema.children(option.key());
    if !children.is_empty() {
        println!("Children: {}", children.join(", "));
    }
    Ok(())
}

fn resolve(schema: &SettingsSchema, key: &str) -> Result<()> {
    match schema.resolve(key) {
        Resolution::Current(key) => {
            let status = if schema.registry().contains(key) {
                "current"
            } else {
                "unknown"
            };
            println!("{key}: {status}");
        }
        Resolution::Renamed {
            new_key, version, ..
        } => println!("{key}: renamed to {new_key} in {version}"),
        Resolution::Removed { hint, version, .. } => {
            println!("{key}: removed in {version}");
            if !hint.is_empty() {
                println!("  {hint}");
            }
        }
    }
    Ok(())
}

fn check(schema: &SettingsSchema) -> Result<()> {
    schema.verify()?;
    let applied: Vec<String> = schema
        .extension()
        .applied()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Schema Check");
    println!("============");
    println!("Host Version: {}", schema.host_version());
    println!("Options: {}", schema.registry().len());
    println!("Parents: {}", schema.graph().len());
    println!("Closure Passes: {}", schema.graph().passes());
    println!("Retired Keys: {}", schema.migrations().len());
    println!(
        "Gates Applied: {}",
        if applied.is_empty() {
            "none".to_string()
        } else {
            applied.join(", ")
        }
    );
    println!("Status: PASSED");
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config = load_config(&matches)?;
    let schema = SchemaBuilder::new(config)
        .build()
        .context("failed to build settings schema")?;

    match matches.subcommand() {
        Some(("list", args)) => list(&schema, args),
        Some(("describe", args)) => describe(&schema, key_arg(args)?),
        Some(("children", args)) => {
            let key = key_arg(args)?;
            let key = schema.redirect(key)?;
            schema.lookup(key)?;
            for child in schema.children(key) {
                println!("{child}");
            }
            Ok(())
        }
        Some(("resolve", args)) => resolve(&schema, key_arg(args)?),
        Some(("validate", args)) => {
            let key = key_arg(args)?;
            let raw = args
                .get_one::<String>("value")
                .context("missing value")?;
            let setting = schema.validate_user(key, &parse_value(raw))?;
            println!("{} = {}", setting.key, setting.value);
            if !setting.children.is_empty() {
                println!("Also sets: {}", setting.children.join(", "));
            }
            Ok(())
        }
        Some(("check", _)) => check(&schema),
        _ => Ok(()),
    }
}
