//! # CLI Layer
//!
//! This module is **one possible UI client** for roster. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Reads the clock and writes export files
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with the API and output mode
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::render::{
    print_detail, print_json, print_list, print_messages, print_options, print_warnings,
};
use super::setup::{AddArgs, Cli, Commands, QueryArgs};
use chrono::{Local, Utc};
use clap::Parser;
use rosterapp::api::{build_query, NewMember, RosterApi};
use rosterapp::commands::CmdResult;
use rosterapp::config::RosterConfig;
use rosterapp::domains::Domain;
use rosterapp::error::{Result, RosterError};
use rosterapp::store::fs::FileStore;
use std::path::PathBuf;

struct AppContext {
    api: RosterApi<FileStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    // Naked `roster` lists members
    let command = cli.command.unwrap_or(Commands::List {
        domain: Domain::Members,
        query: QueryArgs::default(),
    });

    match command {
        Commands::List { domain, query } => handle_list(&ctx, domain, &query),
        Commands::Options { domain } => handle_options(&ctx, domain),
        Commands::View { domain, id } => handle_view(&mut ctx, domain, &id),
        Commands::Read { id } => {
            let result = ctx.api.mark_read(&id)?;
            finish(&ctx, &result)
        }
        Commands::Export {
            domain,
            query,
            output,
        } => handle_export(&ctx, domain, &query, output),
        Commands::Contact { id, message, call } => {
            let result = match (call, message) {
                (true, _) => ctx.api.call(&id)?,
                (false, body) => ctx.api.message(&id, body.as_deref().unwrap_or_default())?,
            };
            handle_contact(&ctx, &result)
        }
        Commands::Add(args) => handle_add(&mut ctx, args),
        Commands::Init => {
            let result = ctx.api.init()?;
            finish(&ctx, &result)
        }
        Commands::Config { key } => handle_config(&ctx, key.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    // RUST_LOG still wins when set
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = RosterConfig::load(cli.config.as_deref())?;
    let data_path = match &cli.data {
        Some(path) => path.clone(),
        None => config.data_path()?,
    };
    log::debug!("data file: {}", data_path.display());

    Ok(AppContext {
        api: RosterApi::new(FileStore::new(data_path), config),
        json: cli.json,
    })
}

/// Messages and warnings only, or the whole result as JSON.
fn finish(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        return print_json(result);
    }
    print_warnings(&result.warnings);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, domain: Domain, args: &QueryArgs) -> Result<()> {
    let query = build_query(args.search.as_deref(), &args.filters, args.tab.as_deref())?;
    let result = ctx.api.list(domain, &query)?;
    if ctx.json {
        return print_json(&result);
    }
    print_list(domain, &result.listed, &result.sections);
    finish(ctx, &result)
}

fn handle_options(ctx: &AppContext, domain: Domain) -> Result<()> {
    let result = ctx.api.options(domain)?;
    if ctx.json {
        return print_json(&result);
    }
    print_options(&result.options);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, domain: Domain, id: &str) -> Result<()> {
    let result = ctx.api.view(domain, id)?;
    if ctx.json {
        return print_json(&result);
    }
    for record in &result.listed {
        print_detail(domain, record);
    }
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    domain: Domain,
    args: &QueryArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let query = build_query(args.search.as_deref(), &args.filters, args.tab.as_deref())?;
    let result = ctx.api.export(domain, &query, Local::now().date_naive())?;

    let file = result
        .export
        .as_ref()
        .ok_or_else(|| RosterError::Api("export produced no file".into()))?;
    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.contents)?;

    if ctx.json {
        return print_json(&result);
    }
    finish(ctx, &result)?;
    println!("{}", path.display());
    Ok(())
}

fn handle_contact(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    finish(ctx, result)?;
    if !ctx.json {
        if let Some(link) = &result.link {
            println!("{}", link);
        }
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, args: AddArgs) -> Result<()> {
    let member = NewMember {
        name: args.name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        club: args.club.unwrap_or_default(),
        role: args.role,
        position: args.position,
        location: args.location,
        bio: args.bio,
        interests: args.interests,
    };
    let result = ctx.api.add_member(member, Utc::now())?;
    finish(ctx, &result)
}

fn handle_config(ctx: &AppContext, key: Option<&str>) -> Result<()> {
    let result = ctx.api.config(key)?;
    if ctx.json {
        return print_json(&result);
    }
    if let Some(config) = &result.config {
        println!("organization = {}", config.organization);
        println!("export_prefix = {}", config.export_prefix);
        if let Some(path) = &config.data_file {
            println!("data_file = {}", path.display());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
