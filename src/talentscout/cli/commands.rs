//! # CLI Layer
//!
//! This module is **one possible UI client** for talentscout. It is the only
//! place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds the `ScoutApi` from flags and configuration
//! - `handle_*()`: Per-command handlers that call the API and print
//!
//! Business logic stays in the command layer; handlers only translate flags
//! into API calls and results into text.

use super::render::{
    print_messages, render_dimensions, render_facets, render_results, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands, ListArgs,
};
use super::shell;
use std::io::{self, IsTerminal};
use talentscout::api::{CmdMessage, ConfigAction, EditOp, MessageLevel, ScoutApi};
use talentscout::commands;
use talentscout::error::Result;
use talentscout::filter::{Dimension, DimensionValue};
use talentscout::init::{config_dir, initialize, InitOptions};

pub fn run(cli: Cli) -> Result<()> {
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    // Config does not need a catalog, so a broken catalog_path can still be fixed.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(key.clone(), value.clone());
    }
    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.clone());
    }

    let mut api = init_context(&cli)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&mut api, args),
        Some(Commands::Facets { dimension }) => handle_facets(&api, dimension),
        Some(Commands::Dimensions) => handle_dimensions(&api),
        Some(Commands::Shell) => handle_shell(&mut api),
        Some(Commands::Config { .. }) | Some(Commands::Help { .. }) => Ok(()),
        None => handle_list(&mut api, ListArgs::default()),
    }
}

fn init_context(cli: &Cli) -> Result<ScoutApi> {
    let ctx = initialize(InitOptions {
        catalog: cli.catalog.clone(),
        gender: cli.gender.clone(),
    })?;
    Ok(ctx.api)
}

fn handle_list(api: &mut ScoutApi, args: ListArgs) -> Result<()> {
    let mut warnings: Vec<CmdMessage> = Vec::new();
    for (dimension, text) in list_edits(&args) {
        let value = DimensionValue::parse(dimension, &text)?;
        let result = api.edit(dimension, EditOp::Set(value))?;
        warnings.extend(
            result
                .messages
                .into_iter()
                .filter(|m| m.level == MessageLevel::Warning),
        );
        api.save_dimension(dimension)?;
    }
    print_messages(&warnings);

    let result = api.list(args.page.map(|p| p.saturating_sub(1)))?;
    print!("{}", render_results(&result));
    print_messages(&result.messages);
    Ok(())
}

/// Flag values as (dimension, value text) pairs, in dimension order.
fn list_edits(args: &ListArgs) -> Vec<(Dimension, String)> {
    let labels = [
        (Dimension::Platform, &args.platform),
        (Dimension::Category, &args.category),
        (Dimension::ContentType, &args.content_type),
        (Dimension::Country, &args.country),
        (Dimension::Ethnicity, &args.ethnicity),
        (Dimension::Language, &args.language),
    ];
    let scalars = [
        (Dimension::Followers, &args.followers),
        (Dimension::City, &args.city),
        (Dimension::Price, &args.price),
        (Dimension::Age, &args.age),
    ];

    let mut edits: Vec<(Dimension, String)> = labels
        .into_iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(d, values)| (d, values.join(",")))
        .collect();
    edits.extend(
        scalars
            .into_iter()
            .filter_map(|(d, value)| value.clone().map(|v| (d, v))),
    );
    edits.sort_by_key(|(d, _)| *d);
    edits
}

fn handle_facets(api: &ScoutApi, dimension: Option<String>) -> Result<()> {
    let dimension = dimension.map(|d| d.parse::<Dimension>()).transpose()?;
    let result = api.facets(dimension)?;
    print!("{}", render_facets(&result.facets));
    print_messages(&result.messages);
    Ok(())
}

fn handle_dimensions(api: &ScoutApi) -> Result<()> {
    let result = api.dimensions()?;
    print!("{}", render_dimensions(&result.dimensions));
    print_messages(&result.messages);
    Ok(())
}

fn handle_shell(api: &mut ScoutApi) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();
    shell::run(api, stdin.lock(), &mut stdout, interactive)
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let dir = config_dir()?;
    let result = commands::config::run(&dir, action)?;
    let mut lines = Vec::new();
    if let Some(config) = &result.config {
        if key.is_none() {
            for (k, v) in config.list_all() {
                lines.push(format!("{} = {}", k, v));
            }
        }
    }
    if key.is_none() {
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_edits_follow_dimension_order() {
        let args = ListArgs {
            price: Some("0..500".into()),
            platform: vec!["Instagram".into(), "TikTok".into()],
            city: Some("los".into()),
            ..Default::default()
        };
        let edits = list_edits(&args);
        assert_eq!(
            edits,
            vec![
                (Dimension::Platform, "Instagram,TikTok".to_string()),
                (Dimension::City, "los".to_string()),
                (Dimension::Price, "0..500".to_string()),
            ]
        );
    }

    #[test]
    fn no_flags_no_edits() {
        assert!(list_edits(&ListArgs::default()).is_empty());
    }
}
