use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use ark_cli::config::load_options;
use ark_cli::outline::render_editor;
use ark_cli::replay::{ReplayReport, ReplaySettings, parse_script, replay};
use ark_editor::{Editor, MissingReferencePolicy, SequentialIdGenerator};
use ark_model::ComponentType;
use ark_registry::ComponentRegistry;

use crate::cli::{Cli, ReplayArgs, SchemaArgs};
use crate::tables::{palette_table, schema_table};

pub fn run_palette() -> Result<()> {
    let registry = ComponentRegistry::builtin();
    println!("{}", palette_table(&registry));
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let component_type: ComponentType = args
        .component_type
        .parse()
        .with_context(|| format!("component type '{}'", args.component_type))?;
    let registry = ComponentRegistry::builtin();
    let definition = registry.require(component_type)?;
    println!(
        "{} ({}, children {})",
        definition.name,
        definition.category,
        if definition.allows_children {
            "allowed"
        } else {
            "not allowed"
        }
    );
    println!("{}", schema_table(definition));
    Ok(())
}

pub fn run_replay(cli: &Cli, args: &ReplayArgs) -> Result<ReplayReport> {
    let mut options = load_options(cli.config.as_deref())?;
    if args.strict {
        options = options.with_missing_references(MissingReferencePolicy::Reject);
    }

    let content = fs::read_to_string(&args.script)
        .with_context(|| format!("read {}", args.script.display()))?;
    let commands = parse_script(&content)
        .with_context(|| format!("load {}", args.script.display()))?;
    info!(script = %args.script.display(), commands = commands.len(), "loaded script");

    let registry = ComponentRegistry::builtin();
    let mut editor = if args.random_ids {
        Editor::new(registry, options)
    } else {
        Editor::with_id_generator(registry, options, SequentialIdGenerator::new())
    };
    let settings = ReplaySettings {
        initialize: !args.no_init,
        keep_going: args.keep_going,
    };
    let report = replay(&mut editor, commands, settings)?;
    print!("{}", render_editor(&editor));
    Ok(report)
}
