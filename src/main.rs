use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use log::{info, warn};
use placer::context::ResolutionContext;
use placer::io::archive::loader::ArchiveLoader;
use placer::placement::PlacementObject;
use placer::resolvers::registry::ResolverRegistry;
use placer::scene::resolve_scene;
use placer::tables::ReferenceTables;
use placer_files::set::reader::SetReader;
use placer_files::tables::reader::TablesReader;

use crate::settings::{CliArgs, Command};

mod settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    log::trace!("Starting with args: {:?}", args);

    let registry = ResolverRegistry::with_default_resolvers();

    match &args.command {
        Command::Resolvers => {
            for resolver in registry.resolvers() {
                println!("{:>4}  {}", resolver.priority(), resolver.name());
            }
            let fallback = registry.fallback();
            println!("{:>4}  {} (fallback)", fallback.priority(), fallback.name());
        }
        Command::Resolve { set_file, object_type } => {
            let tables = load_tables(&args.tables_path())?;
            let loader = ArchiveLoader::new(&args.data_dir)
                .with_context(|| format!("Can't open data dir {}", args.data_dir.display()))?;
            info!("Archives: {}", loader.archive_names().join(", "));

            let objects = load_objects(set_file)?
                .into_iter()
                .filter(|object| object_type.as_ref().is_none_or(|only| &object.object_type == only))
                .collect_vec();

            let ctx = ResolutionContext::new(&loader, &tables);
            let resolution = resolve_scene(&registry, &ctx, &objects);

            for instance in &resolution.instances {
                println!(
                    "{}:{} at ({:.3}, {:.3}, {:.3})",
                    instance.archive_hint.as_deref().unwrap_or("*"),
                    instance.model_path,
                    instance.position.x,
                    instance.position.y,
                    instance.position.z
                );
            }
            for failure in &resolution.failures {
                eprintln!(
                    "failed: {} {}: {}",
                    failure.object_type,
                    failure.name.as_deref().unwrap_or("-"),
                    failure.message
                );
            }
            println!(
                "{} objects, {} instances, {} skipped, {} failed",
                objects.len(),
                resolution.instances.len(),
                resolution.skipped,
                resolution.failures.len()
            );
        }
    }

    Ok(())
}

/// The tables file is optional, the built-in package map works without it.
fn load_tables(path: &Path) -> anyhow::Result<ReferenceTables> {
    if !path.exists() {
        warn!("No reference tables at {}, using built-ins only", path.display());
        return Ok(ReferenceTables::new());
    }

    let file = File::open(path).with_context(|| format!("Can't open {}", path.display()))?;
    let tables =
        TablesReader::parse_asset(BufReader::new(file)).with_context(|| format!("Can't parse {}", path.display()))?;
    Ok(ReferenceTables::from_file(tables))
}

fn load_objects(path: &Path) -> anyhow::Result<Vec<PlacementObject>> {
    let file = File::open(path).with_context(|| format!("Can't open {}", path.display()))?;
    let set = SetReader::parse_asset(BufReader::new(file)).with_context(|| format!("Can't parse {}", path.display()))?;
    Ok(set.objects.into_iter().map(PlacementObject::from).collect())
}
