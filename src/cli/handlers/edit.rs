//! Edit command handler.

use anyhow::Result;

use crate::cli::EditArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::cli::render::label;
use crate::domain::PositionPatch;
use crate::service::PositionService;
use crate::store::PositionStore;

pub fn handle_edit<S: PositionStore>(args: &EditArgs, service: &PositionService<S>) -> Result<()> {
    let updated = service.update(args.id, &edit_patch(args))?;

    match args.format {
        OutputFormat::Human => println!("Updated {}", label(&updated)),
        OutputFormat::Json => print_json(&updated)?,
    }
    Ok(())
}

/// Translates edit flags into a patch. `--root` clears the parent.
pub fn edit_patch(args: &EditArgs) -> PositionPatch {
    let mut patch = PositionPatch::new();
    if let Some(name) = &args.name {
        patch = patch.name(name.clone());
    }
    if let Some(desc) = &args.desc {
        patch = patch.description(desc.clone());
    }
    if args.root {
        patch = patch.parent(None);
    } else if let Some(parent) = args.parent {
        patch = patch.parent(Some(parent));
    }
    patch
}
