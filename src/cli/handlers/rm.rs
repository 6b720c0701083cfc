//! Rm command handler.

use anyhow::Result;

use crate::cli::RmArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::service::{DeleteResponse, PositionService};
use crate::store::PositionStore;

pub fn handle_rm<S: PositionStore>(args: &RmArgs, service: &PositionService<S>) -> Result<()> {
    let removal = service.delete(args.id)?;
    let response = DeleteResponse::from(&removal);

    match args.format {
        OutputFormat::Human => {
            println!("{} (id {})", response.message, response.id);
            if removal.has_children() {
                let target = match removal.new_parent {
                    Some(parent) => format!("position {parent}"),
                    None => "the top level".to_string(),
                };
                println!("Moved {} position(s) to {target}", removal.children.len());
            }
        }
        OutputFormat::Json => print_json(&response)?,
    }
    Ok(())
}
