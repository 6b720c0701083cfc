//! Add command handler.

use anyhow::Result;

use crate::cli::AddArgs;
use crate::cli::output::{OutputFormat, print_json};
use crate::cli::render::label;
use crate::domain::NewPosition;
use crate::service::PositionService;
use crate::store::PositionStore;

pub fn handle_add<S: PositionStore>(args: &AddArgs, service: &PositionService<S>) -> Result<()> {
    let input = NewPosition::new(args.name.clone(), args.desc.clone()).parent(args.parent);
    let created = service.create(&input)?;

    match args.format {
        OutputFormat::Human => println!("Created {}", label(&created)),
        OutputFormat::Json => print_json(&created)?,
    }
    Ok(())
}
