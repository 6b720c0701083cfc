//! Tree, show and search command handlers.

use anyhow::Result;

use crate::cli::output::OutputFormat;
use crate::cli::render::{breadcrumb, forest};
use crate::cli::{SearchArgs, ShowArgs, TreeArgs};
use crate::domain::{PositionNode, forest_json};
use crate::hierarchy::PageScope;
use crate::service::{HierarchyQuery, PositionService};
use crate::store::PositionStore;

pub fn handle_tree<S: PositionStore>(
    args: &TreeArgs,
    service: &PositionService<S>,
    page_size: usize,
) -> Result<()> {
    let nodes = service.hierarchy(&tree_query(args, page_size))?;
    print_forest(&nodes, args.format)
}

pub fn handle_show<S: PositionStore>(args: &ShowArgs, service: &PositionService<S>) -> Result<()> {
    let node = service.get(args.id)?;

    match args.format {
        OutputFormat::Human => {
            let ancestors = service.ancestors(args.id)?;
            if let Some(path) = breadcrumb(&ancestors) {
                println!("Reports to: {path}");
                println!();
            }
            print!("{}", forest(std::slice::from_ref(&node)));
        }
        OutputFormat::Json => println!("{}", node.to_json()?),
    }
    Ok(())
}

pub fn handle_search<S: PositionStore>(
    args: &SearchArgs,
    service: &PositionService<S>,
) -> Result<()> {
    let nodes = service.search(&args.query)?;
    print_forest(&nodes, args.format)
}

/// Builds the service query for `tree`.
///
/// A page without `--limit` uses the configured `page_size`.
pub fn tree_query(args: &TreeArgs, page_size: usize) -> HierarchyQuery {
    let mut query = HierarchyQuery::new();
    if let Some(search) = &args.search {
        query = query.search(search.clone());
    }
    if let Some(limit) = args.limit.or_else(|| args.page.map(|_| page_size)) {
        query = query.limit(limit);
    }
    if let Some(page) = args.page {
        query = query.page(page);
    }
    if args.roots {
        query = query.scope(PageScope::Roots);
    }
    query
}

/// Trees print as compact JSON; depth is unbounded.
fn print_forest(nodes: &[PositionNode], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if nodes.is_empty() {
                println!("No positions found.");
            } else {
                print!("{}", forest(nodes));
            }
        }
        OutputFormat::Json => println!("{}", forest_json(nodes)?),
    }
    Ok(())
}
