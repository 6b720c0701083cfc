//! orgtree - organizational positions kept as a forest of parent links

pub mod cli;
pub mod domain;
pub mod hierarchy;
pub mod service;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_edit, handle_rm, handle_search, handle_show, handle_tree, open_service,
    },
    logging::init_tracing,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Command::Completions(args) = &cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(args.shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let db_path = config.db_path(cli.db.as_ref());
    tracing::debug!(db = %db_path.display(), "opening database");
    let service = open_service(&db_path)?;

    match &cli.command {
        Command::Add(args) => handle_add(args, &service),
        Command::Tree(args) => handle_tree(args, &service, config.page_size()),
        Command::Show(args) => handle_show(args, &service),
        Command::Edit(args) => handle_edit(args, &service),
        Command::Rm(args) => handle_rm(args, &service),
        Command::Search(args) => handle_search(args, &service),
        Command::Completions(_) => Ok(()),
    }
}
