use anyhow::Result;
use clap::Parser;

use memory_wall::cli::handlers::{
    CommandContext, handle_delete, handle_init, handle_list, handle_serve, handle_stats,
};
use memory_wall::cli::{Cli, Commands};
use memory_wall::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let ctx = CommandContext::load(&cli)?;

    match cli.command {
        Commands::Init { write_config } => handle_init(&ctx, write_config),
        Commands::Serve { port } => handle_serve(ctx, port),
        Commands::List { json } => handle_list(&ctx, json),
        Commands::Stats { json } => handle_stats(&ctx, json),
        Commands::Delete { id, force, json } => handle_delete(&ctx, id, force, json),
    }
}
