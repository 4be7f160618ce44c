pub mod store;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle assembly store blob packages
    Store {
        #[command(subcommand)]
        command: store::StoreCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Store { command } => command.handle(),
        }
    }
}
