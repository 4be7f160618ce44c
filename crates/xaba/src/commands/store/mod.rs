pub mod info;
pub mod unpack;

#[derive(clap::Subcommand)]
pub enum StoreCommands {
    /// Print the header and lookup tables of a store file
    Info(info::InfoArgs),
    /// Unpack the assemblies of a blob package into a directory
    Unpack(unpack::UnpackArgs),
}

impl StoreCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            StoreCommands::Info(info) => info.handle(),
            StoreCommands::Unpack(unpack) => unpack.handle(),
        }
    }
}
