use clap::Args;
use miette::Result;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use xaba_store::AssemblyStore;

#[derive(Args)]
pub struct InfoArgs {
    /// An input store file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Read the store as an architecture-specific one, without the global hash tables
    #[arg(long, default_value_t = false)]
    secondary: bool,

    /// Also print the per-entry index records
    #[arg(long, default_value_t = false)]
    entries: bool,
}

impl InfoArgs {
    pub fn handle(&self) -> Result<()> {
        let store = AssemblyStore::open(&self.file, !self.secondary)?;
        let header = store.header();

        println!("{}", self.file.display().bold());
        println!("  version:            {}", header.version);
        println!("  local entry count:  {}", header.local_entry_count);
        println!("  global entry count: {}", header.global_entry_count);
        println!("  store id:           {}", header.store_id);
        if store.has_external_entries() {
            println!(
                "  {}",
                "further entries live in architecture-specific stores".yellow()
            );
        }

        if self.entries {
            println!("\n{}", "index".bold());
            for (index, entry) in store.entries().iter().enumerate() {
                println!(
                    "  [{index:4}] data {:#010x}+{:<8} debug {:#010x}+{:<8} config {:#010x}+{}",
                    entry.data_offset,
                    entry.data_size,
                    entry.debug_data_offset,
                    entry.debug_data_size,
                    entry.config_data_offset,
                    entry.config_data_size,
                );
            }
        }

        if store.is_primary() {
            println!("\n{}", "hash32 table".bold());
            for entry in store.hash32_entries() {
                println!(
                    "  {} mapping {:4} local {:4} store {}",
                    entry.hash_display(),
                    entry.mapping_index,
                    entry.local_store_index,
                    entry.store_id,
                );
            }

            println!("\n{}", "hash64 table".bold());
            for entry in store.hash64_entries() {
                println!(
                    "  {} mapping {:4} local {:4} store {}",
                    entry.hash_display(),
                    entry.mapping_index,
                    entry.local_store_index,
                    entry.store_id,
                );
            }
        }

        Ok(())
    }
}
