use clap::Subcommand;
use std::path::PathBuf;

pub mod rename;
pub mod scan;

#[derive(Subcommand)]
pub enum Commands {
    /// Scan structure files for block names under a namespace
    Scan {
        /// Source directory of .nbt files
        #[arg(short, long)]
        source: PathBuf,

        /// Mod namespace to scan for (e.g. ad_astra)
        #[arg(short, long)]
        namespace: String,

        /// Emit a JSON report instead of plain names
        #[arg(long)]
        json: bool,
    },

    /// Batch-rename block names across all structure files
    Rename {
        /// Source directory of .nbt files
        #[arg(short, long)]
        source: PathBuf,

        /// Output directory (defaults to <source>_modified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON file with an {"original": "replacement"} mapping
        #[arg(short, long)]
        map: Option<PathBuf>,

        /// Inline rename, repeatable: --set ORIGINAL=REPLACEMENT
        #[arg(long = "set", value_name = "ORIGINAL=REPLACEMENT")]
        set: Vec<String>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Scan {
                source,
                namespace,
                json,
            } => scan::execute(source, namespace, *json),
            Commands::Rename {
                source,
                output,
                map,
                set,
            } => rename::execute(source, output.as_deref(), map.as_deref(), set),
        }
    }
}
