use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "placer")]
#[command(version = concat!(env!("VERGEN_GIT_BRANCH"), "/", env!("VERGEN_GIT_SHA")))]
#[command(about = "Resolves the placed objects of a scene into model instances")]
pub struct CliArgs {
    /// Folder whose sub-folders are the archives to load from
    #[arg(long, env = "PLACER_DATA_DIR", default_value_os_t = default_data_dir())]
    pub data_dir: PathBuf,

    /// Reference table file, defaults to tables.xml in the data dir
    #[arg(long, env = "PLACER_TABLES")]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    pub fn tables_path(&self) -> PathBuf {
        self.tables
            .clone()
            .unwrap_or_else(|| self.data_dir.join("tables.xml"))
    }
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(".").join("_data")
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every object of a set file
    Resolve {
        set_file: PathBuf,
        /// Only resolve objects of this type
        #[arg(long = "type")]
        object_type: Option<String>,
    },
    /// Print the order resolvers are asked in
    Resolvers,
}
