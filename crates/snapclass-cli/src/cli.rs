use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "snapclass", version, about = "Classify one RGB image with a serialized graph")]
pub struct Cli {
    /// Path to the serialized model graph
    #[arg(value_name = "GRAPH")]
    pub graph: PathBuf,

    /// Path to an 8-bit RGB PNG image
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,
}
