use anyhow::Result;
use clap::Parser;
use snapclass_backend_ort::OrtEngine;
use snapclass_cli::cli::Cli;
use snapclass_cli::pipeline;
use tracing_subscriber::EnvFilter;

const INPUT_OP: &str = "input";
const OUTPUT_OP: &str = "MobilenetV1/Predictions/Reshape_1";

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let engine = OrtEngine::new();
    let class = pipeline::classify(&engine, &cli.graph, &cli.image, INPUT_OP, OUTPUT_OP)?;
    println!("result is {class}");

    Ok(())
}
