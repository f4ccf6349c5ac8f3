use std::path::Path;

use snapclass_core::{
    argmax, build_input_tensor, build_output_tensor, normalize, Engine, Error, LoadedGraph,
};
use tracing::{debug, warn};

use crate::codec;
use crate::loader;

/// Runs one classification end to end and returns the predicted class
/// index. Every owned buffer and engine handle is dropped on each exit
/// path; nothing survives the call.
pub fn classify<E: Engine>(
    engine: &E,
    graph_path: &Path,
    image_path: &Path,
    input_name: &str,
    output_name: &str,
) -> Result<usize, Error> {
    let graph_def = loader::read_graph_def(graph_path)?;
    debug!(path = %graph_path.display(), bytes = graph_def.len(), "loaded graph definition");

    let mut graph = engine.import(&graph_def)?;

    let input = graph.spec().resolve_input(input_name)?;
    let output = graph.spec().resolve_output(output_name)?;
    let input_decl = graph.spec().input(&input).clone();
    let output_decl = graph.spec().output(&output).clone();

    let header = codec::probe_header(image_path)?;
    let raw = codec::decode_pixels(image_path, &header)?;
    debug!(width = raw.width, height = raw.height, "decoded image");

    let normalized = normalize(raw)?;
    let input_tensor = build_input_tensor(&input_decl, normalized)?;
    let mut output_tensor = build_output_tensor(&output_decl)?;

    graph.run(&input, input_tensor, &output, &mut output_tensor)?;
    let class = argmax(&output_tensor)?;

    // The result is already in hand; teardown trouble is reported, not fatal.
    if let Err(err) = graph.close() {
        warn!(error = ?err, "session teardown failed");
    }

    Ok(class)
}
