use std::fs::File;
use std::io::Read;
use std::path::Path;

use snapclass_core::Error;

/// Reads the serialized graph definition fully into memory. The buffer is
/// sized from the file's reported length; a short read is an error.
pub fn read_graph_def(path: &Path) -> Result<Vec<u8>, Error> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let len = file.metadata().map_err(io_error)?.len() as usize;

    let mut graph_def = Vec::new();
    graph_def
        .try_reserve_exact(len)
        .map_err(|source| Error::Resource {
            what: "graph definition buffer",
            source,
        })?;
    file.read_to_end(&mut graph_def).map_err(io_error)?;

    if graph_def.len() < len {
        return Err(io_error(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("expected {len} bytes, read {}", graph_def.len()),
        )));
    }

    Ok(graph_def)
}
