use crate::error::{Error, TeardownError};
use crate::spec::{Endpoint, GraphSpec};
use crate::tensor::Tensor;

/// Imports serialized graph definitions into an executable form.
pub trait Engine {
    type Graph: LoadedGraph;

    fn import(&self, graph_def: &[u8]) -> Result<Self::Graph, Error>;
}

/// One imported graph. Immutable contract after import; at most one run is
/// in flight at a time.
pub trait LoadedGraph {
    fn spec(&self) -> &GraphSpec;

    /// Executes one synchronous pass, writing the named output into
    /// `output_tensor`'s buffer in place. The input tensor is consumed.
    fn run(
        &mut self,
        input: &Endpoint,
        input_tensor: Tensor,
        output: &Endpoint,
        output_tensor: &mut Tensor,
    ) -> Result<(), Error>;

    /// Tears the session down. A failure here is reported to the caller,
    /// but a result already produced by `run` stands.
    fn close(self) -> Result<(), TeardownError>;
}
