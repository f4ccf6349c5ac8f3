use ort::{
    session::{builder::GraphOptimizationLevel, Session, SessionInputValue},
    tensor::TensorElementType,
    value::ValueType,
};
use snapclass_core::{
    Endpoint, Engine, Error, GraphSpec, IOName, LoadedGraph, TeardownError, Tensor, TensorSpec,
};

pub struct OrtEngine;

impl OrtEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrtEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct OrtGraph {
    spec: GraphSpec,
    session: Session,
}

impl Engine for OrtEngine {
    type Graph = OrtGraph;

    fn import(&self, graph_def: &[u8]) -> Result<OrtGraph, Error> {
        let session = Session::builder()
            .map_err(import_error)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(import_error)?
            .commit_from_memory(graph_def)
            .map_err(import_error)?;

        let spec = graph_spec(&session)?;
        Ok(OrtGraph { spec, session })
    }
}

impl LoadedGraph for OrtGraph {
    fn spec(&self) -> &GraphSpec {
        &self.spec
    }

    fn run(
        &mut self,
        input: &Endpoint,
        input_tensor: Tensor,
        output: &Endpoint,
        output_tensor: &mut Tensor,
    ) -> Result<(), Error> {
        let dims: Vec<usize> = input_tensor
            .shape()
            .dims()
            .iter()
            .map(|&d| d as usize)
            .collect();
        let value = ort::value::Tensor::from_array((dims, input_tensor.into_data()))
            .map_err(execution_error)?;

        let inputs = vec![(
            input.name.as_str().to_string(),
            SessionInputValue::from(value.into_dyn()),
        )];
        let outputs = self.session.run(inputs).map_err(execution_error)?;

        let value = outputs
            .iter()
            .find(|(name, _)| *name == output.name.as_str())
            .map(|(_, value)| value)
            .ok_or_else(|| {
                Error::Execution(
                    format!("run produced no output named {:?}", output.name.as_str()).into(),
                )
            })?;

        let array = value.try_extract_array::<f32>().map_err(execution_error)?;
        let produced = array
            .as_slice()
            .ok_or_else(|| Error::Execution("non-contiguous output tensor".into()))?;

        let declared = output_tensor.data_mut();
        if produced.len() != declared.len() {
            return Err(Error::Execution(
                format!(
                    "output size mismatch: run produced {} elements, graph declares {}",
                    produced.len(),
                    declared.len()
                )
                .into(),
            ));
        }
        declared.copy_from_slice(produced);

        Ok(())
    }

    fn close(self) -> Result<(), TeardownError> {
        drop(self.session);
        Ok(())
    }
}

fn graph_spec(session: &Session) -> Result<GraphSpec, Error> {
    let inputs = session
        .inputs
        .iter()
        .map(|input| tensor_spec(&input.name, &input.input_type))
        .collect::<Result<Vec<_>, _>>()?;

    let outputs = session
        .outputs
        .iter()
        .map(|output| tensor_spec(&output.name, &output.output_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GraphSpec { inputs, outputs })
}

fn tensor_spec(name: &str, value_type: &ValueType) -> Result<TensorSpec, Error> {
    let ValueType::Tensor { ty, shape, .. } = value_type else {
        return Err(Error::GraphImport(
            format!("unsupported non-tensor endpoint {name:?}").into(),
        ));
    };
    if *ty != TensorElementType::Float32 {
        return Err(Error::GraphImport(
            format!("endpoint {name:?} has unsupported element type {ty}").into(),
        ));
    }

    Ok(TensorSpec {
        name: IOName(name.to_string()),
        dims: shape.clone(),
    })
}

fn import_error(err: ort::Error) -> Error {
    Error::GraphImport(Box::new(err))
}

fn execution_error(err: ort::Error) -> Error {
    Error::Execution(Box::new(err))
}
