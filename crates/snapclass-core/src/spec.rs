use crate::error::Error;
use crate::tensor::Shape;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IOName(pub String);

impl IOName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Declared shape of a named graph input or output. A negative dimension
/// was left unspecified at export time (typically the batch dimension).
#[derive(Clone, Debug)]
pub struct TensorSpec {
    pub name: IOName,
    pub dims: Vec<i64>,
}

impl TensorSpec {
    /// Resolves every dimension to its declared magnitude. This is the
    /// single place dynamic dimensions become concrete.
    pub fn normalized(&self) -> Shape {
        Shape(self.dims.iter().map(|d| d.abs()).collect())
    }
}

/// A resolved point in the graph where a tensor is fed or read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub name: IOName,
    pub index: usize,
}

/// The graph's declared I/O contract, fixed at import time.
#[derive(Clone, Debug, Default)]
pub struct GraphSpec {
    pub inputs: Vec<TensorSpec>,
    pub outputs: Vec<TensorSpec>,
}

impl GraphSpec {
    pub fn resolve_input(&self, name: &str) -> Result<Endpoint, Error> {
        resolve(&self.inputs, name)
    }

    pub fn resolve_output(&self, name: &str) -> Result<Endpoint, Error> {
        resolve(&self.outputs, name)
    }

    /// Declared spec behind an endpoint previously resolved against this graph.
    pub fn input(&self, endpoint: &Endpoint) -> &TensorSpec {
        &self.inputs[endpoint.index]
    }

    pub fn output(&self, endpoint: &Endpoint) -> &TensorSpec {
        &self.outputs[endpoint.index]
    }
}

fn resolve(specs: &[TensorSpec], name: &str) -> Result<Endpoint, Error> {
    specs
        .iter()
        .position(|spec| spec.name.as_str() == name)
        .map(|index| Endpoint {
            name: IOName(name.to_string()),
            index,
        })
        .ok_or_else(|| Error::EndpointNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> GraphSpec {
        GraphSpec {
            inputs: vec![TensorSpec {
                name: IOName("input".to_string()),
                dims: vec![-1, 224, 224, 3],
            }],
            outputs: vec![TensorSpec {
                name: IOName("scores".to_string()),
                dims: vec![-1, 1001],
            }],
        }
    }

    #[test]
    fn resolves_declared_endpoints() {
        let spec = spec();
        let input = spec.resolve_input("input").unwrap();
        assert_eq!(input.index, 0);
        assert_eq!(spec.input(&input).dims, vec![-1, 224, 224, 3]);

        let output = spec.resolve_output("scores").unwrap();
        assert_eq!(output.name.as_str(), "scores");
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = spec().resolve_output("logits").unwrap_err();
        assert!(matches!(err, Error::EndpointNotFound(name) if name == "logits"));
    }

    #[test]
    fn normalization_takes_dimension_magnitudes() {
        let normalized = spec().inputs[0].normalized();
        assert_eq!(normalized.dims(), &[1, 224, 224, 3]);
    }
}
