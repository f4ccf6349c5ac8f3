use crate::error::Error;
use crate::tensor::Tensor;

/// Index of the first maximum element in the tensor's flat buffer. Ties
/// keep the earliest index.
pub fn argmax(tensor: &Tensor) -> Result<usize, Error> {
    let (first, rest) = tensor.data().split_first().ok_or(Error::EmptyTensor)?;

    let mut best_index = 0;
    let mut best = *first;
    for (i, &value) in rest.iter().enumerate() {
        if value > best {
            best = value;
            best_index = i + 1;
        }
    }

    Ok(best_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::Shape;

    fn tensor(data: Vec<f32>) -> Tensor {
        let len = data.len() as i64;
        Tensor::new(Shape::from_slice(&[1, len]), data)
    }

    #[test]
    fn picks_the_maximum() {
        assert_eq!(argmax(&tensor(vec![0.1, 0.3, 0.9, 0.2])).unwrap(), 2);
    }

    #[test]
    fn ties_keep_the_earliest_index() {
        assert_eq!(argmax(&tensor(vec![0.5, 0.9, 0.9, 0.2])).unwrap(), 1);
    }

    #[test]
    fn single_element_wins() {
        assert_eq!(argmax(&tensor(vec![-3.0])).unwrap(), 0);
    }

    #[test]
    fn empty_buffer_is_an_error() {
        let empty = Tensor::new(Shape::from_slice(&[1, 0]), Vec::new());
        assert!(matches!(argmax(&empty), Err(Error::EmptyTensor)));
    }
}
