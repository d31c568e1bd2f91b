pub mod evaluator;

pub use evaluator::{classify, output_softmax, softmax, test};
