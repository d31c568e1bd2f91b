use std::f64::consts::E;

/// Activation applied to a layer's net input.
///
/// Hidden layers squash with `Sigmoid`; the output layer stays linear
/// (`Identity`) so its raw scores can be compared directly or passed
/// through a softmax for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationFunction {
    Sigmoid,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Identity => x,
        }
    }

    /// Derivative expressed in terms of the activation's own output,
    /// i.e. `f'(z)` given `f(z)`.
    ///
    /// Only hidden layers use this. The output layer's error is the raw
    /// `target - output` difference and never goes through here.
    pub fn derivative_from_output(&self, output: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => output * (1.0 - output),
            ActivationFunction::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_is_centred_at_one_half() {
        assert_relative_eq!(ActivationFunction::Sigmoid.function(0.0), 0.5);
        assert_relative_eq!(ActivationFunction::Sigmoid.derivative_from_output(0.5), 0.25);
    }

    #[test]
    fn sigmoid_stays_strictly_inside_unit_interval() {
        for x in [-30.0, -5.0, -0.1, 0.1, 5.0, 30.0] {
            let y = ActivationFunction::Sigmoid.function(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
        }
    }

    #[test]
    fn identity_passes_values_through() {
        assert_eq!(ActivationFunction::Identity.function(-2.5), -2.5);
        assert_eq!(ActivationFunction::Identity.derivative_from_output(7.0), 1.0);
    }
}
