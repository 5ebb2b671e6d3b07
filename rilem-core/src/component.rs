/// The core trait for defining models.
///
/// A `Component` takes an input and produces an output.
/// Components should be deterministic, always producing the same result for a
/// given input, so that callers are free to evaluate independent inputs in any
/// order or in parallel.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use rilem_core::Component;
///
/// struct Double;
/// impl Component for Double {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
///         Ok(input * 2.0)
///     }
/// }
///
/// assert_eq!(Double.call(3.0).unwrap(), 6.0);
/// ```
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
