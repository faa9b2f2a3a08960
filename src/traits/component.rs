// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ComponentError;
use crate::ports::PortMap;

/// A named unit of computation with a fixed set of keyed input and output ports.
///
/// Implementations own their port maps. The pipeline writes inputs through
/// [`Component::inputs_mut`] and reads outputs through [`Component::outputs`];
/// only the component itself ever writes its outputs.
///
/// `execute` reads whatever is currently in the input slots and, if its
/// preconditions hold, writes the output slots. Concrete components return `Ok(())`
/// without touching anything when a required input is still empty. The provided
/// implementation fails with [`ComponentError::Unimplemented`]; it marks a
/// component that never supplied real behavior.
///
/// # Example
/// ```
/// use the_conveyor::errors::ComponentError;
/// use the_conveyor::ports::{PortMap, Value};
/// use the_conveyor::traits::Component;
///
/// struct Doubler {
///     inputs: PortMap,
///     outputs: PortMap,
/// }
///
/// impl Component for Doubler {
///     fn name(&self) -> &str {
///         "doubler"
///     }
///     fn inputs(&self) -> &PortMap {
///         &self.inputs
///     }
///     fn inputs_mut(&mut self) -> &mut PortMap {
///         &mut self.inputs
///     }
///     fn outputs(&self) -> &PortMap {
///         &self.outputs
///     }
///     fn execute(&mut self) -> Result<(), ComponentError> {
///         if let Some(n) = self.inputs.integer("n") {
///             self.outputs
///                 .set("n", Value::Integer(n * 2))
///                 .map_err(|source| ComponentError::Port {
///                     component: "doubler".to_string(),
///                     source,
///                 })?;
///         }
///         Ok(())
///     }
/// }
///
/// let mut doubler = Doubler {
///     inputs: PortMap::with_keys(["n"]),
///     outputs: PortMap::with_keys(["n"]),
/// };
/// doubler.inputs_mut().set("n", Value::Integer(21)).unwrap();
/// doubler.execute().unwrap();
/// assert_eq!(doubler.outputs().integer("n"), Some(42));
/// ```
pub trait Component {
    fn name(&self) -> &str;

    fn inputs(&self) -> &PortMap;

    fn inputs_mut(&mut self) -> &mut PortMap;

    fn outputs(&self) -> &PortMap;

    fn execute(&mut self) -> Result<(), ComponentError> {
        Err(ComponentError::Unimplemented {
            component: self.name().to_string(),
        })
    }
}
