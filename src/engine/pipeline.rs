// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::config::{PipelineOptions, SeedPolicy};
use crate::engine::connections::{ComponentId, Connections, PortRef};
use crate::engine::run_outputs::{RunOutputs, StageOutputs};
use crate::errors::PipelineError;
use crate::observability::messages::pipeline::RunStarted;
use crate::observability::messages::StructuredLog;
use crate::observability::TracingReporter;
use crate::ports::{PortDirection, Value};
use crate::traits::reporter::PortLabel;
use crate::traits::{Component, Reporter};

/// Seed input for the first component: input key to value.
pub type Seed = BTreeMap<String, Value>;

static NEXT_PIPELINE_ID: AtomicU64 = AtomicU64::new(1);

/// Linear pipeline: components run in registration order and explicit connections
/// copy produced outputs into downstream inputs.
///
/// ## Run semantics
///
/// 1. The first component's inputs are reset and filled from the seed.
/// 2. Each component executes once, in registration order. A failing `execute` is
///    reported and isolated; the run continues with the next component.
/// 3. Right after a component executes (successfully or not), every connection
///    leaving it copies the current output value into the target input. Empty
///    outputs are never copied, so they cannot wipe a downstream input.
/// 4. The result holds the final outputs of every stage.
///
/// Components keep their slots between runs. A second `run` re-seeds the first
/// component and re-executes everything, overwriting whatever its data path touches.
///
/// # Example
/// ```
/// use the_conveyor::backends::local::{LengthCounter, TextNormalizer};
/// use the_conveyor::engine::{Pipeline, Seed};
/// use the_conveyor::ports::Value;
///
/// let mut pipeline = Pipeline::new();
/// let normalizer = pipeline.add(TextNormalizer::default());
/// let counter = pipeline.add(LengthCounter::default());
/// pipeline.connect(normalizer, "normalized", counter, "text").unwrap();
///
/// let seed = Seed::from([("text".to_string(), Value::from("HelLo WorLD"))]);
/// let outputs = pipeline.run(seed).unwrap();
///
/// assert_eq!(
///     outputs.value("Text Normalizer", "normalized"),
///     Some(&Value::from("hello world"))
/// );
/// assert_eq!(
///     outputs.value("Text Length Counter", "length"),
///     Some(&Value::Integer(11))
/// );
/// ```
pub struct Pipeline {
    id: u64,
    components: Vec<Box<dyn Component>>,
    connections: Connections,
    options: PipelineOptions,
    reporter: Box<dyn Reporter>,
}

impl Pipeline {
    /// Pipeline with default options, reporting through `tracing`
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            id: NEXT_PIPELINE_ID.fetch_add(1, Ordering::Relaxed),
            components: Vec::new(),
            connections: Connections::new(options.connection_policy),
            options,
            reporter: Box::new(TracingReporter),
        }
    }

    /// Attach the reporter that receives this pipeline's diagnostics.
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Append a component. Names are not checked for uniqueness; the returned
    /// handle is what identifies the component in connections.
    pub fn add_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = ComponentId::new(self.id, self.components.len());
        self.components.push(component);
        id
    }

    pub fn add<C: Component + 'static>(&mut self, component: C) -> ComponentId {
        self.add_component(Box::new(component))
    }

    /// `None` for handles issued by another pipeline.
    pub fn component(&self, id: ComponentId) -> Option<&dyn Component> {
        if id.pipeline != self.id {
            return None;
        }
        self.components.get(id.position).map(|component| &**component)
    }

    /// Components in execution order
    pub fn components(&self) -> impl Iterator<Item = &dyn Component> {
        self.components.iter().map(|component| &**component)
    }

    pub fn connections(&self) -> &Connections {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Wire `source.source_key` (an output) to `target.target_key` (an input).
    ///
    /// Fails without touching the registry when a handle is unknown or foreign, or a
    /// key is not declared on the respective side. Any pair of declared ports may be
    /// wired, including a component to itself or to an earlier component; such a
    /// value lands after the target has already executed and is read on a later run.
    pub fn connect(
        &mut self,
        source: ComponentId,
        source_key: &str,
        target: ComponentId,
        target_key: &str,
    ) -> Result<(), PipelineError> {
        let source_component = self.lookup(source)?;
        if !source_component.outputs().contains_key(source_key) {
            return Err(PipelineError::InvalidConnection {
                component: source_component.name().to_string(),
                key: source_key.to_string(),
                direction: PortDirection::Output,
            });
        }

        let target_component = self.lookup(target)?;
        if !target_component.inputs().contains_key(target_key) {
            return Err(PipelineError::InvalidConnection {
                component: target_component.name().to_string(),
                key: target_key.to_string(),
                direction: PortDirection::Input,
            });
        }

        let dropped = self.connections.insert(
            PortRef::new(source, source_key),
            PortRef::new(target, target_key),
        );

        if let Some(dropped) = dropped {
            self.reporter.connection_replaced(
                PortLabel {
                    component: self.components[source.position].name(),
                    key: source_key,
                },
                PortLabel {
                    component: self.components[dropped.component.position].name(),
                    key: &dropped.key,
                },
                PortLabel {
                    component: self.components[target.position].name(),
                    key: target_key,
                },
            );
        }

        Ok(())
    }

    /// Seed the first component, execute every component in order and propagate
    /// outputs after each one.
    ///
    /// Only an error that makes the run meaningless is returned (a seed refused under
    /// [`SeedPolicy::Reject`]); component failures are isolated and show up in the
    /// stage's `error` field instead.
    pub fn run(&mut self, initial_input: Seed) -> Result<RunOutputs, PipelineError> {
        let started = RunStarted {
            component_count: self.components.len(),
            connection_count: self.connections.len(),
        };
        let span = started.span("pipeline_run");
        let _guard = span.enter();

        if self.components.is_empty() {
            self.reporter.empty_pipeline();
            return Ok(RunOutputs::default());
        }

        self.seed(initial_input)?;
        self.reporter
            .run_started(started.component_count, started.connection_count);

        let start_time = Instant::now();
        let mut errors = Vec::with_capacity(self.components.len());

        for position in 0..self.components.len() {
            let component = &mut self.components[position];
            match component.execute() {
                Ok(()) => {
                    self.reporter
                        .component_completed(position, component.name(), component.outputs());
                    errors.push(None);
                }
                Err(error) => {
                    self.reporter
                        .component_failed(position, component.name(), &error);
                    errors.push(Some(error.to_string()));
                }
            }

            self.propagate(ComponentId::new(self.id, position));
        }

        let failed_count = errors.iter().filter(|error| error.is_some()).count();
        let outputs = self.collect_outputs(errors);
        self.reporter
            .run_completed(self.components.len(), failed_count, start_time.elapsed());

        Ok(outputs)
    }

    fn lookup(&self, id: ComponentId) -> Result<&dyn Component, PipelineError> {
        if id.pipeline != self.id {
            return Err(PipelineError::ForeignComponent { index: id.position });
        }
        self.component(id).ok_or(PipelineError::UnknownComponent {
            index: id.position,
            component_count: self.components.len(),
        })
    }

    /// Caller guarantees at least one component.
    fn seed(&mut self, initial_input: Seed) -> Result<(), PipelineError> {
        let first = &mut self.components[0];

        let unexpected: Vec<String> = initial_input
            .keys()
            .filter(|key| !first.inputs().contains_key(key))
            .cloned()
            .collect();
        let missing: Vec<String> = first
            .inputs()
            .keys()
            .filter(|key| !initial_input.contains_key(*key))
            .map(str::to_string)
            .collect();

        if !unexpected.is_empty() && self.options.seed_policy == SeedPolicy::Reject {
            return Err(PipelineError::SeedRejected {
                component: first.name().to_string(),
                keys: unexpected,
            });
        }

        if !unexpected.is_empty() || !missing.is_empty() {
            self.reporter
                .seed_mismatch(first.name(), &unexpected, &missing);
        }

        let inputs = first.inputs_mut();
        inputs.reset();
        for (key, value) in initial_input {
            if inputs.contains_key(&key) {
                inputs.set(&key, value)?;
            }
        }

        Ok(())
    }

    /// A refused write is reported and skipped; the remaining connections still fire.
    fn propagate(&mut self, source: ComponentId) {
        let transfers: Vec<(PortRef, PortRef, Value)> = self
            .connections
            .routes_from(source)
            .filter_map(|(from, to)| {
                self.components[from.component.position]
                    .outputs()
                    .get(&from.key)
                    .cloned()
                    .map(|value| (from.clone(), to.clone(), value))
            })
            .collect();

        for (from, to, value) in transfers {
            let written = self.components[to.component.position]
                .inputs_mut()
                .set(&to.key, value);

            let from_label = PortLabel {
                component: self.components[from.component.position].name(),
                key: &from.key,
            };
            let to_label = PortLabel {
                component: self.components[to.component.position].name(),
                key: &to.key,
            };
            match written {
                Ok(()) => self.reporter.value_propagated(from_label, to_label),
                Err(error) => self.reporter.propagation_failed(from_label, to_label, &error),
            }
        }
    }

    fn collect_outputs(&self, errors: Vec<Option<String>>) -> RunOutputs {
        let mut outputs = RunOutputs::default();
        for (component, error) in self.components.iter().zip(errors) {
            outputs.push(StageOutputs {
                component: component.name().to_string(),
                outputs: component.outputs().snapshot(),
                error,
            });
        }
        outputs
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field(
                "components",
                &self.components.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("connection_count", &self.connections.len())
            .field("options", &self.options)
            .finish()
    }
}
