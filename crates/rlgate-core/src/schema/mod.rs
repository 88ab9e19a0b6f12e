//! Declarative parameter schemas for the algorithm families
//!
//! Each family registers an ordered, immutable list of parameter
//! specifications: semantic type, required flag, default, and allowed
//! choices. The tables mirror the command-line interfaces of the training
//! runners the gateway feeds, so schema-directed validation agrees exactly
//! with what those runners would accept.

mod acer_acerac;
mod ppo_sac;


use crate::algorithm::AlgorithmFamily;
use serde_json::Value;

/// Semantic type of one configuration parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Str,
    Float,
    Int,
    /// Presence-means-true boolean; takes no value token.
    Flag,
    /// List of integers, each element its own token; `min_values` is the
    /// arity floor.
    IntList { min_values: usize },
}

impl ParameterKind {
    /// Type name used in mismatch messages.
    pub fn expected_name(self) -> &'static str {
        match self {
            ParameterKind::Str => "string",
            ParameterKind::Float => "float",
            ParameterKind::Int | ParameterKind::IntList { .. } => "int",
            ParameterKind::Flag => "flag",
        }
    }
}

/// Specification of a single named parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: &'static str,
    kind: ParameterKind,
    required: bool,
    default: Option<Value>,
    choices: Option<&'static [&'static str]>,
}

impl ParameterSpec {
    fn new(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: None,
            choices: None,
        }
    }

    /// A free-form string parameter.
    pub fn string(name: &'static str) -> Self {
        Self::new(name, ParameterKind::Str)
    }

    /// A float parameter.
    pub fn float(name: &'static str) -> Self {
        Self::new(name, ParameterKind::Float)
    }

    /// An integer parameter.
    pub fn int(name: &'static str) -> Self {
        Self::new(name, ParameterKind::Int)
    }

    /// A presence-means-true boolean flag.
    pub fn flag(name: &'static str) -> Self {
        Self::new(name, ParameterKind::Flag)
    }

    /// A list of integers requiring at least one element.
    pub fn int_list(name: &'static str) -> Self {
        Self::new(name, ParameterKind::IntList { min_values: 1 })
    }

    /// Relax an integer list to accept zero elements.
    pub fn allow_empty(mut self) -> Self {
        if let ParameterKind::IntList { .. } = self.kind {
            self.kind = ParameterKind::IntList { min_values: 0 };
        }
        self
    }

    /// Mark the parameter as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare the default used when the parameter is absent.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict accepted values to a closed choice set.
    pub fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn choice_set(&self) -> Option<&'static [&'static str]> {
        self.choices
    }
}

/// Ordered, immutable set of parameter specifications for one family.
#[derive(Debug, Clone)]
pub struct ParameterSchema {
    params: Vec<ParameterSpec>,
}

impl ParameterSchema {
    pub fn new(params: Vec<ParameterSpec>) -> Self {
        Self { params }
    }

    /// Look up a specification by parameter name.
    pub fn get(&self, name: &str) -> Option<&ParameterSpec> {
        self.params.iter().find(|spec| spec.name == name)
    }

    /// All specifications, in registration order.
    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    /// Declared default for a parameter, if any.
    pub fn default_for(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(ParameterSpec::default_value)
    }
}

impl AlgorithmFamily {
    /// Parameter schema shared by this family's algorithms.
    pub fn schema(self) -> &'static ParameterSchema {
        match self {
            AlgorithmFamily::AcerAcerac => acer_acerac::schema(),
            AlgorithmFamily::PpoSac => ppo_sac::schema(),
        }
    }
}
