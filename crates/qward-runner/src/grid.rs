//! Parameter grids for experiment sweeps.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RunnerError, RunnerResult};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(String),
}

impl ParameterValue {
    /// Get the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParameterValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a float (integers widen).
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(v) => Some(*v),
            ParameterValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Int(v) => write!(f, "{v}"),
            ParameterValue::Float(v) => write!(f, "{v}"),
            ParameterValue::Bool(v) => write!(f, "{v}"),
            ParameterValue::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        ParameterValue::Int(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        ParameterValue::Float(v)
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        ParameterValue::Bool(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::Str(v.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        ParameterValue::Str(v)
    }
}

/// One combination of parameter values, in axis order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, ParameterValue)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Look up a parameter, failing if it is absent.
    pub fn require(&self, name: &str) -> RunnerResult<&ParameterValue> {
        self.get(name)
            .ok_or_else(|| RunnerError::UnknownParameter(name.to_string()))
    }

    /// Iterate over (name, value) pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Parameter names in axis order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An ordered grid of parameter axes.
///
/// `combinations` enumerates the Cartesian product in deterministic
/// order: the last axis varies fastest. An empty grid yields exactly
/// one empty combination, so a sweep without parameters still runs
/// once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterGrid {
    axes: Vec<(String, Vec<ParameterValue>)>,
}

impl ParameterGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis. Fails if the axis has no values.
    pub fn axis(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<ParameterValue>>,
    ) -> RunnerResult<Self> {
        let name = name.into();
        let values: Vec<ParameterValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(RunnerError::EmptyAxis(name));
        }
        self.axes.push((name, values));
        Ok(self)
    }

    /// Axis names in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(|(n, _)| n.as_str())
    }

    /// Number of combinations the grid expands to.
    pub fn num_combinations(&self) -> usize {
        self.axes.iter().map(|(_, values)| values.len()).product()
    }

    /// Expand the grid into all combinations, in deterministic order.
    pub fn combinations(&self) -> Vec<ParameterSet> {
        let mut combos = vec![ParameterSet::new()];
        for (name, values) in &self.axes {
            let mut next = Vec::with_capacity(combos.len() * values.len());
            for combo in &combos {
                for value in values {
                    let mut extended = combo.clone();
                    extended.insert(name.clone(), value.clone());
                    next.push(extended);
                }
            }
            combos = next;
        }
        combos
    }
}
