//! Argument slots and the per-invocation bundle that owns them.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::error::{BundleError, TypeError};
use super::kind::ArgumentKind;
use super::value::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    #[default]
    Optional,
    Mandatory,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    #[default]
    Single,
    Multiple,
}

/// How many values a slot may and must hold after a successful parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Multiplicity {
    pub requiredness: Requiredness,
    pub count: Count,
}

impl Multiplicity {
    pub const OPTIONAL_SINGLE: Self = Self::new(Requiredness::Optional, Count::Single);
    pub const MANDATORY_SINGLE: Self = Self::new(Requiredness::Mandatory, Count::Single);
    pub const OPTIONAL_MULTIPLE: Self = Self::new(Requiredness::Optional, Count::Multiple);
    pub const MANDATORY_MULTIPLE: Self = Self::new(Requiredness::Mandatory, Count::Multiple);

    pub const fn new(requiredness: Requiredness, count: Count) -> Self {
        Self {
            requiredness,
            count,
        }
    }

    #[inline]
    pub fn is_mandatory(self) -> bool {
        self.requiredness == Requiredness::Mandatory
    }

    #[inline]
    pub fn is_multiple(self) -> bool {
        self.count == Count::Multiple
    }

    /// Whether a slot already holding `held` values may take one more.
    #[inline]
    pub fn allows_another(self, held: usize) -> bool {
        self.is_multiple() || held == 0
    }
}

/// A named, typed binding target.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    kind: ArgumentKind,
    multiplicity: Multiplicity,
    description: Option<String>,
    values: Vec<Value>,
}

impl Argument {
    pub fn new(name: impl Into<String>, kind: ArgumentKind, multiplicity: Multiplicity) -> Self {
        Self {
            name: name.into(),
            kind,
            multiplicity,
            description: None,
            values: Vec::new(),
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, ArgumentKind::Flag, Multiplicity::OPTIONAL_SINGLE)
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ArgumentKind {
        &self.kind
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.multiplicity
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_flag(&self) -> bool {
        self.kind.is_flag()
    }

    /// Converts `text` with this slot's kind without binding it.
    pub fn accept(&self, text: &str) -> Result<Value, TypeError> {
        self.kind.accept(text)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn is_set(&self) -> bool {
        !self.values.is_empty()
    }

    pub fn first(&self) -> Option<&Value> {
        self.values.first()
    }
}

/// Uniquely named slots for one command invocation, in declaration order.
///
/// Written only by the parser engine when a parse succeeds; read-only to
/// everyone else afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentBundle {
    arguments: IndexMap<String, Argument>,
}

impl ArgumentBundle {
    /// Builds a bundle, rejecting empty and duplicate names up front.
    pub fn new(arguments: impl IntoIterator<Item = Argument>) -> Result<Self, BundleError> {
        let mut map = IndexMap::new();
        for arg in arguments {
            if arg.name.is_empty() {
                return Err(BundleError::EmptyName);
            }
            if map.contains_key(&arg.name) {
                return Err(BundleError::DuplicateName(arg.name));
            }
            map.insert(arg.name.clone(), arg);
        }
        Ok(Self { arguments: map })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.arguments.get(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.arguments.get_index_of(name)
    }

    pub fn get_index(&self, index: usize) -> Option<&Argument> {
        self.arguments.get_index(index).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.values()
    }

    /// Bound values of `name`; empty for unknown or unbound slots.
    pub fn values(&self, name: &str) -> &[Value] {
        self.arguments.get(name).map_or(&[], |a| a.values())
    }

    /// Forgets every bound value.
    pub fn clear(&mut self) {
        for arg in self.arguments.values_mut() {
            arg.values.clear();
        }
    }

    /// Appends a value to the slot at `index`, enforcing its count.
    pub fn bind(&mut self, index: usize, value: Value) -> Result<(), BundleError> {
        let Some((name, arg)) = self.arguments.get_index_mut(index) else {
            return Err(BundleError::UnknownArgument(format!("#{index}")));
        };
        if !arg.multiplicity.allows_another(arg.values.len()) {
            return Err(BundleError::TooManyValues(name.clone()));
        }
        arg.values.push(value);
        Ok(())
    }

    /// Replaces all bound values at once, in binding order.
    ///
    /// Either every value is bound or the bundle is left cleared.
    pub fn commit(
        &mut self,
        bindings: impl IntoIterator<Item = (usize, Value)>,
    ) -> Result<(), BundleError> {
        self.clear();
        for (index, value) in bindings {
            if let Err(e) = self.bind(index, value) {
                self.clear();
                return Err(e);
            }
        }
        Ok(())
    }

    /// Reports the first mandatory slot that holds no value.
    pub fn check_mandatory(&self) -> Result<(), BundleError> {
        match self
            .iter()
            .find(|a| a.multiplicity.is_mandatory() && !a.is_set())
        {
            Some(a) => Err(BundleError::MissingMandatory(a.name.clone())),
            None => Ok(()),
        }
    }
}

impl Serialize for ArgumentBundle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.arguments.len()))?;
        for (name, arg) in &self.arguments {
            map.serialize_entry(name, &arg.values)?;
        }
        map.end()
    }
}
