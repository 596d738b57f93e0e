//! Structured style declarations produced by rule handlers.

/// A single declaration entry value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A literal CSS value string.
    Literal(String),
    /// A nested block keyed by a selector fragment
    /// (e.g. `&::-webkit-scrollbar`).
    Block(Declaration),
}

/// The structured output of a successful resolution.
///
/// A declaration is an ordered map from CSS property names to values.
/// An entry may also be a nested block: the key is then a selector
/// fragment and the value a whole inner declaration.
///
/// Declarations are immutable once a handler returns them; hooks build
/// new declarations instead of mutating in place, so two resolutions of
/// the same token always compare structurally equal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Declaration {
    entries: Vec<(String, Value)>,
}

impl Declaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a literal value.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .push((property.into(), Value::Literal(value.into())));
        self
    }

    /// Add a property only when a value is present.
    ///
    /// Absent optional captures leave the property unset rather than
    /// producing an empty or zero value.
    pub fn with_opt(self, property: impl Into<String>, value: Option<String>) -> Self {
        match value {
            Some(value) => self.with(property, value),
            None => self,
        }
    }

    /// Add a nested block under a selector fragment.
    pub fn with_block(mut self, selector: impl Into<String>, block: Declaration) -> Self {
        self.entries.push((selector.into(), Value::Block(block)));
        self
    }

    /// Look up a literal value by property name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries.iter().find_map(|(name, value)| match value {
            Value::Literal(v) if name == property => Some(v.as_str()),
            _ => None,
        })
    }

    /// Look up a nested block by selector fragment.
    pub fn get_block(&self, selector: &str) -> Option<&Declaration> {
        self.entries.iter().find_map(|(name, value)| match value {
            Value::Block(block) if name == selector => Some(block),
            _ => None,
        })
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the declaration has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the declaration with every literal value passed through
    /// `f`, recursing into nested blocks.
    pub fn map_literals<F: Fn(&str) -> String>(&self, f: &F) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Literal(v) => Value::Literal(f(v)),
                    Value::Block(block) => Value::Block(block.map_literals(f)),
                };
                (name.clone(), value)
            })
            .collect();
        Self { entries }
    }
}
