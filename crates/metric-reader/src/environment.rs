//! Host window/screen environment.
//!
//! The environment is addressed by dotted property paths (`window.screen.availWidth`), the same
//! way the properties are reached in a browser. [`SnapshotEnvironment`] answers those lookups
//! from a captured JSON tree so runs can be replayed without a browser.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::SnapshotError;

/// Raw answer of the host for one property path.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Undefined,
    Null,
    Number(f64),
    Bool(bool),
    /// Present but of a type no metric can carry (string, object, ...).
    Other(&'static str),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Undefined => f.write_str("undefined"),
            PropertyValue::Null => f.write_str("null"),
            PropertyValue::Number(value) => write!(f, "{value}"),
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Other(kind) => write!(f, "<{kind}>"),
        }
    }
}

impl From<&Value> for PropertyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(flag) => PropertyValue::Bool(*flag),
            Value::Number(number) => number
                .as_f64()
                .map(PropertyValue::Number)
                .unwrap_or(PropertyValue::Other("number")),
            Value::String(_) => PropertyValue::Other("string"),
            Value::Array(_) => PropertyValue::Other("array"),
            Value::Object(_) => PropertyValue::Other("object"),
        }
    }
}

/// Read-only view of the host's window and screen properties.
pub trait HostEnvironment {
    fn property(&self, path: &str) -> PropertyValue;
}

impl<T> HostEnvironment for &T
where
    T: HostEnvironment + ?Sized,
{
    fn property(&self, path: &str) -> PropertyValue {
        (**self).property(path)
    }
}

/// Host environment backed by a captured property tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapshotEnvironment {
    root: Value,
}

impl Default for SnapshotEnvironment {
    fn default() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }
}

impl SnapshotEnvironment {
    pub fn from_value(root: Value) -> Result<Self, SnapshotError> {
        if !root.is_object() {
            return Err(SnapshotError::NotAnObject);
        }
        Ok(Self { root })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, SnapshotError> {
        Self::from_value(serde_yaml::from_str(raw)?)
    }

    /// Load a snapshot file; the format follows the extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&raw),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&raw),
            other => Err(SnapshotError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Set `path` to `value`, creating intermediate objects as needed.
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let mut segments = path.split('.').peekable();
        let mut cursor = &mut self.root;
        while let Some(segment) = segments.next() {
            if !cursor.is_object() {
                *cursor = Value::Object(Map::new());
            }
            let Value::Object(map) = cursor else {
                return;
            };
            if segments.peek().is_none() {
                map.insert(segment.to_string(), value.into());
                return;
            }
            cursor = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }

    /// Drop `path` so the host reports it as undefined.
    pub fn remove(&mut self, path: &str) {
        let Some((parent, leaf)) = path.rsplit_once('.') else {
            if let Value::Object(map) = &mut self.root {
                map.remove(path);
            }
            return;
        };
        let mut cursor = &mut self.root;
        for segment in parent.split('.') {
            match cursor.get_mut(segment) {
                Some(next) => cursor = next,
                None => return,
            }
        }
        if let Value::Object(map) = cursor {
            map.remove(leaf);
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }
}

impl HostEnvironment for SnapshotEnvironment {
    fn property(&self, path: &str) -> PropertyValue {
        self.lookup(path)
            .map(PropertyValue::from)
            .unwrap_or(PropertyValue::Undefined)
    }
}
