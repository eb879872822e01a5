//! Environment variable layering.
//!
//! Identity and network settings can arrive from the process environment or
//! from a `.env` file at the project root. Layers keep the precedence
//! explicit and track where each value came from.

use std::collections::HashMap;

/// A single source of environment variables.
///
/// # Example
///
/// ```
/// use chainrig::config::EnvLayer;
///
/// let mut layer = EnvLayer::new(".env");
/// layer.set("PRIVATEKEY", "0xabc123");
///
/// assert!(layer.contains("PRIVATEKEY"));
/// assert_eq!(layer.source, ".env");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    /// Variables in this layer.
    pub vars: HashMap<String, String>,
    /// Source of this layer (for diagnostics).
    pub source: String,
}

impl EnvLayer {
    /// Create a new layer with the given source name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            vars: HashMap::new(),
            source: source.into(),
        }
    }

    /// Create a layer from an existing variable map.
    pub fn from_map(source: impl Into<String>, vars: HashMap<String, String>) -> Self {
        Self {
            vars,
            source: source.into(),
        }
    }

    /// Add a variable to this layer.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Check if this layer has a variable.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}

/// Priority-ordered stack of environment layers.
///
/// The first layer pushed has lowest priority, the last has highest. The
/// capture step pushes the `.env` file first and the process environment on
/// top, so exported variables win over file entries.
///
/// # Example
///
/// ```
/// use chainrig::config::{EnvLayer, EnvLayerStack};
///
/// let mut stack = EnvLayerStack::new();
///
/// let mut file = EnvLayer::new(".env");
/// file.set("MNEMONIC", "from file");
/// stack.push(file);
///
/// let mut process = EnvLayer::new("process env");
/// process.set("MNEMONIC", "from shell");
/// stack.push(process);
///
/// assert_eq!(stack.get("MNEMONIC"), Some("from shell"));
/// assert_eq!(stack.source_of("MNEMONIC"), Some("process env"));
/// ```
#[derive(Default)]
pub struct EnvLayerStack {
    layers: Vec<EnvLayer>,
}

impl EnvLayerStack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { layers: vec![] }
    }

    /// Add a layer. Later layers have higher priority.
    pub fn push(&mut self, layer: EnvLayer) {
        self.layers.push(layer);
    }

    /// Get the resolved value for a variable.
    ///
    /// Returns the value from the highest priority layer that contains the
    /// key. Presence with an empty value is still presence; callers decide
    /// whether an empty string counts as set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.vars.get(key).map(String::as_str))
    }

    /// Get the source of a variable's value.
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .rev()
            .find(|layer| layer.vars.contains_key(key))
            .map(|layer| layer.source.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_layers_override_lower() {
        let mut stack = EnvLayerStack::new();

        let mut file = EnvLayer::new(".env");
        file.set("CHAINSTACK_PROVIDER", "https://file.example/rpc");
        stack.push(file);

        let mut process = EnvLayer::new("process env");
        process.set("CHAINSTACK_PROVIDER", "https://shell.example/rpc");
        stack.push(process);

        assert_eq!(
            stack.get("CHAINSTACK_PROVIDER"),
            Some("https://shell.example/rpc")
        );
    }

    #[test]
    fn lower_layer_fills_gaps() {
        let mut stack = EnvLayerStack::new();

        let mut file = EnvLayer::new(".env");
        file.set("MNEMONIC", "file phrase");
        stack.push(file);

        stack.push(EnvLayer::new("process env"));

        assert_eq!(stack.get("MNEMONIC"), Some("file phrase"));
        assert_eq!(stack.source_of("MNEMONIC"), Some(".env"));
    }

    #[test]
    fn missing_key_returns_none() {
        let stack = EnvLayerStack::new();
        assert_eq!(stack.get("MISSING"), None);
        assert_eq!(stack.source_of("MISSING"), None);
    }

    #[test]
    fn empty_value_is_still_present() {
        let mut stack = EnvLayerStack::new();
        let mut layer = EnvLayer::new(".env");
        layer.set("MNEMONIC", "");
        stack.push(layer);

        assert_eq!(stack.get("MNEMONIC"), Some(""));
    }

    #[test]
    fn from_map_builds_layer() {
        let mut vars = HashMap::new();
        vars.insert("REPORT_GAS".to_string(), "1".to_string());
        let layer = EnvLayer::from_map("process env", vars);

        assert!(layer.contains("REPORT_GAS"));
    }
}
