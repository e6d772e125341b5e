//! Tool registry

use super::traits::Tool;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping stable capability names to callable tools.
///
/// Populated at composition time and handed to the reasoning collaborator
/// as an explicit list; no runtime reflection is involved.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Names of all registered tools, sorted for stable iteration
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.values().map(|t| t.name()).collect();
        names.sort_unstable();
        names
    }

    /// Name/description pairs for handing to the collaborator
    pub fn descriptions(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = self
            .tools
            .values()
            .map(|t| (t.name().to_string(), t.description().to_string()))
            .collect();
        entries.sort();
        entries
    }

    /// Export name/description entries as JSON values, the shape most
    /// collaborator APIs expect for tool declarations
    pub fn schemas(&self) -> Vec<serde_json::Value> {
        self.descriptions()
            .into_iter()
            .map(|(name, description)| {
                serde_json::json!({
                    "name": name,
                    "description": description,
                })
            })
            .collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NamedTool {
        tool_name: &'static str,
    }

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            self.tool_name
        }

        fn description(&self) -> &str {
            "a test tool"
        }

        async fn invoke(&self, _input: &str) -> String {
            String::new()
        }
    }

    #[test]
    fn register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool { tool_name: "alpha" }));

        assert!(registry.get("alpha").is_some());
        assert!(registry.get("beta").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_replaces_same_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool { tool_name: "alpha" }));
        registry.register(Arc::new(NamedTool { tool_name: "alpha" }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool { tool_name: "zeta" }));
        registry.register(Arc::new(NamedTool { tool_name: "alpha" }));
        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn schemas_carry_name_and_description() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(NamedTool { tool_name: "alpha" }));

        let schemas = registry.schemas();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0]["name"], "alpha");
        assert_eq!(schemas[0]["description"], "a test tool");
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.descriptions().is_empty());
    }
}
