//! Tool trait definition

use async_trait::async_trait;

/// A callable capability exposed to the reasoning collaborator.
///
/// Tools are total functions over text: `invoke` never fails and never
/// panics. A tool that cannot produce useful output returns a descriptive
/// message instead, since the collaborator has no use for an error it
/// cannot act on.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Stable capability name the collaborator's tool selection discovers
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Invoke the tool with a text input, producing a text output
    async fn invoke(&self, input: &str) -> String;
}
