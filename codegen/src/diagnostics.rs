//! Non-fatal findings collected while generating.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("Port({port}) operation({operation}) defined in Binding({binding}) missing soapAction")]
    MissingSoapAction {
        port: String,
        operation: String,
        binding: String,
    },

    #[error(
        "Port({port}) operation({operation}) in Binding({binding}) soapAction({soap_action}) != WS-Action({ws_action})"
    )]
    ActionMismatch {
        port: String,
        operation: String,
        binding: String,
        soap_action: String,
        ws_action: String,
    },

    #[error("Message({message}) of operation({operation}) has more than one return value")]
    MultipleOutputParts { message: String, operation: String },

    #[error("{table} key {key} remapped from {previous} to {method}")]
    DispatchKeyOverwritten {
        table: &'static str,
        key: String,
        previous: String,
        method: String,
    },
}

/// Append-only sink. Every diagnostic is also logged as it arrives.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.0.push(diagnostic);
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}
