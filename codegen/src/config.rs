/// How a SOAP action that disagrees with the WS-Addressing input action is
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressingPolicy {
    /// Abort generation.
    #[default]
    Strict,
    /// Report a diagnostic and keep the SOAP action.
    Lenient,
}

/// Options for one generator instance.
///
/// `base` is a Rust path such as `soapstub_server::ServiceSoapBinding`. Its
/// parent module is also where the generated code finds the runtime items
/// (`ParsedSoap`, `Fault`, `ServiceConfig`, `Implementation`, ...).
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    pub base: Option<String>,
    pub prefix: Option<String>,
    pub extended: bool,
    pub addressing: Option<AddressingPolicy>,
    pub authorization: bool,
    pub client_module_name: Option<String>,
    pub client_module_path: Option<String>,
    pub messages_module_name: Option<String>,
    pub separate_messages: bool,
}

impl GeneratorConfig {
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    pub fn with_addressing(mut self, policy: AddressingPolicy) -> Self {
        self.addressing = Some(policy);
        self
    }

    pub fn with_authorization(mut self, authorization: bool) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn with_client_module(mut self, name: impl Into<String>) -> Self {
        self.client_module_name = Some(name.into());
        self
    }

    pub fn with_client_module_path(mut self, path: impl Into<String>) -> Self {
        self.client_module_path = Some(path.into());
        self
    }

    pub fn with_messages_module(mut self, name: impl Into<String>) -> Self {
        self.messages_module_name = Some(name.into());
        self
    }

    pub fn separate_messages(mut self, separate: bool) -> Self {
        self.separate_messages = separate;
        self
    }
}
