//! Strategies deciding which action key a bound operation is dispatched
//! under.

use super::{
    config::AddressingPolicy,
    diagnostics::{Diagnostic, Diagnostics},
    error::Error,
    types::BoundOperation,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    /// Key of the `SOAP_ACTION` table. Empty when no action is declared.
    pub input: String,
    /// WS-Addressing output action.
    pub output: Option<String>,
}

pub trait ActionResolution {
    fn default_prefix(&self) -> &'static str;

    fn default_base(&self) -> &'static str;

    /// Methods take an addressing context, output actions get their own
    /// table and parameters are never flattened.
    fn addressing(&self) -> bool;

    fn resolve(
        &self,
        operation: &BoundOperation<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResolvedAction, Error>;
}

fn missing_soap_action(operation: &BoundOperation<'_>) -> Diagnostic {
    Diagnostic::MissingSoapAction {
        port: operation.port.to_owned(),
        operation: operation.name().to_owned(),
        binding: operation.binding_name().to_owned(),
    }
}

/// Dispatches on the `soap:operation` action alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SoapActionResolution;

impl ActionResolution for SoapActionResolution {
    fn default_prefix(&self) -> &'static str {
        "soap"
    }

    fn default_base(&self) -> &'static str {
        "soapstub_server::ServiceSoapBinding"
    }

    fn addressing(&self) -> bool {
        false
    }

    fn resolve(
        &self,
        operation: &BoundOperation<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResolvedAction, Error> {
        let input = match operation.binding_operation.soap_action() {
            Some(action) => action.to_owned(),
            None => {
                diagnostics.push(missing_soap_action(operation));
                String::new()
            }
        };

        Ok(ResolvedAction {
            input,
            output: None,
        })
    }
}

/// Reconciles the SOAP action with the WS-Addressing input action.
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressingActionResolution {
    pub policy: AddressingPolicy,
}

impl AddressingActionResolution {
    pub fn new(policy: AddressingPolicy) -> Self {
        Self { policy }
    }
}

impl ActionResolution for AddressingActionResolution {
    fn default_prefix(&self) -> &'static str {
        "wsa"
    }

    fn default_base(&self) -> &'static str {
        "soapstub_server::SimpleWsResource"
    }

    fn addressing(&self) -> bool {
        true
    }

    fn resolve(
        &self,
        operation: &BoundOperation<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ResolvedAction, Error> {
        let soap_action = operation.binding_operation.soap_action();
        let ws_input = operation.operation.input_action();
        let output = operation.operation.output_action().map(ToOwned::to_owned);

        let input = match (soap_action, ws_input) {
            (Some(soap_action), Some(ws_action)) if soap_action != ws_action => {
                match self.policy {
                    AddressingPolicy::Strict => {
                        return Err(Error::ActionMismatch {
                            port: operation.port.to_owned(),
                            operation: operation.name().to_owned(),
                            binding: operation.binding_name().to_owned(),
                            soap_action: soap_action.to_owned(),
                            ws_action: ws_action.to_owned(),
                        })
                    }

                    AddressingPolicy::Lenient => {
                        diagnostics.push(Diagnostic::ActionMismatch {
                            port: operation.port.to_owned(),
                            operation: operation.name().to_owned(),
                            binding: operation.binding_name().to_owned(),
                            soap_action: soap_action.to_owned(),
                            ws_action: ws_action.to_owned(),
                        });
                        soap_action.to_owned()
                    }
                }
            }

            (Some(soap_action), _) => soap_action.to_owned(),
            (None, Some(ws_action)) => ws_action.to_owned(),

            (None, None) => {
                diagnostics.push(missing_soap_action(operation));
                String::new()
            }
        };

        Ok(ResolvedAction { input, output })
    }
}
