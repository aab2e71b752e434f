use soapstub_wsdl::error as wsdl;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No service defined")]
    NoServiceDefined,

    #[error("could not determine a service name")]
    UnnamedModule,

    #[error(
        "Port({port}) PortType({port_type}) missing operation({operation}) defined in Binding({binding})"
    )]
    BindingPortTypeMismatch {
        port: String,
        port_type: String,
        operation: String,
        binding: String,
    },

    #[error(
        "Port({port}) operation({operation}) in Binding({binding}) soapAction({soap_action}) MUST match WS-Action({ws_action})"
    )]
    ActionMismatch {
        port: String,
        operation: String,
        binding: String,
        soap_action: String,
        ws_action: String,
    },

    #[error(
        "The subnames within message {message}'s part were not found. Message is the output of operation {operation}"
    )]
    MissingSubnames { message: String, operation: String },

    #[error("Error resolving interface model")]
    Model(#[from] wsdl::Error),

    #[error("Generated module is not valid Rust")]
    Syntax(#[from] syn::Error),

    #[error("Error writing generated module")]
    Format(#[from] std::fmt::Error),
}
