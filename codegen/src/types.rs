use soapstub_wsdl::types::{self as wsdl, Message};

/// A binding operation paired with the port type operation it binds.
#[derive(Debug, Clone)]
pub struct BoundOperation<'a> {
    pub port: &'a str,
    pub binding: &'a wsdl::Binding,
    pub port_type: &'a wsdl::PortType,
    pub binding_operation: &'a wsdl::BindingOperation,
    pub operation: &'a wsdl::Operation,
    pub input: Option<&'a Message>,
    pub output: Option<&'a Message>,
}

#[derive(Debug, Clone)]
pub struct Port<'a> {
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub operations: Vec<BoundOperation<'a>>,
}

#[derive(Debug, Clone)]
pub struct Service<'a> {
    pub name: &'a str,
    pub ports: Vec<Port<'a>>,
}

impl<'a> Service<'a> {
    /// Deployment location: the address of the last port declaring one.
    pub fn location(&self) -> Option<&'a str> {
        self.ports.iter().rev().find_map(|port| port.location)
    }
}

impl<'a> BoundOperation<'a> {
    pub fn name(&self) -> &'a str {
        &self.operation.name
    }

    pub fn binding_name(&self) -> &'a str {
        &self.binding.name.name
    }
}
