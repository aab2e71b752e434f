use super::{error::Error, types};
use soapstub_wsdl::types as wsdl;

/// Resolves every service's ports against their bindings and port types.
pub fn preprocess(definition: &wsdl::Definition) -> Result<Vec<types::Service<'_>>, Error> {
    let mut services = Vec::new();

    for service in &definition.services {
        let mut ports = Vec::new();

        for port in &service.ports {
            let binding = definition.binding(&port.binding)?;
            let port_type = definition.port_type(&binding.ty)?;

            let mut operations = Vec::new();
            for binding_operation in &binding.operations {
                let operation = port_type.operation(&binding_operation.name).ok_or_else(|| {
                    Error::BindingPortTypeMismatch {
                        port: port.name.clone(),
                        port_type: port_type.name.name.clone(),
                        operation: binding_operation.name.clone(),
                        binding: binding.name.name.clone(),
                    }
                })?;

                let input = operation
                    .input
                    .as_ref()
                    .map(|input| definition.message(&input.message))
                    .transpose()?;
                let output = operation
                    .output
                    .as_ref()
                    .map(|output| definition.message(&output.message))
                    .transpose()?;

                operations.push(types::BoundOperation {
                    port: &port.name,
                    binding,
                    port_type,
                    binding_operation,
                    operation,
                    input,
                    output,
                });
            }

            ports.push(types::Port {
                name: &port.name,
                location: port.soap_address(),
                operations,
            });
        }

        services.push(types::Service {
            name: &service.name,
            ports,
        });
    }

    Ok(services)
}
