#![allow(dead_code)]

use soapstub_wsdl::types::{
    Binding, BindingOperation, Definition, Field, Message, NamespacedName, Namespaces, Operation,
    OperationExtension, OperationMessage, Part, Port, PortExtension, PortType, Service, Type,
    TypeKind,
};

pub const NS: &str = "http://tempuri.org/";
pub const PORT_TYPE: &str = "CalculatorSoapType";
pub const BINDING: &str = "CalculatorSoap";

pub struct Model {
    pub definition: Definition,
    pub namespaces: Namespaces,
}

impl Model {
    pub fn new(name: Option<&str>) -> Self {
        let mut model = Self {
            definition: Definition {
                name: name.map(ToOwned::to_owned),
                target_namespace: Some(NS.to_owned()),
                ..Default::default()
            },
            namespaces: Namespaces::default(),
        };

        let port_type = model.name(PORT_TYPE);
        let binding = model.name(BINDING);
        model.definition.port_types.push(PortType {
            name: port_type.clone(),
            operations: Vec::new(),
        });
        model.definition.bindings.push(Binding {
            name: binding,
            ty: port_type,
            transport: Some("http://schemas.xmlsoap.org/soap/http".into()),
            operations: Vec::new(),
        });

        model
    }

    pub fn name(&mut self, local: &str) -> NamespacedName {
        NamespacedName::new(&mut self.namespaces, NS, local)
    }

    pub fn add_struct(&mut self, name: &str, fields: &[&str]) -> &mut Self {
        let ty = Type {
            name: self.name(name),
            kind: TypeKind::Struct(
                fields
                    .iter()
                    .map(|field| Field {
                        name: self.name(field),
                        ty: NamespacedName::new(
                            &mut self.namespaces,
                            "http://www.w3.org/2001/XMLSchema",
                            "int",
                        ),
                    })
                    .collect(),
            ),
        };
        self.definition.types.push(ty);
        self
    }

    /// Parts are `(part name, element name)`.
    pub fn add_message(&mut self, name: &str, parts: &[(&str, &str)]) -> &mut Self {
        let message = Message {
            name: self.name(name),
            parts: parts
                .iter()
                .map(|(part, element)| Part {
                    name: (*part).to_owned(),
                    element: Some(self.name(element)),
                    ty: None,
                })
                .collect(),
        };
        self.definition.messages.push(message);
        self
    }

    pub fn add_operation(
        &mut self,
        name: &str,
        input: Option<&str>,
        output: Option<&str>,
    ) -> &mut Self {
        let input = input.map(|message| OperationMessage {
            message: self.name(message),
            action: None,
        });
        let output = output.map(|message| OperationMessage {
            message: self.name(message),
            action: None,
        });

        self.definition.port_types[0].operations.push(Operation {
            name: name.to_owned(),
            documentation: None,
            input,
            output,
        });
        self
    }

    pub fn bind(&mut self, operation: &str, action: Option<&str>) -> &mut Self {
        self.definition.bindings[0].operations.push(BindingOperation {
            name: operation.to_owned(),
            extensions: action
                .map(|action| OperationExtension::SoapOperation {
                    action: action.to_owned(),
                    style: Some("document".into()),
                })
                .into_iter()
                .collect(),
        });
        self
    }

    pub fn set_ws_actions(
        &mut self,
        operation: &str,
        input: Option<&str>,
        output: Option<&str>,
    ) -> &mut Self {
        let operation = self.definition.port_types[0]
            .operations
            .iter_mut()
            .find(|candidate| candidate.name == operation)
            .expect("operation");

        if let Some(message) = operation.input.as_mut() {
            message.action = input.map(ToOwned::to_owned);
        }
        if let Some(message) = operation.output.as_mut() {
            message.action = output.map(ToOwned::to_owned);
        }
        self
    }

    pub fn document(&mut self, operation: &str, documentation: &str) -> &mut Self {
        let operation = self.definition.port_types[0]
            .operations
            .iter_mut()
            .find(|candidate| candidate.name == operation)
            .expect("operation");
        operation.documentation = Some(documentation.to_owned());
        self
    }

    pub fn add_service(&mut self, name: &str, port: &str, location: Option<&str>) -> &mut Self {
        let binding = self.name(BINDING);
        self.definition.services.push(Service {
            name: name.to_owned(),
            ports: vec![Port {
                name: port.to_owned(),
                binding,
                extensions: location
                    .map(|location| PortExtension::SoapAddress {
                        location: location.to_owned(),
                    })
                    .into_iter()
                    .collect(),
            }],
        });
        self
    }
}

/// The calculator service: `Add` with a two-field request and a one-field
/// response, `Divide` answering with two fields.
pub fn calculator() -> Model {
    let mut model = Model::new(None);

    model
        .add_struct("Add", &["intA", "intB"])
        .add_struct("AddResponse", &["AddResult"])
        .add_struct("Divide", &["intA", "intB"])
        .add_struct("DivideResponse", &["quotient", "remainder"])
        .add_message("AddSoapIn", &[("parameters", "Add")])
        .add_message("AddSoapOut", &[("parameters", "AddResponse")])
        .add_message("DivideSoapIn", &[("parameters", "Divide")])
        .add_message("DivideSoapOut", &[("parameters", "DivideResponse")])
        .add_operation("Add", Some("AddSoapIn"), Some("AddSoapOut"))
        .add_operation("Divide", Some("DivideSoapIn"), Some("DivideSoapOut"))
        .bind("Add", Some("http://tempuri.org/Add"))
        .bind("Divide", Some("http://tempuri.org/Divide"))
        .add_service(
            "Calculator",
            "CalculatorSoap",
            Some("http://www.dneonline.com/calculator.asmx"),
        );

    model
}

/// Source with all whitespace removed, for layout-independent matching.
pub fn squash(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}
