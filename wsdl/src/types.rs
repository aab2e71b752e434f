use super::error::Error;

#[derive(Default, Debug, Clone)]
pub struct Namespaces(Vec<String>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    namespace_idx: usize,
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum TypeKind {
    Struct(Vec<Field>),
    Simple(NamespacedName),
}

#[derive(Debug, Clone)]
pub struct Type {
    pub name: NamespacedName,
    pub kind: TypeKind,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: NamespacedName,
    pub ty: NamespacedName,
}

/// A named component of a message. Either `element` (document style) or
/// `ty` (rpc style) refers to the schema declaration describing it.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub element: Option<NamespacedName>,
    pub ty: Option<NamespacedName>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub name: NamespacedName,
    pub parts: Vec<Part>,
}

/// Reference from a port type operation to one of its messages.
#[derive(Debug, Clone)]
pub struct OperationMessage {
    pub message: NamespacedName,
    /// `wsaw:Action` declared on the input or output element.
    pub action: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Operation {
    pub name: String,
    pub documentation: Option<String>,
    pub input: Option<OperationMessage>,
    pub output: Option<OperationMessage>,
}

#[derive(Debug, Clone)]
pub struct PortType {
    pub name: NamespacedName,
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationExtension {
    SoapOperation {
        action: String,
        style: Option<String>,
    },
    Other(NamespacedName),
}

#[derive(Debug, Clone)]
pub struct BindingOperation {
    pub name: String,
    pub extensions: Vec<OperationExtension>,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub name: NamespacedName,
    pub ty: NamespacedName,
    pub transport: Option<String>,
    pub operations: Vec<BindingOperation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortExtension {
    SoapAddress { location: String },
    Other(NamespacedName),
}

#[derive(Debug, Clone)]
pub struct Port {
    pub name: String,
    pub binding: NamespacedName,
    pub extensions: Vec<PortExtension>,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,
    pub ports: Vec<Port>,
}

#[derive(Default, Debug, Clone)]
pub struct Definition {
    pub name: Option<String>,
    pub target_namespace: Option<String>,
    /// Raw document text, when the parser kept it.
    pub document: Option<String>,
    pub types: Vec<Type>,
    pub messages: Vec<Message>,
    pub port_types: Vec<PortType>,
    pub bindings: Vec<Binding>,
    pub services: Vec<Service>,
}

impl Namespaces {
    pub fn namespaces(&self) -> &[String] {
        &self.0
    }

    pub fn add_or_get(&mut self, namespace: &str) -> usize {
        if let Some(index) = self.index_of(namespace) {
            index
        } else {
            let index = self.0.len();
            self.0.push(namespace.to_owned());
            index
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    fn index_of(&self, namespace: &str) -> Option<usize> {
        self.0.iter().position(|value| value == namespace)
    }
}

impl NamespacedName {
    pub fn new(namespaces: &mut Namespaces, namespace: &str, name: impl Into<String>) -> Self {
        Self {
            namespace_idx: namespaces.add_or_get(namespace),
            name: name.into(),
        }
    }

    pub fn index(&self) -> usize {
        self.namespace_idx
    }

    /// Namespace URI of this name. Names built against another table
    /// resolve to the empty namespace.
    pub fn namespace<'a>(&self, namespaces: &'a Namespaces) -> &'a str {
        namespaces.get(self.namespace_idx).unwrap_or_default()
    }
}

impl Operation {
    pub fn input_action(&self) -> Option<&str> {
        self.input.as_ref().and_then(|input| input.action.as_deref())
    }

    pub fn output_action(&self) -> Option<&str> {
        self.output.as_ref().and_then(|output| output.action.as_deref())
    }
}

impl PortType {
    pub fn operation(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|operation| operation.name == name)
    }
}

impl BindingOperation {
    /// The first `soap:operation` action, if the binding declares one.
    pub fn soap_action(&self) -> Option<&str> {
        self.extensions.iter().find_map(|extension| match extension {
            OperationExtension::SoapOperation { action, .. } => Some(action.as_str()),
            OperationExtension::Other(_) => None,
        })
    }
}

impl Port {
    pub fn soap_address(&self) -> Option<&str> {
        self.extensions.iter().find_map(|extension| match extension {
            PortExtension::SoapAddress { location } => Some(location.as_str()),
            PortExtension::Other(_) => None,
        })
    }
}

impl Definition {
    pub fn binding(&self, name: &NamespacedName) -> Result<&Binding, Error> {
        self.bindings
            .iter()
            .find(|binding| &binding.name == name)
            .ok_or_else(|| Error::UnknownBinding(name.name.clone()))
    }

    pub fn port_type(&self, name: &NamespacedName) -> Result<&PortType, Error> {
        self.port_types
            .iter()
            .find(|port_type| &port_type.name == name)
            .ok_or_else(|| Error::UnknownPortType(name.name.clone()))
    }

    pub fn message(&self, name: &NamespacedName) -> Result<&Message, Error> {
        self.messages
            .iter()
            .find(|message| &message.name == name)
            .ok_or_else(|| Error::UnknownMessage(name.name.clone()))
    }

    pub fn schema_type(&self, name: &NamespacedName) -> Option<&Type> {
        self.types.iter().find(|ty| &ty.name == name)
    }

    /// Public field names exposed by the structural type of `part`, in
    /// declaration order. Parts whose declaration is missing or not a
    /// struct expose none.
    pub fn part_sub_names(&self, part: &Part) -> Vec<&str> {
        let declaration = part
            .element
            .as_ref()
            .or(part.ty.as_ref())
            .and_then(|name| self.schema_type(name));

        match declaration.map(|ty| &ty.kind) {
            Some(TypeKind::Struct(fields)) => {
                fields.iter().map(|field| field.name.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn parts_sub_names<'a>(&'a self, parts: &'a [Part]) -> Vec<Vec<&'a str>> {
        parts.iter().map(|part| self.part_sub_names(part)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Definition, Namespaces) {
        let mut namespaces = Namespaces::default();
        let ns = "urn:calc";

        let add = Type {
            name: NamespacedName::new(&mut namespaces, ns, "Add"),
            kind: TypeKind::Struct(vec![
                Field {
                    name: NamespacedName::new(&mut namespaces, ns, "intA"),
                    ty: NamespacedName::new(&mut namespaces, ns, "int"),
                },
                Field {
                    name: NamespacedName::new(&mut namespaces, ns, "intB"),
                    ty: NamespacedName::new(&mut namespaces, ns, "int"),
                },
            ]),
        };

        let token = Type {
            name: NamespacedName::new(&mut namespaces, ns, "Token"),
            kind: TypeKind::Simple(NamespacedName::new(&mut namespaces, ns, "string")),
        };

        let definition = Definition {
            types: vec![add, token],
            ..Default::default()
        };

        (definition, namespaces)
    }

    #[test]
    fn namespaces_are_interned() {
        let mut namespaces = Namespaces::default();
        let a = NamespacedName::new(&mut namespaces, "urn:a", "x");
        let b = NamespacedName::new(&mut namespaces, "urn:b", "y");
        let c = NamespacedName::new(&mut namespaces, "urn:a", "z");

        assert_eq!(a.index(), c.index());
        assert_ne!(a.index(), b.index());
        assert_eq!(b.namespace(&namespaces), "urn:b");
        assert_eq!(namespaces.namespaces().len(), 2);
    }

    #[test]
    fn struct_parts_expose_field_names_in_order() {
        let (definition, mut namespaces) = sample();
        let part = Part {
            name: "parameters".into(),
            element: Some(NamespacedName::new(&mut namespaces, "urn:calc", "Add")),
            ty: None,
        };

        assert_eq!(definition.part_sub_names(&part), vec!["intA", "intB"]);
    }

    #[test]
    fn simple_and_unknown_parts_expose_nothing() {
        let (definition, mut namespaces) = sample();
        let simple = Part {
            name: "token".into(),
            element: None,
            ty: Some(NamespacedName::new(&mut namespaces, "urn:calc", "Token")),
        };
        let unknown = Part {
            name: "other".into(),
            element: Some(NamespacedName::new(&mut namespaces, "urn:calc", "Missing")),
            ty: None,
        };

        assert!(definition.part_sub_names(&simple).is_empty());
        assert!(definition.part_sub_names(&unknown).is_empty());
    }

    #[test]
    fn unknown_binding_is_reported_by_name() {
        let (definition, mut namespaces) = sample();
        let name = NamespacedName::new(&mut namespaces, "urn:calc", "CalcSoap");

        match definition.binding(&name) {
            Err(Error::UnknownBinding(binding)) => assert_eq!(binding, "CalcSoap"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn soap_action_is_first_soap_operation_extension() {
        let mut namespaces = Namespaces::default();
        let operation = BindingOperation {
            name: "Add".into(),
            extensions: vec![
                OperationExtension::Other(NamespacedName::new(
                    &mut namespaces,
                    "urn:ext",
                    "policy",
                )),
                OperationExtension::SoapOperation {
                    action: "urn:calc/Add".into(),
                    style: Some("document".into()),
                },
            ],
        };

        assert_eq!(operation.soap_action(), Some("urn:calc/Add"));
    }
}
