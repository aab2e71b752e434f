//! Generates server-side SOAP dispatch modules from a WSDL interface model.
//!
//! ```no_run
//! # fn model() -> (soapstub_wsdl::types::Definition, soapstub_wsdl::types::Namespaces) { unimplemented!() }
//! use soapstub_codegen::{from_definition, AddressingPolicy, GeneratorConfig};
//!
//! let (definition, namespaces) = model();
//! let config = GeneratorConfig::default().with_addressing(AddressingPolicy::Lenient);
//! let generated = from_definition(&definition, &namespaces, &config)?;
//! println!("{}", generated.source);
//! # Ok::<(), soapstub_codegen::error::Error>(())
//! ```

use soapstub_wsdl::types::{Definition, Namespaces};

mod authorization;
mod buffer;
mod codegen;
mod config;
mod diagnostics;
mod mapper;
mod naming;
mod preprocessor;
mod resolution;
mod types;
mod writer;

pub mod error;

pub use authorization::{AuthorizationDelegate, ServiceDecorator};
pub use buffer::{ClassPreamble, DispatchTable, Header, Imports, Initializer, ServiceBuffer};
pub use config::{AddressingPolicy, GeneratorConfig};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use naming::{class_name, method_name, module_name, sanitize};
pub use resolution::{
    ActionResolution, AddressingActionResolution, ResolvedAction, SoapActionResolution,
};
pub use types::BoundOperation;
pub use writer::ServiceModuleWriter;

/// A generated server module.
#[derive(Debug, Clone)]
pub struct Generated {
    pub module_name: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn from_definition(
    definition: &Definition,
    namespaces: &Namespaces,
    config: &GeneratorConfig,
) -> Result<Generated, error::Error> {
    let mut writer = ServiceModuleWriter::new(config.clone());
    writer.from_definition(definition, namespaces)?;

    let source = writer.to_source()?;
    let module_name = writer.module_name().unwrap_or_default().to_owned();

    Ok(Generated {
        module_name,
        source,
        diagnostics: writer.take_diagnostics(),
    })
}
