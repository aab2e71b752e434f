use super::{
    authorization::{AuthorizationDelegate, ServiceDecorator},
    buffer::{DispatchTable, Header, Imports, ServiceBuffer},
    codegen,
    config::GeneratorConfig,
    diagnostics::{Diagnostic, Diagnostics},
    error::Error,
    mapper::OperationMapper,
    naming, preprocessor,
    resolution::{ActionResolution, AddressingActionResolution, SoapActionResolution},
    types,
};
use proc_macro2::Ident;
use quote::{format_ident, quote};
use soapstub_wsdl::types::{Definition, Namespaces};
use std::fmt::Write;
use url::Url;

const RUNTIME_ITEMS: &[&str] = &["Fault", "Implementation", "ParsedSoap", "ServiceConfig"];

/// Builds a server dispatch module from an interface model.
///
/// The writer keeps the buffers of the last run. [`from_definition`] resets
/// them before generating and discards them again when generation fails,
/// so [`write`] only ever sees a complete run.
///
/// [`from_definition`]: ServiceModuleWriter::from_definition
/// [`write`]: ServiceModuleWriter::write
pub struct ServiceModuleWriter {
    config: GeneratorConfig,
    resolution: Box<dyn ActionResolution>,
    decorators: Vec<Box<dyn ServiceDecorator>>,

    module_name: Option<String>,
    header: Header,
    imports: Imports,
    services: Vec<ServiceBuffer>,
    diagnostics: Diagnostics,
}

/// Splits a base type path into its module and type name.
fn split_base(base: &str) -> Result<(Option<syn::Path>, Ident), Error> {
    let (module, name): (Option<syn::Path>, &str) = match base.rsplit_once("::") {
        Some((module, name)) => (Some(syn::parse_str(module)?), name),
        None => (None, base),
    };

    Ok((module, syn::parse_str(name)?))
}

/// Path of the deployment address, the part a server is mounted on.
fn address_path(location: &str) -> String {
    match Url::parse(location) {
        Ok(url) => url.path().to_owned(),
        Err(err) => {
            tracing::debug!(location, %err, "using address as a path");
            location.to_owned()
        }
    }
}

impl std::fmt::Debug for ServiceModuleWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceModuleWriter")
            .field("config", &self.config)
            .field("module_name", &self.module_name)
            .field("services", &self.services.len())
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl ServiceModuleWriter {
    pub fn new(config: GeneratorConfig) -> Self {
        let resolution: Box<dyn ActionResolution> = match config.addressing {
            Some(policy) => Box::new(AddressingActionResolution::new(policy)),
            None => Box::new(SoapActionResolution),
        };

        let mut decorators: Vec<Box<dyn ServiceDecorator>> = Vec::new();
        if config.authorization {
            decorators.push(Box::new(AuthorizationDelegate));
        }

        Self {
            config,
            resolution,
            decorators,

            module_name: None,
            header: Header::default(),
            imports: Imports::default(),
            services: Vec::new(),
            diagnostics: Diagnostics::default(),
        }
    }

    pub fn with_resolution(mut self, resolution: Box<dyn ActionResolution>) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_decorator(mut self, decorator: Box<dyn ServiceDecorator>) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub fn services(&self) -> &[ServiceBuffer] {
        &self.services
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics).into_vec()
    }

    pub fn reset(&mut self) {
        self.module_name = None;
        self.header = Header::default();
        self.imports = Imports::default();
        self.services.clear();
        self.diagnostics.clear();
    }

    fn prefix(&self) -> &str {
        self.config
            .prefix
            .as_deref()
            .unwrap_or_else(|| self.resolution.default_prefix())
    }

    fn base(&self) -> &str {
        self.config
            .base
            .as_deref()
            .unwrap_or_else(|| self.resolution.default_base())
    }

    pub fn from_definition(
        &mut self,
        definition: &Definition,
        namespaces: &Namespaces,
    ) -> Result<(), Error> {
        self.reset();

        if let Err(err) = self.generate(definition, namespaces) {
            tracing::error!(%err, "generation aborted");
            self.reset();
            return Err(err);
        }

        tracing::info!(
            module = self.module_name.as_deref().unwrap_or_default(),
            services = self.services.len(),
            diagnostics = self.diagnostics.as_slice().len(),
            "generated service module"
        );
        Ok(())
    }

    fn generate(&mut self, definition: &Definition, namespaces: &Namespaces) -> Result<(), Error> {
        if definition.services.is_empty() {
            return Err(Error::NoServiceDefined);
        }

        let module_name = naming::module_name(definition)?;
        self.set_up_header(&module_name);
        self.set_up_imports(definition)?;
        self.module_name = Some(module_name);

        let (_, base) = split_base(self.base())?;
        let prefix = self.prefix().to_owned();
        let mapper = OperationMapper {
            prefix: &prefix,
            extended: self.config.extended,
            resolution: self.resolution.as_ref(),
        };

        let mut services = Vec::new();
        for service in preprocessor::preprocess(definition)? {
            tracing::debug!(service = service.name, ports = service.ports.len(), "service");

            let mut buffer =
                ServiceBuffer::new(service.name, naming::class_ident(service.name), base.clone());
            self.set_up_class_def(&mut buffer, definition);
            self.set_up_init_def(&mut buffer, &service);

            for port in &service.ports {
                for operation in &port.operations {
                    mapper.map(
                        definition,
                        namespaces,
                        operation,
                        &mut buffer,
                        &mut self.diagnostics,
                    )?;
                }
            }

            services.push(buffer);
        }

        for buffer in &mut services {
            for decorator in &self.decorators {
                decorator.decorate(buffer, &mut self.imports);
            }
        }

        self.services = services;
        Ok(())
    }

    fn set_up_header(&mut self, module_name: &str) {
        self.header.banner();
        self.header.push(&format!("{}.rs", module_name));
        self.header
            .push(&format!("     Generated by {}", std::any::type_name::<Self>()));
        self.header.push("");
        self.header.banner();
    }

    fn set_up_imports(&mut self, definition: &Definition) -> Result<(), Error> {
        let module = if self.config.separate_messages {
            match &self.config.messages_module_name {
                Some(name) => name.clone(),
                None => naming::messages_module_name(definition)?,
            }
        } else {
            match &self.config.client_module_name {
                Some(name) => name.clone(),
                None => naming::client_module_name(definition)?,
            }
        };

        let messages = match &self.config.client_module_path {
            Some(path) => format!("{}::{}", path, module),
            None => module,
        };
        self.imports.messages = Some(syn::parse_str(&messages)?);

        let (runtime, base) = split_base(self.base())?;
        self.imports.runtime = runtime;
        self.imports.add_item(base);
        for item in RUNTIME_ITEMS {
            self.imports.add_item(format_ident!("{}", item));
        }
        if self.resolution.addressing() {
            self.imports.add_item(format_ident!("Address"));
        }

        Ok(())
    }

    fn set_up_class_def(&self, buffer: &mut ServiceBuffer, definition: &Definition) {
        let base = &buffer.initializer.base;
        let preamble = &mut buffer.preamble;

        preamble.fields.push(quote! { base: #base });
        preamble.fields.push(quote! { implementation: Option<I> });
        if self.resolution.addressing() {
            preamble.ws_action = Some(DispatchTable::new("WS_ACTION"));
        }
        preamble.document = definition.document.clone();
    }

    fn set_up_init_def(&self, buffer: &mut ServiceBuffer, service: &types::Service<'_>) {
        let initializer = &mut buffer.initializer;

        initializer.default_post = service.location().map(address_path);
        initializer
            .fields
            .push(quote! { implementation: config.implementation });
    }

    pub fn write<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        codegen::write_module(out, &self.header, &self.imports, &self.services)
    }

    pub fn to_source(&self) -> Result<String, Error> {
        let mut source = String::new();
        self.write(&mut source)?;
        Ok(source)
    }
}
