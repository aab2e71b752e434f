//! Typed, append-only regions of the generated module.

use super::diagnostics::{Diagnostic, Diagnostics};
use indexmap::IndexMap;
use proc_macro2::{Ident, TokenStream};
use std::hash::Hash;

const BANNER: &str = "//////////////////////////////////////////////////";

#[derive(Debug, Default, Clone)]
pub struct Header {
    lines: Vec<String>,
}

impl Header {
    /// Appends `text` as a line comment.
    pub fn push(&mut self, text: &str) {
        let line = format!("// {}", text);
        self.lines.push(line.trim_end().to_owned());
    }

    pub fn banner(&mut self) {
        self.lines.push(BANNER.to_owned());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Imports {
    /// Module glob-imported for the message types.
    pub messages: Option<syn::Path>,
    /// Module providing the base type and the server runtime items.
    pub runtime: Option<syn::Path>,
    items: Vec<Ident>,
}

impl Imports {
    pub fn add_item(&mut self, item: Ident) {
        if !self.items.contains(&item) {
            self.items.push(item);
        }
    }

    pub fn items(&self) -> &[Ident] {
        &self.items
    }
}

/// Insertion-ordered map from a wire key to a method name. A later
/// registration of the same key replaces the earlier method.
#[derive(Debug, Clone)]
pub struct DispatchTable<K> {
    pub name: &'static str,
    entries: IndexMap<K, String>,
}

impl<K: Hash + Eq + std::fmt::Debug> DispatchTable<K> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: IndexMap::new(),
        }
    }

    pub fn register(&mut self, key: K, method: &str, diagnostics: &mut Diagnostics) {
        let description = format!("{:?}", key);
        if let Some(previous) = self.entries.insert(key, method.to_owned()) {
            if previous != method {
                diagnostics.push(Diagnostic::DispatchKeyOverwritten {
                    table: self.name,
                    key: description,
                    previous,
                    method: method.to_owned(),
                });
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&K, &str)> {
        self.entries.iter().map(|(key, method)| (key, method.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ClassPreamble {
    pub name: Ident,
    pub fields: Vec<TokenStream>,
    pub soap_action: DispatchTable<String>,
    pub ws_action: Option<DispatchTable<String>>,
    pub root: DispatchTable<(String, String)>,
    pub document: Option<String>,
}

impl ClassPreamble {
    pub fn new(name: Ident) -> Self {
        Self {
            name,
            fields: Vec::new(),
            soap_action: DispatchTable::new("SOAP_ACTION"),
            ws_action: None,
            root: DispatchTable::new("ROOT"),
            document: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Initializer {
    pub base: Ident,
    /// Path component of the deployment address, used when the caller
    /// passes no override.
    pub default_post: Option<String>,
    pub fields: Vec<TokenStream>,
    /// Further items emitted right after `new`.
    pub items: Vec<TokenStream>,
}

impl Initializer {
    pub fn new(base: Ident) -> Self {
        Self {
            base,
            default_post: None,
            fields: Vec::new(),
            items: Vec::new(),
        }
    }
}

/// Everything generated for one WSDL service.
#[derive(Debug, Clone)]
pub struct ServiceBuffer {
    pub service: String,
    pub preamble: ClassPreamble,
    pub initializer: Initializer,
    pub methods: Vec<TokenStream>,
}

impl ServiceBuffer {
    pub fn new(service: impl Into<String>, class: Ident, base: Ident) -> Self {
        Self {
            service: service.into(),
            preamble: ClassPreamble::new(class),
            initializer: Initializer::new(base),
            methods: Vec::new(),
        }
    }

    pub fn new_method(&mut self, method: TokenStream) {
        self.methods.push(method);
    }
}
