//! Identifiers derived from interface names.

use super::error::Error;
use heck::ToSnakeCase;
use proc_macro2::Ident;
use quote::format_ident;
use soapstub_wsdl::types::Definition;

pub const SERVER_MODULE_SUFFIX: &str = "_services_server";
const CLIENT_MODULE_SUFFIX: &str = "_client";
const MESSAGES_MODULE_SUFFIX: &str = "_messages";

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Protected form of `name` usable as a Rust identifier.
pub fn sanitize(name: &str) -> String {
    let mut result: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    if result.is_empty() {
        return "_unnamed".to_owned();
    }

    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }

    if is_keyword(&result) || result == "_" {
        result.push('_');
    }

    result
}

/// Strips the prefix of a `prefix:local` name.
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

pub fn method_name(prefix: &str, operation: &str) -> String {
    format!("{}_{}", prefix, sanitize(operation))
}

pub fn attribute_ident(name: &str) -> Ident {
    format_ident!("{}", sanitize(name))
}

/// Local holding an input part inside an extended-mode body. The prefix
/// keeps part names apart from `request`, `result` and `implementation`.
pub fn input_local(part: &str) -> Ident {
    format_ident!("in_{}", sanitize(part))
}

/// Local capturing an output part inside an extended-mode body.
pub fn output_local(part: &str) -> Ident {
    format_ident!("out_{}", sanitize(part))
}

/// Type name for an NCName: illegal characters split the name into
/// segments and each segment starts with a capital letter.
pub fn class_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for segment in local_name(name)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
    {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars);
        }
    }

    sanitize(&result)
}

pub fn class_ident(name: &str) -> Ident {
    format_ident!("{}", class_name(name))
}

/// Module base name: the definition name, falling back to the first
/// service.
pub fn module_base_name(definition: &Definition) -> Option<String> {
    let name = definition
        .name
        .as_deref()
        .or_else(|| definition.services.first().map(|service| service.name.as_str()))?;

    let name = local_name(name).to_snake_case();
    if name.is_empty() {
        None
    } else {
        Some(sanitize(&name))
    }
}

pub fn module_name(definition: &Definition) -> Result<String, Error> {
    module_base_name(definition)
        .map(|base| format!("{}{}", base, SERVER_MODULE_SUFFIX))
        .ok_or(Error::UnnamedModule)
}

pub fn client_module_name(definition: &Definition) -> Result<String, Error> {
    module_base_name(definition)
        .map(|base| format!("{}{}", base, CLIENT_MODULE_SUFFIX))
        .ok_or(Error::UnnamedModule)
}

pub fn messages_module_name(definition: &Definition) -> Result<String, Error> {
    module_base_name(definition)
        .map(|base| format!("{}{}", base, MESSAGES_MODULE_SUFFIX))
        .ok_or(Error::UnnamedModule)
}
