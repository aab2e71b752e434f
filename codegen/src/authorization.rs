//! Decorators applied to a finished service buffer.

use super::buffer::{Imports, ServiceBuffer};
use quote::{format_ident, quote};

pub trait ServiceDecorator {
    fn decorate(&self, service: &mut ServiceBuffer, imports: &mut Imports);
}

/// Adds an `authorize` hook that forwards to a method of the
/// implementation named at deployment time, allowing the call when no
/// such method is configured or exposed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorizationDelegate;

impl ServiceDecorator for AuthorizationDelegate {
    fn decorate(&self, service: &mut ServiceBuffer, imports: &mut Imports) {
        imports.add_item(format_ident!("AuthInfo"));

        service
            .preamble
            .fields
            .push(quote! { auth_method_name: Option<String> });
        service
            .initializer
            .fields
            .push(quote! { auth_method_name: config.auth_method_name });

        service.initializer.items.push(quote! {
            pub fn authorize(&self, auth_info: &AuthInfo, post: &str, action: &str) -> Result<bool, Fault> {
                if let (Some(name), Some(implementation)) = (self.auth_method_name.as_deref(), &self.implementation) {
                    if implementation.exposes(name) {
                        return implementation.invoke(name, (auth_info, post, action));
                    }
                }
                Ok(true)
            }
        });
    }
}
