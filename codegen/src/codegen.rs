use super::{
    buffer::{DispatchTable, Header, Imports, Initializer, ServiceBuffer},
    error::Error,
};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use std::fmt::Write;

pub trait Codegen {
    fn codegen(&self) -> TokenStream;
}

fn codegen_all(all: &[impl Codegen]) -> Vec<TokenStream> {
    all.iter().map(Codegen::codegen).collect()
}

fn table_ident(table: &DispatchTable<impl std::hash::Hash + Eq + std::fmt::Debug>) -> Ident {
    format_ident!("{}", table.name)
}

impl Codegen for DispatchTable<String> {
    fn codegen(&self) -> TokenStream {
        let name = table_ident(self);
        let entries = self
            .entries()
            .map(|(key, method)| quote! { (#key, #method) });

        quote! {
            pub const #name: &'static [(&'static str, &'static str)] = &[#(#entries),*];
        }
    }
}

impl Codegen for DispatchTable<(String, String)> {
    fn codegen(&self) -> TokenStream {
        let name = table_ident(self);
        let entries = self
            .entries()
            .map(|((namespace, local), method)| quote! { ((#namespace, #local), #method) });

        quote! {
            pub const #name: &'static [((&'static str, &'static str), &'static str)] = &[#(#entries),*];
        }
    }
}

impl Codegen for Imports {
    fn codegen(&self) -> TokenStream {
        let messages = self.messages.as_ref().map(|path| quote! { use #path::*; });
        let runtime = self.runtime.as_ref().map(|path| {
            let items = self.items();
            quote! { use #path::{#(#items),*}; }
        });

        quote! {
            #messages
            #runtime
        }
    }
}

impl Codegen for Initializer {
    fn codegen(&self) -> TokenStream {
        let base = &self.base;
        let fields = &self.fields;
        let items = &self.items;

        let constructor = match &self.default_post {
            Some(default_post) => quote! {
                pub fn new(post: Option<&str>, config: ServiceConfig<I>) -> Self {
                    let post = post.unwrap_or(#default_post);
                    Self {
                        base: #base::new(post),
                        #(#fields,)*
                    }
                }
            },

            None => quote! {
                pub fn new(post: &str, config: ServiceConfig<I>) -> Self {
                    Self {
                        base: #base::new(post),
                        #(#fields,)*
                    }
                }
            },
        };

        quote! {
            #constructor
            #(#items)*
        }
    }
}

impl Codegen for ServiceBuffer {
    fn codegen(&self) -> TokenStream {
        let preamble = &self.preamble;
        let name = &preamble.name;
        let fields = &preamble.fields;

        let soap_action = preamble.soap_action.codegen();
        let ws_action = preamble.ws_action.as_ref().map(Codegen::codegen);
        let root = preamble.root.codegen();
        let document = preamble.document.as_ref().map(|document| {
            quote! { pub const WSDL: &'static str = #document; }
        });

        let initializer = self.initializer.codegen();
        let methods = &self.methods;

        quote! {
            pub struct #name<I> {
                #(#fields,)*
            }

            #[allow(non_snake_case, unused_variables)]
            impl<I: Implementation> #name<I> {
                #soap_action
                #ws_action
                #root
                #document

                #initializer

                #(#methods)*
            }
        }
    }
}

/// Token stream of the module body: imports followed by every service in
/// order.
pub fn codegen_module(imports: &Imports, services: &[ServiceBuffer]) -> TokenStream {
    let imports = imports.codegen();
    let services = codegen_all(services);

    quote! {
        #imports
        #(#services)*
    }
}

/// Writes the header comment block and the pretty-printed module.
pub fn write_module<W: Write>(
    out: &mut W,
    header: &Header,
    imports: &Imports,
    services: &[ServiceBuffer],
) -> Result<(), Error> {
    let file: syn::File = syn::parse2(codegen_module(imports, services))?;

    for line in header.lines() {
        writeln!(out, "{}", line)?;
    }
    if !header.is_empty() {
        writeln!(out)?;
    }

    write!(out, "{}", prettyplease::unparse(&file))?;
    Ok(())
}
