//! Emits one method per bound operation and registers it in the dispatch
//! tables of its service.

use super::{
    buffer::ServiceBuffer,
    diagnostics::{Diagnostic, Diagnostics},
    error::Error,
    naming,
    resolution::ActionResolution,
    types::BoundOperation,
};
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};
use soapstub_wsdl::types::{Definition, Message, Namespaces};

pub struct OperationMapper<'a> {
    pub prefix: &'a str,
    pub extended: bool,
    pub resolution: &'a dyn ActionResolution,
}

fn message_ident(message: &Message) -> Ident {
    format_ident!("{}", naming::sanitize(&message.name.name))
}

fn unit_type(count: usize) -> TokenStream {
    if count == 1 {
        quote! { _ }
    } else {
        let holes = (0..count).map(|_| quote! { _ });
        quote! { (#(#holes),*) }
    }
}

impl<'a> OperationMapper<'a> {
    pub fn map(
        &self,
        definition: &Definition,
        namespaces: &Namespaces,
        operation: &BoundOperation<'_>,
        service: &mut ServiceBuffer,
        diagnostics: &mut Diagnostics,
    ) -> Result<(), Error> {
        let action = self.resolution.resolve(operation, diagnostics)?;
        let method_name = naming::method_name(self.prefix, operation.name());
        let method: Ident = syn::parse_str(&method_name)?;

        tracing::debug!(
            operation = operation.name(),
            method = %method_name,
            action = %action.input,
            "mapping operation"
        );

        let addressing = self.resolution.addressing();
        let address = if addressing {
            quote! { , address: &Address }
        } else {
            quote! {}
        };

        let parse = match operation.input {
            Some(input) => {
                let input = message_ident(input);
                quote! { let request = ps.parse::<#input>()?; }
            }
            None => quote! { let _ = ps; },
        };

        let body = if self.extended && !addressing {
            self.extended_body(definition, operation, diagnostics)?
        } else {
            match operation.output {
                Some(output) => {
                    let output = message_ident(output);
                    quote! { Ok(#output::default()) }
                }
                None => quote! { Ok(()) },
            }
        };

        let output = match operation.output {
            Some(output) => {
                let output = message_ident(output);
                quote! { #output }
            }
            None => quote! { () },
        };

        let docs = operation
            .operation
            .documentation
            .as_deref()
            .map(str::trim)
            .filter(|documentation| !documentation.is_empty())
            .map(|documentation| quote! { #[doc = #documentation] });

        service.new_method(quote! {
            #docs
            pub fn #method(&self, ps: &ParsedSoap #address) -> Result<#output, Fault> {
                #parse
                #body
            }
        });

        let tables = &mut service.preamble;
        tables
            .soap_action
            .register(action.input, &method_name, diagnostics);

        if let Some(input) = operation.input {
            let key = (
                input.name.namespace(namespaces).to_owned(),
                input.name.name.clone(),
            );
            tables.root.register(key, &method_name, diagnostics);
        }

        if let (Some(ws_action), Some(output)) = (tables.ws_action.as_mut(), action.output) {
            ws_action.register(method_name.clone(), &output, diagnostics);
        }

        Ok(())
    }

    /// Body that flattens the request into positional arguments, calls the
    /// implementation by operation name and scatters its result back into
    /// the output message.
    fn extended_body(
        &self,
        definition: &Definition,
        operation: &BoundOperation<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<TokenStream, Error> {
        let mut statements = Vec::new();
        let mut arguments = Vec::new();

        if let Some(input) = operation.input {
            let sub_names = definition.parts_sub_names(&input.parts);

            for (part, sub_names) in input.parts.iter().zip(sub_names) {
                let variable = naming::input_local(&part.name);

                match sub_names.as_slice() {
                    [] => {
                        let attribute = naming::attribute_ident(&part.name);
                        statements.push(quote! { let #variable = request.#attribute; });
                        arguments.push(quote! { #variable });
                    }

                    [name] => {
                        let attribute = naming::attribute_ident(name);
                        statements.push(quote! { let #variable = request.#attribute; });
                        arguments.push(quote! { #variable });
                    }

                    names => {
                        let attributes = names.iter().map(|name| naming::attribute_ident(name));
                        statements.push(quote! { let #variable = (#(request.#attributes),*); });

                        for index in 0..names.len() {
                            let index = syn::Index::from(index);
                            arguments.push(quote! { #variable.#index });
                        }
                    }
                }
            }
        }

        let name = operation.name();
        let call = quote! { implementation.invoke(#name, (#(#arguments,)*))? };

        let output = match operation.output {
            Some(output) => output,
            None => {
                return Ok(quote! {
                    #(#statements)*
                    if let Some(implementation) = &self.implementation {
                        let () = #call;
                    }
                    Ok(())
                })
            }
        };

        let output_ident = message_ident(output);
        if output.parts.is_empty() {
            return Ok(quote! {
                #(#statements)*
                let result = #output_ident::default();
                if let Some(implementation) = &self.implementation {
                    let () = #call;
                }
                Ok(result)
            });
        }

        if output.parts.len() > 1 {
            diagnostics.push(Diagnostic::MultipleOutputParts {
                message: output.name.name.clone(),
                operation: name.to_owned(),
            });
        }

        let sub_names = definition.parts_sub_names(&output.parts);
        let mut variables = Vec::new();
        let mut types = Vec::new();
        let mut scatter = Vec::new();

        for (part, sub_names) in output.parts.iter().zip(&sub_names) {
            let variable = naming::output_local(&part.name);

            match sub_names.as_slice() {
                [] => {
                    return Err(Error::MissingSubnames {
                        message: output.name.name.clone(),
                        operation: name.to_owned(),
                    })
                }

                [sub_name] => {
                    let attribute = naming::attribute_ident(sub_name);
                    scatter.push(quote! { result.#attribute = #variable; });
                }

                names => {
                    for (index, sub_name) in names.iter().enumerate() {
                        let attribute = naming::attribute_ident(sub_name);
                        let index = syn::Index::from(index);
                        scatter.push(quote! { result.#attribute = #variable.#index; });
                    }
                }
            }

            types.push(unit_type(sub_names.len()));
            variables.push(variable);
        }

        let ascription = if sub_names.iter().all(|names| names.len() == 1) {
            quote! {}
        } else if types.len() == 1 {
            let ty = &types[0];
            quote! { : #ty }
        } else {
            quote! { : (#(#types),*) }
        };

        let pattern = if variables.len() == 1 {
            let variable = &variables[0];
            quote! { #variable }
        } else {
            quote! { (#(#variables),*) }
        };

        Ok(quote! {
            #(#statements)*
            let mut result = #output_ident::default();
            if let Some(implementation) = &self.implementation {
                let #pattern #ascription = #call;
                #(#scatter)*
            }
            Ok(result)
        })
    }
}
