use proc_macro::TokenStream;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, DeriveInput, Ident, LitStr, Result as SynResult, Token,
};

/// Methods `http::Method` exposes as associated constants. Anything else is
/// rejected at compile time; GET/POST filtering happens later, at synthesis.
const KNOWN_METHODS: &[&str] = &[
    "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS", "TRACE", "CONNECT",
];

struct EndpointArgs {
    verb: Ident,
    controller: LitStr,
    action: LitStr,
}

impl Parse for EndpointArgs {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let verb: Ident = input.parse()?;
        let upper = verb.to_string().to_ascii_uppercase();
        if !KNOWN_METHODS.contains(&upper.as_str()) {
            return Err(syn::Error::new(
                verb.span(),
                format!("unknown HTTP method `{verb}`"),
            ));
        }
        input.parse::<Token![,]>()?;
        let controller: LitStr = input.parse()?;
        input.parse::<Token![,]>()?;
        let action: LitStr = input.parse()?;
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }
        if !input.is_empty() {
            return Err(input.error("expected `#[endpoint(VERB, \"Controller\", \"Action\")]`"));
        }
        Ok(EndpointArgs {
            verb: Ident::new(&upper, verb.span()),
            controller,
            action,
        })
    }
}

/// Implements `dto2mvc::Annotated` from repeated `#[endpoint(VERB, "Controller", "Action")]`
/// attributes. Attribute order is kept and identical attributes are not merged.
#[proc_macro_derive(Endpoints, attributes(endpoint))]
pub fn derive_endpoints(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let name_str = name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut endpoints = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("endpoint")) {
        match attr.parse_args::<EndpointArgs>() {
            Ok(args) => endpoints.push(args),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let descriptors = endpoints.iter().map(|e| {
        let verb = &e.verb;
        let controller = &e.controller;
        let action = &e.action;
        quote! {
            ::dto2mvc::EndpointDescriptor::new(::dto2mvc::Method::#verb, #controller, #action)
        }
    });

    let expanded = quote! {
        impl #impl_generics ::dto2mvc::Annotated for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #name_str
            }

            fn module_path() -> &'static str {
                ::core::module_path!()
            }

            fn endpoints() -> ::std::vec::Vec<::dto2mvc::EndpointDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    };
    TokenStream::from(expanded)
}
