//! polycodec-macros - Procedural macros for polycodec
//!
//! This crate provides:
//! - `#[derive(TypeTag)]` - Assign the type identifier embedded in envelopes

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Options for the TypeTag derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(type_tag))]
struct TypeTagOpts {
    ident: syn::Ident,
    generics: syn::Generics,

    /// Explicit identifier (e.g., "shapes.circle")
    #[darling(default)]
    id: Option<String>,

    /// Use the module-qualified type name as the identifier
    #[darling(default)]
    qualified: bool,
}

/// Derive macro assigning a type identifier
///
/// Without options the identifier is the bare type name. `id` sets an explicit
/// identifier; `qualified` prefixes the type name with its module path.
///
/// # Example
///
/// ```ignore
/// #[derive(TypeTag, Serialize, Deserialize)]
/// struct Circle {
///     radius: f64,
/// }
///
/// #[derive(TypeTag, Serialize, Deserialize)]
/// #[type_tag(id = "shapes.square")]
/// struct Square {
///     side: f64,
/// }
///
/// #[derive(TypeTag, Serialize, Deserialize)]
/// #[type_tag(qualified)]
/// struct Triangle {
///     base: f64,
///     height: f64,
/// }
/// ```
#[proc_macro_derive(TypeTag, attributes(type_tag))]
pub fn derive_type_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match TypeTagOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    match expand(&opts) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// Generate the `TypeTag` impl
///
/// The impl names the trait through the `polycodec` facade so that crates
/// depending only on `polycodec` can use the derive.
fn expand(opts: &TypeTagOpts) -> syn::Result<TokenStream2> {
    let identifier = identifier_tokens(opts)?;
    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::polycodec::__private::TypeTag for #name #ty_generics #where_clause {
            const TYPE_ID: &'static str = #identifier;
        }
    })
}

/// Build the expression producing the identifier
fn identifier_tokens(opts: &TypeTagOpts) -> syn::Result<TokenStream2> {
    match (&opts.id, opts.qualified) {
        (Some(_), true) => Err(syn::Error::new(
            opts.ident.span(),
            "`id` and `qualified` cannot be combined",
        )),
        (Some(id), false) => {
            validate_identifier(id).map_err(|msg| syn::Error::new(opts.ident.span(), msg))?;
            Ok(quote! { #id })
        }
        (None, true) => {
            let name = opts.ident.to_string();
            Ok(quote! { ::core::concat!(::core::module_path!(), "::", #name) })
        }
        (None, false) => {
            let name = opts.ident.to_string();
            Ok(quote! { #name })
        }
    }
}

/// Check an explicit identifier
fn validate_identifier(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("type identifier must not be empty".to_string());
    }
    if id.trim() != id {
        return Err(format!(
            "type identifier {id:?} must not have leading or trailing whitespace"
        ));
    }
    Ok(())
}
