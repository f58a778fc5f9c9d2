//! `#[derive(BoundObject)]` expansion

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident, Result};

/// Role of one field, from its `#[bound(...)]` markers
#[derive(Debug, Default)]
struct FieldRole {
    skip: bool,
    errors: bool,
    new_record: bool,
    display: bool,
}

impl FieldRole {
    fn from_attrs(attrs: &[syn::Attribute]) -> Result<Self> {
        let mut role = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("bound") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    role.skip = true;
                } else if meta.path.is_ident("errors") {
                    role.errors = true;
                } else if meta.path.is_ident("new_record") {
                    role.new_record = true;
                } else if meta.path.is_ident("display") {
                    role.display = true;
                } else {
                    return Err(meta.error("unsupported bound field attribute"));
                }
                Ok(())
            })?;
        }
        Ok(role)
    }

    const fn exposed(&self) -> bool {
        !(self.skip || self.errors || self.new_record)
    }
}

/// Struct-level `#[bound(name = "...")]`
fn type_name(input: &DeriveInput) -> Result<String> {
    let mut name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("bound") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: syn::LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported bound attribute"))
            }
        })?;
    }
    Ok(name.unwrap_or_else(|| input.ident.to_string()))
}

pub(crate) fn derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn single<'f>(found: &[&'f Ident], marker: &str) -> Result<Option<&'f Ident>> {
    match found {
        [] => Ok(None),
        [field] => Ok(Some(*field)),
        [_, extra, ..] => Err(syn::Error::new_spanned(
            extra,
            format!("only one field may be marked #[bound({marker})]"),
        )),
    }
}

fn derive_impl(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "BoundObject can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "BoundObject requires named fields",
        ));
    };

    let type_name = type_name(input)?;
    let mut exposed = Vec::new();
    let mut errors = Vec::new();
    let mut new_record = Vec::new();
    let mut display = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let role = FieldRole::from_attrs(&field.attrs)?;
        if role.exposed() {
            let key = ident.to_string().trim_start_matches("r#").to_string();
            exposed.push((key, ident));
        }
        if role.errors {
            errors.push(ident);
        }
        if role.new_record {
            new_record.push(ident);
        }
        if role.display {
            display.push(ident);
        }
    }

    let arms = exposed.iter().map(|(key, ident)| {
        quote! {
            #key => ::core::option::Option::Some(
                ::acton_forms::forms::ToFieldValue::to_field_value(&self.#ident)
            ),
        }
    });

    let errors_fn = single(&errors, "errors")?.map(|ident| {
        quote! {
            fn errors(&self) -> ::core::option::Option<&dyn ::acton_forms::forms::ErrorLookup> {
                ::core::option::Option::Some(&self.#ident)
            }
        }
    });

    let new_record_fn = single(&new_record, "new_record")?.map(|ident| {
        quote! {
            fn new_record(&self) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(self.#ident)
            }
        }
    });

    let display_fn = single(&display, "display")?.map(|ident| {
        quote! {
            fn display_text(&self) -> ::std::string::String {
                ::acton_forms::forms::value_text(
                    &::acton_forms::forms::ToFieldValue::to_field_value(&self.#ident)
                )
            }
        }
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::acton_forms::forms::BoundObject for #ident #ty_generics #where_clause {
            fn type_name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(#type_name)
            }

            fn attribute(&self, name: &str) -> ::core::option::Option<::acton_forms::__private::Value> {
                match name {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #errors_fn
            #new_record_fn
            #display_fn
        }
    })
}
