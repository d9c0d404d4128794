//! `PrintfArg` derive implementation.
//!
//! Matchers in priority order:
//! 1. `#[printx(text = method)]`: `%s` through a `&CStr` accessor
//! 2. `#[printx(chars = method)]`: `%.*s` through a `&str`/`&[u8]` accessor
//! 3. fieldless enum: the `#[repr]` integer's classification
//!
//! Anything else is a compile error. A `#[printx(spec = "..")]` override
//! goes through `TypeDescriptor::with_spec`, which rejects text that would
//! read the forwarded values differently.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use crate::utils::{enum_repr, fieldless_variants, parse_printx_attrs, Accessor};

/// Main entry point for the `PrintfArg` derive macro.
pub fn derive_printf_arg(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_printf_arg_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn derive_printf_arg_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attrs = parse_printx_attrs(input)?;

    let with_spec = attrs.spec.map(|spec| quote! { .with_spec(#spec) });

    let (descriptor, forwarded, body) = match attrs.accessor {
        Some(Accessor::Text(method)) => (
            quote! { ::printx::TypeDescriptor::TEXT },
            quote! { ::printx::adapt::Text },
            quote! {
                let text: &::core::ffi::CStr = Self::#method(self);
                ::printx::adapt::text(text)
            },
        ),
        Some(Accessor::Chars(method)) => (
            quote! { ::printx::TypeDescriptor::CHAR_SEQUENCE },
            quote! { ::printx::adapt::Chars },
            quote! {
                ::printx::adapt::CharSequence::forward_chars(Self::#method(self))
            },
        ),
        None => {
            let variants = fieldless_variants(input)?;
            let repr = enum_repr(input)?;
            (
                quote! { <#repr as ::printx::PrintfArg>::DESCRIPTOR },
                quote! { <#repr as ::printx::PrintfArg>::Forwarded },
                quote! {
                    let mut value: #repr = match self {
                        #( Self::#variants => Self::#variants as #repr, )*
                    };
                    ::printx::PrintfArg::forward(&mut value)
                },
            )
        }
    };

    // Generic types are checked when a call site uses the descriptor.
    let check = (with_spec.is_some() && input.generics.params.is_empty()).then(|| {
        quote! {
            const _: ::printx::TypeDescriptor = <#name as ::printx::PrintfArg>::DESCRIPTOR;
        }
    });

    Ok(quote! {
        #[allow(unsafe_code)]
        unsafe impl #impl_generics ::printx::PrintfArg for #name #ty_generics #where_clause {
            const DESCRIPTOR: ::printx::TypeDescriptor = #descriptor #with_spec;
            type Forwarded = #forwarded;

            fn forward(&mut self) -> Self::Forwarded {
                #body
            }
        }

        #check
    })
}
