//! Attribute parsing shared by the derive.

use syn::{Data, DeriveInput, Fields, Ident, LitStr};

/// Integer types accepted in `#[repr(..)]`.
const INT_REPRS: &[&str] = &[
    "i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64", "isize", "usize",
];

/// How the type's values reach printf.
pub enum Accessor {
    /// `#[printx(text = method)]`
    Text(Ident),
    /// `#[printx(chars = method)]`
    Chars(Ident),
}

/// Parsed `#[printx(..)]` attributes.
#[derive(Default)]
pub struct PrintxAttrs {
    pub accessor: Option<Accessor>,
    pub spec: Option<LitStr>,
}

/// Parse every `#[printx(..)]` attribute on the type.
pub fn parse_printx_attrs(input: &DeriveInput) -> syn::Result<PrintxAttrs> {
    let mut attrs = PrintxAttrs::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("printx") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let accessor = if meta.path.is_ident("text") {
                Accessor::Text(meta.value()?.parse()?)
            } else if meta.path.is_ident("chars") {
                Accessor::Chars(meta.value()?.parse()?)
            } else if meta.path.is_ident("spec") {
                let spec: LitStr = meta.value()?.parse()?;
                if spec.value().is_empty() {
                    return Err(meta.error("`spec` must not be empty"));
                }
                if spec.value().contains('\0') {
                    return Err(meta.error("`spec` must not contain a NUL byte"));
                }
                attrs.spec = Some(spec);
                return Ok(());
            } else {
                return Err(meta.error("expected `text`, `chars` or `spec`"));
            };
            if attrs.accessor.is_some() {
                return Err(meta.error("only one of `text` and `chars` may be given"));
            }
            attrs.accessor = Some(accessor);
            Ok(())
        })?;
    }
    Ok(attrs)
}

/// The variants of a fieldless enum, or an error naming what is supported.
pub fn fieldless_variants(input: &DeriveInput) -> syn::Result<Vec<&Ident>> {
    let unsupported = || {
        syn::Error::new_spanned(
            &input.ident,
            "PrintfArg derive needs a fieldless enum or a `#[printx(text = ..)]` \
             or `#[printx(chars = ..)]` accessor",
        )
    };
    match &input.data {
        Data::Enum(data) => data
            .variants
            .iter()
            .map(|variant| match variant.fields {
                Fields::Unit => Ok(&variant.ident),
                _ => Err(unsupported()),
            })
            .collect(),
        Data::Struct(_) | Data::Union(_) => Err(unsupported()),
    }
}

/// The integer `#[repr]` of an enum, `isize` if none is given.
pub fn enum_repr(input: &DeriveInput) -> syn::Result<Ident> {
    let mut repr = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INT_REPRS.iter().any(|name| ident == name) {
                    repr = Some(ident.clone());
                }
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("isize", proc_macro2::Span::call_site())))
}
