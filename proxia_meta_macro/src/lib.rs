use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as Tokens};
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse_macro_input, spanned::Spanned, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Pat,
    PatIdent, PatType, Path, PathSegment, Receiver, Type, TypePath, TypeReference,
};

struct Context {
    meta: Path,
    ty: Type,
    name: String,
}

/// Publishes every `&self` method of an inherent `impl` block in the type's method table.
/// Associated functions and by-value receivers are left unpublished.
///
/// Arguments are converted with `FromValue`: `&str` parameters receive a `String` and
/// `&T` parameters an `Rc<T>`. Results are converted with `IntoValue`.
/// The optional argument is the path to the reflection crate (`::proxia::meta` by default).
///
/// ```
/// use proxia_meta_macro::methods;
///
/// struct Token(u8);
///
/// #[methods(proxia_meta)]
/// impl Token {
///     fn new(value: u8) -> Self { Token(value) }
///     fn peek(&self) -> u8 { self.0 }
///     fn consume(self) -> u8 { self.0 }
/// }
///
/// let value = proxia_meta::Value::object(Token::new(3));
/// assert_eq!(value.invoke("peek", vec![]), Ok(Some(proxia_meta::Value::U8(3))));
/// assert!(value.invoke("consume", vec![]).is_err());
/// ```
///
/// Trait implementations are refused.
/// ```compile_fail
/// use proxia_meta_macro::methods;
///
/// struct Token(u8);
///
/// #[methods(proxia_meta)]
/// impl Clone for Token {
///     fn clone(&self) -> Self { Token(self.0) }
/// }
/// ```
///
/// So are generic `impl` blocks.
/// ```compile_fail
/// use proxia_meta_macro::methods;
///
/// struct Token<T>(T);
///
/// #[methods(proxia_meta)]
/// impl<T: Clone + 'static> Token<T> {
///     fn peek(&self) -> T { self.0.clone() }
/// }
/// ```
///
/// Published methods can not mutate their receiver.
/// ```compile_fail
/// use proxia_meta_macro::methods;
///
/// struct Token(u8);
///
/// #[methods(proxia_meta)]
/// impl Token {
///     fn bump(&mut self) -> u8 { self.0 += 1; self.0 }
/// }
/// ```
///
/// Nor be `async`.
/// ```compile_fail
/// use proxia_meta_macro::methods;
///
/// struct Token(u8);
///
/// #[methods(proxia_meta)]
/// impl Token {
///     async fn peek(&self) -> u8 { self.0 }
/// }
/// ```
///
/// Nor take `&mut` parameters.
/// ```compile_fail
/// use proxia_meta_macro::methods;
///
/// struct Token(u8);
///
/// #[methods(proxia_meta)]
/// impl Token {
///     fn copy(&self, target: &mut u8) { *target = self.0; }
/// }
/// ```
#[proc_macro_attribute]
pub fn methods(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let meta = if attribute.is_empty() {
        path(["proxia", "meta"])
    } else {
        parse_macro_input!(attribute as Path)
    };
    let item = parse_macro_input!(item as ItemImpl);
    let body = match Context::new(meta, &item) {
        Ok(context) => context.implementation(&item),
        Err(error) => error.to_compile_error(),
    };
    quote!(#item #body).into()
}

impl Context {
    fn new(meta: Path, item: &ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new(
                path.span(),
                "'#[methods]' only applies to inherent 'impl' blocks",
            ));
        }
        if !item.generics.params.is_empty() {
            return Err(syn::Error::new(
                item.generics.span(),
                "'#[methods]' does not support generic 'impl' blocks",
            ));
        }
        let name = match &*item.self_ty {
            Type::Path(TypePath { qself: None, path }) => match path.segments.last() {
                Some(segment) => segment.ident.to_string(),
                None => return Err(syn::Error::new(path.span(), "expected a type name")),
            },
            ty => return Err(syn::Error::new(ty.span(), "expected a type name")),
        };
        Ok(Self {
            meta,
            ty: (*item.self_ty).clone(),
            name,
        })
    }

    fn implementation(&self, item: &ItemImpl) -> Tokens {
        let meta = &self.meta;
        let ty = &self.ty;
        let name = &self.name;
        let mut names = Vec::new();
        let mut functions = Vec::new();
        for item in item.items.iter() {
            if let ImplItem::Fn(function) = item {
                match self.function(function) {
                    Ok(Some(tokens)) => {
                        names.push(function.sig.ident.to_string());
                        functions.push(tokens);
                    }
                    Ok(None) => {}
                    Err(error) => functions.push(error.to_compile_error()),
                }
            }
        }
        let index = Self::index(&names);

        quote_spanned!(ty.span() =>
            #[automatically_derived]
            impl #meta::Object for #ty {
                #[inline]
                fn structure() -> &'static #meta::Structure {
                    static STRUCTURE: #meta::Structure = #meta::Structure {
                        name: #name,
                        identifier: ::core::any::TypeId::of::<#ty>,
                        functions: #meta::Index(&[#(#functions,)*], #index),
                    };
                    &STRUCTURE
                }
            }

            #[automatically_derived]
            impl #meta::Meta for #ty {
                #[inline]
                fn meta() -> #meta::Data {
                    #meta::Data::Structure(<#ty as #meta::Object>::structure())
                }
            }

            #[automatically_derived]
            impl #meta::IntoValue for #ty {
                #[inline]
                fn into_value(self) -> ::core::option::Option<#meta::Value> {
                    ::core::option::Option::Some(#meta::Value::object(self))
                }
            }

            #[automatically_derived]
            impl ::core::convert::From<#ty> for #meta::Value {
                #[inline]
                fn from(value: #ty) -> Self {
                    #meta::Value::object(value)
                }
            }
        )
    }

    fn function(&self, function: &ImplItemFn) -> syn::Result<Option<Tokens>> {
        let meta = &self.meta;
        let ty = &self.ty;
        let expected = &self.name;
        let signature = &function.sig;
        let ident = &signature.ident;
        match signature.inputs.first() {
            Some(FnArg::Receiver(Receiver {
                reference: Some(_),
                mutability: None,
                ..
            })) => {}
            Some(FnArg::Receiver(Receiver {
                reference: Some(_),
                mutability: Some(mutability),
                ..
            })) => {
                return Err(syn::Error::new(
                    mutability.span(),
                    "published methods can not take '&mut self'",
                ))
            }
            // By-value and typed receivers are left unpublished.
            _ => return Ok(None),
        }
        if !signature.generics.params.is_empty() {
            return Err(syn::Error::new(
                signature.generics.span(),
                "published methods can not be generic",
            ));
        }
        if let Some(asyncness) = &signature.asyncness {
            return Err(syn::Error::new(
                asyncness.span(),
                "published methods can not be 'async'",
            ));
        }

        let mut parameters = Vec::new();
        let mut bindings = Vec::new();
        let mut inputs = Vec::new();
        for (index, input) in signature.inputs.iter().skip(1).enumerate() {
            let FnArg::Typed(PatType { pat, ty: input, .. }) = input else {
                continue;
            };
            let name = Self::name(pat).unwrap_or_else(|| index.to_string());
            let key = Ident::new(&format!("_{}", index), Span::call_site());
            let (owned, borrow) = self.owned(input);
            parameters.push(quote_spanned!(input.span() => #meta::Parameter {
                name: #name,
                meta: <#owned as #meta::FromValue>::meta,
            }));
            bindings.push(quote_spanned!(input.span() => let #key = arguments.next::<#owned>()?;));
            inputs.push(if borrow {
                quote!(&#key)
            } else {
                quote!(#key)
            });
        }

        let arguments = if bindings.is_empty() {
            quote!(_)
        } else {
            quote!(arguments)
        };
        Ok(Some(quote_spanned!(ident.span() => #meta::Function {
            name: stringify!(#ident),
            parameters: &[#(#parameters,)*],
            invoke: |instance, #arguments| {
                let instance = instance.cast_ref::<#ty>().ok_or_else(|| #meta::Error::WrongInstance {
                    expected: #expected,
                    actual: instance.type_name(),
                })?;
                #(#bindings)*
                ::core::result::Result::Ok(#meta::IntoValue::into_value(instance.#ident(#(#inputs),*)))
            },
        })))
    }

    /// The type an argument is converted to, and whether the method borrows it.
    fn owned(&self, ty: &Type) -> (Tokens, bool) {
        match ty {
            Type::Reference(TypeReference {
                elem,
                mutability: None,
                ..
            }) => match &**elem {
                Type::Path(TypePath { qself: None, path }) if path.is_ident("str") => {
                    (quote!(::std::string::String), true)
                }
                elem => {
                    let elem = self.resolve(elem);
                    (quote!(::std::rc::Rc<#elem>), true)
                }
            },
            Type::Reference(reference) => (
                syn::Error::new(reference.span(), "parameters can not be '&mut'")
                    .to_compile_error(),
                false,
            ),
            ty => (self.resolve(ty).into_token_stream(), false),
        }
    }

    fn resolve(&self, ty: &Type) -> Type {
        match ty {
            Type::Path(TypePath { qself: None, path }) if path.is_ident("Self") => self.ty.clone(),
            ty => ty.clone(),
        }
    }

    fn name(pattern: &Pat) -> Option<String> {
        match pattern {
            Pat::Ident(PatIdent { ident, .. }) => Some(ident.to_string()),
            Pat::Wild(_) => Some("_".into()),
            Pat::Reference(reference) => Self::name(&reference.pat),
            _ => None,
        }
    }

    fn index(names: &[String]) -> Tokens {
        let matches = names
            .iter()
            .enumerate()
            .map(|(index, name)| quote! { #name => ::core::option::Option::Some(#index) });
        quote! { |name| match name { #(#matches,)* _ => ::core::option::Option::None } }
    }
}

fn path<'a>(segments: impl IntoIterator<Item = &'a str>) -> Path {
    Path {
        segments: segments
            .into_iter()
            .map(|segment| PathSegment::from(Ident::new(segment, Span::call_site())))
            .collect(),
        leading_colon: Some(Default::default()),
    }
}
