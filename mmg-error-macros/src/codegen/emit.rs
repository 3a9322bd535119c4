use quote::quote;
use syn::{ItemStatic, LitStr};

// 原样保留 static 条目，追加一次 inventory 登记。
pub fn emit_registration(item: &ItemStatic, name: Option<&LitStr>) -> proc_macro2::TokenStream {
    let ident = &item.ident;
    let name_expr = match name {
        Some(lit) => quote! { #lit },
        None => {
            let s = ident.to_string();
            quote! { ::core::concat!(::core::module_path!(), "::", #s) }
        }
    };
    quote! {
        #item
        #[doc(hidden)]
        const _: () = {
            ::mmg_error::__private::inventory::submit! {
                ::mmg_error::catalog::Registration::new(#name_expr, &#ident)
            }
        };
    }
}
