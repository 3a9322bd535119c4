mod emit;
mod msgs;
mod parse;

use proc_macro::TokenStream;
use syn::{parse_macro_input, Item};

use emit::emit_registration;
use msgs::{ERR_STATIC_MUT, ERR_TARGET};
use parse::parse_name_arg;

pub fn entrypoint(args: TokenStream, input: TokenStream) -> TokenStream {
    let args_ts = proc_macro2::TokenStream::from(args);
    let item_any = parse_macro_input!(input as Item);
    let item = match item_any {
        Item::Static(item) => item,
        other => {
            return syn::Error::new_spanned(other, ERR_TARGET)
                .to_compile_error()
                .into()
        }
    };
    if let syn::StaticMutability::Mut(m) = &item.mutability {
        return syn::Error::new_spanned(m, ERR_STATIC_MUT)
            .to_compile_error()
            .into();
    }
    match parse_name_arg(args_ts) {
        Ok(name) => emit_registration(&item, name.as_ref()).into(),
        Err(e) => e.to_compile_error().into(),
    }
}
