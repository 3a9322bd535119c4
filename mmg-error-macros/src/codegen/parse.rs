use super::msgs::{ERR_ARGS, ERR_NAME_EMPTY};
use syn::{Expr, ExprLit, Lit, LitStr, MetaNameValue};

// 属性参数：空，或唯一的 name = "..."
pub fn parse_name_arg(args: proc_macro2::TokenStream) -> syn::Result<Option<LitStr>> {
    if args.is_empty() {
        return Ok(None);
    }
    let nv: MetaNameValue = syn::parse2(args.clone())
        .map_err(|_| syn::Error::new_spanned(&args, ERR_ARGS))?;
    if !nv.path.is_ident("name") {
        return Err(syn::Error::new_spanned(&nv.path, ERR_ARGS));
    }
    match &nv.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => {
            if s.value().is_empty() {
                Err(syn::Error::new_spanned(s, ERR_NAME_EMPTY))
            } else {
                Ok(Some(s.clone()))
            }
        }
        other => Err(syn::Error::new_spanned(other, ERR_ARGS)),
    }
}
