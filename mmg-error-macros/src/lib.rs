use proc_macro::TokenStream;

mod codegen;

// 仅支持 `static NAME: StaticError = ...;` 形式；宏不改写原条目，只追加目录登记。

/// 将一个 `static` 错误种类登记进进程级目录（`mmg_error::catalog`）。
///
/// ```ignore
/// #[mmg_error::static_error]
/// pub static NOT_FOUND: StaticError = StaticError::new("not found");
///
/// #[mmg_error::static_error(name = "io.eof")]
/// pub static EOF: StaticError = StaticError::new("end of file");
/// ```
///
/// 默认登记名为 `module_path!()::NAME`；`name = "..."` 可覆盖。
#[proc_macro_attribute]
pub fn static_error(args: TokenStream, input: TokenStream) -> TokenStream {
    codegen::entrypoint(args, input)
}
