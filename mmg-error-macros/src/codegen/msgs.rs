// Compile-time diagnostics for #[static_error]; tests/ui/*.stderr pin these strings.

pub(super) const ERR_TARGET: &str = "#[static_error] only supports `static` items";
pub(super) const ERR_STATIC_MUT: &str =
    "#[static_error] cannot register a `static mut`; error kinds are immutable";
pub(super) const ERR_ARGS: &str = "#[static_error] only accepts `name = \"...\"`";
pub(super) const ERR_NAME_EMPTY: &str = "#[static_error] name must not be empty";
