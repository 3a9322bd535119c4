use mmg_error::prelude::*;

#[static_error(code = "E1")]
static A: StaticError = StaticError::new("a");

fn main() {}
