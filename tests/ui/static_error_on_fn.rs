use mmg_error::prelude::*;

#[static_error]
fn not_a_static() {}

fn main() {}
