use mmg_error::prelude::*;

#[static_error]
static A: StaticError = StaticError::new("a");

#[mmg_error::static_error(name = "ui.b")]
pub static B: StaticError = StaticError::new("b");

fn main() {
    let e = Error::from_static(&A);
    assert!(e == A);
    assert!(mmg_error::catalog::lookup("ui.b").is_some());
}
