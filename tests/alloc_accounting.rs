//! Built only with `--features alloc-stats`.
use mmg_error::alloc::{buffers_allocated, live_buffers, reset_buffers_allocated};
use mmg_error::prelude::*;

static KIND: StaticError = StaticError::new("kind");

#[test]
fn static_round_trip_never_allocates() {
    reset_buffers_allocated();
    let mut e = Error::from_static(&KIND);
    for _ in 0..1000 {
        e = e.clone();
    }
    assert!(e == KIND);
    assert_eq!(buffers_allocated(), 0);
}

#[test]
fn dynamic_copy_allocates_exactly_one_buffer_each() {
    reset_buffers_allocated();
    let e = Error::new("disk full");
    let copies: Vec<Error> = (0..10).map(|_| e.clone()).collect();
    assert_eq!(buffers_allocated(), 11);
    assert!(copies.iter().all(|c| c.msg_str().len() == "disk full".len()));
}

#[test]
fn adopting_a_string_does_not_copy() {
    reset_buffers_allocated();
    let _e = Error::from(String::from("owned"));
    assert_eq!(buffers_allocated(), 0);
}

#[test]
fn assignment_loop_keeps_live_buffers_flat() {
    let src = Error::new("payload");
    let mut dst = Error::new("first");
    let live = live_buffers();
    for _ in 0..50 {
        dst.clone_from(&src);
        assert_eq!(live_buffers(), live);
        dst = src.clone();
        assert_eq!(live_buffers(), live);
    }
    drop(dst);
    assert_eq!(live_buffers(), live - 1);
}
