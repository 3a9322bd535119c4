//! 轻量错误值：成功、可按身份比较的静态错误种类，或独占的动态消息。

pub mod alloc;
pub mod catalog;
pub mod error;
pub mod kinds;
mod serde_impl;

// 允许在本 crate 内通过 `mmg_error::...` 自引用（供 proc-macro 展开使用）
extern crate self as mmg_error;

pub mod prelude {
    pub use crate::errorf;
    pub use crate::error::{Error, Result, StaticError};
    pub use mmg_error_macros::static_error;
}

pub use error::{Error, Result, StaticError};
pub use mmg_error_macros::*;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
}
