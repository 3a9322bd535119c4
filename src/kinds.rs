//! 常用错误种类；均已登记进 catalog，可按名称查找与反序列化。
use crate::error::StaticError;
use crate::static_error;

#[static_error(name = "eof")]
pub static EOF: StaticError = StaticError::new("end of file");

#[static_error(name = "not_found")]
pub static NOT_FOUND: StaticError = StaticError::new("not found");

#[static_error(name = "timeout")]
pub static TIMEOUT: StaticError = StaticError::new("timeout");

#[static_error(name = "unsupported")]
pub static UNSUPPORTED: StaticError = StaticError::new("unsupported");

#[static_error(name = "cancelled")]
pub static CANCELLED: StaticError = StaticError::new("cancelled");
