//! 错误值：空（成功）、静态错误种类引用、或独占的动态消息。
//!
//! `Error` 以值传递；复制动态消息时总是深拷贝，任意两个 `Error` 之间不共享堆内存。
//! 静态种类通过地址比较身份：文本相同的两个 `StaticError` 仍是不同种类。
use std::{error::Error as StdError, fmt};

use crate::alloc::{self, MessageBuf};

/// An immutable, process-lifetime error kind.
///
/// Declare kinds as `static` items; the address of the item is the kind's
/// identity, so a `const` (which has no fixed address) must not be used.
///
/// ```
/// use mmg_error::{Error, StaticError};
///
/// static DISK_FULL: StaticError = StaticError::new("disk full");
/// static ALSO_DISK_FULL: StaticError = StaticError::new("disk full");
///
/// let err = Error::from_static(&DISK_FULL);
/// assert!(err == DISK_FULL);
/// assert!(err != ALSO_DISK_FULL);
/// ```
///
/// A `const` kind, or a temporary, cannot be adopted:
///
/// ```compile_fail
/// use mmg_error::{Error, StaticError};
///
/// const NOT_A_KIND: StaticError = StaticError::new("disk full");
/// let _ = Error::from_static(&NOT_A_KIND);
/// ```
///
/// ```compile_fail
/// use mmg_error::{Error, StaticError};
///
/// let _ = Error::from_static(&StaticError::new("disk full"));
/// ```
pub struct StaticError {
    msg: &'static str,
}

impl StaticError {
    pub const fn new(msg: &'static str) -> Self {
        Self { msg }
    }

    pub const fn msg(&self) -> &'static str {
        self.msg
    }
}

// 带 Drop 的值不做常量提升：`&CONST` 与临时值都拿不到 'static 引用，只有 static 条目可用
impl Drop for StaticError {
    fn drop(&mut self) {}
}

impl PartialEq for StaticError {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}
impl Eq for StaticError {}

impl fmt::Debug for StaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StaticError")
            .field(&self.msg)
            .field(&(self as *const Self))
            .finish()
    }
}

impl fmt::Display for StaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg)
    }
}

enum Repr {
    Empty,
    Static(&'static StaticError),
    Dynamic(MessageBuf),
}

/// An error value: success, a reference to a [`StaticError`], or an owned message.
///
/// Errors are compared only against a known kind; there is deliberately no
/// `Error == Error`:
///
/// ```compile_fail
/// use mmg_error::Error;
/// let a = Error::new("boom");
/// let b = Error::new("boom");
/// let _ = a == b;
/// ```
pub struct Error {
    repr: Repr,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    /// The success value.
    pub const NONE: Error = Error { repr: Repr::Empty };

    pub const fn none() -> Self {
        Self::NONE
    }

    /// Adopts a static kind; never allocates.
    pub const fn from_static(kind: &'static StaticError) -> Self {
        Self {
            repr: Repr::Static(kind),
        }
    }

    /// Copies `msg` into a freshly allocated buffer owned by the new error.
    pub fn new(msg: &str) -> Self {
        Self {
            repr: Repr::Dynamic(alloc::copy_message(msg)),
        }
    }

    /// Builds a dynamic error from format arguments; see [`errorf!`](crate::errorf).
    pub fn from_fmt(args: fmt::Arguments<'_>) -> Self {
        match args.as_str() {
            Some(s) => Self::new(s),
            None => Self {
                repr: Repr::Dynamic(alloc::format_message(args)),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.repr, Repr::Empty)
    }

    /// Same as [`is_empty`](Self::is_empty): no failure is carried.
    pub fn is_ok(&self) -> bool {
        self.is_empty()
    }

    pub fn is_static(&self) -> bool {
        matches!(self.repr, Repr::Static(_))
    }

    pub fn as_static(&self) -> Option<&'static StaticError> {
        match self.repr {
            Repr::Static(kind) => Some(kind),
            _ => None,
        }
    }

    /// The message text; `""` for success, never absent.
    pub fn msg_str(&self) -> &str {
        match &self.repr {
            Repr::Empty => "",
            Repr::Static(kind) => kind.msg,
            Repr::Dynamic(buf) => buf.as_str(),
        }
    }

    /// Owned copy of [`msg_str`](Self::msg_str).
    pub fn message(&self) -> String {
        self.msg_str().to_owned()
    }

    /// `Ok(())` for success, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Self::NONE
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        let repr = match &self.repr {
            Repr::Empty => Repr::Empty,
            Repr::Static(kind) => Repr::Static(*kind),
            Repr::Dynamic(buf) => {
                tracing::trace!(len = buf.as_str().len(), "deep-copying dynamic error message");
                Repr::Dynamic(alloc::copy_message(buf.as_str()))
            }
        };
        Self { repr }
    }

    // 赋值语义：先释放目标持有的缓冲区，再按复制规则接收源的内容
    fn clone_from(&mut self, source: &Self) {
        self.repr = Repr::Empty;
        *self = source.clone();
    }
}

impl PartialEq<StaticError> for Error {
    fn eq(&self, other: &StaticError) -> bool {
        match self.repr {
            Repr::Static(kind) => std::ptr::eq(kind, other),
            _ => false,
        }
    }
}

impl PartialEq<Error> for StaticError {
    fn eq(&self, other: &Error) -> bool {
        other == self
    }
}

impl From<&'static StaticError> for Error {
    fn from(kind: &'static StaticError) -> Self {
        Self::from_static(kind)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::new(msg)
    }
}

// 所有权转移：直接接管调用方的缓冲区
impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self {
            repr: Repr::Dynamic(MessageBuf::adopt(msg.into_boxed_str())),
        }
    }
}

impl From<Box<str>> for Error {
    fn from(msg: Box<str>) -> Self {
        Self {
            repr: Repr::Dynamic(MessageBuf::adopt(msg)),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from_fmt(format_args!("{err:#}"))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Empty => write!(f, "Error::None"),
            Repr::Static(kind) => f.debug_tuple("Error::Static").field(&kind.msg).finish(),
            Repr::Dynamic(buf) => f.debug_tuple("Error::Dynamic").field(&buf.as_str()).finish(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg_str())
    }
}

impl StdError for Error {}

/// Builds a dynamic [`Error`] with `format!` syntax.
///
/// ```
/// let err = mmg_error::errorf!("open {}: {}", "a.txt", 13);
/// assert_eq!(err.msg_str(), "open a.txt: 13");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::error::Error::from_fmt(::core::format_args!($($arg)*))
    };
}
