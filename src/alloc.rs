//! 动态消息缓冲区的唯一分配入口。
//!
//! 构造错误时的分配失败不可上报（上报本身就需要分配），因此直接终止进程。
use std::fmt::{self, Write as _};

/// Heap text exclusively owned by one dynamic `Error`.
pub(crate) struct MessageBuf(Box<str>);

impl MessageBuf {
    /// Takes over a buffer the caller already allocated; no copy.
    pub(crate) fn adopt(text: Box<str>) -> Self {
        note_live();
        Self(text)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(any(test, feature = "alloc-stats"))]
impl Drop for MessageBuf {
    fn drop(&mut self) {
        stats::release();
    }
}

/// Copies `msg` into a buffer of exactly `msg.len()` bytes owned by the caller.
///
/// Aborts the process if the allocation fails.
pub(crate) fn copy_message(msg: &str) -> MessageBuf {
    let mut buf = String::new();
    reserve_or_die(&mut buf, msg.len());
    buf.push_str(msg);
    note_buffer();
    MessageBuf::adopt(buf.into_boxed_str())
}

/// Renders `args` into a buffer reserved up front for the rendered length.
///
/// The arguments are formatted twice: once to measure, once to fill. The
/// fill never grows the buffer past the measured length.
pub(crate) fn format_message(args: fmt::Arguments<'_>) -> MessageBuf {
    let mut measure = Measure(0);
    // 测量阶段失败：按已测得的长度预留，填充阶段会在同一处停下
    let _ = measure.write_fmt(args);
    let mut buf = String::new();
    reserve_or_die(&mut buf, measure.0);
    let mut fill = Fill {
        buf: &mut buf,
        limit: measure.0,
    };
    if fill.write_fmt(args).is_err() {
        // Display 实现报错或两次输出不一致：保留已写出的部分
        tracing::warn!(written = buf.len(), measured = measure.0, "formatting error message failed part-way");
    }
    note_buffer();
    MessageBuf::adopt(buf.into_boxed_str())
}

struct Measure(usize);

impl fmt::Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 = self.0.saturating_add(s.len());
        Ok(())
    }
}

struct Fill<'a> {
    buf: &'a mut String,
    limit: usize,
}

impl fmt::Write for Fill<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buf.len() + s.len() > self.limit {
            return Err(fmt::Error);
        }
        self.buf.push_str(s);
        Ok(())
    }
}

pub(crate) fn reserve_or_die(buf: &mut String, len: usize) {
    if buf.try_reserve_exact(len).is_err() {
        die(len);
    }
}

/// Unrecoverable allocation failure while building an error message.
#[cold]
pub(crate) fn die(len: usize) -> ! {
    tracing::error!(len, "allocation failed while constructing error message; aborting");
    std::process::abort()
}

#[cfg(any(test, feature = "alloc-stats"))]
mod stats {
    use std::cell::Cell;

    thread_local! {
        static BUFFERS: Cell<usize> = const { Cell::new(0) };
        static LIVE: Cell<isize> = const { Cell::new(0) };
    }

    pub(super) fn bump() {
        BUFFERS.with(|c| c.set(c.get() + 1));
    }

    pub(super) fn live() {
        LIVE.with(|c| c.set(c.get() + 1));
    }

    pub(super) fn release() {
        LIVE.with(|c| c.set(c.get() - 1));
    }

    pub(super) fn get() -> usize {
        BUFFERS.with(Cell::get)
    }

    pub(super) fn get_live() -> isize {
        LIVE.with(Cell::get)
    }

    pub(super) fn reset() {
        BUFFERS.with(|c| c.set(0));
    }
}

#[inline]
fn note_buffer() {
    #[cfg(any(test, feature = "alloc-stats"))]
    stats::bump();
}

#[inline]
fn note_live() {
    #[cfg(any(test, feature = "alloc-stats"))]
    stats::live();
}

/// Number of message buffers allocated on the current thread since the last reset.
#[cfg(any(test, feature = "alloc-stats"))]
pub fn buffers_allocated() -> usize {
    stats::get()
}

#[cfg(any(test, feature = "alloc-stats"))]
pub fn reset_buffers_allocated() {
    stats::reset();
}

/// Buffers created on this thread minus buffers released on this thread.
///
/// Includes adopted buffers (`From<String>`). A buffer moved to another
/// thread and dropped there is released on that thread's count.
#[cfg(any(test, feature = "alloc-stats"))]
pub fn live_buffers() -> isize {
    stats::get_live()
}
