//! 概览示例：静态种类按身份分类、动态消息深拷贝、序列化往返

use mmg_error::kinds;
use mmg_error::prelude::*;

#[static_error(name = "demo.quota")]
static QUOTA_EXCEEDED: StaticError = StaticError::new("quota exceeded");

fn fetch(id: u32) -> Error {
    match id {
        0 => Error::from_static(&kinds::NOT_FOUND),
        1..=9 => Error::NONE,
        10..=99 => Error::from_static(&QUOTA_EXCEEDED),
        _ => errorf!("id {id} out of range"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    for id in [0, 5, 42, 1000] {
        let err = fetch(id);
        if err.is_ok() {
            tracing::info!(target = "demo.overview", id, "ok");
        } else if err == kinds::NOT_FOUND {
            tracing::info!(target = "demo.overview", id, "missing, skipping");
        } else if err == QUOTA_EXCEEDED {
            tracing::warn!(target = "demo.overview", id, "throttled: {err}");
        } else {
            // 动态消息：复制即深拷贝（trace 级日志可见）
            let kept = err.clone();
            tracing::error!(target = "demo.overview", id, error = %kept, "failed");
        }
        match serde_json::to_string(&err) {
            Ok(json) => tracing::info!(target = "demo.overview", id, %json, "serialized"),
            Err(e) => tracing::error!(target = "demo.overview", id, error = %e, "serialize failed"),
        }
    }
}
