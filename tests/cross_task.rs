use mmg_error::prelude::*;
use mmg_error::kinds;

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn error_types_are_send_and_sync() {
    assert_send_sync::<Error>();
    assert_send_sync::<StaticError>();
}

#[tokio::test(flavor = "multi_thread")]
async fn dynamic_error_moves_between_tasks() {
    let (tx, rx) = tokio::sync::oneshot::channel::<Error>();
    let producer = tokio::spawn(async move {
        let _ = tx.send(errorf!("worker {} failed", 3));
    });
    let got = tokio::time::timeout(std::time::Duration::from_secs(1), rx)
        .await
        .expect("timed out")
        .expect("sender dropped");
    producer.await.expect("producer panicked");
    assert_eq!(got.msg_str(), "worker 3 failed");
}

#[tokio::test(flavor = "multi_thread")]
async fn static_kind_is_read_concurrently() {
    let mut handles = Vec::new();
    for i in 0..16 {
        handles.push(tokio::spawn(async move {
            let e = if i % 2 == 0 {
                Error::from_static(&kinds::TIMEOUT)
            } else {
                Error::new("timeout")
            };
            let copy = e.clone();
            (copy == kinds::TIMEOUT, copy.message())
        }));
    }
    for (i, h) in handles.into_iter().enumerate() {
        let (is_kind, msg) = h.await.expect("task panicked");
        assert_eq!(is_kind, i % 2 == 0);
        assert_eq!(msg, "timeout");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn copies_sent_to_many_tasks_stay_independent() {
    let (tx, mut rx) = tokio::sync::mpsc::channel::<Error>(8);
    let original = Error::new("disk full");
    for _ in 0..8 {
        let tx = tx.clone();
        let copy = original.clone();
        tokio::spawn(async move {
            let _ = tx.send(copy).await;
        });
    }
    drop(tx);
    drop(original);
    let mut n = 0;
    while let Some(e) = rx.recv().await {
        assert_eq!(e.msg_str(), "disk full");
        n += 1;
    }
    assert_eq!(n, 8);
}
