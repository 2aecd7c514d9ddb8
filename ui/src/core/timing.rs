//! Sleep primitive for timer loops (gloo timers on wasm, tokio natively).

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn sleep_ms(ms: u64) -> impl Future<Output = ()> {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn sleep_ms(ms: u64) -> impl Future<Output = ()> {
    tokio::time::sleep(std::time::Duration::from_millis(ms))
}
