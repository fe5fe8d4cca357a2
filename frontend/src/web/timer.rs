//! 定时器适配，基于 `gloo-timers` 的 `TimeoutFuture`

use std::time::Duration;

use async_trait::async_trait;
use career_saarthi::Timer;
use gloo_timers::future::TimeoutFuture;

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
