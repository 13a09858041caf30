//! Timer Seam

use std::time::Duration;

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}
