//! Browser-side wiring of the backend collaborators.
//!
//! The fixtures answer instantly; [`Delayed`] adds the latency the real
//! services would have so the pending UI states are visible.

use crate::config::CONFIG;
use anyhow::Result;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use nas_backend::{
    AcceptingSubmissions, BackendRegistry, DashboardContentSource, DashboardPage, FixtureDashboard,
    SubmissionGateway, SubmissionReceipt, SubmissionRequest,
};
use std::rc::Rc;

pub struct Delayed<T> {
    inner: T,
    delay_ms: u32,
}

impl<T> Delayed<T> {
    pub fn new(inner: T, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }
}

#[async_trait(?Send)]
impl<T: SubmissionGateway> SubmissionGateway for Delayed<T> {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt> {
        TimeoutFuture::new(self.delay_ms).await;
        self.inner.submit(request).await
    }
}

#[async_trait(?Send)]
impl<T: DashboardContentSource> DashboardContentSource for Delayed<T> {
    async fn load_page(&self, page: &str) -> Result<DashboardPage> {
        TimeoutFuture::new(self.delay_ms).await;
        self.inner.load_page(page).await
    }
}

pub fn site_backends() -> BackendRegistry {
    BackendRegistry::fixtures()
        .with_submissions(Rc::new(Delayed::new(AcceptingSubmissions, CONFIG.submit_delay_ms)))
        .with_dashboard(Rc::new(Delayed::new(FixtureDashboard, CONFIG.dashboard_load_ms)))
}
