//! Backend collaborators for booking, pricing, form submission and the
//! dashboard.
//!
//! The site ships without a backend, so every seam has a fixture
//! implementation returning hardcoded data. A deployment swaps them via
//! [`BackendRegistry`] without touching the controllers.

use anyhow::Result;
use async_trait::async_trait;
use nas_types::ServiceId;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, info};

/// Slots offered on every date by the fixture availability source.
pub const FIXTURE_SLOTS: [&str; 7] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"];

/// Service id to price in whole dollars.
pub const FIXTURE_PRICES: [(&str, u32); 5] = [
    ("manicure", 45),
    ("pedicure", 55),
    ("gel-nails", 65),
    ("nail-art", 75),
    ("acrylic", 85),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub form_id: String,
    pub fields: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub accepted: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardPage {
    pub page: String,
    /// Markup for the content region. `None` keeps the loading placeholder.
    pub html: Option<String>,
}

#[async_trait(?Send)]
pub trait AvailabilitySource {
    async fn available_slots(&self, date: &str) -> Result<Vec<String>>;
}

#[async_trait(?Send)]
pub trait PriceCatalog {
    async fn price_for(&self, service: &ServiceId) -> Result<Option<u32>>;
}

#[async_trait(?Send)]
pub trait SubmissionGateway {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt>;
}

#[async_trait(?Send)]
pub trait DashboardContentSource {
    async fn load_page(&self, page: &str) -> Result<DashboardPage>;
}

#[derive(Default)]
pub struct FixtureAvailability;

#[async_trait(?Send)]
impl AvailabilitySource for FixtureAvailability {
    async fn available_slots(&self, date: &str) -> Result<Vec<String>> {
        debug!(date, "fixture availability");
        Ok(FIXTURE_SLOTS.iter().map(|slot| (*slot).to_owned()).collect())
    }
}

#[derive(Default)]
pub struct FixturePriceCatalog;

#[async_trait(?Send)]
impl PriceCatalog for FixturePriceCatalog {
    async fn price_for(&self, service: &ServiceId) -> Result<Option<u32>> {
        Ok(FIXTURE_PRICES
            .iter()
            .find(|(id, _)| *id == service.0)
            .map(|(_, price)| *price))
    }
}

/// Accepts every submission immediately.
#[derive(Default)]
pub struct AcceptingSubmissions;

#[async_trait(?Send)]
impl SubmissionGateway for AcceptingSubmissions {
    async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionReceipt> {
        info!(form = %request.form_id, fields = request.fields.len(), "submission accepted");
        Ok(SubmissionReceipt {
            accepted: true,
            message: "Message sent successfully!".to_owned(),
        })
    }
}

/// Reports every page as loaded without replacing the placeholder.
#[derive(Default)]
pub struct FixtureDashboard;

#[async_trait(?Send)]
impl DashboardContentSource for FixtureDashboard {
    async fn load_page(&self, page: &str) -> Result<DashboardPage> {
        info!("Loading {page} page");
        Ok(DashboardPage {
            page: page.to_owned(),
            html: None,
        })
    }
}

#[derive(Clone)]
pub struct BackendRegistry {
    availability: Rc<dyn AvailabilitySource>,
    prices: Rc<dyn PriceCatalog>,
    submissions: Rc<dyn SubmissionGateway>,
    dashboard: Rc<dyn DashboardContentSource>,
}

impl BackendRegistry {
    pub fn fixtures() -> Self {
        Self {
            availability: Rc::new(FixtureAvailability),
            prices: Rc::new(FixturePriceCatalog),
            submissions: Rc::new(AcceptingSubmissions),
            dashboard: Rc::new(FixtureDashboard),
        }
    }

    pub fn with_availability(mut self, source: Rc<dyn AvailabilitySource>) -> Self {
        self.availability = source;
        self
    }

    pub fn with_prices(mut self, catalog: Rc<dyn PriceCatalog>) -> Self {
        self.prices = catalog;
        self
    }

    pub fn with_submissions(mut self, gateway: Rc<dyn SubmissionGateway>) -> Self {
        self.submissions = gateway;
        self
    }

    pub fn with_dashboard(mut self, source: Rc<dyn DashboardContentSource>) -> Self {
        self.dashboard = source;
        self
    }

    pub fn availability(&self) -> Rc<dyn AvailabilitySource> {
        self.availability.clone()
    }

    pub fn prices(&self) -> Rc<dyn PriceCatalog> {
        self.prices.clone()
    }

    pub fn submissions(&self) -> Rc<dyn SubmissionGateway> {
        self.submissions.clone()
    }

    pub fn dashboard(&self) -> Rc<dyn DashboardContentSource> {
        self.dashboard.clone()
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::fixtures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    struct RejectingSubmissions;

    #[async_trait(?Send)]
    impl SubmissionGateway for RejectingSubmissions {
        async fn submit(&self, _request: SubmissionRequest) -> Result<SubmissionReceipt> {
            Err(anyhow!("503 Service Unavailable"))
        }
    }

    #[tokio::test]
    async fn fixture_prices_cover_known_services() -> Result<()> {
        let catalog = FixturePriceCatalog;
        assert_eq!(catalog.price_for(&ServiceId("gel-nails".into())).await?, Some(65));
        assert_eq!(catalog.price_for(&ServiceId("acrylic".into())).await?, Some(85));
        assert_eq!(catalog.price_for(&ServiceId("waxing".into())).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn fixture_slots_ignore_the_date() -> Result<()> {
        let source = FixtureAvailability;
        let monday = source.available_slots("2026-10-19").await?;
        let sunday = source.available_slots("2026-10-25").await?;
        assert_eq!(monday, sunday);
        assert_eq!(monday.len(), 7);
        assert!(!monday.iter().any(|slot| slot == "12:00"));
        Ok(())
    }

    #[tokio::test]
    async fn registry_swaps_the_submission_gateway() -> Result<()> {
        let registry = BackendRegistry::fixtures().with_submissions(Rc::new(RejectingSubmissions));
        let request = SubmissionRequest {
            form_id: "contact".into(),
            fields: vec![("email".into(), "a@b.com".into())],
        };
        let err = registry
            .submissions()
            .submit(request)
            .await
            .expect_err("swapped gateway should reject");
        assert!(err.to_string().contains("503"));
        Ok(())
    }

    #[tokio::test]
    async fn accepting_gateway_confirms_with_message() -> Result<()> {
        let receipt = AcceptingSubmissions
            .submit(SubmissionRequest {
                form_id: "contact".into(),
                fields: vec![("name".into(), "Ada".into())],
            })
            .await?;
        assert!(receipt.accepted);
        assert_eq!(receipt.message, "Message sent successfully!");
        Ok(())
    }

    #[tokio::test]
    async fn accepting_gateway_takes_forms_without_id_or_fields() -> Result<()> {
        let receipt = AcceptingSubmissions.submit(SubmissionRequest::default()).await?;
        assert!(receipt.accepted);
        Ok(())
    }

    #[tokio::test]
    async fn fixture_dashboard_keeps_placeholder() -> Result<()> {
        let page = FixtureDashboard.load_page("appointments").await?;
        assert_eq!(page.page, "appointments");
        assert!(page.html.is_none());
        Ok(())
    }
}
