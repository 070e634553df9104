//! Response bodies, one struct per endpoint shape.

use crate::{
    core::analytics::{AnalyticsSummary, TopItem},
    entities::{menu_item, subscriber},
};
use serde::Serialize;

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: &'static str,
}

/// `GET /menus` and `GET /recommendations`
#[derive(Debug, Serialize)]
pub struct MenuListResponse {
    /// Matching menu items
    pub items: Vec<menu_item::Model>,
}

/// `POST /subscribe`
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    /// Always `true`
    pub ok: bool,
    /// The stored subscriber
    pub subscriber: subscriber::Model,
}

/// `GET /analytics`
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    /// All subscribers
    pub total_subscribers: u64,
    /// Subscribers with `active = true`
    pub active_subscribers: u64,
    /// Most ordered items as `{name, count}`
    pub top_items: Vec<TopItem>,
    /// Latest sign-ups, only present for admin callers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_subscribers: Option<Vec<subscriber::Model>>,
}

impl From<AnalyticsSummary> for AnalyticsResponse {
    fn from(summary: AnalyticsSummary) -> Self {
        Self {
            total_subscribers: summary.subscribers.total,
            active_subscribers: summary.subscribers.active,
            top_items: summary.top_items,
            recent_subscribers: summary.recent_subscribers,
        }
    }
}

/// `DELETE /admin/menu/:id`
#[derive(Debug, Serialize)]
pub struct OkResponse {
    /// Always `true`
    pub ok: bool,
}

/// `POST /admin/upload`
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public relative URL of the stored file
    pub url: String,
}

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}
