//! # Pages
//!
//! Renders the home page and reports the view to analytics.

use std::sync::Arc;
use tracing::debug;

use crate::collaborators::PageAnalytics;

/// Path reported for every home page render.
pub const HOME_PATH: &str = "/home";

#[derive(Clone)]
pub struct PageRenderer {
    analytics: Arc<dyn PageAnalytics>,
}

impl PageRenderer {
    pub fn new(analytics: Arc<dyn PageAnalytics>) -> Self {
        PageRenderer { analytics }
    }

    /// Produces the home page markup. Each call records exactly one view of
    /// [`HOME_PATH`].
    pub async fn render_page(&self) -> String {
        self.analytics.track_page_view(HOME_PATH);
        tokio::task::yield_now().await;

        debug!(path = HOME_PATH, "Rendered page");
        "<div>content</div>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::MockPageAnalytics;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_render_page_returns_content() {
        let mut analytics = MockPageAnalytics::new();
        analytics.expect_track_page_view().return_const(());

        let html = PageRenderer::new(Arc::new(analytics)).render_page().await;
        assert!(html.to_lowercase().contains("content"));
    }

    #[tokio::test]
    async fn test_render_page_tracks_home_view() {
        let mut analytics = MockPageAnalytics::new();
        analytics
            .expect_track_page_view()
            .with(eq("/home"))
            .times(1)
            .return_const(());

        PageRenderer::new(Arc::new(analytics)).render_page().await;
    }

    #[tokio::test]
    async fn test_each_render_tracks_once() {
        let mut analytics = MockPageAnalytics::new();
        analytics
            .expect_track_page_view()
            .with(eq("/home"))
            .times(3)
            .return_const(());

        let renderer = PageRenderer::new(Arc::new(analytics));
        for _ in 0..3 {
            renderer.render_page().await;
        }
    }
}
