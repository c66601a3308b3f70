//! Defines the routed page sections.
use dioxus::prelude::*;

use crate::components::{AppShell, GalleryView, PlayerView, PortfolioView};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        GalleryView {},
        #[route("/portfolio")]
        PortfolioView {},
        #[route("/player")]
        PlayerView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::GalleryView {} => "Gallery",
        AppView::PortfolioView {} => "Portfolio",
        AppView::PlayerView {} => "Player",
    }
}

pub fn view_icon(view: &AppView) -> &'static str {
    match view {
        AppView::GalleryView {} => "image",
        AppView::PortfolioView {} => "briefcase",
        AppView::PlayerView {} => "music",
    }
}

/// Sections in header order.
pub fn all_views() -> [AppView; 3] {
    [
        AppView::GalleryView {},
        AppView::PortfolioView {},
        AppView::PlayerView {},
    ]
}
