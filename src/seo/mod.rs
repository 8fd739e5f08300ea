//! Page metadata, breadcrumbs and `<head>` rendering.

mod breadcrumb;
mod defaults;
mod head;
mod meta;
mod og;

pub use breadcrumb::{BreadcrumbEntry, Breadcrumbs, resolve, segment_label, trail_from_path};
pub use defaults::{SiteDefaults, is_absolute_url};
pub use head::render_head;
pub use meta::{
    ArticleOverrides, MetadataOverrides, PageKind, PageMetadata, compose, merge_keywords,
};
pub use og::{
    IMAGE_HEIGHT, IMAGE_WIDTH, OgArticle, OgImage, OgKind, OpenGraph, TWITTER_CARD, TwitterCard,
    resolve_image,
};
