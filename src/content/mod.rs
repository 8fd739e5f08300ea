//! Blog content: posts, categories and the read contract pages use.
//!
//! Pages never talk to a CMS directly; they go through [`PostSource`].
//! [`PostStore`] is the in-memory implementation, loaded from a TOML
//! catalog.

mod page;
mod store;

pub use page::{PageBundle, PageContext, RelatedPost};
pub use store::{CatalogError, PostStore};

use crate::utils::date::DateTimeUtc;

/// Number of related posts attached to a post detail.
pub const RELATED_LIMIT: usize = 2;

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Rendered HTML body; listings leave it out.
    pub body: Option<String>,
    /// Category title.
    pub category: String,
    /// Slug of `category`, filled in by the store.
    pub category_slug: String,
    pub published: DateTimeUtc,
    /// Absolute URL or site-relative path.
    pub main_image: Option<String>,
    /// Author name; `None` credits the site's default author.
    pub author: Option<String>,
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
}

/// A single post plus related posts from its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    /// At most [`RELATED_LIMIT`], never containing `post` itself.
    pub related: Vec<Post>,
}

/// Read access to blog content.
///
/// Every method is a pure read; implementations must be shareable across
/// threads so bundles can be built in parallel.
pub trait PostSource: Send + Sync {
    /// Every post, newest first.
    fn all_posts(&self) -> Vec<Post>;

    /// One post with its related posts.
    fn post_by_slug(&self, slug: &str) -> Option<PostDetail>;

    /// Posts in one category, newest first.
    fn posts_by_category(&self, category_slug: &str) -> Vec<Post>;

    /// Every category, sorted by title.
    fn categories(&self) -> Vec<Category>;
}
