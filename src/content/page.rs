//! Everything a page embeds: metadata, breadcrumbs and structured data.

use serde::Serialize;

use super::{Post, PostDetail, PostSource};
use crate::config::{BlogConfig, OrganizationConfig, SearchConfig, SiteConfig};
use crate::schema::{
    ArticleDetails, ArticleSchema, CollectionPageSchema, ListingEntry, OrganizationSchema, Schema,
    SchemaError, WebSiteSchema, to_script_tag,
};
use crate::seo::{
    ArticleOverrides, BreadcrumbEntry, Breadcrumbs, MetadataOverrides, PageKind, PageMetadata,
    SiteDefaults, compose, render_head, resolve,
};

/// Keywords every post adds after its category.
const POST_KEYWORDS: [&str; 4] = ["men's health", "wellness", "fitness", "middle-aged men"];
/// `article:tag` values of every post.
const POST_TAGS: [&str; 3] = ["health", "wellness", "men over 40"];
/// Extra keywords of the home page.
const HOME_KEYWORDS: [&str; 2] = ["nutrition", "mental health"];

const NOT_FOUND_TITLE: &str = "Post Not Found";
const NOT_FOUND_DESCRIPTION: &str = "The requested blog post could not be found.";

/// One page, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBundle {
    pub metadata: PageMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Breadcrumbs>,
    pub structured_data: Vec<Schema>,
    /// Same-category posts shown under a post.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedPost>,
    /// `metadata` rendered as `<head>` tags.
    pub head: String,
}

/// A related post link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedPost {
    pub name: String,
    /// Site-relative path of the post.
    pub path: String,
    pub excerpt: String,
    pub category: String,
}

impl PageBundle {
    fn new(
        metadata: PageMetadata,
        breadcrumbs: Option<Breadcrumbs>,
        structured_data: Vec<Schema>,
    ) -> Self {
        let head = render_head(&metadata);
        Self {
            metadata,
            breadcrumbs,
            structured_data,
            related: Vec::new(),
            head,
        }
    }

    /// Every JSON-LD record as a `<script>` element, breadcrumbs last.
    pub fn script_tags(&self) -> Result<Vec<String>, SchemaError> {
        let mut tags = self
            .structured_data
            .iter()
            .map(to_script_tag)
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(crumbs) = &self.breadcrumbs {
            tags.push(to_script_tag(&crumbs.schema)?);
        }
        Ok(tags)
    }

    /// Pretty-printed bundle.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Site configuration the page builders read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub defaults: SiteDefaults,
    pub blog: BlogConfig,
    pub search: SearchConfig,
    pub organization: OrganizationConfig,
}

impl PageContext {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            defaults: SiteDefaults::from_config(&config.site),
            blog: config.blog.clone(),
            search: config.search.clone(),
            organization: config.organization.clone(),
        }
    }

    /// Bundle for `/blog/<slug>`, or the not-found bundle.
    pub fn post(&self, source: &dyn PostSource, slug: &str) -> PageBundle {
        match source.post_by_slug(slug) {
            Some(detail) => self.post_page(&detail),
            None => self.not_found(),
        }
    }

    /// Bundle for a known post and its related posts.
    pub fn post_page(&self, detail: &PostDetail) -> PageBundle {
        let post = &detail.post;
        let defaults = &self.defaults;
        let path = self.blog.post_path(&post.slug);
        let published = post.published.to_rfc3339();
        let author = post
            .author
            .clone()
            .unwrap_or_else(|| defaults.primary_author().to_owned());
        let image = post
            .main_image
            .clone()
            .unwrap_or_else(|| defaults.placeholder_image.clone());

        let mut keywords = vec![post.category.clone()];
        keywords.extend(POST_KEYWORDS.map(String::from));

        let metadata = compose(
            &MetadataOverrides {
                title: Some(post.title.clone()),
                description: Some(post.excerpt.clone()),
                keywords,
                image: Some(image.clone()),
                kind: PageKind::Article(ArticleOverrides {
                    published_time: Some(published.clone()),
                    modified_time: None,
                    authors: Some(vec![author.clone()]),
                    section: Some(post.category.clone()),
                    tags: POST_TAGS.map(String::from).to_vec(),
                }),
                path: path.clone(),
            },
            defaults,
        );

        let trail = [
            BreadcrumbEntry::new(&self.blog.home_label, "/"),
            BreadcrumbEntry::new(&self.blog.label, &self.blog.path),
            BreadcrumbEntry::new(&post.category, self.blog.category_path(&post.category_slug)),
            BreadcrumbEntry::new(&post.title, &path),
        ];
        let breadcrumbs = resolve(&trail, &path, &self.blog.home_label, &defaults.base_url);

        let article = ArticleSchema::new(
            &ArticleDetails {
                title: post.title.clone(),
                description: metadata.description.clone(),
                image,
                published_time: published,
                modified_time: None,
                author_name: author,
                author_url: None,
                path,
            },
            defaults,
        );

        let related = detail
            .related
            .iter()
            .map(|other| RelatedPost {
                name: other.title.clone(),
                path: self.blog.post_path(&other.slug),
                excerpt: other.excerpt.clone(),
                category: other.category.clone(),
            })
            .collect();

        PageBundle {
            related,
            ..PageBundle::new(metadata, Some(breadcrumbs), vec![Schema::Article(article)])
        }
    }

    /// Metadata-only bundle for an unknown post.
    pub fn not_found(&self) -> PageBundle {
        let metadata = compose(
            &MetadataOverrides {
                title: Some(NOT_FOUND_TITLE.into()),
                description: Some(NOT_FOUND_DESCRIPTION.into()),
                ..Default::default()
            },
            &self.defaults,
        );
        PageBundle::new(metadata, None, Vec::new())
    }

    /// Bundle for the blog listing.
    pub fn blog_index(&self, source: &dyn PostSource) -> PageBundle {
        let blog = &self.blog;
        let metadata = compose(
            &MetadataOverrides {
                title: Some(blog.title.clone()),
                description: Some(blog.description.clone()),
                keywords: blog.keywords.clone(),
                path: blog.path.clone(),
                ..Default::default()
            },
            &self.defaults,
        );

        let trail = [
            BreadcrumbEntry::new(&blog.home_label, "/"),
            BreadcrumbEntry::new(&blog.label, &blog.path),
        ];
        let breadcrumbs = resolve(&trail, &blog.path, &blog.home_label, &self.defaults.base_url);

        let entries: Vec<ListingEntry> = source
            .all_posts()
            .into_iter()
            .map(|post| ListingEntry {
                path: blog.post_path(&post.slug),
                name: post.title,
                description: post.excerpt,
            })
            .collect();
        let listing = CollectionPageSchema::new(
            &blog.title,
            &blog.description,
            &blog.path,
            &entries,
            &self.defaults,
        );

        PageBundle::new(
            metadata,
            Some(breadcrumbs),
            vec![Schema::CollectionPage(listing)],
        )
    }

    /// Bundle for `/`: site defaults plus the website and publisher records.
    pub fn home(&self) -> PageBundle {
        let metadata = compose(
            &MetadataOverrides {
                keywords: HOME_KEYWORDS.map(String::from).to_vec(),
                path: "/".into(),
                ..Default::default()
            },
            &self.defaults,
        );
        let structured_data = vec![
            Schema::WebSite(WebSiteSchema::new(&self.defaults, &self.search)),
            Schema::Organization(OrganizationSchema::new(&self.defaults, &self.organization)),
        ];
        PageBundle::new(metadata, None, structured_data)
    }
}
