//! `<head>` tag rendering for composed metadata.
//!
//! Emits, in order: title, description, keywords, canonical link,
//! `og:*`, `article:*` (articles only) and `twitter:*`. One tag per line.

use super::meta::PageMetadata;
use super::og::OgArticle;
use crate::utils::html::{escape, escape_attr};

/// Render metadata as `<head>` tags.
pub fn render_head(meta: &PageMetadata) -> String {
    let mut head = HeadWriter::default();

    head.line(format_args!("<title>{}</title>", escape(&meta.title)));
    head.name("description", &meta.description);
    if !meta.keywords.is_empty() {
        head.name("keywords", &meta.keywords.join(","));
    }
    head.line(format_args!(
        r#"<link rel="canonical" href="{}"/>"#,
        escape_attr(&meta.canonical)
    ));

    let og = &meta.open_graph;
    head.property("og:title", &og.title);
    head.property("og:description", &og.description);
    head.property("og:url", &og.url);
    head.property("og:site_name", &og.site_name);
    head.property("og:locale", &og.locale);
    for image in &og.images {
        head.property("og:image", &image.url);
        head.property("og:image:width", &image.width.to_string());
        head.property("og:image:height", &image.height.to_string());
        head.property("og:image:alt", &image.alt);
    }
    head.property("og:type", og.kind.as_str());
    if let Some(article) = og.kind.article() {
        head.article(article);
    }

    let twitter = &meta.twitter;
    head.name("twitter:card", twitter.card);
    head.name("twitter:creator", &twitter.creator);
    head.name("twitter:title", &twitter.title);
    head.name("twitter:description", &twitter.description);
    for image in &twitter.images {
        head.name("twitter:image", image);
    }

    head.finish()
}

#[derive(Default)]
struct HeadWriter {
    out: String,
}

impl HeadWriter {
    fn line(&mut self, tag: std::fmt::Arguments<'_>) {
        self.out.push_str(&tag.to_string());
        self.out.push('\n');
    }

    fn name(&mut self, name: &str, content: &str) {
        self.line(format_args!(
            r#"<meta name="{name}" content="{}"/>"#,
            escape_attr(content)
        ));
    }

    fn property(&mut self, property: &str, content: &str) {
        self.line(format_args!(
            r#"<meta property="{property}" content="{}"/>"#,
            escape_attr(content)
        ));
    }

    fn article(&mut self, article: &OgArticle) {
        if let Some(published) = &article.published_time {
            self.property("article:published_time", published);
        }
        if let Some(modified) = &article.modified_time {
            self.property("article:modified_time", modified);
        }
        for author in &article.authors {
            self.property("article:author", author);
        }
        if let Some(section) = &article.section {
            self.property("article:section", section);
        }
        for tag in &article.tags {
            self.property("article:tag", tag);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
