//! `robots.txt`, `sitemap.xml` and breadcrumb structured data.

use serde_json::{Value, json};

use crate::domain::company::SitemapEntry;
use crate::dto::seo::Breadcrumb;
use crate::repository::CompanyReader;

pub fn robots_txt(site_origin: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {site_origin}/sitemap.xml\n")
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a sitemap with one `<url>` per named company.
pub fn sitemap_xml(site_origin: &str, entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries
        .iter()
        .filter(|e| !e.name.trim().is_empty() && !e.slug.is_empty())
    {
        let loc = format!("{site_origin}/directory/{}", entry.slug);
        xml.push_str(&format!(
            "<url><loc>{}</loc><lastmod>{}</lastmod></url>\n",
            escape_xml(&loc),
            entry.created_at.format("%Y-%m-%dT%H:%M:%S+00:00")
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Loads the newest companies and renders the sitemap.
///
/// A failing store yields an empty sitemap rather than an error page.
pub fn load_sitemap<R>(repo: &R, site_origin: &str, limit: i64) -> String
where
    R: CompanyReader + ?Sized,
{
    match repo.list_sitemap_entries(limit) {
        Ok(entries) => sitemap_xml(site_origin, &entries),
        Err(err) => {
            log::error!("Failed to load sitemap entries: {err}");
            sitemap_xml(site_origin, &[])
        }
    }
}

/// Builds a schema.org `BreadcrumbList`.
pub fn breadcrumb_list(site_origin: &str, items: &[Breadcrumb]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let mut element = json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.label,
            });
            if let Some(href) = &item.href {
                element["item"] = Value::String(format!("{site_origin}{href}"));
            }
            element
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
