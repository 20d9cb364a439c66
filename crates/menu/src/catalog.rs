//! Built-in menu catalog and catalog files

use shared::{Badge, Catalog, MenuCategory, MenuLink, NavError, Result, Role};
use std::path::Path;

fn link(name: &str, href: &str, role: Role) -> MenuLink {
    MenuLink::for_role(name, href, role)
}

fn badged(name: &str, href: &str, role: Role, badge: Badge) -> MenuLink {
    MenuLink::for_role(name, href, role).with_badge(badge)
}

/// The canonical catalog: every link is visible to guests plus one elevated role
pub fn default_catalog() -> Catalog {
    use Badge::*;
    use Role::*;

    Catalog::new(vec![
        MenuCategory::new(
            "WEBSITE",
            vec![
                link("Website Link 1", "/website-link-1", Architect),
                link("Website Link 2", "/website-link-2", Admin),
                link("Website Link 3", "/website-link-3", Editor),
                link("Website Link 4", "/website-link-4", AuthUser),
                badged("Website Link 5", "/website-link-5", Subscriber, New),
                link("Website Link 6", "/website-link-6", Customer),
                link("Website Link 7", "/website-link-7", ApiUser),
                link("Website Link 8", "/website-link-8", Admin),
                link("Website Link 9", "/website-link-9", Editor),
                badged("Website Link 10", "/website-link-10", Architect, Important),
            ],
        ),
        MenuCategory::new(
            "COMMERCE",
            vec![
                link("Ecommerce", "/ecommerce", Customer),
                link("Ecommerce Templates", "/ecommerce-templates", Admin),
                badged("Online Stores", "/stores", Customer, Important),
                link("Services", "/services", Editor),
                badged("Invoicing", "/invoicing", AuthUser, Ad),
            ],
        ),
        MenuCategory::new(
            "MARKETING",
            vec![
                link("Marketing Tools", "/marketing", Editor),
                badged("Email Campaigns", "/email", Admin, New),
                link("SEO Tools", "/seo", Subscriber),
                link("Free Tools", "/free-tools", Subscriber),
                badged("Recommendation", "/recommendation-2", AuthUser, Recommendation),
            ],
        ),
        MenuCategory::new(
            "DOMAINS",
            vec![
                link("Find a Domain", "/find-domain", Editor),
                link("Transfer a Domain", "/transfer-domain", Admin),
                badged("Domain Management", "/domain-management", Architect, Updated),
                link("DNS Settings", "/dns", ApiUser),
            ],
        ),
        MenuCategory::new(
            "ANALYTICS",
            vec![
                badged("Website Analytics", "/analytics", Architect, New),
                link("Traffic Reports", "/traffic", Admin),
                badged("Conversion Tracking", "/conversion", Editor, Important),
                link("User Behavior", "/behavior", Customer),
                link("Performance Metrics", "/performance", Subscriber),
                badged("Custom Dashboards", "/dashboards", Admin, Updated),
                link("Real-time Data", "/realtime", ApiUser),
                link("Export Tools", "/export", Editor),
                link("API Access", "/api", ApiUser),
                link("Advanced Filters", "/filters", Architect),
                badged("Automated Reports", "/reports", AuthUser, Ad),
                link("Goal Tracking", "/goals", Customer),
            ],
        ),
        MenuCategory::new(
            "DESIGN",
            vec![
                link("Logo Maker", "/logo", Architect),
                badged("Brand Kit", "/brand", Editor, New),
                link("Color Palette", "/colors", Admin),
                link("Font Library", "/fonts", AuthUser),
                badged("Image Editor", "/image-editor", Subscriber, Updated),
                link("Icon Collection", "/icons", ApiUser),
                link("Template Gallery", "/gallery", Customer),
                badged("Recommendation", "/recommendation-3", Editor, Recommendation),
            ],
        ),
        MenuCategory::new(
            "HOSTING",
            vec![
                link("Web Hosting", "/hosting", Admin),
                link("Cloud Storage", "/storage", Editor),
                badged("CDN Services", "/cdn", Customer, Important),
                link("SSL Certificates", "/ssl", Architect),
                link("Backup Solutions", "/backup", Subscriber),
                link("Server Management", "/server", ApiUser),
                link("Database Hosting", "/database", Customer),
                link("Email Hosting", "/email-hosting", AuthUser),
                link("FTP Access", "/ftp", Editor),
                link("Custom Domains", "/custom-domains", Architect),
                badged("Staging Environment", "/staging", Admin, New),
                link("Load Balancing", "/load-balancing", ApiUser),
                badged("Security Monitoring", "/security", Admin, Updated),
                link("Performance Optimization", "/optimization", Subscriber),
                link("Technical Support", "/support", Customer),
            ],
        ),
        MenuCategory::new(
            "INTEGRATIONS",
            vec![
                link("Third-party Apps", "/apps", AuthUser),
                badged("API Connections", "/api-connections", Admin, Important),
                link("Webhook Setup", "/webhooks", ApiUser),
                link("Social Media", "/social", Subscriber),
                badged("Payment Gateways", "/payments", Editor, Ad),
                link("CRM Integration", "/crm", Customer),
                link("Email Marketing", "/email-marketing", Architect),
                link("Analytics Tools", "/analytics-tools", Editor),
                badged("Chat Widgets", "/chat", AuthUser, New),
            ],
        ),
    ])
}

/// Elevated role assigned to the link at `index` when rotating through them
pub fn rotating_role(index: usize) -> Role {
    Role::ELEVATED[index % Role::ELEVATED.len()]
}

/// Synthetic "Website Link N" entries
///
/// Roles rotate through the elevated roles. Every fifth link gets a badge:
/// `IMPORTANT` on multiples of ten, `NEW` otherwise.
pub fn generate_website_links(count: usize) -> Vec<MenuLink> {
    (1..=count)
        .map(|i| {
            let link = MenuLink::for_role(
                format!("Website Link {i}"),
                format!("/website-link-{i}"),
                rotating_role(i - 1),
            );
            match i {
                i if i % 10 == 0 => link.with_badge(Badge::Important),
                i if i % 5 == 0 => link.with_badge(Badge::New),
                _ => link,
            }
        })
        .collect()
}

/// Load and validate a catalog from a JSON or YAML file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        other => {
            return Err(NavError::InvalidCatalog(format!(
                "unsupported catalog format: {}",
                other.unwrap_or("<none>")
            )))
        }
    };
    catalog.validate()?;

    tracing::info!(
        path = %path.display(),
        categories = catalog.categories.len(),
        links = catalog.link_count(),
        "Catalog loaded"
    );
    Ok(catalog)
}

/// Catalog from `path` when given, otherwise the built-in one
pub fn load_or_default(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => load_catalog(p),
        None => Ok(default_catalog()),
    }
}
