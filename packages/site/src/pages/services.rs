//! Services page and its category filter.

use garage_cowboy_content::{Service, ServicesPageContent};
use maud::{html, Markup};

use super::{background, tel};

/// Category id that selects every service.
pub const ALL_CATEGORIES: &str = "all";

/// Which services the grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Filter from the `category` query value. Missing, empty and `all` all
    /// select everything.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(id) => Self::Category(id.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(id) => id,
        }
    }

    pub fn matches(&self, service: &Service) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => service.category.as_deref() == Some(id.as_str()),
        }
    }
}

/// Services visible under `filter`, in content order.
pub fn filter_services<'a>(services: &'a [Service], filter: &CategoryFilter) -> Vec<&'a Service> {
    services.iter().filter(|s| filter.matches(s)).collect()
}

fn filter_button(label: &str, id: &str, selected: bool) -> Markup {
    html! {
        a.filter-button.selected[selected]
            href={ "/services?category=" (urlencoding::encode(id)) }
            aria-pressed=(if selected { "true" } else { "false" }) {
            (label)
        }
    }
}

/// Blank CTA fields count as missing.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn service_card(service: &Service, fallback_phone: &str) -> Markup {
    let cta_link = match non_empty(service.cta_link.as_deref()) {
        Some(link) => link.to_string(),
        None => tel(fallback_phone),
    };
    html! {
        div.service-card data-id=(service.id) {
            div.service-image {
                img src=(service.image_url) alt=(service.title);
                @if service.featured {
                    span.badge { "Popular" }
                }
            }
            div.service-body {
                h3 { (service.title) }
                p { (service.description) }
                @if !service.features.is_empty() {
                    ul.feature-list {
                        @for feature in &service.features {
                            li { span.check { "✓" } (feature) }
                        }
                    }
                }
                @if let Some(price) = &service.price {
                    p.price { (price) }
                }
                a.button-submit href=(cta_link) {
                    (non_empty(service.cta_text.as_deref()).unwrap_or("Get Quote"))
                }
            }
        }
    }
}

pub fn render(content: &ServicesPageContent, filter: &CategoryFilter) -> Markup {
    let phone = content.hero.cta_phone.as_deref().unwrap_or_default();
    let visible = filter_services(&content.services, filter);

    html! {
        section.hero style=(background(&content.hero.background_image)) {
            h1 { (content.hero.headline) }
            @if let Some(subheadline) = &content.hero.subheadline {
                p.hero-subheadline { (subheadline) }
            }
            a.button-primary href=(tel(phone)) {
                (content.hero.cta_text.as_deref().unwrap_or_default())
            }
        }

        section.category-filter {
            (filter_button("All Services", ALL_CATEGORIES, *filter == CategoryFilter::All))
            @for category in &content.categories {
                (filter_button(&category.name, &category.id, filter.id() == category.id))
            }
        }

        section.services {
            div.service-grid data-category=(filter.id()) {
                @for service in &visible {
                    (service_card(service, phone))
                }
            }
        }

        section.emergency-banner {
            h2 { (content.emergency.title) }
            p { (content.emergency.description) }
            a.button-primary href=(tel(&content.emergency.phone)) { (content.emergency.phone) }
        }

        section.process {
            h2 { (content.process.title) }
            ol.process-steps {
                @for (index, step) in content.process.steps.iter().enumerate() {
                    li.process-step data-id=(step.id) {
                        span.step-number { ((index + 1).to_string()) }
                        h3 { (step.title) }
                        p { (step.description) }
                    }
                }
            }
        }

        section.warranty {
            img.warranty-icon src=(content.warranty.icon) alt="Warranty Badge";
            h2 { (content.warranty.title) }
            p { (content.warranty.description) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_cowboy_content::ContentRegistry;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn content() -> Arc<ServicesPageContent> {
        ContentRegistry::builtin().unwrap().page::<ServicesPageContent>()
    }

    fn ids(services: &[&Service]) -> Vec<String> {
        services.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_from_query() {
        assert_eq!(CategoryFilter::from_query(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query(Some("all")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query(Some("repair")),
            CategoryFilter::Category("repair".to_string())
        );
    }

    #[test]
    fn test_all_is_identity() {
        let content = content();
        let all = filter_services(&content.services, &CategoryFilter::All);
        let expected: Vec<String> = content.services.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids(&all), expected);
    }

    #[test]
    fn test_category_is_exact_subset() {
        let content = content();
        let filter = CategoryFilter::Category("repair".to_string());
        let repairs = filter_services(&content.services, &filter);
        assert!(!repairs.is_empty());
        assert!(repairs.iter().all(|s| s.category.as_deref() == Some("repair")));
        let expected = content
            .services
            .iter()
            .filter(|s| s.category.as_deref() == Some("repair"))
            .count();
        assert_eq!(repairs.len(), expected);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let content = content();
        let filter = CategoryFilter::Category("openers".to_string());
        let once: Vec<Service> = filter_services(&content.services, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_services(&once, &filter);
        assert_eq!(ids(&twice), once.iter().map(|s| s.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_unmatched_category_renders_empty_grid() {
        let filter = CategoryFilter::Category("gates".to_string());
        let html = render(&content(), &filter).into_string();
        assert!(html.contains(r#"<div class="service-grid" data-category="gates"></div>"#));
        assert!(html.contains("How It Works"));
    }

    #[test]
    fn test_selected_category_marked() {
        let filter = CategoryFilter::Category("maintenance".to_string());
        let html = render(&content(), &filter).into_string();
        assert_eq!(html.matches("filter-button selected").count(), 1);
        assert!(html.contains(r#"class="filter-button selected" href="/services?category=maintenance""#));
    }

    #[test]
    fn test_card_fallbacks() {
        let html = render(&content(), &CategoryFilter::All).into_string();
        // tune-up has no ctaLink or ctaText
        assert!(html.contains(r#"href="tel:(871) 256-0122">Get Quote</a>"#));
        assert!(html.contains(r##"href="#contact">Schedule Consultation</a>"##));
        assert_eq!(html.matches(">Popular<").count(), 2);
    }

    #[test]
    fn test_blank_cta_fields_fall_back() {
        let mut content = (*content()).clone();
        let service = &mut content.services[0];
        service.cta_link = Some(String::new());
        service.cta_text = Some("  ".to_string());
        let card = service_card(service, "(871) 256-0122").into_string();
        assert!(card.contains(r#"href="tel:(871) 256-0122">Get Quote</a>"#));
        assert!(!card.contains(r#"href="""#));
    }

    #[test]
    fn test_filter_links_encode_category_id() {
        let mut content = (*content()).clone();
        content.categories[0].id = "doors & gates".to_string();
        let html = render(&content, &CategoryFilter::All).into_string();
        assert!(html.contains(r#"href="/services?category=doors%20%26%20gates""#));
        assert!(!html.contains("category=doors &amp;"));
    }
}
