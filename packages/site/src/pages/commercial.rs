use garage_cowboy_content::{CommercialPageContent, IconCard};
use maud::{html, Markup};

use super::{background, tel};
use crate::components::{contact_form, ContactFormState};

/// The first three reasons are shown as a column beside the rest.
const LEADING_REASONS: usize = 3;

fn reason(reason: &IconCard) -> Markup {
    html! {
        div.reason data-id=(reason.id) {
            span.reason-icon { (reason.icon) }
            div {
                h3 { (reason.title) }
                p { (reason.description) }
            }
        }
    }
}

pub fn render(content: &CommercialPageContent, form: &ContactFormState, page: &str) -> Markup {
    let phone = content.hero.cta_phone.as_deref().unwrap_or_default();
    let reasons = &content.why_choose_us.reasons;
    let split = reasons.len().min(LEADING_REASONS);
    let (leading, rest) = reasons.split_at(split);

    html! {
        section.hero style=(background(&content.hero.background_image)) {
            @if let Some(badge) = &content.hero.badge {
                span.hero-badge { (badge) }
            }
            h1 { (content.hero.headline) }
            @if let Some(subheadline) = &content.hero.subheadline {
                p.hero-subheadline { (subheadline) }
            }
            div.hero-actions {
                a.button-primary href="#contact" { "Request Commercial Quote" }
                a.button-secondary href=(tel(phone)) { "24/7 Emergency: " (phone) }
            }
        }

        section.trust-indicators {
            @for indicator in &content.trust_indicators {
                div.stat data-id=(indicator.id) {
                    div.stat-value { (indicator.value) }
                    p.stat-label { (indicator.label) }
                }
            }
        }

        section.industries {
            h2 { (content.industries.title) }
            p { (content.industries.description) }
            div.card-grid {
                @for industry in &content.industries.items {
                    div.industry-card data-id=(industry.id) {
                        img.industry-icon src=(industry.icon) alt=(industry.name);
                        h3 { (industry.name) }
                        p { (industry.description) }
                        ul.examples {
                            @for example in &industry.examples {
                                li { span.bullet { "•" } (example) }
                            }
                        }
                    }
                }
            }
        }

        section.services {
            h2 { (content.services.title) }
            div.service-grid {
                @for service in &content.services.items {
                    div.service-card data-id=(service.id) {
                        img src=(service.image_url) alt=(service.title);
                        div.service-title {
                            h3 { (service.title) }
                            @if service.popular {
                                span.badge { "Popular" }
                            }
                        }
                        p { (service.description) }
                        ul.feature-list {
                            @for feature in &service.features {
                                li { span.check { "✓" } (feature) }
                            }
                        }
                        a.button-submit href="#contact" { "Request Quote" }
                    }
                }
            }
        }

        section.why-choose-us {
            h2 { (content.why_choose_us.title) }
            div.reason-columns {
                div.reason-column.leading {
                    @for item in leading { (reason(item)) }
                }
                div.reason-column {
                    @for item in rest { (reason(item)) }
                }
            }
        }

        section.case-studies {
            h2 { (content.case_studies.title) }
            div.card-grid {
                @for study in &content.case_studies.items {
                    div.case-study data-id=(study.id) {
                        img src=(study.image_url) alt=(study.title);
                        span.industry-tag { (study.industry) }
                        h3 { (study.title) }
                        p { (study.description) }
                        div.case-study-details {
                            p { strong { "Challenge:" } " " (study.challenge) }
                            p { strong { "Solution:" } " " (study.solution) }
                        }
                    }
                }
            }
        }

        section.maintenance-plans {
            h2 { (content.maintenance_plans.title) }
            p { (content.maintenance_plans.description) }
            div.plan-grid {
                @for plan in &content.maintenance_plans.plans {
                    div.plan-card.featured[plan.featured] data-id=(plan.id) {
                        @if plan.featured {
                            div.plan-flag { "Most Popular" }
                        }
                        h3 { (plan.name) }
                        p.plan-price { (plan.price) span.period { "/" (plan.period) } }
                        ul.feature-list {
                            @for feature in &plan.features {
                                li { span.check { "✓" } (feature) }
                            }
                        }
                        a.button-submit href="#contact" { "Select Plan" }
                    }
                }
            }
        }

        section.certifications {
            h2 { (content.certifications.title) }
            div.card-grid {
                @for cert in &content.certifications.items {
                    div.certification-card data-id=(cert.id) {
                        img src=(cert.logo) alt=(cert.name);
                        p { (cert.name) }
                    }
                }
            }
        }

        section id="contact" {
            h2 { "Request a Commercial Quote" }
            p { "Get a customized estimate for your business within 24 hours" }
            (contact_form(form, page))
        }

        section.emergency-banner {
            h2 { "24/7 Emergency Commercial Service" }
            p { "We understand your business can't wait" }
            a.button-primary href=(tel(phone)) { "Emergency: " (phone) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_cowboy_content::ContentRegistry;
    use std::sync::Arc;

    fn content() -> Arc<CommercialPageContent> {
        ContentRegistry::builtin().unwrap().page::<CommercialPageContent>()
    }

    fn rendered(content: &CommercialPageContent) -> String {
        render(content, &ContactFormState::default(), "/commercial").into_string()
    }

    #[test]
    fn test_reasons_split_after_three() {
        let html = rendered(&content());
        let (leading, rest) = html
            .split_once(r#"<div class="reason-column leading">"#)
            .and_then(|(_, after)| after.split_once(r#"<div class="reason-column">"#))
            .unwrap();
        assert_eq!(leading.matches(r#"class="reason""#).count(), 3);
        assert_eq!(rest.matches(r#"class="reason""#).count(), 3);
    }

    #[test]
    fn test_fewer_reasons_than_split() {
        let mut content = (*content()).clone();
        content.why_choose_us.reasons.truncate(2);
        let html = rendered(&content);
        assert_eq!(html.matches(r#"class="reason""#).count(), 2);
    }

    #[test]
    fn test_popular_and_featured_flags() {
        let html = rendered(&content());
        assert_eq!(html.matches(r#"<span class="badge">Popular</span>"#).count(), 2);
        assert_eq!(html.matches("Most Popular").count(), 1);
        assert!(html.contains(r#"class="plan-card featured""#));
        assert!(html.contains("Trusted by 500+ DFW Businesses"));
    }
}
