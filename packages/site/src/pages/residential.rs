use garage_cowboy_content::ResidentialPageContent;
use maud::{html, Markup};

use super::{background, tel};
use crate::components::{contact_form, ContactFormState};

pub fn render(content: &ResidentialPageContent, form: &ContactFormState, page: &str) -> Markup {
    let phone = content.hero.cta_phone.as_deref().unwrap_or_default();

    html! {
        section.hero style=(background(&content.hero.background_image)) {
            h1 { (content.hero.headline) }
            @if let Some(subheadline) = &content.hero.subheadline {
                p.hero-subheadline { (subheadline) }
            }
            div.hero-actions {
                a.button-primary href="#contact" {
                    (content.hero.cta_text.as_deref().unwrap_or_default())
                }
                a.button-secondary href=(tel(phone)) { "Call: " (phone) }
            }
        }

        section.benefits {
            div.card-grid {
                @for benefit in &content.benefits {
                    div.benefit-card data-id=(benefit.id) {
                        img.benefit-icon src=(benefit.icon) alt=(benefit.title);
                        h3 { (benefit.title) }
                        p { (benefit.description) }
                    }
                }
            }
        }

        section.services {
            h2 { (content.services.title) }
            @if let Some(description) = &content.services.description {
                p { (description) }
            }
            div.service-grid {
                @for service in &content.services.items {
                    div.service-card data-id=(service.id) {
                        img src=(service.image_url) alt=(service.title);
                        h3 { (service.title) }
                        p { (service.description) }
                        ul.feature-list {
                            @for feature in &service.features {
                                li { span.check { "✓" } (feature) }
                            }
                        }
                        div.service-footer {
                            @if let Some(price) = &service.starting_price {
                                span.price { (price) }
                            }
                            a.button-submit href="#contact" { "Get Quote" }
                        }
                    }
                }
            }
        }

        section.problems {
            h2 { (content.problems.title) }
            div.card-grid {
                @for problem in &content.problems.items {
                    div.problem-card data-id=(problem.id) {
                        span.problem-icon { (problem.icon) }
                        h3 { (problem.issue) }
                        p { (problem.description) }
                        p.solution { strong { "Solution:" } " " (problem.solution) }
                    }
                }
            }
        }

        section.gallery {
            h2 { (content.gallery.title) }
            div.card-grid {
                @for item in &content.gallery.items {
                    div.gallery-card data-id=(item.id) {
                        div.before-after {
                            figure {
                                img src=(item.before_image) alt="Before";
                                figcaption { "BEFORE" }
                            }
                            figure {
                                img src=(item.after_image) alt="After";
                                figcaption { "AFTER" }
                            }
                        }
                        h3 { (item.title) }
                        p { (item.description) }
                    }
                }
            }
        }

        section.tips {
            h2 { (content.tips.title) }
            div.card-grid {
                @for tip in &content.tips.items {
                    div.tip-card {
                        h3 { span.tip-number { (tip.id) } " " (tip.title) }
                        p { (tip.description) }
                    }
                }
            }
        }

        section.warranty {
            img.warranty-icon src=(content.warranty.icon) alt="Warranty";
            h2 { (content.warranty.title) }
            p { (content.warranty.description) }
            ul.warranty-features {
                @for feature in &content.warranty.features {
                    li { (feature) }
                }
            }
        }

        section id="contact" {
            h2 { "Schedule Your Residential Service" }
            p { "Get a FREE estimate for your home within 24 hours" }
            (contact_form(form, page))
        }
    }
}
