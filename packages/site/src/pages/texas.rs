use garage_cowboy_content::{Testimonial, TexasPageContent};
use maud::{html, Markup};

use super::{background, tel};
use crate::components::{contact_form, ContactFormState};

fn testimonial_card(testimonial: &Testimonial) -> Markup {
    let stars = "★".repeat(usize::from(testimonial.rating.unwrap_or(0)));
    html! {
        div.testimonial-card data-id=(testimonial.id) {
            div.testimonial-author {
                p.author { (testimonial.author) }
                @if let Some(location) = &testimonial.location {
                    p.location { (location) }
                }
                @if testimonial.verified {
                    img.verified src="/images/verified.png" alt="Verified";
                }
            }
            p.quote { "“" (testimonial.quote) "”" }
            div.rating aria-label={ (testimonial.rating.unwrap_or(0).to_string()) " out of 5" } {
                (stars)
            }
        }
    }
}

pub fn render(content: &TexasPageContent, form: &ContactFormState, page: &str) -> Markup {
    let phone = content.hero.cta_phone.as_deref().unwrap_or_default();
    let areas = &content.service_areas;

    html! {
        section.hero style=(background(&content.hero.background_image)) {
            h1 { (content.hero.headline) }
            @if let Some(subheadline) = &content.hero.subheadline {
                p.hero-subheadline { (subheadline) }
            }
            div.hero-actions {
                a.button-primary href=(tel(phone)) { "Call Now: " (phone) }
                a.button-secondary href="#service-areas" { "View Service Areas" }
            }
        }

        section.coverage {
            @for stat in &content.coverage.stats {
                div.stat data-id=(stat.id) {
                    div.stat-value { (stat.value) }
                    p.stat-label { (stat.label) }
                }
            }
        }

        section id="service-areas" {
            h2 { (areas.title) }
            p { (areas.description) }
            div.primary-cities {
                h3 { (areas.primary_cities.title) }
                div.card-grid {
                    @for city in &areas.primary_cities.cities {
                        div.city-card data-id=(city.id) {
                            h4 { (city.name) }
                            p.county { (city.county) " County" }
                            a.button-submit href=(tel(phone)) { "Get Service" }
                        }
                    }
                }
            }
            div.additional-cities {
                h3 { (areas.additional_cities.title) }
                ul.city-list {
                    @for city in &areas.additional_cities.cities {
                        li data-id=(city.id) { (city.name) }
                    }
                }
            }
        }

        section.map {
            h2 { (content.map.title) }
            iframe
                src=(content.map.embed_url)
                width="100%"
                height="100%"
                style="border: 0"
                allowfullscreen
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
                title="Service Area Map" {}
        }

        section.why-choose-us {
            h2 { (content.why_choose_us.title) }
            div.card-grid {
                @for reason in &content.why_choose_us.reasons {
                    div.reason-card data-id=(reason.id) {
                        img.reason-icon src=(reason.icon) alt=(reason.title);
                        h3 { (reason.title) }
                        p { (reason.description) }
                    }
                }
            }
        }

        section.testimonials {
            h2 { (content.testimonials.title) }
            div.card-grid {
                @for testimonial in &content.testimonials.items {
                    (testimonial_card(testimonial))
                }
            }
        }

        section id="contact" {
            h2 { "Request Service in Your Area" }
            p { "Get a FREE estimate within 24 hours" }
            (contact_form(form, page))
        }

        section.emergency-banner {
            h2 { "Need Emergency Garage Door Repair in Texas?" }
            a.button-primary href=(tel(phone)) { "Call Now: " (phone) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_cowboy_content::ContentRegistry;

    fn rendered() -> String {
        let registry = ContentRegistry::builtin().unwrap();
        render(
            &registry.page::<TexasPageContent>(),
            &ContactFormState::default(),
            "/texas",
        )
        .into_string()
    }

    #[test]
    fn test_stars_follow_rating() {
        let html = rendered();
        // two five-star reviews and one four-star review
        assert_eq!(html.matches("★★★★★").count(), 2);
        assert_eq!(html.matches("★").count(), 14);
        assert_eq!(html.matches(r#"alt="Verified""#).count(), 2);
    }

    #[test]
    fn test_primary_cities_show_county() {
        let html = rendered();
        assert!(html.contains("Tarrant County"));
        assert_eq!(html.matches(r#"class="city-card""#).count(), 8);
    }

    #[test]
    fn test_map_url_passed_through() {
        let html = rendered();
        assert!(html.contains(r#"src="https://www.google.com/maps/embed?pb="#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn test_contact_section_posts_back_to_texas() {
        let html = rendered();
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains(r#"name="page" value="/texas""#));
    }
}
