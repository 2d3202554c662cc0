//! About Us page.
//!
//! The hero and story pictures are fixed stock photos, and team photos are
//! picked by member id rather than taken from the content.

use garage_cowboy_content::AboutUsContent;
use maud::{html, Markup};

use super::tel;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=1920&q=80";
const STORY_IMAGE: &str = "https://images.unsplash.com/photo-1581578731548-c64695cc6952?w=800&q=80";

/// Stock portrait for a team member.
pub fn team_photo_url(member_id: &str) -> String {
    let photo = match member_id {
        "deno" => "1560250097-0b93528c311a",
        "mike" => "1472099645785-5658abf4ff4e",
        "sarah" => "1573496359142-b8d87734a5a2",
        _ => "1519085360753-af0119f7b3be",
    };
    format!("https://images.unsplash.com/photo-{photo}?w=400&q=80")
}

pub fn value_emoji(value_id: &str) -> Option<&'static str> {
    match value_id {
        "integrity" => Some("🤝"),
        "quality" => Some("⭐"),
        "service" => Some("💯"),
        _ => None,
    }
}

pub fn certification_emoji(cert_id: &str) -> Option<&'static str> {
    match cert_id {
        "bbb" => Some("🏆"),
        "idea" => Some("💡"),
        "angie" => Some("🌟"),
        "homeadvisor" => Some("🏠"),
        _ => None,
    }
}

pub fn render(content: &AboutUsContent) -> Markup {
    html! {
        section.hero.hero-about style={ "background-image: linear-gradient(rgba(0,0,0,0.5), rgba(0,0,0,0.5)), url('" (HERO_IMAGE) "')" } {
            h1 { (content.hero.headline) }
            @if let Some(subheadline) = &content.hero.subheadline {
                p.hero-subheadline { (subheadline) }
            }
        }

        section.story {
            div.story-text {
                h2 { (content.story.title) }
                @for paragraph in &content.story.paragraphs {
                    p { (paragraph) }
                }
            }
            img.story-image src=(STORY_IMAGE) alt=(content.story.image_alt);
        }

        section.values {
            h2 { (content.values.title) }
            div.card-grid {
                @for value in &content.values.items {
                    div.value-card data-id=(value.id) {
                        div.value-icon { (value_emoji(&value.id).unwrap_or_default()) }
                        h3 { (value.title) }
                        p { (value.description) }
                    }
                }
            }
        }

        section.team {
            h2 { (content.team.title) }
            div.card-grid {
                @for member in &content.team.members {
                    div.team-card data-id=(member.id) {
                        img.team-photo src=(team_photo_url(&member.id)) alt=(member.name);
                        h3.team-name { (member.name) }
                        p.team-role { (member.role) }
                        p.team-bio { (member.bio) }
                    }
                }
            }
        }

        section.certifications {
            h2 { (content.certifications.title) }
            div.card-grid {
                @for cert in &content.certifications.items {
                    div.certification-card data-id=(cert.id) {
                        div.certification-icon { (certification_emoji(&cert.id).unwrap_or_default()) }
                        p { (cert.name) }
                    }
                }
            }
        }

        section.cta {
            h2 { (content.cta.title) }
            p { (content.cta.subtitle) }
            a.button-primary href=(tel(&content.cta.phone)) { (content.cta.button_text) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_cowboy_content::ContentRegistry;

    fn rendered() -> String {
        let registry = ContentRegistry::builtin().unwrap();
        render(&registry.page::<AboutUsContent>()).into_string()
    }

    #[test]
    fn test_deno_photo_is_distinct() {
        let deno = team_photo_url("deno");
        for other in ["mike", "sarah", "carlos"] {
            assert_ne!(team_photo_url(other), deno);
        }
        assert_eq!(
            deno,
            "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&q=80"
        );
        assert_eq!(team_photo_url("carlos"), team_photo_url("anyone-else"));
    }

    #[test]
    fn test_emoji_maps() {
        assert_eq!(value_emoji("quality"), Some("⭐"));
        assert_eq!(value_emoji("speed"), None);
        assert_eq!(certification_emoji("homeadvisor"), Some("🏠"));
        assert_eq!(certification_emoji("osha"), None);
    }

    #[test]
    fn test_team_renders_literal_text() {
        let html = rendered();
        assert_eq!(html.matches("class=\"team-card\"").count(), 4);
        assert!(html.contains("Deno Rodriguez"));
        assert!(html.contains("Founder &amp; CEO"));
        assert!(html.contains("Expert in emergency repairs and spring replacements"));
        assert!(html.contains("photo-1560250097-0b93528c311a"));
    }

    #[test]
    fn test_sections_in_order() {
        let html = rendered();
        let order = [
            "About Garage Cowboy",
            "Our Story",
            "Our Core Values",
            "Meet Our Team",
            "Certifications &amp; Awards",
            "Schedule Free Inspection",
        ];
        let positions: Vec<usize> = order.iter().map(|s| html.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_cta_uses_tel_link() {
        assert!(rendered().contains(r#"href="tel:(871) 256-0122""#));
    }
}
