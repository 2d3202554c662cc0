use garage_cowboy_content::SiteDetails;
use maud::{html, Markup};

pub fn footer(site: &SiteDetails) -> Markup {
    html! {
        footer.site-footer {
            div.site-footer-brand {
                img src=(site.logo) alt={ (site.name) " Logo" };
                p.site-footer-copyright { (site.copyright) }
            }
            div.site-footer-contact {
                @if site.emergency_badge.enabled {
                    img src=(site.emergency_badge.image_url) alt="Emergency Service";
                }
                p { "Call us at" }
                a.site-footer-phone href={ "tel:" (site.phone) } { (site.phone) }
            }
            a.site-footer-cta href="#contact" {
                span { "SCHEDULE A" }
                " "
                span { "INSPECTION" }
            }
            div.site-footer-social {
                p { "Find " (site.name) }
                @for link in &site.social_links {
                    a href=(link.url) target="_blank" rel="noopener noreferrer" {
                        img src=(link.icon) alt=(link.platform);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_cowboy_content::ContentRegistry;

    #[test]
    fn test_footer_contents() {
        let site = ContentRegistry::builtin().unwrap().site();
        let html = footer(&site).into_string();
        assert!(html.contains("©2026 -- Garage Cowboy Limited -- All rights reserved"));
        assert!(html.contains(r#"href="tel:(871) 256-0122""#));
        assert!(html.contains("Find Garage Cowboy"));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 4);
    }
}
