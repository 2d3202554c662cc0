use garage_cowboy_content::SiteDetails;
use maud::{html, Markup};

/// Logo bar, with the emergency badge on the right when it is enabled.
pub fn header(site: &SiteDetails) -> Markup {
    html! {
        header.site-header {
            div.site-header-logo {
                img src=(site.logo) alt={ (site.name) " Logo" };
            }
            @if site.emergency_badge.enabled {
                div.site-header-badge {
                    img src=(site.emergency_badge.image_url) alt="Emergency Service Badge";
                }
            }
        }
    }
}
