use garage_cowboy_content::SiteDetails;
use maud::{html, Markup};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Top-level menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum NavItem {
    Home,
    About,
    Services,
    Texas,
    Residential,
    Commercial,
}

impl NavItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Us",
            Self::Services => "Services",
            Self::Texas => "Texas",
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about-us",
            Self::Services => "/services",
            Self::Texas => "/texas",
            Self::Residential => "/residential",
            Self::Commercial => "/commercial",
        }
    }

    /// Services and Texas carry a dropdown marker.
    pub fn has_dropdown(self) -> bool {
        matches!(self, Self::Services | Self::Texas)
    }
}

/// Menu bar with the `active` item marked.
pub fn navigation(site: &SiteDetails, active: NavItem) -> Markup {
    html! {
        nav.site-nav {
            ul.site-nav-menu {
                @for item in NavItem::iter() {
                    li.site-nav-item.active[item == active] data-nav=(item.as_ref()) {
                        a href=(item.href()) aria-current=[(item == active).then_some("page")] {
                            (item.label())
                        }
                        @if item.has_dropdown() {
                            span.dropdown-marker aria-hidden="true" { "▾" }
                        }
                    }
                }
            }
            div.site-nav-social {
                @for link in &site.social_links {
                    a href=(link.url) target="_blank" rel="noopener noreferrer" {
                        img src=(link.icon) alt=(link.platform);
                    }
                }
            }
            a.site-nav-cta href="#contact" {
                span { "SCHEDULE A" }
                " "
                span { "FREE INSPECTION" }
            }
        }
    }
}
