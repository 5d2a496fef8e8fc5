//! Page footer: the outbound links and a closing line.

use arkiv::domain::sample;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let profile = use_hook(sample::identity_profile);

    rsx! {
        footer {
            style: "padding: 4rem 10vw; border-top: 1px solid #262626; \
                    display: flex; justify-content: space-between; align-items: center;",
            span {
                style: "font-size: 0.8rem; color: #737373;",
                "{profile.name} · {profile.tagline}"
            }
            nav {
                style: "display: flex; gap: 1.5rem;",
                for (label, url) in &profile.links {
                    a {
                        href: "{url}",
                        style: "font-size: 0.8rem; text-transform: capitalize; \
                                color: #a3a3a3; text-decoration: none;",
                        "{label}"
                    }
                }
            }
        }
    }
}
