use arkiv::domain::sample;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    let profile = use_hook(sample::identity_profile);

    rsx! {
        header {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 100; \
                    display: flex; justify-content: space-between; align-items: center; \
                    padding: 1rem 2rem; background: rgba(10,10,10,0.8); \
                    backdrop-filter: blur(8px);",
            span {
                style: "font-size: 1.1rem; letter-spacing: 0.05em;",
                "{profile.name}"
            }
            nav {
                style: "display: flex; gap: 1.5rem; font-size: 0.8rem; \
                        text-transform: uppercase; letter-spacing: 0.2em;",
                for (platform, url) in profile.links.iter() {
                    a {
                        key: "{platform}",
                        href: "{url}",
                        style: "color: #a3a3a3; text-decoration: none;",
                        "{platform}"
                    }
                }
            }
        }
    }
}
