use arkiv::domain::sample;
use dioxus::prelude::*;

#[component]
pub fn AboutStrip() -> Element {
    let profile = use_hook(sample::identity_profile);

    rsx! {
        section {
            style: "padding: 6rem 2rem; max-width: 42rem; margin: 0 auto;",
            p {
                style: "font-size: 1.15rem; line-height: 1.8; color: #d4d4d4;",
                "{profile.bio}"
            }
            div {
                style: "display: flex; gap: 1rem; margin-top: 2rem; font-size: 0.75rem; \
                        text-transform: uppercase; letter-spacing: 0.2em; color: #737373;",
                for role in profile.roles.iter() {
                    span { key: "{role}", "{role}" }
                }
            }
        }
    }
}
