use arkiv::domain::sample;
use dioxus::prelude::*;

#[component]
pub fn PhotoGrid() -> Element {
    let library = use_hook(sample::photo_library);

    rsx! {
        section {
            style: "padding: 6rem 2rem; max-width: 72rem; margin: 0 auto;",
            p {
                style: "font-size: 0.75rem; text-transform: uppercase; \
                        letter-spacing: 0.25em; color: #737373;",
                "Visual fragments"
            }
            h2 { style: "font-size: 2rem; margin-top: 0.5rem;", "Photos" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); \
                        gap: 1.5rem; margin-top: 2.5rem;",
                for photo in library.all() {
                    figure {
                        key: "{photo.id}",
                        style: "margin: 0;",
                        img {
                            src: "{photo.thumbnail_url}",
                            alt: photo.title.as_deref().unwrap_or("Untitled"),
                            style: "width: 100%; aspect-ratio: 4 / 5; object-fit: cover; \
                                    border-radius: 0.75rem; background: #171717;",
                        }
                        figcaption {
                            style: "display: flex; justify-content: space-between; \
                                    margin-top: 0.6rem; font-size: 0.8rem; color: #737373;",
                            if let Some(title) = photo.title.as_deref() {
                                span { "{title}" }
                            }
                            span { {photo.tags.join(" / ")} }
                        }
                    }
                }
            }
        }
    }
}
