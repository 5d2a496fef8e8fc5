//! Experience timeline section: one entry per engagement, newest first,
//! with the current one highlighted.

use arkiv::domain::experience::Experience;
use arkiv::domain::sample;
use dioxus::prelude::*;

#[component]
pub fn ExperienceTimeline() -> Element {
    let experiences = use_hook(sample::experiences);

    rsx! {
        section {
            style: "padding: 6rem 10vw;",
            h2 {
                style: "font-size: 0.9rem; letter-spacing: 0.3em; \
                        text-transform: uppercase; color: #a3a3a3; margin-bottom: 3rem;",
                "Experience"
            }
            ol {
                style: "list-style: none; margin: 0; padding: 0; \
                        border-left: 1px solid #262626;",
                for experience in &experiences {
                    li {
                        key: "{experience.id}",
                        style: "padding: 0 0 2.5rem 2rem; position: relative;",
                        span {
                            style: marker_style(experience.is_current()),
                        }
                        span {
                            style: "font-size: 0.75rem; letter-spacing: 0.15em; \
                                    text-transform: uppercase; color: #737373;",
                            {heading_line(experience)}
                        }
                        h3 {
                            style: "margin: 0.4rem 0 0.2rem; font-size: 1.15rem;",
                            "{experience.role}"
                        }
                        span {
                            style: "font-size: 0.9rem; color: #a3a3a3;",
                            "{experience.organization}"
                        }
                        ul {
                            style: "margin: 0.75rem 0 0; padding-left: 1.1rem; \
                                    font-size: 0.85rem; color: #d4d4d4;",
                            for line in &experience.summary {
                                li { style: "margin-bottom: 0.3rem;", "{line}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Engagement period plus an optional location.
fn heading_line(experience: &Experience) -> String {
    match experience.location.as_deref() {
        Some(location) => format!("{} · {location}", experience.period_label()),
        None => experience.period_label(),
    }
}

fn marker_style(current: bool) -> String {
    let color = if current { "#fafafa" } else { "#525252" };
    format!(
        "position: absolute; left: -5px; top: 0.3rem; width: 9px; height: 9px; \
         border-radius: 50%; background: {color};"
    )
}

#[cfg(test)]
mod tests {
    use super::heading_line;
    use arkiv::domain::sample;

    #[test]
    fn heading_joins_period_and_location() {
        let mut experiences = sample::experiences();
        assert_eq!(heading_line(&experiences[0]), "Sep 2024 - Present · London, Ontario");

        experiences[0].location = None;
        assert_eq!(heading_line(&experiences[0]), "Sep 2024 - Present");
    }
}
