use dioxus::prelude::*;
use dioxus_shimmer::{Shimmer, SkeletonScreen, Speed};

/// Gray tint shared by the demo placeholders.
const TINT: &str = "rgba(142, 142, 147, 0.3)";

#[component]
pub fn Showcase() -> Element {
    rsx! {
        div { class: "showcase",
            header { class: "showcase-header",
                h1 { "dioxus-shimmer" }
                p { "Loading placeholders with an animated highlight sweep." }
            }
            LoadingCards {}
            SpeedStrip {}
            section { class: "showcase-section",
                h2 { "Prebuilt skeleton screen" }
                SkeletonScreen {}
            }
        }
    }
}

/// Cards that flip between a shimmering placeholder and loaded content.
#[component]
fn LoadingCards() -> Element {
    let mut loading = use_signal(|| true);

    rsx! {
        section { class: "showcase-section",
            h2 { "Conditional decoration" }
            p { class: "showcase-note",
                "While the toggle is on, each card is wrapped and redacted; "
                "off, the markup renders exactly as written."
            }
            button {
                class: "showcase-toggle",
                onclick: move |_| {
                    let next = !loading();
                    tracing::info!(loading = next, "toggled card placeholders");
                    loading.set(next);
                },
                if loading() { "Finish loading" } else { "Start loading" }
            }
            div { class: "showcase-cards",
                for title in ["First", "Second", "Third"] {
                    Shimmer {
                        key: "{title}",
                        tint: TINT,
                        highlight: "white",
                        blur: 5.0,
                        redacted: true,
                        active: loading(),
                        class: "showcase-card-frame",
                        div { class: "showcase-card",
                            h3 { "{title} card" }
                            p { "Body copy that appears once loading finishes." }
                        }
                    }
                }
            }
        }
    }
}

/// One bar per named speed preset, plus a custom period.
#[component]
fn SpeedStrip() -> Element {
    let speeds = [
        ("flash", Speed::Flash),
        ("fast", Speed::Fast),
        ("medium", Speed::Medium),
        ("slow", Speed::Slow),
        ("custom 0.5s", Speed::Custom(0.5)),
    ];

    rsx! {
        section { class: "showcase-section",
            h2 { "Sweep speeds" }
            div { class: "showcase-speeds",
                for (label, speed) in speeds {
                    div { key: "{label}", class: "showcase-speed",
                        Shimmer {
                            tint: TINT,
                            highlight: "white",
                            speed,
                            redacted: true,
                            class: "showcase-bar-frame",
                            div { class: "showcase-bar" }
                        }
                        span { class: "showcase-speed-label", "{label}" }
                    }
                }
            }
        }
    }
}
