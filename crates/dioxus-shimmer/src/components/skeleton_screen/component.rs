use dioxus::prelude::*;

use crate::components::shimmer::Shimmer;

/// Gray shared by every placeholder silhouette on the screen.
const TINT: &str = "rgba(142, 142, 147, 0.3)";
/// Highlight color of the sweep.
const HIGHLIGHT: &str = "white";
/// Band blur radius shared by every placeholder.
const BLUR: f64 = 5.0;

/// A prebuilt skeleton loading screen.
///
/// Two avatar-and-lines rows, a large media block, then the same group
/// again, six shimmer decorations in total, all redacted gray with a
/// white sweep. Drop it in wherever a feed or list is still loading:
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_shimmer::SkeletonScreen;
///
/// #[component]
/// fn Feed() -> Element {
///     rsx! {
///         SkeletonScreen {}
///     }
/// }
/// ```
#[component]
pub fn SkeletonScreen(
    #[props(default)] class: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("skeleton-screen {extra}"),
        _ => "skeleton-screen".to_string(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{class}", ..attributes,
            RowPlaceholder {}
            RowPlaceholder {}
            MediaPlaceholder {}
            RowPlaceholder {}
            RowPlaceholder {}
            MediaPlaceholder {}
        }
    }
}

/// A circular avatar beside three text lines of decreasing width,
/// decorated as a single unit.
#[component]
fn RowPlaceholder() -> Element {
    rsx! {
        Shimmer {
            tint: TINT,
            highlight: HIGHLIGHT,
            blur: BLUR,
            redacted: true,
            class: "skeleton-row-frame",
            div { class: "skeleton-row",
                div { class: "skeleton-avatar" }
                div { class: "skeleton-lines",
                    div { class: "skeleton-line" }
                    div { class: "skeleton-line skeleton-line-mid" }
                    div { class: "skeleton-line skeleton-line-short" }
                }
            }
        }
    }
}

/// The large rounded media block between the row groups.
#[component]
fn MediaPlaceholder() -> Element {
    rsx! {
        Shimmer {
            tint: TINT,
            highlight: HIGHLIGHT,
            blur: BLUR,
            redacted: true,
            class: "skeleton-media-frame",
            div { class: "skeleton-media" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_screen() -> String {
        fn app() -> Element {
            rsx! {
                SkeletonScreen {}
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn screen_holds_six_redacted_decorations() {
        let html = render_screen();
        assert_eq!(html.matches("shimmer-overlay").count(), 6);
        assert_eq!(html.matches("data-redacted=\"true\"").count(), 6);
        assert_eq!(html.matches("data-redacted=\"false\"").count(), 0);
    }

    #[test]
    fn screen_composition_is_two_groups_of_rows_and_media() {
        let html = render_screen();
        assert_eq!(html.matches("skeleton-row-frame").count(), 4);
        assert_eq!(html.matches("skeleton-media-frame").count(), 2);
        // Each row: one avatar and three lines.
        assert_eq!(html.matches("skeleton-avatar").count(), 4);
        assert_eq!(html.matches("class=\"skeleton-line\"").count(), 4);
        assert_eq!(html.matches("skeleton-line-mid").count(), 4);
        assert_eq!(html.matches("skeleton-line-short").count(), 4);
    }

    #[test]
    fn every_decoration_shares_the_stock_config() {
        let html = render_screen();
        assert_eq!(
            html.matches("--shimmer-tint: rgba(142, 142, 147, 0.3);").count(),
            6
        );
        assert_eq!(html.matches("--shimmer-highlight: white;").count(), 6);
        assert_eq!(html.matches("--shimmer-blur: 5px;").count(), 6);
    }

    #[test]
    fn caller_class_is_merged_on_the_root() {
        fn app() -> Element {
            rsx! {
                SkeletonScreen { class: "sidebar-loading" }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("class=\"skeleton-screen sidebar-loading\""));
    }
}
