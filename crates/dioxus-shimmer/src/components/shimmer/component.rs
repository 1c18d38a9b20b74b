use dioxus::prelude::*;

use crate::config::ShimmerConfig;
use crate::speed::Speed;

/// Fraction of the measured width at which the sweep starts, just outside
/// the leading edge of the decorated box.
pub const SWEEP_START_FRACTION: f64 = -0.7;

/// Fraction of the measured width at which the sweep ends.
pub const SWEEP_END_FRACTION: f64 = 0.7;

/// The band clears the box by an extra `height / EXTRA_OFFSET_DIVISOR`
/// pixels at both extremes, so the diagonal stripe is fully outside the
/// shape before it re-enters.
pub const EXTRA_OFFSET_DIVISOR: f64 = 2.5;

/// Horizontal travel bounds of the highlight band, in pixels, for a
/// decorated box of `width` × `height`.
pub fn sweep_bounds(width: f64, height: f64) -> (f64, f64) {
    let extra = height / EXTRA_OFFSET_DIVISOR;
    let from = SWEEP_START_FRACTION * width - extra;
    let to = SWEEP_END_FRACTION * width + extra;
    (from, to)
}

/// Props for [`Shimmer`].
#[derive(Props, Clone, PartialEq)]
pub struct ShimmerProps {
    /// Base color of the placeholder silhouette. Any CSS color. The
    /// silhouette only manifests together with `redacted`; without it the
    /// content stays unchanged and only the band sweeps over it.
    #[props(into)]
    pub tint: String,
    /// Color of the sweeping highlight band. Any CSS color.
    #[props(into)]
    pub highlight: String,
    /// Blur radius of the band in pixels.
    #[props(default)]
    pub blur: f64,
    /// Opacity of the band's center stop, 0 to 1.
    #[props(default = 1.0)]
    pub highlight_opacity: f64,
    /// How long one pass of the band takes.
    #[props(default)]
    pub speed: Speed,
    /// Hide the wrapped content behind its silhouette while keeping its
    /// layout footprint.
    #[props(default)]
    pub redacted: bool,
    /// When false the children are returned untouched: no wrapper element,
    /// no animation cost. Flip it at runtime to start and stop the effect;
    /// the sweep always restarts from the beginning.
    #[props(default = true)]
    pub active: bool,
    /// Extra classes merged after the base `shimmer` class.
    #[props(default)]
    pub class: Option<String>,
    /// Extra inline style appended after the generated properties.
    #[props(default)]
    pub style: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Sweeps an animated highlight band across the wrapped content to signal
/// that it is loading.
///
/// The band is a vertical gradient from transparent through the highlight
/// color back to transparent, blurred, rotated -70deg and swept across on
/// an endless linear loop. Its travel depends on the measured size of the
/// wrapper, so the animation only starts after the first layout; until
/// then nothing moves and only the silhouette shows.
///
/// With `redacted: true` the content keeps its layout footprint but is
/// shown as a flat silhouette: text and `currentColor` shapes take the tint
/// color, raster content is hidden.
///
/// ```rust,no_run
/// use dioxus::prelude::*;
/// use dioxus_shimmer::{Shimmer, Speed};
///
/// #[component]
/// fn LoadingLine() -> Element {
///     rsx! {
///         Shimmer {
///             tint: "rgba(142, 142, 147, 0.3)",
///             highlight: "white",
///             blur: 5.0,
///             speed: Speed::Slow,
///             redacted: true,
///             p { "This text is a placeholder" }
///         }
///     }
/// }
/// ```
#[component]
pub fn Shimmer(props: ShimmerProps) -> Element {
    // Measured (width, height) of the wrapper, written by each mount
    // callback. The hook must run even while inactive so the hook order
    // is stable when `active` flips at runtime.
    let mut size = use_signal(|| None::<(f64, f64)>);

    if !props.active {
        return rsx! {
            {props.children}
        };
    }

    let config = ShimmerConfig::new(props.tint, props.highlight)
        .blur(props.blur)
        .highlight_opacity(props.highlight_opacity)
        .speed(props.speed.duration_secs())
        .redacted(props.redacted);

    let class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("shimmer {extra}"),
        _ => "shimmer".to_string(),
    };

    let mut style = config.to_style();
    if let Some((width, height)) = size() {
        let (from, to) = sweep_bounds(width, height);
        style.push_str(&format!(" --shimmer-from: {from}px; --shimmer-to: {to}px;"));
    }
    if let Some(extra) = props.style.as_deref() {
        style.push(' ');
        style.push_str(extra);
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "{class}",
            style: "{style}",
            "data-redacted": if props.redacted { "true" } else { "false" },
            onmounted: move |evt| {
                spawn(async move {
                    // Runs after the element is in the document and laid
                    // out, so the rect is valid. A failed measurement just
                    // leaves the band unmounted.
                    if let Ok(rect) = evt.data().get_client_rect().await {
                        size.set(Some((rect.size.width, rect.size.height)));
                    }
                });
            },
            ..props.attributes,
            div { class: "shimmer-content", {props.children} }
            div { class: "shimmer-overlay",
                if size().is_some() {
                    div { class: "shimmer-band" }
                }
            }
        }
    }
}
