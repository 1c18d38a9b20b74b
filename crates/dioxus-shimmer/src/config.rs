/// How a single shimmer decoration looks and behaves.
///
/// Built once per decoration with [`ShimmerConfig::new`] and never mutated
/// afterwards. Colors are CSS color strings and are forwarded to the
/// stylesheet untouched. No field is validated; an out-of-range value (a
/// negative blur, an opacity above 1) just produces whatever the CSS engine
/// makes of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShimmerConfig {
    /// Base color of the placeholder silhouette.
    pub tint: String,
    /// Color of the sweeping highlight band.
    pub highlight: String,
    /// Blur radius of the band in pixels.
    pub blur: f64,
    /// Opacity of the band's center stop, 0 to 1.
    pub highlight_opacity: f64,
    /// Sweep period in seconds.
    pub speed: f64,
    /// Whether the decorated content is hidden behind its silhouette.
    pub redacted: bool,
}

impl ShimmerConfig {
    /// A config with the required colors and the stock defaults: no blur,
    /// full highlight opacity, a 2 s period, content not redacted.
    pub fn new(tint: impl Into<String>, highlight: impl Into<String>) -> Self {
        Self {
            tint: tint.into(),
            highlight: highlight.into(),
            blur: 0.0,
            highlight_opacity: 1.0,
            speed: 2.0,
            redacted: false,
        }
    }

    /// Blur radius in pixels applied to the highlight band.
    pub fn blur(mut self, blur: f64) -> Self {
        self.blur = blur;
        self
    }

    /// Opacity of the band's center stop.
    pub fn highlight_opacity(mut self, opacity: f64) -> Self {
        self.highlight_opacity = opacity;
        self
    }

    /// Sweep period in seconds.
    pub fn speed(mut self, secs: f64) -> Self {
        self.speed = secs;
        self
    }

    /// Hide the decorated content behind its silhouette while keeping its
    /// layout footprint.
    pub fn redacted(mut self, redacted: bool) -> Self {
        self.redacted = redacted;
        self
    }

    /// The config as inline CSS custom properties, consumed by the shimmer
    /// stylesheet.
    pub fn to_style(&self) -> String {
        format!(
            "--shimmer-tint: {}; --shimmer-highlight: {}; --shimmer-blur: {}px; \
             --shimmer-highlight-opacity: {}; --shimmer-speed: {}s;",
            self.tint, self.highlight, self.blur, self.highlight_opacity, self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let config = ShimmerConfig::new("gray", "white");
        assert_eq!(config.tint, "gray");
        assert_eq!(config.highlight, "white");
        assert_eq!(config.blur, 0.0);
        assert_eq!(config.highlight_opacity, 1.0);
        assert_eq!(config.speed, 2.0);
        assert!(!config.redacted);
    }

    #[test]
    fn builder_round_trips_every_field() {
        let config = ShimmerConfig::new("rgba(142, 142, 147, 0.3)", "#fff")
            .blur(5.0)
            .highlight_opacity(0.8)
            .speed(0.1)
            .redacted(true);
        assert_eq!(config.tint, "rgba(142, 142, 147, 0.3)");
        assert_eq!(config.highlight, "#fff");
        assert_eq!(config.blur, 5.0);
        assert_eq!(config.highlight_opacity, 0.8);
        assert_eq!(config.speed, 0.1);
        assert!(config.redacted);
    }

    #[test]
    fn out_of_range_values_are_kept_verbatim() {
        // Deliberately no validation: the CSS engine decides what these mean.
        let config = ShimmerConfig::new("gray", "white")
            .blur(-5.0)
            .highlight_opacity(3.0)
            .speed(-1.0);
        assert_eq!(config.blur, -5.0);
        assert_eq!(config.highlight_opacity, 3.0);
        assert_eq!(config.speed, -1.0);
    }

    #[test]
    fn to_style_emits_all_custom_properties() {
        let style = ShimmerConfig::new("gray", "white").blur(5.0).to_style();
        assert_eq!(
            style,
            "--shimmer-tint: gray; --shimmer-highlight: white; --shimmer-blur: 5px; \
             --shimmer-highlight-opacity: 1; --shimmer-speed: 2s;"
        );
    }
}
