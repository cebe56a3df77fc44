//! Viewport breakpoint classification.
//!
//! Classification is a pure function of the current width, recomputed on
//! every sample with no hysteresis: flips in both directions are allowed on
//! consecutive samples. The width hook seeds a wide server-side default and
//! streams `window.innerWidth` through an eval channel once hydrated.

use dioxus::prelude::*;

/// Width assumed while rendering on the server, before the client reports.
pub const SSR_VIEWPORT_WIDTH: f64 = 1280.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Widths below the breakpoint are narrow; at or above, wide.
    pub fn classify(width: f64, breakpoint: f64) -> ViewportClass {
        if width < breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, ViewportClass::Narrow)
    }
}

/// Current viewport width, updated on every browser resize event.
pub fn use_viewport_width() -> Signal<f64> {
    let mut width = use_signal(|| SSR_VIEWPORT_WIDTH);

    use_effect(move || {
        spawn(async move {
            #[cfg(not(target_arch = "wasm32"))]
            let _ = &mut width;

            #[cfg(target_arch = "wasm32")]
            {
                let mut samples = dioxus::document::eval(
                    r#"
                    dioxus.send(window.innerWidth);
                    window.addEventListener('resize', () => {
                        dioxus.send(window.innerWidth);
                    });
                    "#,
                );
                while let Ok(sample) = samples.recv::<f64>().await {
                    width.set(sample);
                }
            }
        });
    });

    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_BREAKPOINT_PX;

    #[test]
    fn test_below_breakpoint_is_narrow() {
        let class = ViewportClass::classify(NAV_BREAKPOINT_PX - 1.0, NAV_BREAKPOINT_PX);
        assert_eq!(class, ViewportClass::Narrow);
        assert!(class.is_narrow());
    }

    #[test]
    fn test_at_and_above_breakpoint_is_wide() {
        assert_eq!(
            ViewportClass::classify(NAV_BREAKPOINT_PX, NAV_BREAKPOINT_PX),
            ViewportClass::Wide
        );
        assert_eq!(
            ViewportClass::classify(NAV_BREAKPOINT_PX + 400.0, NAV_BREAKPOINT_PX),
            ViewportClass::Wide
        );
    }

    #[test]
    fn test_classification_flips_both_directions() {
        let widths = [1200.0, 360.0, 1024.0, 899.9, 900.0];
        let classes: Vec<ViewportClass> = widths
            .iter()
            .map(|w| ViewportClass::classify(*w, NAV_BREAKPOINT_PX))
            .collect();
        assert_eq!(
            classes,
            [
                ViewportClass::Wide,
                ViewportClass::Narrow,
                ViewportClass::Wide,
                ViewportClass::Narrow,
                ViewportClass::Wide,
            ]
        );
    }

    #[test]
    fn test_ssr_default_renders_desktop_nav() {
        assert_eq!(
            ViewportClass::classify(SSR_VIEWPORT_WIDTH, NAV_BREAKPOINT_PX),
            ViewportClass::Wide
        );
    }
}
