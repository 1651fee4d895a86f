use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub track: Srgba<f64>,
    pub tick: Srgba<f64>,
    pub active: Srgba<f64>,
    pub hub: Srgba<f64>,
    pub handle: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            track: Self::lookup_color(
                context,
                "theme_bg_color",
                Srgba::new(0.96, 0.96, 0.96, 1.0),
                None,
            ),
            tick: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.0, 0.0, 0.0, 0.25),
                Some(0.25),
            ),
            active: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(1.0, 0.22, 0.36, 1.0),
                Some(1.0),
            ),
            hub: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
            handle: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(0.99, 0.99, 0.99, 1.0),
                None,
            ),
            text: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                Some(1.0),
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}
