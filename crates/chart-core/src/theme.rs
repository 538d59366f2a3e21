// File: crates/chart-core/src/theme.rs
// Summary: Background / grid / axes / title color presets.

use crate::color::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axes: Color,
    pub title: Color,
}

impl Theme {
    pub const fn light() -> Self {
        Self {
            name: "light",
            background: Color::white(),
            grid: Color::new(180, 180, 180, 200),
            axes: Color::black(),
            title: Color::black(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::black(),
            grid: Color::new(100, 100, 100, 67),
            axes: Color::white(),
            title: Color::white(),
        }
    }

    pub const fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: Color::rgb(0x00, 0x2b, 0x36), // base03
            grid: Color::rgb(0x07, 0x36, 0x42),       // base02
            axes: Color::rgb(0x93, 0xa1, 0xa1),       // base1
            title: Color::rgb(0xee, 0xe8, 0xd5),      // base2
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
