use eframe::egui::Color32;

const GREY_50: Color32 = Color32::from_rgb(0xFA, 0xFA, 0xFA);
const GREY_100: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF5);
const GREY_700: Color32 = Color32::from_rgb(0x61, 0x61, 0x61);
const GREY_900: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);
const GREEN_50: Color32 = Color32::from_rgb(0xE8, 0xF5, 0xE9);
const GREEN_100: Color32 = Color32::from_rgb(0xC8, 0xE6, 0xC9);
const CYAN_700: Color32 = Color32::from_rgb(0x00, 0x97, 0xA7);
const CYAN_900: Color32 = Color32::from_rgb(0x00, 0x60, 0x64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub title_size: f32,
    pub name_size: f32,
    pub body_size: f32,
    pub glyph_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title_size: 32.0,
            name_size: 20.0,
            body_size: 14.0,
            glyph_size: 24.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color32,
    pub on_primary: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub surface: Color32,
    pub on_surface: Color32,
    pub typography: Typography,
}

pub fn resolve_palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            primary: GREY_900,
            on_primary: Color32::WHITE,
            secondary: GREY_100,
            background: CYAN_900,
            surface: CYAN_700,
            on_surface: Color32::WHITE,
            typography: Typography::default(),
        }
    } else {
        Palette {
            primary: GREY_50,
            on_primary: GREY_900,
            secondary: GREY_700,
            background: GREEN_100,
            surface: GREEN_50,
            on_surface: GREY_900,
            typography: Typography::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_palettes_differ() {
        let light = resolve_palette(false);
        let dark = resolve_palette(true);
        assert_eq!(light.primary, GREY_50);
        assert_eq!(dark.background, CYAN_900);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.typography, dark.typography);
    }

    #[test]
    fn text_contrasts_with_its_surface() {
        for dark_mode in [false, true] {
            let palette = resolve_palette(dark_mode);
            assert_ne!(palette.on_primary, palette.primary);
            assert_ne!(palette.on_surface, palette.surface);
        }
    }
}
