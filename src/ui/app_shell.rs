use std::collections::HashMap;

use eframe::egui;
use eframe::egui::load::SizedTexture;
use eframe::egui::{
    Align, Color32, CornerRadius, Layout, Margin, RichText, TextureHandle, TextureOptions,
    UiBuilder,
};

use crate::app::controller::WoofController;
use crate::app::events::AppEvent;
use crate::cache::thumbs::{AssetImages, Fit, ImageResolver};
use crate::catalog::{Catalog, ImageId};
use crate::infra::config::AppConfig;
use crate::infra::error::WoofError;
use crate::infra::resources::StringTable;
use crate::ui::lazy_list::HeightCache;
use crate::ui::theme::{resolve_palette, Palette};
use crate::ui::view::{AboutView, HeaderView, InformationView, RowView, ThumbnailView, ToggleView};

const CARD_HEIGHT_ESTIMATE: f32 = 96.0;
const OVERSCAN: usize = 2;
const ABOUT_ANIMATION_SECS: f32 = 0.3;

pub struct WoofApp {
    controller: WoofController,
    strings: StringTable,
    images: AssetImages,
    textures: HashMap<(ImageId, Fit), TextureHandle>,
    heights: HeightCache,
    /// Last about block per row, kept while its collapse animation runs.
    about_blocks: HashMap<usize, AboutView>,
    about_heights: HashMap<usize, f32>,
}

impl WoofApp {
    pub fn new(catalog: Catalog, strings: StringTable, images: AssetImages) -> Self {
        Self {
            controller: WoofController::new(catalog),
            strings,
            images,
            textures: HashMap::new(),
            heights: HeightCache::new(CARD_HEIGHT_ESTIMATE),
            about_blocks: HashMap::new(),
            about_heights: HashMap::new(),
        }
    }

    fn ui(&mut self, ctx: &egui::Context) {
        let palette = resolve_palette(ctx.style().visuals.dark_mode);
        let header = self.controller.header(&self.strings);
        self.show_header(ctx, &header, &palette);

        let events = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| self.show_list(ui, &palette))
            .inner;

        for event in events {
            if matches!(event, AppEvent::ToggleRow(_)) {
                ctx.request_repaint();
            }
            self.controller.dispatch(event);
        }
    }

    fn texture(&mut self, ctx: &egui::Context, image: ImageId, fit: Fit) -> TextureHandle {
        if let Some(handle) = self.textures.get(&(image, fit)) {
            return handle.clone();
        }

        let thumbnail = self.images.resolve_image(image, fit);
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [thumbnail.width as usize, thumbnail.height as usize],
            &thumbnail.rgba,
        );
        let handle = ctx.load_texture(
            format!("image-{}-{fit:?}", image.key()),
            color_image,
            TextureOptions::LINEAR,
        );
        tracing::debug!(image = image.key(), ?fit, "texture uploaded");
        self.textures.insert((image, fit), handle.clone());
        handle
    }

    fn show_thumbnail(&mut self, ui: &mut egui::Ui, view: &ThumbnailView, fit: Fit) -> egui::Response {
        let texture = self.texture(ui.ctx(), view.image, fit);
        let inner = view.inner_size();
        let mut image = egui::Image::from_texture(SizedTexture::from_handle(&texture))
            .fit_to_exact_size(egui::vec2(inner, inner));
        if fit == Fit::Crop {
            image = image.corner_radius(CornerRadius::same((inner / 2.0).round() as u8));
        }

        egui::Frame::new()
            .inner_margin(Margin::same(view.padding.round() as i8))
            .show(ui, |ui| ui.add(image))
            .inner
    }

    fn show_header(&mut self, ctx: &egui::Context, header: &HeaderView, palette: &Palette) {
        egui::TopBottomPanel::top("woof_top_app_bar")
            .frame(egui::Frame::new().fill(palette.primary))
            .show(ctx, |ui| {
                ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                    let logo = self.show_thumbnail(ui, &header.logo, Fit::Contain);
                    logo.widget_info(|| {
                        egui::WidgetInfo::labeled(
                            egui::WidgetType::Image,
                            true,
                            &header.logo_description,
                        )
                    });
                    ui.label(
                        RichText::new(&header.title)
                            .size(palette.typography.title_size)
                            .strong()
                            .color(palette.on_primary),
                    );
                });
            });
    }

    fn show_list(&mut self, ui: &mut egui::Ui, palette: &Palette) -> Vec<AppEvent> {
        self.heights.resize(self.controller.catalog().len());
        let mut events = Vec::new();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                ui.set_height(self.heights.total_height());
                let range = self
                    .heights
                    .render_range(viewport.min.y, viewport.height(), OVERSCAN);

                let top = ui.min_rect().top() + self.heights.offset_of(range.start);
                let window = egui::Rect::from_min_max(
                    egui::pos2(ui.min_rect().left(), top),
                    egui::pos2(ui.max_rect().right(), ui.max_rect().bottom().max(top + 1.0)),
                );

                let rows = self.controller.render_rows(range.clone(), &self.strings);
                ui.scope_builder(UiBuilder::new().max_rect(window), |ui| {
                    for row in &rows {
                        let before = ui.cursor().top();
                        if self.show_dog_item(ui, row, palette) {
                            events.push(AppEvent::ToggleRow(row.index));
                        }
                        let height = ui.cursor().top() - before;
                        if self.heights.record(row.index, height) {
                            ui.ctx().request_repaint();
                        }
                    }
                });

                self.about_blocks.retain(|index, _| range.contains(index));
                self.about_heights.retain(|index, _| range.contains(index));
                events.push(AppEvent::RowsMaterialized(range));
            });

        events
    }

    /// Paints one card. Returns true when the toggle was clicked.
    fn show_dog_item(&mut self, ui: &mut egui::Ui, row: &RowView, palette: &Palette) -> bool {
        let mut toggled = false;

        card_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                self.show_thumbnail(ui, &row.thumbnail, Fit::Crop);
                show_dog_information(ui, &row.information, palette);
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    toggled = show_expand_button(ui, &row.toggle, palette);
                });
            });
            self.show_about_animated(ui, row, palette);
        });

        toggled
    }

    /// Grows the about block on expand and shrinks it on collapse by clipping
    /// it to `openness` of its measured height.
    fn show_about_animated(&mut self, ui: &mut egui::Ui, row: &RowView, palette: &Palette) {
        let openness = ui.ctx().animate_bool_with_time(
            egui::Id::new(("dog_about", row.index)),
            row.about.is_some(),
            ABOUT_ANIMATION_SECS,
        );
        if let Some(about) = &row.about {
            self.about_blocks.insert(row.index, about.clone());
        }
        if openness <= 0.0 {
            self.about_blocks.remove(&row.index);
            return;
        }
        let Some(about) = self.about_blocks.get(&row.index) else {
            return;
        };

        let measured = self.about_heights.get(&row.index).copied();
        let visible = measured.unwrap_or(0.0) * openness;

        let mut child = ui.new_child(UiBuilder::new().max_rect(ui.available_rect_before_wrap()));
        let mut clip = child.clip_rect();
        clip.max.y = clip.max.y.min(child.max_rect().top() + visible);
        child.set_clip_rect(clip);
        show_dog_about(&mut child, about, palette);

        let mut used = child.min_rect();
        let full = used.height();
        if measured.map_or(true, |old| (old - full).abs() > 0.5) {
            ui.ctx().request_repaint();
        }
        self.about_heights.insert(row.index, full);
        used.max.y = used.min.y + visible.min(full);
        ui.advance_cursor_after_rect(used);
    }
}

impl eframe::App for WoofApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.surface)
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(8))
        .outer_margin(Margin::same(8))
        .shadow(egui::epaint::Shadow {
            offset: [0, 2],
            blur: 6,
            spread: 0,
            color: Color32::from_black_alpha(48),
        })
}

fn show_dog_information(ui: &mut egui::Ui, info: &InformationView, palette: &Palette) {
    ui.vertical(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new(&info.name)
                .size(palette.typography.name_size)
                .strong()
                .color(palette.on_surface),
        );
        ui.label(
            RichText::new(&info.age_line)
                .size(palette.typography.body_size)
                .color(palette.on_surface),
        );
    });
}

fn show_expand_button(ui: &mut egui::Ui, toggle: &ToggleView, palette: &Palette) -> bool {
    let glyph = RichText::new(toggle.glyph.to_string())
        .size(palette.typography.glyph_size)
        .color(palette.secondary);
    ui.add(egui::Button::new(glyph).frame(false))
        .on_hover_text(&toggle.description)
        .clicked()
}

fn show_dog_about(ui: &mut egui::Ui, about: &AboutView, palette: &Palette) {
    egui::Frame::new()
        .inner_margin(Margin {
            left: 16,
            right: 16,
            top: 8,
            bottom: 16,
        })
        .show(ui, |ui| {
            ui.label(
                RichText::new(&about.label)
                    .size(palette.typography.body_size)
                    .strong()
                    .color(palette.on_surface),
            );
            ui.label(
                RichText::new(&about.description)
                    .size(palette.typography.body_size)
                    .color(palette.on_surface),
            );
        });
}

pub fn launch_window(config: &AppConfig) -> Result<(), WoofError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };

    let app = WoofApp::new(
        Catalog::dogs(),
        StringTable::english(),
        AssetImages::new(&config.assets_dir),
    );
    let theme = config.theme;
    tracing::info!(assets = %config.assets_dir, ?theme, "starting woof");

    eframe::run_native(
        "Woof",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(theme);
            Ok(Box::new(app))
        }),
    )
    .map_err(|error| WoofError::Ui(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    const FRAME_SECS: f64 = 1.0 / 60.0;
    /// Chevron of the first card in a 420 px wide window.
    const FIRST_TOGGLE: egui::Pos2 = egui::pos2(380.0, 96.0);

    struct Harness {
        app: WoofApp,
        ctx: egui::Context,
        size: egui::Vec2,
        time: f64,
        assets: TempDir,
    }

    impl Harness {
        fn new(catalog: Catalog, width: f32, height: f32) -> Self {
            let assets = TempDir::new().expect("tempdir");
            let app = WoofApp::new(catalog, StringTable::english(), AssetImages::new(assets.path()));
            Self {
                app,
                ctx: egui::Context::default(),
                size: egui::vec2(width, height),
                time: 0.0,
                assets,
            }
        }

        fn frame(&mut self, events: Vec<egui::Event>) {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, self.size)),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            self.time += FRAME_SECS;
            let app = &mut self.app;
            let _ = self.ctx.run(input, |ctx| app.ui(ctx));
        }

        fn settle(&mut self) {
            for _ in 0..40 {
                self.frame(Vec::new());
            }
        }

        fn click(&mut self, pos: egui::Pos2) {
            let press = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::default(),
            };
            self.frame(vec![egui::Event::PointerMoved(pos), press(true)]);
            self.frame(vec![press(false)]);
        }
    }

    #[test]
    fn headless_frame_lays_out_every_card() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 2000.0);

        harness.frame(Vec::new());

        // nine dogs plus the logo
        assert_eq!(harness.app.textures.len(), 10);
        assert_eq!(harness.app.heights.len(), 9);
    }

    #[test]
    fn clicking_the_chevron_toggles_the_first_card() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 300.0);
        harness.settle();
        let collapsed = harness.app.heights.height(0);

        harness.click(FIRST_TOGGLE);
        assert!(harness.app.controller.expansion(0).is_expanded());
        assert!(!harness.app.controller.expansion(1).is_expanded());
        harness.settle();
        let expanded = harness.app.heights.height(0);
        assert!(expanded > collapsed + 10.0, "{expanded} vs {collapsed}");

        harness.click(FIRST_TOGGLE);
        assert!(!harness.app.controller.expansion(0).is_expanded());
        harness.settle();
        assert!((harness.app.heights.height(0) - collapsed).abs() < 0.5);
    }

    #[test]
    fn rows_below_a_short_viewport_are_recycled() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 300.0);
        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        harness.app.controller.dispatch(AppEvent::ToggleRow(8));

        harness.frame(Vec::new());
        harness.frame(Vec::new());

        assert!(harness.app.controller.expansion(0).is_expanded());
        assert!(!harness.app.controller.expansion(8).is_expanded());
        assert!(harness.app.textures.len() < 10);
    }

    #[test]
    fn about_block_shrinks_gradually_on_collapse() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 300.0);
        harness.settle();
        let collapsed = harness.app.heights.height(0);

        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        harness.settle();
        let expanded = harness.app.heights.height(0);

        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        harness.frame(Vec::new());
        let closing = harness.app.heights.height(0);
        assert!(closing > collapsed + 1.0, "{closing} vs {collapsed}");
        assert!(closing < expanded, "{closing} vs {expanded}");
        assert!(harness.app.about_blocks.contains_key(&0));

        harness.settle();
        assert!((harness.app.heights.height(0) - collapsed).abs() < 0.5);
        assert!(!harness.app.about_blocks.contains_key(&0));
    }

    #[test]
    fn about_block_grows_gradually_on_expand() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 300.0);
        harness.settle();
        let collapsed = harness.app.heights.height(0);

        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        harness.settle();
        let expanded = harness.app.heights.height(0);
        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        harness.settle();

        harness.app.controller.dispatch(AppEvent::ToggleRow(0));
        for _ in 0..3 {
            harness.frame(Vec::new());
        }
        let opening = harness.app.heights.height(0);
        assert!(opening > collapsed + 1.0, "{opening} vs {collapsed}");
        assert!(opening < expanded - 1.0, "{opening} vs {expanded}");
    }

    #[test]
    fn texture_cache_keeps_crop_and_contain_apart() {
        let mut harness = Harness::new(Catalog::dogs(), 420.0, 300.0);
        let img = ImageBuffer::from_fn(500, 300, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(harness.assets.path().join("koda.png")).expect("save");
        let ctx = harness.ctx.clone();
        let koda = ImageId::new("koda");

        let cropped = harness.app.texture(&ctx, koda, Fit::Crop);
        let contained = harness.app.texture(&ctx, koda, Fit::Contain);

        assert_eq!(cropped.size(), [256, 256]);
        assert_eq!(contained.size(), [256, 154]);
        assert_eq!(harness.app.textures.len(), 2);
    }

    #[test]
    fn empty_catalog_renders_without_cards() {
        let mut harness = Harness::new(Catalog::default(), 420.0, 2000.0);

        harness.frame(Vec::new());

        assert_eq!(harness.app.textures.len(), 1);
        assert_eq!(harness.app.heights.len(), 0);
    }
}
