use std::time::Instant;

use eframe::{App, Frame, NativeOptions, egui, run_native};
use egui::{ColorImage, TextureHandle};
use worldgen::Generator;
use worldgen::utils::{BlockMap2D, to_block_image};

// Vertical extent of the cross-section view; covers every classifier band
// (deep stone at -39 up past the snow line at 22)
const SLICE_Y_TOP: i64 = 79;
const SLICE_Y_BOTTOM: i64 = -80;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ViewMode {
    SurfaceMap,
    CrossSection,
}

struct WorldgenApp {
    // parameters
    view_mode: ViewMode,
    seed: i64,
    center_x: i64,
    center_z: i64,
    size: usize,

    // generated texture
    terrain_texture: Option<TextureHandle>,

    // timing & status
    last_duration: Option<f32>,
    status_message: String,

    // Store the last RGB buffer and its dimensions for PNG export
    last_rgb: Option<Vec<u8>>,
    last_dims: (usize, usize),
}

impl Default for WorldgenApp {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::SurfaceMap,
            seed: 2025,
            center_x: 0,
            center_z: 0,
            size: 256,
            terrain_texture: None,
            last_duration: None,
            status_message: String::new(),
            last_rgb: None,
            last_dims: (0, 0),
        }
    }
}

impl WorldgenApp {
    // Top-down map: the surface block at every (x, z), sea rendered as water
    fn render_surface_map(&self, generator: &Generator) -> BlockMap2D {
        let half = self.size as i64 / 2;
        (0..self.size as i64)
            .map(|row| {
                (0..self.size as i64)
                    .map(|col| {
                        let x = self.center_x + col - half;
                        let z = self.center_z + row - half;
                        let surface = generator.surface_level(x, z);
                        if surface < -15 {
                            generator.block_at(x, -15, z)
                        } else {
                            generator.block_at(x, surface, z)
                        }
                    })
                    .collect()
            })
            .collect()
    }

    // Vertical slice at z = center_z, rows top-down
    fn render_cross_section(&self, generator: &Generator) -> BlockMap2D {
        let half = self.size as i64 / 2;
        (0..(SLICE_Y_TOP - SLICE_Y_BOTTOM + 1))
            .map(|row| {
                let y = SLICE_Y_TOP - row;
                (0..self.size as i64)
                    .map(|col| generator.block_at(self.center_x + col - half, y, self.center_z))
                    .collect()
            })
            .collect()
    }
}

impl App for WorldgenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("World Generator");
            ui.separator();

            ui.label("View");
            egui::ComboBox::from_label("View Mode")
                .selected_text(format!("{:?}", self.view_mode))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.view_mode, ViewMode::SurfaceMap, "SurfaceMap");
                    ui.selectable_value(
                        &mut self.view_mode,
                        ViewMode::CrossSection,
                        "CrossSection",
                    );
                });

            ui.label("Seed");
            ui.add(egui::DragValue::new(&mut self.seed).speed(1.0));

            ui.label("Center X");
            ui.add(egui::DragValue::new(&mut self.center_x).speed(4.0));
            ui.label(if self.view_mode == ViewMode::SurfaceMap {
                "Center Z"
            } else {
                "Slice Z"
            });
            ui.add(egui::DragValue::new(&mut self.center_z).speed(4.0));

            ui.label("Region size");
            ui.add(egui::Slider::new(&mut self.size, 64..=512));

            ui.separator();

            // Generate & measure
            if ui.button("Generate").clicked() {
                let start = Instant::now();

                let generator = Generator::new(self.seed);
                let map = match self.view_mode {
                    ViewMode::SurfaceMap => self.render_surface_map(&generator),
                    ViewMode::CrossSection => self.render_cross_section(&generator),
                };
                let height = map.len();
                let width = map.first().map_or(0, Vec::len);
                let rgb = to_block_image(&map);

                let color_image = ColorImage::from_rgb([width, height], &rgb);
                self.terrain_texture =
                    Some(ctx.load_texture("terrain", color_image, egui::TextureOptions::NEAREST));
                self.last_rgb = Some(rgb);
                self.last_dims = (width, height);
                self.last_duration = Some(start.elapsed().as_secs_f32() * 1000.0);
                self.status_message = format!(
                    "Generated in {:.2} ms (seed {})",
                    self.last_duration.unwrap(),
                    self.seed
                );
                ctx.request_repaint();
            }

            // Save to PNG
            if ui.button("Save PNG…").clicked() {
                if let Some(rgb) = &self.last_rgb {
                    let (width, height) = self.last_dims;
                    let filename = format!("world_{}.png", self.seed);
                    match image::save_buffer(
                        &filename,
                        rgb,
                        width as u32,
                        height as u32,
                        image::ColorType::Rgb8,
                    ) {
                        Ok(()) => self.status_message = format!("Saved {}", filename),
                        Err(e) => self.status_message = format!("Save error: {}", e),
                    }
                }
            }

            ui.separator();
            ui.label(&self.status_message);
        });

        // central display
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.terrain_texture {
                let available = ui.available_size();
                ui.image((tex.id(), available));
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label("Click “Generate” to start");
                });
            }
        });
    }
}

fn main() {
    let opts = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    run_native(
        "Voxel World Generator",
        opts,
        Box::new(|_cc| Ok(Box::new(WorldgenApp::default()))),
    )
    .unwrap();
}
