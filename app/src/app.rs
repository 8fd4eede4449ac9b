use std::time::{Duration, Instant};

use automaton::{Grid, Simulation, config::Config, render};
use eframe::{CreationContext, Frame};
use egui::{
    Color32, ColorImage, Context, Key, TextureHandle, TextureOptions, ViewportCommand,
    load::SizedTexture,
};

pub struct App {
    sim: Simulation,
    settings: render::Settings,
    refresh: Duration,
    generations: Option<usize>,
    last_update: Instant,
    texture: Option<TextureHandle>,
}

impl App {
    /// Called once before the first frame.
    pub fn new(_cc: &CreationContext<'_>, config: &Config, grid: Grid) -> Self {
        Self {
            sim: Simulation::new(grid, config.rule),
            settings: render::Settings {
                magnification: config.magnification,
                ..Default::default()
            },
            refresh: config.refresh,
            generations: config.generations,
            last_update: Instant::now(),
            texture: None,
        }
    }

    fn finished(&self) -> bool {
        self.generations
            .is_some_and(|limit| self.sim.generation() >= limit)
    }

    fn upload(&mut self, ctx: &Context) -> TextureHandle {
        let (size, pixels) = self.sim.grid().render(self.settings);
        let pixels: Vec<Color32> = pixels.into_iter().map(From::from).collect();
        let image = ColorImage::new(size, pixels);
        let options = TextureOptions::NEAREST;
        match self.texture.take() {
            Some(mut t) if t.size() == image.size => {
                t.set(image, options);
                t
            }
            _ => ctx.load_texture("automaton", image, options),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        if ctx.input(|i| i.key_pressed(Key::Q)) {
            log::info!("quit at generation {}", self.sim.generation());
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }
        if !self.finished() && self.last_update.elapsed() >= self.refresh {
            self.sim.step();
            self.last_update = Instant::now();
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!(
                "{}  generation {}  population {}  (q to quit)",
                self.sim.rule(),
                self.sim.generation(),
                self.sim.grid().population()
            ));
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            let texture = self.upload(ctx);
            let size = texture.size_vec2();
            let sized_texture = SizedTexture::new(&texture, size);
            ui.add(egui::Image::new(sized_texture).fit_to_exact_size(size));
            self.texture = Some(texture);
        });

        if !self.finished() {
            ctx.request_repaint_after(self.refresh.saturating_sub(self.last_update.elapsed()));
        }
    }
}
