#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::Instant;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::patterns::PATTERNS;
use crate::auxiliary::randomizer::generate_rng;
use crate::auxiliary::window::create_window;
use crate::error::Error;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::config::LifeConfig;
use crate::traits_and_structs::universe::Universe;

const PATTERN_KEYS: [VirtualKeyCode; 4] = [
    VirtualKeyCode::Key1,
    VirtualKeyCode::Key2,
    VirtualKeyCode::Key3,
    VirtualKeyCode::Key4,
];

const ALIVE_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const DEAD_COLOR: [u8; 4] = [0, 0, 0, 0xff];

pub fn run_life(config: LifeConfig) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (screen_width, screen_height) = config.screen_size();
    let (window, p_width, p_height, _) = create_window(
        "Rust conway game of life",
        &event_loop,
        screen_width,
        screen_height,
    )
    .map_err(|e| {
        error!("create_window() failed: {}", e);
        e
    })?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut pixels = Pixels::new(screen_width, screen_height, surface_texture)?;

    let mut life = Life::new(config);
    let mut paused = false;
    let mut next_tick = Instant::now() + config.tick;
    info!("{}", Life::describe());

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            life.draw(pixels.get_frame());
            if pixels
                .render()
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // For everything else, for let winit_input_helper collect events to build its state.
        // It returns `true` when it is time to update our game state and request a redraw.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                info!("quit");
                *control_flow = ControlFlow::Exit;
                return;
            }
            let mut dirty = false;
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                match paused {
                    true => info!("paused"),
                    false => info!("unpaused"),
                }
            }
            let single_step = input.key_pressed(VirtualKeyCode::Space);
            if single_step {
                // Space is frame-step, so ensure we're paused
                debug!("frame advanced");
                paused = true;
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("screen cleared");
                life.clear();
                dirty = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                match generate_rng() {
                    Ok(mut rng) => {
                        info!("reset with random conditions");
                        life.randomize(&mut rng);
                        dirty = true;
                    }
                    Err(e) => error!("could not seed rng: {}", e),
                }
            }
            if input.key_pressed(VirtualKeyCode::S) {
                info!("reset with starting pattern");
                life.reseed(config.seed);
                dirty = true;
            }
            for (key, pattern) in PATTERN_KEYS.iter().zip(PATTERNS) {
                if input.key_pressed(*key) {
                    info!("reset with {}", pattern.name);
                    life.reseed(pattern.cells);
                    dirty = true;
                }
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                pixels.resize_surface(size.width, size.height);
                dirty = true;
            }

            let now = Instant::now();
            let tick_due = now >= next_tick;
            if tick_due {
                next_tick = now + config.tick;
            }
            if (tick_due && !paused) || single_step {
                life.update();
                dirty = true;
            }
            if dirty {
                window.request_redraw();
            }
            *control_flow = ControlFlow::WaitUntil(next_tick);
        }
    });
}

/// Game of Life on a fixed grid, drawn as `cell_size` pixel squares.
#[derive(Clone, Debug)]
pub struct Life {
    universe: Universe,
    config: LifeConfig,
    generation: u64,
}

impl Life {
    pub fn new(config: LifeConfig) -> Self {
        Self {
            universe: Universe::with_pattern(&config, config.seed),
            config,
            generation: 0,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl CellAutomata for Life {
    fn draw(&self, screen: &mut [u8]) {
        let (screen_width, _) = self.config.screen_size();
        let screen_width = screen_width as usize;
        let cell_size = self.config.cell_size as usize;
        debug_assert_eq!(screen.len(), 4 * self.universe.len() * cell_size * cell_size);

        for (n, pix) in screen.chunks_exact_mut(4).enumerate() {
            let (x, y) = (n % screen_width, n / screen_width);
            let idx = (y / cell_size) * self.universe.width() + x / cell_size;
            let color = if self.universe.get(idx).is_alive() {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };
            pix.copy_from_slice(&color);
        }
    }

    fn update(&mut self) {
        self.universe.step();
        self.generation += 1;
        debug!(
            "generation {} population {}",
            self.generation,
            self.universe.population()
        );
    }

    fn clear(&mut self) {
        self.universe.clear();
        self.generation = 0;
    }

    fn reseed(&mut self, pattern: &[usize]) {
        self.universe.seed(pattern);
        self.generation = 0;
    }

    fn randomize(&mut self, rng: &mut randomize::PCG32) {
        self.universe.randomize(rng, self.config.random_fill);
        self.generation = 0;
    }

    fn describe() -> String {
        "Conway's Game of Life: a cell is born with exactly three live neighbors \
         and survives with two or three."
            .to_string()
    }
}
