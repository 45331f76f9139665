use std::collections::HashSet;
use std::num::NonZeroU32;
use std::rc::Rc;
use std::thread;
use std::time::Instant;

use anyhow::Result;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::constants::{FRAME_BUDGET, SCREEN_HEIGHT, SCREEN_WIDTH, TURN_SPEED};
use crate::map::TileMap;
use crate::player::Player;
use crate::raycaster::{RenderMode, raycast};
use crate::scaler::{ScaleLut, blit_bilinear_stretch, build_scale_lut};
use crate::surface::PixelSurface;
use crate::topdown::render_top_down;

mod constants;
mod map;
mod player;
mod raster;
mod raycaster;
mod scaler;
mod surface;
mod topdown;

struct App {
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
    map: TileMap,
    player: Player,

    // Fixed-size render surface: top-down half | first-person half
    frame: PixelSurface,
    scale_lut: ScaleLut,
    mode: RenderMode,

    // HUD
    frame_counter: u32,
    last_fps_print: Instant,

    // Input
    keys_down: HashSet<KeyCode>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            window: None,
            surface: None,
            map: TileMap::level(),
            player: Player::new(2.0, 2.0, 0.0),

            frame: PixelSurface::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            scale_lut: ScaleLut::empty(),
            mode: RenderMode::Full,

            frame_counter: 0,
            last_fps_print: Instant::now(),

            keys_down: HashSet::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("Raycaster visualizer - press F to toggle single ray mode")
            .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64));

        let window = Rc::new(event_loop.create_window(attributes).expect("create window"));

        let context = softbuffer::Context::new(window.clone()).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, window.clone()).expect("softbuffer surface");

        let size = window.inner_size();
        self.scale_lut = build_scale_lut(size.width as usize, size.height as usize);

        self.surface = Some(surface);
        self.window = Some(window);

        self.window.as_ref().unwrap().request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                println!("The close button was pressed; stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    use winit::event::ElementState;
                    match state {
                        ElementState::Pressed => {
                            match code {
                                KeyCode::Escape => event_loop.exit(),
                                KeyCode::KeyF if !repeat => {
                                    self.mode = self.mode.toggled();
                                }
                                _ => {}
                            }
                            self.keys_down.insert(code);
                        }
                        ElementState::Released => {
                            self.keys_down.remove(&code);
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let frame_start = Instant::now();
                self.tick();

                let (window, surface) = match (&self.window, &mut self.surface) {
                    (Some(w), Some(s)) if w.id() == id => (w, s),
                    _ => return,
                };

                let size = window.inner_size();
                let (dw, dh) = (size.width as usize, size.height as usize);
                if dw == 0 || dh == 0 {
                    return; // Minimized window, skip drawing
                }

                // Set softbuffer to window size
                surface
                    .resize(
                        NonZeroU32::new(dw as u32).unwrap(),
                        NonZeroU32::new(dh as u32).unwrap(),
                    )
                    .unwrap();

                // The frame loop owns the surface: clear, then both views
                self.frame.clear();
                render_top_down(&mut self.frame, &self.map, &self.player);
                raycast(&mut self.frame, &self.map, &self.player, self.mode.columns());

                let mut buf = surface.buffer_mut().expect("buffer_mut");
                blit_bilinear_stretch(&mut buf, dw, &self.frame, &self.scale_lut);

                buf.present().unwrap();

                // Print FPS
                self.frame_counter += 1;
                let now = Instant::now();
                if now.duration_since(self.last_fps_print).as_secs_f32() >= 1.0 {
                    let fps = self.frame_counter as f32
                        / now.duration_since(self.last_fps_print).as_secs_f32();
                    println!("FPS: {fps:.1}");
                    self.frame_counter = 0;
                    self.last_fps_print = now;
                }

                // Pace to the frame budget
                let elapsed = frame_start.elapsed();
                if elapsed < FRAME_BUDGET {
                    thread::sleep(FRAME_BUDGET - elapsed);
                }

                self.window.as_ref().unwrap().request_redraw();
            }

            WindowEvent::Resized(new_size) => {
                // The render surface keeps its fixed size; only the blit
                // mapping follows the window
                self.scale_lut =
                    build_scale_lut(new_size.width as usize, new_size.height as usize);
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl App {
    fn tick(&mut self) {
        let [x, y] = self.player.pos;
        assert!(
            x >= 0.0 && x < self.map.width() as f32,
            "player x coordinate out of bounds: {x}"
        );
        assert!(
            y >= 0.0 && y < self.map.height() as f32,
            "player y coordinate out of bounds: {y}"
        );

        if self.keys_down.contains(&KeyCode::KeyW) {
            self.step_player(1.0);
        }
        if self.keys_down.contains(&KeyCode::KeyS) {
            self.step_player(-1.0);
        }
        if self.keys_down.contains(&KeyCode::KeyA) {
            self.player.turn(-TURN_SPEED);
        }
        if self.keys_down.contains(&KeyCode::KeyD) {
            self.player.turn(TURN_SPEED);
        }

        // keep the pose inside the outer wall ring
        self.player.pos[0] = self.player.pos[0].clamp(1.0, self.map.width() as f32 - 1.0);
        self.player.pos[1] = self.player.pos[1].clamp(1.0, self.map.height() as f32 - 1.0);
    }

    fn step_player(&mut self, sign: f32) {
        let [dx, dy] = self.player.heading;
        self.player.pos[0] += dx * sign;
        self.player.pos[1] += dy * sign;

        // undo the move if it landed in a solid tile
        let tile = self
            .map
            .tile_at(self.player.pos[0] as usize, self.player.pos[1] as usize);
        if tile != 0 {
            self.player.pos[0] -= dx * sign;
            self.player.pos[1] -= dy * sign;
        }
    }
}

fn main() -> Result<()> {
    let event_loop = EventLoop::new()?;

    // ControlFlow::Wait pauses the event loop when no events are pending;
    // every frame re-requests a redraw, so rendering keeps running.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
