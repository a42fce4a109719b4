use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalPosition,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use folio_core::{
    default_anchors, pick_section, EngineConfig, ScrollDirection, SpatialEngine,
    PICK_SPHERE_RADIUS,
};

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);
const LINE_DELTA_PX: f32 = 48.0; // winit line deltas are coarse compared to browser lines

struct Harness {
    engine: SpatialEngine,
    epoch: Instant,
    next_frame: Instant,
    cursor: Option<PhysicalPosition<f64>>,
    size: (f32, f32),
    last_active: Option<usize>,
    last_title: String,
}

impl Harness {
    fn new() -> anyhow::Result<Self> {
        let mut engine = SpatialEngine::new(EngineConfig::default(), default_anchors())?;
        engine.start();
        let now = Instant::now();
        Ok(Self {
            engine,
            epoch: now,
            next_frame: now,
            cursor: None,
            size: (1.0, 1.0),
            last_active: None,
            last_title: String::new(),
        })
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta) {
        // winit reports "scroll up" as positive y; the journey runs the other way.
        let px = match delta {
            MouseScrollDelta::LineDelta(_, y) => -y * LINE_DELTA_PX,
            MouseScrollDelta::PixelDelta(p) => -p.y as f32,
        };
        let now = self.now_ms();
        self.engine.on_raw_input(px, now);
    }

    fn on_key(&mut self, key: &Key) {
        match key {
            Key::Named(NamedKey::ArrowDown | NamedKey::PageDown | NamedKey::Space) => {
                self.engine.step_section(ScrollDirection::Forward)
            }
            Key::Named(NamedKey::ArrowUp | NamedKey::PageUp) => {
                self.engine.step_section(ScrollDirection::Backward)
            }
            Key::Named(NamedKey::Home) => self.engine.scroll_to_progress(0.0),
            Key::Named(NamedKey::End) => self.engine.scroll_to_progress(1.0),
            Key::Character(c) => match c.as_str() {
                "r" | "R" => {
                    let seed = self.epoch.elapsed().as_nanos() as u64;
                    self.engine.reshuffle(seed);
                    log::info!("[keys] reshuffled placements (seed {seed})");
                }
                digit => {
                    if let Some(n) = digit.parse::<usize>().ok().filter(|n| *n >= 1) {
                        self.engine.scroll_to_index(n - 1);
                    }
                }
            },
            _ => {}
        }
    }

    /// Hover whatever placement sits under the cursor in the current framing.
    fn update_hover(&mut self) {
        let hovered = self.cursor.and_then(|pos| {
            let (w, h) = self.size;
            let camera = self.engine.output().camera(w / h.max(1.0));
            let (ro, rd) = camera.screen_ray(pos.x as f32, pos.y as f32, w, h);
            pick_section(self.engine.placements(), ro, rd, PICK_SPHERE_RADIUS).map(|p| p.id.clone())
        });
        let current = self.engine.output().gravity.hovered_section_id.clone();
        if hovered != current {
            self.engine.on_section_hover(hovered.as_deref());
        }
    }

    fn frame(&mut self, window: &winit::window::Window) {
        self.update_hover();
        let (active, camera_z, progress) = {
            let out = self.engine.frame();
            (out.focus.active_index, out.camera_z, out.scroll.smooth_progress)
        };
        let anchor = active.and_then(|i| self.engine.anchors().get(i));
        if active != self.last_active {
            if let Some(a) = anchor {
                log::info!("[frame] active section {} (z={:.1})", a.id, camera_z);
            }
            self.last_active = active;
        }
        let label = anchor.map(|a| a.label.as_str()).unwrap_or("-");
        let title = format!("{label} | {:.0}%", progress * 100.0);
        if title != self.last_title {
            window.set_title(&title);
            self.last_title = title;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Spatial portfolio (native)")
        .build(&event_loop)?;
    let mut harness = Harness::new()?;
    let size = window.inner_size();
    harness.size = (size.width as f32, size.height as f32);

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                harness.engine.stop();
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                harness.size = (size.width as f32, size.height as f32);
            }
            WindowEvent::MouseWheel { delta, .. } => harness.on_wheel(delta),
            WindowEvent::CursorMoved { position, .. } => harness.cursor = Some(position),
            WindowEvent::CursorLeft { .. } => harness.cursor = None,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => harness.on_key(&logical_key),
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= harness.next_frame {
                harness.frame(&window);
                harness.next_frame = now + FRAME_INTERVAL;
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(harness.next_frame));
        }
        _ => {}
    })?;
    Ok(())
}
