//! Canvaslib demo
//!
//! Two scenes: a menu and a paddle-and-ball round. In the browser it draws into
//! the `#canvas` element; natively it runs a few frames headless and logs what
//! was drawn.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvaslib::geometry::circle_vs_aabb;
    use canvaslib::options::TextAlign;
    use canvaslib::{Aabb, Circle, FillOptions, Random, Scene, Shadow, Stage, TextOptions, Vec2, keys};
    use canvaslib::surface::Surface;

    const BALL_RADIUS: f32 = 8.0;
    const BALL_SPEED: f32 = 240.0;
    const PADDLE_WIDTH: f32 = 90.0;
    const PADDLE_HEIGHT: f32 = 12.0;

    struct Round {
        ball: Circle,
        velocity: Vec2,
        paddle: Aabb,
        bounces: u32,
        best: u32,
        rng: Random,
    }

    impl Round {
        fn new(seed: u64) -> Self {
            Self {
                ball: Circle::new(0.0, 0.0, BALL_RADIUS),
                velocity: Vec2::ZERO,
                paddle: Aabb::new(0.0, 0.0, PADDLE_WIDTH, PADDLE_HEIGHT),
                bounces: 0,
                best: 0,
                rng: Random::new(seed),
            }
        }

        fn serve(&mut self, width: f32, height: f32) {
            self.ball = Circle::new(width / 2.0, height / 3.0, BALL_RADIUS);
            // Always serve downwards
            let angle = self.rng.range(30.0, 150.0).to_radians();
            self.velocity = canvaslib::math::rad_to_vec(angle) * BALL_SPEED;
            self.paddle = Aabb::new(
                (width - PADDLE_WIDTH) / 2.0,
                height - PADDLE_HEIGHT * 3.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            );
            self.bounces = 0;
        }

        /// Returns false once the ball is lost
        fn step(&mut self, dt: f32, width: f32, height: f32, pointer_x: f32) -> bool {
            self.paddle.x = canvaslib::math::clamp(pointer_x - PADDLE_WIDTH / 2.0, 0.0, width - PADDLE_WIDTH);

            self.ball.x += self.velocity.x * dt;
            self.ball.y += self.velocity.y * dt;

            if self.ball.x < BALL_RADIUS || self.ball.x > width - BALL_RADIUS {
                self.velocity.x = -self.velocity.x;
                self.ball.x = canvaslib::math::clamp(self.ball.x, BALL_RADIUS, width - BALL_RADIUS);
            }
            if self.ball.y < BALL_RADIUS {
                self.velocity.y = self.velocity.y.abs();
            }

            if self.velocity.y > 0.0 && circle_vs_aabb(&self.ball, &self.paddle) {
                self.velocity.y = -self.velocity.y;
                self.bounces += 1;
                self.best = self.best.max(self.bounces);
            }

            self.ball.y - BALL_RADIUS < height
        }
    }

    fn title_text() -> TextOptions {
        TextOptions {
            font: "28px sans-serif".to_string(),
            align: TextAlign::Center,
            ..Default::default()
        }
    }

    /// Register both scenes, start on the menu and drive them from ticks
    pub fn install<S: Surface + 'static>(stage: &mut Stage<S>, seed: u64) -> canvaslib::Result<()> {
        let round = Rc::new(RefCell::new(Round::new(seed)));

        let menu = {
            let round = round.clone();
            Scene::new("menu")
                .on_enter(|_| log::info!("Press space to play"))
                .on_update(|stage, _| {
                    if stage.is_key_down(keys::SPACE) {
                        stage.set_active_scene("play");
                    }
                })
                .on_render(move |stage, _| {
                    let dim = stage.dimensions();
                    let best = round.borrow().best;
                    stage.fill_text("canvaslib", dim.half_width, dim.half_height - 20.0, &title_text());
                    stage.fill_text(
                        &format!("press space to play - best {}", best),
                        dim.half_width,
                        dim.half_height + 20.0,
                        &TextOptions {
                            align: TextAlign::Center,
                            ..Default::default()
                        },
                    );
                })
        };

        let play = {
            let enter_round = round.clone();
            let update_round = round.clone();
            let render_round = round;
            Scene::new("play")
                .on_enter(move |stage| {
                    let dim = stage.dimensions();
                    enter_round.borrow_mut().serve(dim.width, dim.height);
                })
                .on_update(move |stage, dt| {
                    if stage.is_key_down(keys::ESCAPE) {
                        stage.set_active_scene("menu");
                        return;
                    }
                    let dim = stage.dimensions();
                    let pointer_x = stage.mouse().position.x;
                    let alive = update_round
                        .borrow_mut()
                        .step(dt, dim.width, dim.height, pointer_x);
                    if !alive {
                        log::info!("Ball lost after {} bounces", update_round.borrow().bounces);
                        stage.set_active_scene("menu");
                    }
                })
                .on_render(move |stage, _| {
                    let round = render_round.borrow();
                    let fill = FillOptions {
                        style: "#224488".to_string(),
                    };
                    let shadow = Shadow::default();

                    let p = round.paddle;
                    stage
                        .begin_path()
                        .rect(p.x, p.y, p.width, p.height)
                        .fill(&fill, &shadow);

                    let b = round.ball;
                    match stage.begin_path().circle(b.x, b.y, b.radius) {
                        Ok(stage) => {
                            stage.fill(&fill, &shadow);
                        }
                        Err(err) => log::warn!("ball not drawn: {}", err),
                    }

                    stage.fill_text(
                        &format!("{}", round.bounces),
                        12.0,
                        24.0,
                        &TextOptions::default(),
                    );
                })
        };

        stage.add_scenes([menu, play])?;
        stage.set_active_scene("menu");
        stage.on_tick(|stage, _| {
            stage.clear().update_scene().render_scene();
        });
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_demo {
    use std::cell::RefCell;
    use std::rc::Rc;

    use canvaslib::platform::web::{CanvasSurface, FrameLoop, attach_input};
    use canvaslib::{Stage, StageOptions};
    use wasm_bindgen::prelude::*;

    fn js_err(err: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&err.to_string())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Canvaslib demo starting...");

        let surface = CanvasSurface::from_element_id("canvas").map_err(js_err)?;
        let options = StageOptions::load("canvaslib-demo");
        let stage = Rc::new(RefCell::new(Stage::new(surface, options)));

        let seed = js_sys::Date::now() as u64;
        super::demo::install(&mut *stage.borrow_mut(), seed).map_err(js_err)?;

        // Both live for the whole page
        let bindings = attach_input(&stage).map_err(js_err)?;
        std::mem::forget(bindings);
        FrameLoop::start(stage);

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_demo::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> canvaslib::Result<()> {
    use canvaslib::{InputEvent, RecordingSurface, Stage, StageOptions, keys};

    env_logger::init();
    log::info!("Canvaslib demo (native, headless) starting...");

    let mut stage = Stage::new(RecordingSurface::new(640.0, 480.0), StageOptions::default());
    demo::install(&mut stage, 42)?;

    let mut time = 0.0;
    for frame in 0..120 {
        if frame == 10 {
            stage.handle_input(InputEvent::KeyDown { code: keys::SPACE });
        }
        if frame == 11 {
            stage.handle_input(InputEvent::KeyUp { code: keys::SPACE });
        }
        stage.handle_input(InputEvent::MouseMove {
            x: 320.0 + (frame as f32 * 0.1).sin() * 200.0,
            y: 400.0,
        });
        stage.tick(time);
        time += 1000.0 / 60.0;
    }

    let scene = stage.active_scene().map(|s| s.name().to_string());
    log::info!(
        "Ran {} frames, active scene {:?}, {} draw commands",
        stage.frame_index(),
        scene,
        stage.surface().commands().len()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
