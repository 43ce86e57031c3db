//! Stage: surface owner, input mirror, scene host and frame driver
//!
//! The host calls [`Stage::tick`] once per animation frame and feeds input
//! through [`Stage::handle_input`]. Tick listeners usually clear the surface and
//! call [`Stage::update_scene`] / [`Stage::render_scene`].
//!
//! Scene switches requested from inside a scene callback are applied once that
//! callback returns, so the scene list is never changed under a running
//! callback.

pub mod draw;
pub mod events;
pub mod input;
pub mod scene;

pub use events::{EventKind, ListenerHandle, StageEvent};
pub use input::{InputEvent, InputState, Mouse};
pub use scene::{Scene, SceneCallbacks};

use glam::Vec2;

use crate::error::Result;
use crate::options::StageOptions;
use crate::surface::Surface;
use crate::validate::check_arity;
use events::Listeners;

/// Surface size in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub half_width: f32,
    pub half_height: f32,
}

pub struct Stage<S: Surface> {
    surface: S,
    options: StageOptions,
    /// Whether a path is currently being built
    pathing: bool,

    delta_time: f32,
    fps: f32,
    last_tick: Option<f64>,
    frame_index: u64,

    input: InputState,
    /// Sum of all `translate` calls
    translated: Vec2,

    scenes: Vec<Scene<S>>,
    active_scene: Option<String>,
    /// Nesting depth of running scene callbacks
    scene_depth: u32,
    pending_scene: Option<String>,

    listeners: Listeners<S>,
}

impl<S: Surface> Stage<S> {
    pub fn new(mut surface: S, options: StageOptions) -> Self {
        surface.set_background(&options.background);
        surface.set_focusable(options.focusable, options.focused_outline);
        surface.set_image_smoothing(options.image_smoothing);

        log::info!(
            "Stage created ({}x{})",
            surface.width(),
            surface.height()
        );

        Self {
            surface,
            options,
            pathing: false,
            delta_time: 0.0,
            fps: 0.0,
            last_tick: None,
            frame_index: 0,
            input: InputState::default(),
            translated: Vec2::ZERO,
            scenes: Vec::new(),
            active_scene: None,
            scene_depth: 0,
            pending_scene: None,
            listeners: Listeners::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &StageOptions {
        &self.options
    }

    /// Seconds between the last two ticks (0 before the second tick)
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Number of ticks so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn is_pathing(&self) -> bool {
        self.pathing
    }

    pub fn translated(&self) -> Vec2 {
        self.translated
    }

    pub fn dimensions(&self) -> Dimensions {
        let width = self.surface.width();
        let height = self.surface.height();
        Dimensions {
            width,
            height,
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }

    // === Time ===

    /// Advance one frame. `timestamp_ms` is the host's frame timestamp.
    pub fn tick(&mut self, timestamp_ms: f64) {
        match self.last_tick {
            Some(last) => {
                self.delta_time = ((timestamp_ms - last) / 1000.0) as f32;
                self.fps = if self.delta_time > 0.0 {
                    1.0 / self.delta_time
                } else {
                    0.0
                };
            }
            None => self.delta_time = 0.0,
        }
        self.last_tick = Some(timestamp_ms);
        self.frame_index += 1;

        self.dispatch(StageEvent::Tick {
            dt: self.delta_time,
            fps: self.fps,
        });
    }

    // === Input ===

    /// Mirror a host input event into stage state, then notify listeners
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.apply(&event);
        self.dispatch(StageEvent::Input(event));
    }

    /// Mouse position relative to the current translation, plus held buttons
    pub fn mouse(&self) -> Mouse<'_> {
        Mouse {
            position: self.input.pointer - self.translated,
            buttons: &self.input.buttons_down,
        }
    }

    pub fn is_mouse_down(&self, button: i16) -> bool {
        self.input.button_down(button)
    }

    pub fn is_key_down(&self, code: u32) -> bool {
        self.input.key_down(code)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    // === Scenes ===

    /// Register a scene and run its `init` callback.
    ///
    /// Names should be unique. A duplicate is still added, but lookups by name
    /// find the earlier scene.
    pub fn add_scene(&mut self, scene: Scene<S>) -> &mut Self {
        if self.scene(&scene.name).is_some() {
            log::warn!("a scene named {:?} is already registered", scene.name);
        }
        log::debug!("adding scene {:?}", scene.name);

        self.scenes.push(scene);
        let index = self.scenes.len() - 1;
        self.run_scene_callback(index, |cb, stage| (cb.init)(stage));
        self.apply_pending_scene();
        self
    }

    /// Register several scenes in order; at least one is required
    pub fn add_scenes(&mut self, scenes: impl IntoIterator<Item = Scene<S>>) -> Result<&mut Self> {
        let scenes: Vec<_> = scenes.into_iter().collect();
        check_arity(scenes.len(), 1, usize::MAX)?;
        for scene in scenes {
            self.add_scene(scene);
        }
        Ok(self)
    }

    /// Make the scene called `name` the active one.
    ///
    /// The previously active scene is exited first, then the new one is
    /// entered. If no scene has that name the old scene is still exited and no
    /// scene is left active; this returns false in that case.
    ///
    /// Called from inside a scene callback, the switch is applied when that
    /// callback returns. The return value then tells whether `name` was
    /// registered at the time of the call, not when the switch is applied.
    pub fn set_active_scene(&mut self, name: &str) -> bool {
        let known = self.scene(name).is_some();
        if self.scene_depth > 0 {
            log::debug!("deferring switch to scene {:?}", name);
            self.pending_scene = Some(name.to_string());
            return known;
        }

        self.switch_scene(name);
        self.apply_pending_scene();
        known
    }

    pub fn active_scene(&self) -> Option<&Scene<S>> {
        self.active_index().map(|i| &self.scenes[i])
    }

    pub fn scene(&self, name: &str) -> Option<&Scene<S>> {
        self.scenes.iter().find(|s| s.name == name)
    }

    pub fn scenes(&self) -> &[Scene<S>] {
        &self.scenes
    }

    /// Run the active scene's `update` with the current delta time
    pub fn update_scene(&mut self) -> &mut Self {
        if let Some(index) = self.active_index() {
            let dt = self.delta_time;
            self.run_scene_callback(index, |cb, stage| (cb.update)(stage, dt));
            self.apply_pending_scene();
        }
        self
    }

    /// Run the active scene's `render` with the current delta time
    pub fn render_scene(&mut self) -> &mut Self {
        if let Some(index) = self.active_index() {
            let dt = self.delta_time;
            self.run_scene_callback(index, |cb, stage| (cb.render)(stage, dt));
            self.apply_pending_scene();
        }
        self
    }

    fn active_index(&self) -> Option<usize> {
        let name = self.active_scene.as_deref()?;
        self.scenes.iter().position(|s| s.active && s.name == name)
    }

    fn switch_scene(&mut self, name: &str) {
        let target = self.scenes.iter().position(|s| s.name == name);

        // Exit everything else first so enter always sees a clean stage
        let count = self.scenes.len();
        for index in 0..count {
            if Some(index) != target && self.scenes[index].active {
                self.run_scene_callback(index, |cb, stage| (cb.exit)(stage));
                self.scenes[index].active = false;
            }
        }

        match target {
            Some(index) => {
                self.run_scene_callback(index, |cb, stage| (cb.enter)(stage));
                self.scenes[index].active = true;
                self.active_scene = Some(name.to_string());
                log::debug!("active scene is now {:?}", name);
            }
            None => {
                self.active_scene = None;
                log::warn!("no scene named {:?}, no scene is active", name);
            }
        }
    }

    fn apply_pending_scene(&mut self) {
        if self.scene_depth > 0 {
            return;
        }
        while let Some(name) = self.pending_scene.take() {
            self.switch_scene(&name);
        }
    }

    /// Run one callback of the scene at `index` with the stage lent to it
    fn run_scene_callback<F>(&mut self, index: usize, f: F)
    where
        F: FnOnce(&mut SceneCallbacks<S>, &mut Self),
    {
        let Some(mut callbacks) = self.scenes[index].callbacks.take() else {
            log::warn!(
                "scene {:?} is already running a callback, skipping",
                self.scenes[index].name
            );
            return;
        };

        self.scene_depth += 1;
        f(&mut callbacks, self);
        self.scene_depth -= 1;

        self.scenes[index].callbacks = Some(callbacks);
    }
}
