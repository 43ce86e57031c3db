//! Scenes: named bundles of lifecycle callbacks
//!
//! A scene is one mode or screen of an application (menu, play, game over).
//! The owning stage calls `init` once when the scene is added, `enter` and
//! `exit` when it becomes active or inactive, and `update`/`render` every frame
//! while it is active. Every callback receives the stage explicitly.

use std::fmt;

use super::Stage;
use crate::surface::Surface;

pub type StageFn<S> = Box<dyn FnMut(&mut Stage<S>)>;
pub type FrameFn<S> = Box<dyn FnMut(&mut Stage<S>, f32)>;

/// The five lifecycle callbacks of a scene
pub struct SceneCallbacks<S: Surface> {
    pub init: StageFn<S>,
    pub enter: StageFn<S>,
    pub exit: StageFn<S>,
    /// Receives the frame delta time in seconds
    pub update: FrameFn<S>,
    pub render: FrameFn<S>,
}

impl<S: Surface> Default for SceneCallbacks<S> {
    fn default() -> Self {
        Self {
            init: Box::new(|_| {}),
            enter: Box::new(|_| {}),
            exit: Box::new(|_| {}),
            update: Box::new(|_, _| {}),
            render: Box::new(|_, _| {}),
        }
    }
}

/// A named, switchable scene
pub struct Scene<S: Surface> {
    pub(crate) name: String,
    pub(crate) active: bool,
    /// `None` while one of the callbacks is running
    pub(crate) callbacks: Option<SceneCallbacks<S>>,
}

impl<S: Surface> Scene<S> {
    /// A scene whose callbacks all do nothing
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_callbacks(name, SceneCallbacks::default())
    }

    pub fn with_callbacks(name: impl Into<String>, callbacks: SceneCallbacks<S>) -> Self {
        Self {
            name: name.into(),
            active: false,
            callbacks: Some(callbacks),
        }
    }

    pub fn on_init(mut self, f: impl FnMut(&mut Stage<S>) + 'static) -> Self {
        self.callbacks_mut().init = Box::new(f);
        self
    }

    pub fn on_enter(mut self, f: impl FnMut(&mut Stage<S>) + 'static) -> Self {
        self.callbacks_mut().enter = Box::new(f);
        self
    }

    pub fn on_exit(mut self, f: impl FnMut(&mut Stage<S>) + 'static) -> Self {
        self.callbacks_mut().exit = Box::new(f);
        self
    }

    pub fn on_update(mut self, f: impl FnMut(&mut Stage<S>, f32) + 'static) -> Self {
        self.callbacks_mut().update = Box::new(f);
        self
    }

    pub fn on_render(mut self, f: impl FnMut(&mut Stage<S>, f32) + 'static) -> Self {
        self.callbacks_mut().render = Box::new(f);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn callbacks_mut(&mut self) -> &mut SceneCallbacks<S> {
        // Scenes under construction are not running, so the callbacks are present
        self.callbacks.get_or_insert_with(SceneCallbacks::default)
    }
}

impl<S: Surface> fmt::Debug for Scene<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}
