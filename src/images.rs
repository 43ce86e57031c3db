//! Batch image preloading
//!
//! [`ImageBatch`] only does the bookkeeping: which images are still missing,
//! the per-image callback, and the finish callback. The platform layer starts
//! the actual loads and reports each one through [`ImageBatch::loaded`].

use std::collections::HashMap;
use std::fmt;

type ImageFn<I> = Box<dyn FnMut(&str, &I)>;
type FinishFn<I> = Box<dyn FnOnce(HashMap<String, I>)>;

pub struct ImageBatch<I> {
    /// (name, source locator) in insertion order
    sources: Vec<(String, String)>,
    images: HashMap<String, I>,
    on_image: ImageFn<I>,
    on_finish: Option<FinishFn<I>>,
    finished: bool,
}

impl<I> ImageBatch<I> {
    /// A batch for the given name to source mapping
    pub fn new<K, V>(sources: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut list: Vec<(String, String)> = Vec::new();
        for (name, src) in sources {
            let name = name.into();
            if list.iter().any(|(n, _)| *n == name) {
                log::warn!("image {:?} listed twice, keeping the first source", name);
                continue;
            }
            list.push((name, src.into()));
        }

        Self {
            sources: list,
            images: HashMap::new(),
            on_image: Box::new(|_, _| {}),
            on_finish: None,
            finished: false,
        }
    }

    /// Called once per image as it finishes loading
    pub fn on_image(mut self, f: impl FnMut(&str, &I) + 'static) -> Self {
        self.on_image = Box::new(f);
        self
    }

    /// Called once with every image after the last one has loaded
    pub fn on_finish(mut self, f: impl FnOnce(HashMap<String, I>) + 'static) -> Self {
        self.on_finish = Some(Box::new(f));
        self
    }

    pub fn sources(&self) -> &[(String, String)] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Images still outstanding
    pub fn pending(&self) -> usize {
        if self.finished {
            0
        } else {
            self.sources.len() - self.images.len()
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Call after the loads were started. An empty batch finishes here.
    pub fn start(&mut self) {
        log::debug!("loading {} images", self.sources.len());
        if self.sources.is_empty() {
            self.finish();
        }
    }

    /// Record a loaded image; returns true when this completed the batch.
    ///
    /// Names outside the batch and repeated loads are ignored.
    pub fn loaded(&mut self, name: &str, image: I) -> bool {
        if self.finished {
            log::warn!("image {:?} loaded after the batch finished", name);
            return false;
        }
        if !self.sources.iter().any(|(n, _)| n == name) {
            log::warn!("image {:?} is not part of this batch", name);
            return false;
        }
        if self.images.contains_key(name) {
            log::debug!("image {:?} loaded twice", name);
            return false;
        }

        (self.on_image)(name, &image);
        self.images.insert(name.to_string(), image);

        if self.images.len() == self.sources.len() {
            self.finish();
            return true;
        }
        false
    }

    fn finish(&mut self) {
        self.finished = true;
        let images = std::mem::take(&mut self.images);
        log::info!("loaded {} images", images.len());
        if let Some(on_finish) = self.on_finish.take() {
            on_finish(images);
        }
    }
}

impl<I> fmt::Debug for ImageBatch<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBatch")
            .field("sources", &self.sources)
            .field("loaded", &self.images.len())
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}
