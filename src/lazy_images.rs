//! Deferred image loading.

pub const DEFAULT_DEFERRED_SRC_ATTR: &str = "data-src";

/// Classes added when an image is revealed by the viewport watcher.
pub const REVEAL_CLASSES: [&str; 2] = ["animate__animated", "animate__fadeIn"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Wait for each image to enter the viewport.
    Observe,
    /// No intersection support: resolve every deferred source immediately.
    Eager,
}

impl LoadStrategy {
    pub fn for_platform(supports_intersection: bool) -> Self {
        if supports_intersection {
            LoadStrategy::Observe
        } else {
            LoadStrategy::Eager
        }
    }
}

pub fn deferred_image_selector(attr: &str) -> String {
    format!("img[{attr}]")
}

/// Images still waiting to be revealed. Each image is revealed at most once.
#[derive(Debug)]
pub struct PendingImages<K> {
    pending: Vec<K>,
}

impl<K: PartialEq> PendingImages<K> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn register(&mut self, image: K) {
        if !self.pending.contains(&image) {
            self.pending.push(image);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.pending.iter()
    }

    /// Visibility report from the watcher. Returns `true` exactly once per
    /// image: the first time it is reported as intersecting.
    pub fn reveal(&mut self, image: &K, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.pending.iter().position(|k| k == image) {
            Some(i) => {
                self.pending.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// Eager fallback: everything is revealed now.
    pub fn drain(&mut self) -> Vec<K> {
        std::mem::take(&mut self.pending)
    }
}

impl<K: PartialEq> Default for PendingImages<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_follows_platform_support() {
        assert_eq!(LoadStrategy::for_platform(true), LoadStrategy::Observe);
        assert_eq!(LoadStrategy::for_platform(false), LoadStrategy::Eager);
        assert_eq!(deferred_image_selector("data-src"), "img[data-src]");
    }

    #[test]
    fn reveals_each_image_once() {
        let mut p = PendingImages::new();
        p.register("hero.jpg");
        p.register("team.jpg");
        p.register("hero.jpg");
        assert_eq!(p.len(), 2);

        assert!(!p.reveal(&"hero.jpg", false));
        assert!(p.reveal(&"hero.jpg", true));
        assert!(!p.reveal(&"hero.jpg", true));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn unknown_images_are_ignored() {
        let mut p: PendingImages<u32> = PendingImages::default();
        assert!(!p.reveal(&7, true));
        assert!(p.is_empty());
    }

    #[test]
    fn eager_drain_empties_the_set() {
        let mut p = PendingImages::new();
        p.register(1u32);
        p.register(2u32);
        assert_eq!(p.drain(), vec![1, 2]);
        assert!(p.is_empty());
    }
}
