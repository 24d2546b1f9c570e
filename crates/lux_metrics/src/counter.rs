//! Named counters for tracking calls

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct Counter {
    counters: HashMap<String, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    pub fn increment(&mut self, name: &str, value: usize) {
        *self.counters.entry(name.to_string()).or_insert(0) += value;
    }

    pub fn get(&self, name: &str) -> usize {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn reset(&mut self, name: &str) {
        self.counters.insert(name.to_string(), 0);
    }

    pub fn reset_all(&mut self) {
        self.counters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter() {
        let mut counter = Counter::new();
        assert_eq!(counter.get("scene.set_skybox"), 0);

        counter.increment("scene.set_skybox", 1);
        counter.increment("scene.set_skybox", 2);
        assert_eq!(counter.get("scene.set_skybox"), 3);

        counter.increment("light.create", 5);
        counter.reset("scene.set_skybox");
        assert_eq!(counter.get("scene.set_skybox"), 0);
        assert_eq!(counter.get("light.create"), 5);

        counter.reset_all();
        assert_eq!(counter.get("light.create"), 0);
    }
}
