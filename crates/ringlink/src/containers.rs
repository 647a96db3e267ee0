//! Container factory driven by [`RinglinkConfig`].

use ringlink_config::{Backing, ConfigError, ConfigLoader, RinglinkConfig};
use ringlink_queue::{
    ArrayStack, CircularArrayQueue, LinkedListQueue, LinkedListStack, Queue, Stack,
};

/// Builds queues and stacks with the configured limits and backings.
///
/// `Containers` is cheap to clone and holds no containers itself; every
/// call hands out a fresh, empty one owned by the caller.
#[derive(Debug, Clone, Default)]
pub struct Containers {
    config: RinglinkConfig,
}

impl Containers {
    pub fn new(config: RinglinkConfig) -> Self {
        Self { config }
    }

    /// Loads the layered configuration (files, then `RINGLINK_*` variables).
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load().map(Self::new)
    }

    pub fn config(&self) -> &RinglinkConfig {
        &self.config
    }

    /// Ring-buffer queue with `queue.limit` slots.
    pub fn circular_queue<T>(&self) -> CircularArrayQueue<T> {
        CircularArrayQueue::with_limit(self.config.queue.limit)
    }

    /// Array stack with `stack.limit` slots.
    pub fn array_stack<T>(&self) -> ArrayStack<T> {
        ArrayStack::with_limit(self.config.stack.limit)
    }

    /// Queue with the configured `queue.backing`.
    pub fn queue<T: 'static>(&self) -> Box<dyn Queue<T>> {
        tracing::debug!(
            backing = ?self.config.queue.backing,
            limit = self.config.queue.limit,
            "building queue"
        );
        match self.config.queue.backing {
            Backing::Array => Box::new(self.circular_queue()),
            Backing::LinkedList => Box::new(LinkedListQueue::new()),
        }
    }

    /// Stack with the configured `stack.backing`.
    pub fn stack<T: 'static>(&self) -> Box<dyn Stack<T>> {
        tracing::debug!(
            backing = ?self.config.stack.backing,
            limit = self.config.stack.limit,
            "building stack"
        );
        match self.config.stack.backing {
            Backing::Array => Box::new(self.array_stack()),
            Backing::LinkedList => Box::new(LinkedListStack::new()),
        }
    }
}
