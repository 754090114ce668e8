use std::collections::VecDeque;

/// Most-recent-N list, newest first. Lives only as long as the view.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    cap: usize,
}

impl<T> History<T> {
    pub fn new(cap: usize) -> Self {
        History {
            entries: VecDeque::with_capacity(cap),
            cap,
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
