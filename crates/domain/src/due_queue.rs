use super::WarmEntry;

/// Binary min-heap of [`WarmEntry`] keyed by `due_at`.
///
/// Entries live in one contiguous array and carry their own index, which is
/// kept in sync on every swap and cleared when the entry leaves the heap.
/// There is no internal synchronization: shared access goes through the
/// refresh queue worker that owns it.
#[derive(Debug, Default)]
pub struct DueQueue {
    entries: Vec<WarmEntry>,
}

impl DueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, mut entry: WarmEntry) {
        let index = self.entries.len();
        entry.position = Some(index);
        self.entries.push(entry);
        self.sift_up(index);
    }

    /// Removes and returns the entry with the smallest `due_at`.
    pub fn pop_min(&mut self) -> Option<WarmEntry> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let mut entry = self.entries.pop()?;
        entry.position = None;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(entry)
    }

    pub fn peek_min(&self) -> Option<&WarmEntry> {
        self.entries.first()
    }

    /// Entries in backing-array order, not due order.
    pub fn iter(&self) -> impl Iterator<Item = &WarmEntry> {
        self.entries.iter()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.entries[i].due_at < self.entries[j].due_at
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
        self.entries[i].position = Some(i);
        self.entries[j].position = Some(j);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smallest = left;
            if right < len && self.less(right, left) {
                smallest = right;
            }
            if !self.less(smallest, index) {
                break;
            }
            self.swap(index, smallest);
            index = smallest;
        }
    }
}
