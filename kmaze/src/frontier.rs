//! Worklists driving the maze search.
//!
//! Both disciplines sit on top of [`Deque`], a doubly linked list whose nodes live in a
//! single buffer and point at each other by index.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontierError {
    #[error("cannot remove an element from an empty collection")]
    Empty,
}

#[derive(Debug, Clone)]
struct Node<T> {
    item: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Double-ended list with O(1) insertion at both ends and O(1) removal at both ends.
///
/// Freed slots are reused, so the buffer never grows past the peak length.
#[derive(Debug, Clone)]
pub struct Deque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Deque<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn add_at_head(&mut self, item: T) {
        let idx = self.alloc(Node {
            item: Some(item),
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old) => self.nodes[old].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    pub fn add_at_tail(&mut self, item: T) {
        let idx = self.alloc(Node {
            item: Some(item),
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old) => self.nodes[old].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    pub fn remove_from_head(&mut self) -> Result<T, FrontierError> {
        let idx = self.head.ok_or(FrontierError::Empty)?;
        let next = self.nodes[idx].next;

        match next {
            Some(n) => self.nodes[n].prev = None,
            None => self.tail = None,
        }
        self.head = next;

        self.release(idx)
    }

    pub fn remove_from_tail(&mut self) -> Result<T, FrontierError> {
        let idx = self.tail.ok_or(FrontierError::Empty)?;
        let prev = self.nodes[idx].prev;

        match prev {
            Some(p) => self.nodes[p].next = None,
            None => self.head = None,
        }
        self.tail = prev;

        self.release(idx)
    }

    pub fn peek_head(&self) -> Option<&T> {
        self.head.and_then(|i| self.nodes[i].item.as_ref())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            deque: self,
            current: self.head,
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Result<T, FrontierError> {
        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
        let item = node.item.take().ok_or(FrontierError::Empty)?;

        self.free.push(idx);
        self.len -= 1;
        Ok(item)
    }
}

impl<T: PartialEq> Deque<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|i| i == item)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.deque.nodes[self.current?];
        self.current = node.next;
        node.item.as_ref()
    }
}

/// Collection of discovered but not yet processed items.
pub trait Frontier<T>: fmt::Debug {
    fn is_empty(&self) -> bool;

    fn add(&mut self, item: T);

    /// Removes and returns the next item according to the discipline of the collection.
    fn remove(&mut self) -> Result<T, FrontierError>;

    fn len(&self) -> usize;
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    contents: Deque<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            contents: Deque::new(),
        }
    }
}

impl<T: fmt::Debug> Frontier<T> for Stack<T> {
    fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    fn add(&mut self, item: T) {
        self.contents.add_at_head(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.contents.remove_from_head()
    }

    fn len(&self) -> usize {
        self.contents.len()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    contents: Deque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            contents: Deque::new(),
        }
    }
}

impl<T: fmt::Debug> Frontier<T> for Queue<T> {
    fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    fn add(&mut self, item: T) {
        self.contents.add_at_tail(item);
    }

    fn remove(&mut self) -> Result<T, FrontierError> {
        self.contents.remove_from_head()
    }

    fn len(&self) -> usize {
        self.contents.len()
    }
}
