//! A singly linked list with head, tail, and positional operations.
//!
//! Out-of-range and empty-structure lookups return `None` rather than a
//! reserved sentinel value, so any value of the element type is a legal
//! thing to store, including whatever the caller might have reserved as
//! an "invalid" marker. Indices are zero-based.
//!
//! # Examples
//!
//! ```
//! use ordtree::list::List;
//!
//! let mut list = List::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(0), Some(&0));
//! assert_eq!(list.pop_back(), Some(2));
//! assert_eq!(list.get(5), None);
//! ```

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    data: T,
    next: Link<T>,
}

/// A singly linked list. Each node exclusively owns its successor, so
/// the chain is acyclic by construction.
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    // One node per loop step, so a long list can't overflow the stack
    // through nested `Box` drops.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T> List<T> {
    /// Generates a new, empty `List`.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns how many elements are in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    /// Inserts an element at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data: value, next }));
        self.len += 1;
    }

    /// Appends an element at the end of the list. This walks the whole
    /// chain; no tail pointer is kept.
    pub fn push_back(&mut self, value: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node {
            data: value,
            next: None,
        }));
        self.len += 1;
    }

    /// Inserts an element so that it ends up at the given index. An
    /// index at or past the end appends.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back('a');
    /// list.push_back('c');
    /// list.insert_at(1, 'b');
    /// list.insert_at(99, 'd');
    ///
    /// let contents: Vec<&char> = list.iter().collect();
    /// assert_eq!(contents, [&'a', &'b', &'c', &'d']);
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) {
        let index = index.min(self.len);
        let mut cur = &mut self.head;
        for _ in 0..index {
            match cur {
                Some(node) => cur = &mut node.next,
                None => break,
            }
        }
        let next = cur.take();
        *cur = Some(Box::new(Node { data: value, next }));
        self.len += 1;
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let Node { data, next } = *node;
        self.head = next;
        self.len -= 1;
        Some(data)
    }

    /// Removes and returns the last element, or `None` if the list is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match self.len {
            0 => None,
            len => self.remove_at(len - 1),
        }
    }

    /// Removes and returns the element at the given index, or `None`
    /// when the index is out of range. The tail past the removed node
    /// slides up to close the gap.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let mut cur = &mut self.head;
        for _ in 0..index {
            cur = &mut cur.as_mut()?.next;
        }
        let node = cur.take()?;
        let Node { data, next } = *node;
        *cur = next;
        self.len -= 1;
        Some(data)
    }

    /// Returns a reference to the element at the given index, or `None`
    /// when the index is out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Reverses the list in place by walking it once and re-pointing
    /// each `next` link at the previous node.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Reverses the list in place recursively: each call detaches the
    /// head node, pushes it onto the accumulated reversed prefix, and
    /// recurses on the rest. Same result as [`reverse`][Self::reverse].
    pub fn reverse_recursive(&mut self) {
        fn rev<T>(link: Link<T>, acc: Link<T>) -> Link<T> {
            match link {
                None => acc,
                Some(mut node) => {
                    let rest = node.next.take();
                    node.next = acc;
                    rev(rest, Some(node))
                }
            }
        }
        self.head = rev(self.head.take(), None);
    }

    /// Returns an iterator over references to the elements, front to
    /// back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

/// Borrowed iterator over a [`List`], returned by [`List::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.data)
    }
}
