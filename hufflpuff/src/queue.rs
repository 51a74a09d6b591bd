use common::HuffError;
use common::Result;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min priority queue. `dequeue` returns the smallest element according to its `Ord`.
///
/// The order of the elements must be total, two distinct elements may never compare as equal,
/// otherwise the dequeue order of ties depends on the heap layout.
#[derive(Debug)]
pub struct PriorityQueue<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut heap = BinaryHeap::new();
        heap.try_reserve(capacity)?;
        Ok(PriorityQueue { heap })
    }

    #[inline]
    pub fn enqueue(&mut self, el: T) -> Result<()> {
        self.heap.try_reserve(1)?;
        self.heap.push(Reverse(el));
        Ok(())
    }

    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.heap
            .pop()
            .map(|Reverse(el)| el)
            .ok_or(HuffError::EmptyQueue)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(el)| el)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_ascending() {
        let mut queue = PriorityQueue::new();
        for el in &[45_u64, 5, 16, 12, 9, 13] {
            queue.enqueue(*el).unwrap();
        }
        assert_eq!(queue.len(), 6);
        assert_eq!(queue.peek(), Some(&5));

        let mut out = vec![];
        while !queue.is_empty() {
            out.push(queue.dequeue().unwrap());
        }
        assert_eq!(out, vec![5, 9, 12, 13, 16, 45]);
    }

    #[test]
    fn test_ties_use_full_order() {
        let mut queue = PriorityQueue::with_capacity(4).unwrap();
        queue.enqueue((3, 'b')).unwrap();
        queue.enqueue((1, 'z')).unwrap();
        queue.enqueue((3, 'a')).unwrap();
        queue.enqueue((1, 'y')).unwrap();
        assert_eq!(queue.dequeue().unwrap(), (1, 'y'));
        assert_eq!(queue.dequeue().unwrap(), (1, 'z'));
        assert_eq!(queue.dequeue().unwrap(), (3, 'a'));
        assert_eq!(queue.dequeue().unwrap(), (3, 'b'));
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue: PriorityQueue<u64> = PriorityQueue::default();
        assert!(matches!(queue.dequeue(), Err(HuffError::EmptyQueue)));
        assert_eq!(queue.peek(), None);
    }
}
