use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

#[derive(Debug, Clone)]
struct Node<E> {
    value: E,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Nodes live in one vector and link to each other by slot.
///
/// A node keeps its slot for the lifetime of the list, so a slot is a stable
/// handle: reaching an element through it costs one index, whatever its
/// place in link order.
#[derive(Clone)]
struct Nodes<E> {
    slots: Vec<Node<E>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<E> Default for Nodes<E> {
    fn default() -> Self {
        Self {
            slots: vec![],
            head: None,
            tail: None,
        }
    }
}

impl<E> Nodes<E> {
    fn push_back(&mut self, value: E) -> usize {
        let slot = self.slots.len();
        self.slots.push(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(t) => self.slots[t].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        slot
    }

    fn push_front(&mut self, value: E) -> usize {
        let slot = self.slots.len();
        self.slots.push(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(h) => self.slots[h].prev = Some(slot),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        slot
    }

    fn slots(&self) -> Slots<'_, E> {
        Slots {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.slots.len(),
        }
    }
}

/// Slots of a list in link order.
pub struct Slots<'a, E> {
    slots: &'a [Node<E>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, E> Clone for Slots<'a, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Slots<'a, E> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.front?;
        self.front = self.slots[cur].next;
        self.remaining -= 1;
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> DoubleEndedIterator for Slots<'a, E> {
    fn next_back(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let cur = self.back?;
        self.back = self.slots[cur].prev;
        self.remaining -= 1;
        Some(cur)
    }
}

impl<'a, E> ExactSizeIterator for Slots<'a, E> {}

impl<'a, E> FusedIterator for Slots<'a, E> {}

/// Elements of a list in link order.
pub struct ListIter<'a, E> {
    slots: Slots<'a, E>,
}

impl<'a, E> Clone for ListIter<'a, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, E> Iterator for ListIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        let all = self.slots.slots;
        self.slots.next().map(|s| &all[s].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a, E> DoubleEndedIterator for ListIter<'a, E> {
    fn next_back(&mut self) -> Option<&'a E> {
        let all = self.slots.slots;
        self.slots.next_back().map(|s| &all[s].value)
    }
}

impl<'a, E> ExactSizeIterator for ListIter<'a, E> {}

macro_rules! list_common {
    ($name:ident) => {
        impl<E> Default for $name<E> {
            fn default() -> Self {
                Self(Nodes::default())
            }
        }

        impl<E> $name<E> {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn len(&self) -> usize {
                self.0.slots.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.slots.is_empty()
            }

            pub fn iter(&self) -> ListIter<'_, E> {
                ListIter {
                    slots: self.0.slots(),
                }
            }

            /// Slots in link order. A slot is the element's position.
            pub fn slots(&self) -> Slots<'_, E> {
                self.0.slots()
            }

            pub fn get(&self, slot: usize) -> Option<&E> {
                self.0.slots.get(slot).map(|n| &n.value)
            }

            pub fn get_mut(&mut self, slot: usize) -> Option<&mut E> {
                self.0.slots.get_mut(slot).map(|n| &mut n.value)
            }

            pub fn reserve(&mut self, additional: usize) {
                self.0.slots.reserve(additional);
            }
        }

        impl<E: Debug> Debug for $name<E> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<E: PartialEq> PartialEq for $name<E> {
            fn eq(&self, other: &Self) -> bool {
                self.iter().eq(other.iter())
            }
        }

        impl<E: Eq> Eq for $name<E> {}

        impl<E: Hash> Hash for $name<E> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.len().hash(state);
                for e in self.iter() {
                    e.hash(state);
                }
            }
        }

        impl<'a, E> IntoIterator for &'a $name<E> {
            type Item = &'a E;
            type IntoIter = ListIter<'a, E>;

            fn into_iter(self) -> ListIter<'a, E> {
                self.iter()
            }
        }
    };
}

/// A doubly linked edge list: new edges go to the back.
#[derive(Clone)]
pub struct List<E>(Nodes<E>);

list_common!(List);

impl<E> List<E> {
    /// Returns the slot of the new element.
    pub fn push_back(&mut self, e: E) -> usize {
        self.0.push_back(e)
    }

    pub fn push_front(&mut self, e: E) -> usize {
        self.0.push_front(e)
    }
}

impl<E> FromIterator<E> for List<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut res = Self::new();
        for e in iter {
            res.push_back(e);
        }
        res
    }
}

/// A singly linked edge list: new edges go to the front.
#[derive(Clone)]
pub struct ForwardList<E>(Nodes<E>);

list_common!(ForwardList);

impl<E> ForwardList<E> {
    /// Returns the slot of the new element.
    pub fn push_front(&mut self, e: E) -> usize {
        self.0.push_front(e)
    }
}

impl<E> FromIterator<E> for ForwardList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut res = Self::new();
        for e in iter {
            res.push_front(e);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_stay_put_while_the_list_grows() {
        let mut l = List::new();
        let b = l.push_back('b');
        let a = l.push_front('a');
        let c = l.push_back('c');
        assert_eq!(l.iter().copied().collect::<String>(), "abc");
        assert_eq!(l.slots().collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(l.get(b), Some(&'b'));
        *l.get_mut(a).unwrap() = 'z';
        assert_eq!(l.iter().rev().copied().collect::<String>(), "cbz");
        assert_eq!(l.get(7), None);
    }

    #[test]
    fn forward_list_reads_newest_first() {
        let l: ForwardList<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(l.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(l.slots().collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(l.slots().len(), 3);
    }

    #[test]
    fn equality_follows_link_order() {
        let mut front = List::new();
        front.push_front(2);
        front.push_front(1);
        let back: List<i32> = [1, 2].into_iter().collect();
        assert_eq!(front, back);
        assert_eq!(format!("{:?}", back), "[1, 2]");
    }
}
