use alloc::alloc::Global;
use core::{
    alloc::{AllocError, Allocator, Layout},
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
    ptr::{self, drop_in_place, NonNull},
};

pub(crate) type NodePtr<T> = NonNull<SinglyLinkedListNode<T>>;

/// A singly linked list that keeps a pointer to both ends of the chain.
///
/// The tail pointer makes `push_back` O(1); `pop_back` stays O(n) since
/// there is no predecessor link to follow backwards.
pub struct SinglyLinkedList<T, A: Allocator + Clone = Global> {
    pub(crate) head: Option<NodePtr<T>>,
    pub(crate) tail: Option<NodePtr<T>>,
    pub(crate) alloc: A,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list seeded with a single node, so `head` and `tail` both point at it.
    pub fn with_value(item: T) -> Self {
        let mut lst = Self::new();
        lst.push_back(item).expect("failed to allocate");
        lst
    }
}

impl<T, A: Allocator + Clone> SinglyLinkedList<T, A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            head: None,
            tail: None,
            alloc,
        }
    }

    pub fn try_with_value_in(item: T, alloc: A) -> Result<Self, AllocError> {
        let mut lst = Self::new_in(alloc);
        lst.push_back(item)?;
        Ok(lst)
    }

    /// Appends an element after the current tail.
    pub fn push_back(&mut self, item: T) -> Result<(), AllocError> {
        let node = unsafe { SinglyLinkedListNode::ptr_to_new(item, self.alloc.clone()) }?;
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            // empty list, the new node is the head as well
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        Ok(())
    }

    /// Inserts an element ahead of the current head.
    pub fn push_front(&mut self, item: T) -> Result<(), AllocError> {
        let mut node = unsafe { SinglyLinkedListNode::ptr_to_new(item, self.alloc.clone()) }?;
        unsafe { node.as_mut().next = self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        Ok(())
    }

    /// Detaches the head and returns its value, `None` on an empty list.
    pub fn pop_front(&mut self) -> Option<T> {
        match self.head {
            Some(node) => unsafe {
                self.head = node.as_ref().next;
                if self.head.is_none() {
                    self.tail = None;
                }
                Some(SinglyLinkedListNode::into_value(node, self.alloc.clone()))
            },
            None => None,
        }
    }

    /// Detaches the tail and returns its value, `None` on an empty list.
    ///
    /// Walks the whole chain to find the second-to-last node; a singly
    /// linked list cannot do better.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        unsafe {
            if self.head == self.tail {
                self.head = None;
                self.tail = None;
                return Some(SinglyLinkedListNode::into_value(tail, self.alloc.clone()));
            }
            let mut cur = self.head.unwrap();
            while cur.as_ref().next != Some(tail) {
                cur = cur.as_ref().next.unwrap();
            }
            cur.as_mut().next = None;
            self.tail = Some(cur);
            Some(SinglyLinkedListNode::into_value(tail, self.alloc.clone()))
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|x| unsafe { &x.as_ref().value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|x| unsafe { &x.as_ref().value })
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn contains<Q: PartialEq<T>>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// Unlinks the first node whose value equals `target` and returns its
    /// value. Returns `None` when no node matches, leaving the list as it
    /// was. Adjusts `tail` when the unlinked node was the last one.
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut found = None;
        unsafe {
            let mut prev: Option<NodePtr<T>> = None;
            let mut cur = self.head;
            while let Some(node) = cur {
                if &node.as_ref().value == target {
                    let next = node.as_ref().next;
                    match prev {
                        Some(mut parent) => parent.as_mut().next = next,
                        None => self.head = next,
                    }
                    if self.tail == Some(node) {
                        self.tail = prev;
                    }
                    found = Some(node);
                    break;
                }
                prev = Some(node);
                cur = node.as_ref().next;
            }
        }
        found.map(|node| unsafe { SinglyLinkedListNode::into_value(node, self.alloc.clone()) })
    }

    /// Splices a new node directly after the first node whose value equals
    /// `target`. `Ok(false)` when the target is absent; nothing is allocated
    /// in that case. Advances `tail` when the splice lands at the end.
    pub fn insert_after(&mut self, target: &T, item: T) -> Result<bool, AllocError>
    where
        T: PartialEq,
    {
        let mut cur = self.head;
        while let Some(mut node) = cur {
            unsafe {
                if &node.as_ref().value == target {
                    let mut new =
                        SinglyLinkedListNode::ptr_to_new(item, self.alloc.clone())?;
                    new.as_mut().next = node.as_ref().next;
                    node.as_mut().next = Some(new);
                    if new.as_ref().next.is_none() {
                        self.tail = Some(new);
                    }
                    return Ok(true);
                }
                cur = node.as_ref().next;
            }
        }
        Ok(false)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            marker: PhantomData,
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            alloc: Global,
        }
    }
}

impl<T: Debug, A: Allocator + Clone> Debug for SinglyLinkedList<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.iter().count();
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T, A: Allocator + Clone> Drop for SinglyLinkedList<T, A> {
    fn drop(&mut self) {
        let mut head = self.head;
        while let Some(s) = head {
            unsafe {
                head = s.as_ref().next;
                let layout = Layout::new::<SinglyLinkedListNode<T>>();
                drop_in_place(s.as_ptr());
                self.alloc.deallocate(s.cast(), layout);
            }
        }
    }
}

pub struct Iter<'a, T> {
    head: Option<NodePtr<T>>,
    marker: PhantomData<&'a SinglyLinkedList<T>>,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(s) = self.head {
            unsafe {
                self.head = s.as_ref().next;
                Some(&s.as_ref().value)
            }
        } else {
            None
        }
    }
}

pub(crate) struct SinglyLinkedListNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodePtr<T>>,
}

impl<T> SinglyLinkedListNode<T> {
    /// # Safety
    /// the caller is in charge of deallocation
    pub(crate) unsafe fn ptr_to_new<A: Allocator>(
        item: T,
        alloc: A,
    ) -> Result<NodePtr<T>, AllocError> {
        let layout = Layout::new::<Self>();
        let ptr = alloc.allocate(layout)?.cast();
        let i = Self {
            value: item,
            next: None,
        };
        ptr::write(ptr.as_ptr(), i);
        Ok(ptr)
    }

    /// # Safety
    /// `s` must have been allocated by `ptr_to_new` with the same allocator
    /// and must not be reachable from any list afterwards
    pub(crate) unsafe fn into_value<A: Allocator>(s: NodePtr<T>, alloc: A) -> T {
        let v = ptr::read(s.as_ptr());
        alloc.deallocate(s.cast(), Layout::new::<SinglyLinkedListNode<T>>());
        v.value
    }
}
