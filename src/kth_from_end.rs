//! Positional insertion counted from the end of the list.

use crate::singly_linked_list::{SinglyLinkedList, SinglyLinkedListNode};
use core::alloc::{AllocError, Allocator};

/// Inserts `item` so that exactly `k` nodes of the original list follow it,
/// in one forward pass.
///
/// Two cursors start at the head; `front` is advanced `k` steps, then both
/// move together until `front` sits on the last node, which leaves `back` on
/// the predecessor of the insertion point. `k = 0` appends at the tail,
/// `k = len` prepends a new head (on an empty list that sets both ends).
///
/// Returns `Ok(false)` when `k` exceeds the list length; the list is left
/// untouched and nothing is allocated.
pub fn insert_kth_from_end<T, A: Allocator + Clone>(
    list: &mut SinglyLinkedList<T, A>,
    item: T,
    k: usize,
) -> Result<bool, AllocError> {
    let mut front = list.head;
    for _ in 0..k {
        match front {
            Some(node) => front = unsafe { node.as_ref().next },
            // ran off the end, k is greater than the length of the list
            None => return Ok(false),
        }
    }
    let mut node = unsafe { SinglyLinkedListNode::ptr_to_new(item, list.alloc.clone()) }?;
    unsafe {
        match front {
            // k covered the whole list, the new node becomes the head
            None => {
                node.as_mut().next = list.head;
                list.head = Some(node);
                if list.tail.is_none() {
                    list.tail = Some(node);
                }
            }
            Some(mut front) => {
                let mut back = list.head.unwrap();
                while let Some(next) = front.as_ref().next {
                    back = back.as_ref().next.unwrap();
                    front = next;
                }
                node.as_mut().next = back.as_ref().next;
                back.as_mut().next = Some(node);
                if node.as_ref().next.is_none() {
                    list.tail = Some(node);
                }
            }
        }
    }
    Ok(true)
}

/// Two-pass version of [`insert_kth_from_end`], kept as a reference to
/// validate the single-pass one: measure the length, reject out-of-range
/// offsets, then walk `len - k - 1` nodes from the head to the predecessor.
pub fn insert_kth_from_end_two_pass<T, A: Allocator + Clone>(
    list: &mut SinglyLinkedList<T, A>,
    item: T,
    k: usize,
) -> Result<bool, AllocError> {
    let len = list.len();
    if k > len {
        return Ok(false);
    }
    let mut node = unsafe { SinglyLinkedListNode::ptr_to_new(item, list.alloc.clone()) }?;
    unsafe {
        if k == len {
            node.as_mut().next = list.head;
            list.head = Some(node);
            if list.tail.is_none() {
                list.tail = Some(node);
            }
            return Ok(true);
        }
        let mut cur = list.head.unwrap();
        for _ in 0..(len - k - 1) {
            cur = cur.as_ref().next.unwrap();
        }
        node.as_mut().next = cur.as_ref().next;
        cur.as_mut().next = Some(node);
        if node.as_ref().next.is_none() {
            list.tail = Some(node);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use std::alloc::Global;

    #[derive(Clone, Debug, PartialEq)]
    enum Item {
        Num(i32),
        Tag(&'static str),
    }
    use Item::*;

    fn to_vec<T: Clone, A: Allocator + Clone>(lst: &SinglyLinkedList<T, A>) -> Vec<T> {
        lst.iter().cloned().collect()
    }

    fn assert_ends<T, A: Allocator + Clone>(lst: &SinglyLinkedList<T, A>) {
        assert_eq!(lst.head.is_none(), lst.tail.is_none());
        let mut cur = lst.head;
        let mut last = None;
        while let Some(node) = cur {
            last = Some(node);
            cur = unsafe { node.as_ref().next };
        }
        assert_eq!(last, lst.tail);
    }

    #[test]
    fn sixteen_element_scenario() {
        let mut lst = SinglyLinkedList::new();
        for i in 0..16 {
            lst.push_back(Num(i)).unwrap();
        }
        assert_eq!(lst.front(), Some(&Num(0)));
        assert_eq!(lst.back(), Some(&Num(15)));

        assert!(insert_kth_from_end(&mut lst, Tag("beginning"), 16).unwrap());
        assert_eq!(lst.front(), Some(&Tag("beginning")));
        assert_eq!(lst.back(), Some(&Num(15)));

        assert!(insert_kth_from_end(&mut lst, Tag("end"), 0).unwrap());
        assert_eq!(lst.front(), Some(&Tag("beginning")));
        assert_eq!(lst.back(), Some(&Tag("end")));

        assert!(!insert_kth_from_end(&mut lst, Tag("too far"), 25).unwrap());
        assert_eq!(lst.front(), Some(&Tag("beginning")));
        assert_eq!(lst.back(), Some(&Tag("end")));

        assert!(insert_kth_from_end(&mut lst, Tag("middle"), 4).unwrap());
        assert!(insert_kth_from_end(&mut lst, Tag("middle"), 13).unwrap());
        assert_ends(&lst);

        let mut expected = vec![Tag("beginning")];
        expected.extend((0..5).map(Num));
        expected.push(Tag("middle"));
        expected.extend((5..13).map(Num));
        expected.push(Tag("middle"));
        expected.extend((13..16).map(Num));
        expected.push(Tag("end"));
        assert_eq!(to_vec(&lst), expected);
    }

    #[test]
    fn single_element_scenario() {
        let mut lst = SinglyLinkedList::with_value(Num(0));
        assert!(insert_kth_from_end(&mut lst, Tag("beginning"), 1).unwrap());
        assert_eq!(lst.front(), Some(&Tag("beginning")));
        assert_eq!(lst.back(), Some(&Num(0)));

        assert_eq!(lst.pop_back(), Some(Num(0)));
        assert!(insert_kth_from_end(&mut lst, Tag("end"), 0).unwrap());
        assert_eq!(lst.back(), Some(&Tag("end")));

        assert!(!insert_kth_from_end(&mut lst, Tag("too far"), 25).unwrap());

        assert!(insert_kth_from_end(&mut lst, Tag("middle"), 1).unwrap());
        assert!(insert_kth_from_end(&mut lst, Tag("middle"), 2).unwrap());
        assert_ends(&lst);
        assert_eq!(
            to_vec(&lst),
            vec![Tag("beginning"), Tag("middle"), Tag("middle"), Tag("end")]
        );
    }

    #[test]
    fn empty_list_scenario() {
        let mut lst = SinglyLinkedList::new();
        assert!(insert_kth_from_end(&mut lst, "only", 0).unwrap());
        assert_eq!(lst.head, lst.tail);
        assert_eq!(lst.front(), Some(&"only"));
        assert_eq!(lst.back(), Some(&"only"));

        let mut fresh = SinglyLinkedList::<&str, Global>::new_in(Global);
        assert!(!insert_kth_from_end(&mut fresh, "nope", 1).unwrap());
        assert!(!insert_kth_from_end(&mut fresh, "nope", 2).unwrap());
        assert!(fresh.head.is_none());
        assert!(fresh.tail.is_none());
    }

    #[test]
    fn zero_offset_appends_at_tail() {
        for n in 0..5 {
            let mut lst = SinglyLinkedList::new();
            for i in 0..n {
                lst.push_back(i).unwrap();
            }
            assert!(insert_kth_from_end(&mut lst, 99, 0).unwrap());
            assert_eq!(lst.back(), Some(&99));
            assert_eq!(lst.len(), n as usize + 1);
            assert_ends(&lst);
        }
    }

    #[test]
    fn full_offset_prepends_at_head() {
        for n in 0..5 {
            let mut lst = SinglyLinkedList::new();
            for i in 0..n {
                lst.push_back(i).unwrap();
            }
            let len = lst.len();
            assert!(insert_kth_from_end(&mut lst, 99, len).unwrap());
            assert_eq!(lst.front(), Some(&99));
            assert_eq!(lst.len(), len + 1);
            assert_ends(&lst);
        }
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let mut lst = SinglyLinkedList::try_with_value_in(1, Global).unwrap();
        lst.push_back(2).unwrap();
        let before = to_vec(&lst);
        assert!(!insert_kth_from_end(&mut lst, 99, 3).unwrap());
        assert_eq!(to_vec(&lst), before);
        assert_eq!(lst.front(), Some(&1));
        assert_eq!(lst.back(), Some(&2));
        assert_ends(&lst);
    }

    #[test]
    fn two_pass_matches_single_pass() {
        let mut rng = thread_rng();
        for _ in 0..200 {
            let len = rng.gen_range(0..20);
            let mut one_pass = SinglyLinkedList::new();
            let mut two_pass = SinglyLinkedList::new();
            for _ in 0..len {
                let v: i32 = rng.gen_range(0..1000);
                one_pass.push_back(v).unwrap();
                two_pass.push_back(v).unwrap();
            }
            let k = rng.gen_range(0..25);
            let a = insert_kth_from_end(&mut one_pass, -1, k).unwrap();
            let b = insert_kth_from_end_two_pass(&mut two_pass, -1, k).unwrap();
            assert_eq!(a, b);
            assert_eq!(a, k <= len);
            assert_eq!(to_vec(&one_pass), to_vec(&two_pass));
            assert_ends(&one_pass);
            assert_ends(&two_pass);
        }
    }
}
