#![cfg_attr(not(test), no_std)]
#![feature(test, allocator_api)]

#[cfg(test)]
extern crate test;

extern crate alloc;

pub mod kth_from_end;
pub mod singly_linked_list;

pub use kth_from_end::{insert_kth_from_end, insert_kth_from_end_two_pass};
pub use singly_linked_list::SinglyLinkedList;
