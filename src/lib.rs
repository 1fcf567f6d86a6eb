//! Position-indexed doubly-linked list with sentinel bounds and a removing
//! cursor.
//!
//! The key design choice: node links are slab keys into an arena the list
//! owns, not aliased pointers. The arena hands out stable indices, the chain
//! is plain key bookkeeping, and the cursor gets link-level mutation without
//! ever holding two mutable paths to the same node.
//!
//! ```text
//! SeqList
//!   ├── Slab<Node>          - owns the cells, stable keys, slot reuse
//!   ├── head / tail         - permanent dataless sentinel cells
//!   └── len                 - interior node count
//! ```
//!
//! The sentinels bound the chain on both sides, so insertion and removal
//! never special-case the ends: every interior node always has a live
//! predecessor and successor.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `len`, `push_back`, `push_front`, `pop_back`, `pop_front`, `front`, `back` | O(1) |
//! | `get`, `replace`, `insert`, `remove_at` | O(n) |
//! | `remove` (by value), `index_of`, `sub_list`, `remove_range`, rendering | O(n) |
//!
//! Positional operations walk the chain from the head sentinel. This is the
//! accepted cost of the linked representation; for random-access-heavy
//! workloads reach for `Vec` instead.
//!
//! # Quick start
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list = SeqList::new();
//! list.push_back("B");
//! list.push_back("ZZZ");
//! list.push_back("CS");
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Ok(&"ZZZ"));
//! assert_eq!(list.to_string(), "[B, ZZZ, CS]");
//!
//! list.insert(0, "insert").unwrap();
//! assert_eq!(list.to_string(), "[insert, B, ZZZ, CS]");
//! ```
//!
//! # Removing during traversal
//!
//! A [`Cursor`] walks the list and can unlink the element it last yielded.
//! It holds the list mutably for its whole lifetime: the compiler rejects
//! any direct mutation of the list while a cursor is alive, which turns a
//! classic iterator-invalidation hazard into a type error.
//!
//! ```
//! use seqlist::SeqList;
//!
//! let mut list: SeqList<&str> = ["B", "C", "D", "E"].into_iter().collect();
//!
//! let mut cursor = list.cursor();
//! cursor.advance().unwrap();          // yields "B"
//! cursor.remove().unwrap();           // unlinks it
//! drop(cursor);
//!
//! assert_eq!(list.to_string(), "[C, D, E]");
//! ```
//!
//! # Errors
//!
//! Contract violations surface as values, never panics: [`OutOfBounds`] for
//! positional arguments outside their range, [`Exhausted`] for advancing a
//! spent cursor, [`NoCurrent`] for removing with nothing pending. Every
//! check runs before any mutation, so a failed call leaves the list exactly
//! as it was.
//!
//! This crate is single-threaded by design: no locking, no atomics. A
//! `SeqList` can move between threads like any owned value, but concurrent
//! access requires external synchronization.

#![warn(missing_docs)]

mod error;
mod list;

pub use error::{Exhausted, NoCurrent, OutOfBounds};
pub use list::{Cursor, Drain, IntoIter, Iter, IterMut, SeqList};
