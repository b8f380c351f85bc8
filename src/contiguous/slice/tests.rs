#![cfg(test)]

use std::cmp::Ordering;

use crate::contiguous::{Slice, SliceMut, Vector};
use crate::iter::Iterator;
use crate::util::panic::assert_panics;

#[test]
fn test_len_and_get() {
    let items = [1, 2, 3, 4];
    let slice = Slice::new(&items);

    assert_eq!(slice.len(), 4);
    assert!(!slice.is_empty());
    assert_eq!(slice.get(0).map(|r| r.copied()).unwrap(), 1);
    assert_eq!(slice.get(3).map(|r| r.copied()).unwrap(), 4);
    assert!(
        slice.get(4).is_none(),
        "An out-of-range get should produce an empty Option, not a panic."
    );

    assert!(Slice::<u8>::new(&[]).is_empty());
}

#[test]
fn test_indexing() {
    let items = [1, 2, 3, 4];
    let slice = Slice::new(&items);

    assert_eq!(slice[0], 1);
    assert_eq!(slice[3], 4);

    assert_panics!(
        {
            let items = [1, 2, 3, 4];
            let slice = Slice::new(&items);
            slice[4]
        },
        "Indexing out of bounds should violate the contract."
    );
}

#[test]
fn test_sub_slicing() {
    let items = [1, 2, 3, 4];
    let slice = Slice::new(&items);

    assert_eq!(slice.slice(1..3).items(), &[2, 3]);
    assert_eq!(slice.slice(2..).items(), &[3, 4]);
    assert_eq!(slice.slice(..2).items(), &[1, 2]);
    assert_eq!(slice.slice(..).items(), &[1, 2, 3, 4]);
    assert!(slice.slice(2..2).is_empty(), "An empty range should be a valid sub-slice.");

    assert_eq!(
        slice.slice(1..).slice(1..).items(),
        &[3, 4],
        "Sub-slicing should compose."
    );
}

#[test]
fn test_invalid_ranges() {
    assert_panics!(
        {
            let items = [1, 2, 3, 4];
            Slice::new(&items).slice(3..2)
        },
        "A start greater than the end should violate the contract."
    );

    assert_panics!(
        {
            let items = [1, 2, 3, 4];
            Slice::new(&items).slice(..5)
        },
        "An end beyond the length should violate the contract."
    );

    let items = [1, 2, 3, 4];
    let slice = Slice::new(&items);
    assert!(
        slice.try_slice(3..2).is_err(),
        "try_slice should report the violation instead of panicking."
    );
    assert!(slice.try_slice(..5).is_err());
    assert!(slice.try_slice(1..3).is_ok());
}

#[test]
fn test_iter() {
    let items = [1, 2, 3];
    let slice = Slice::new(&items);

    let collected: Vector<i32> = slice.iter().copied().collect();
    assert_eq!(collected, Vector::from([1, 2, 3]), "Iteration should preserve order.");

    let first_pass: Vector<i32> = slice.iter().copied().collect();
    let second_pass: Vector<i32> = slice.iter().copied().collect();
    assert_eq!(
        first_pass, second_pass,
        "A fresh iterator should be derivable from the same Slice."
    );
}

#[test]
fn test_iter_mut() {
    let mut items = [1, 2, 3];
    let mut slice = SliceMut::new(&mut items);

    let mut it = slice.iter_mut();
    while let crate::option::Option::Some(mut handle) = it.next() {
        *handle *= 2;
    }

    assert_eq!(items, [2, 4, 6], "Writes through iter_mut should reach the storage.");
}

#[test]
fn test_first_and_last() {
    let items = [1, 2, 3];
    let slice = Slice::new(&items);
    assert_eq!(slice.first().map(|r| r.copied()).unwrap(), 1);
    assert_eq!(slice.last().map(|r| r.copied()).unwrap(), 3);

    let empty = Slice::<i32>::new(&[]);
    assert!(empty.first().is_none(), "An empty view has no first element.");
    assert!(empty.last().is_none());

    let mut items = [1, 2, 3];
    let mut slice = SliceMut::new(&mut items);
    if let crate::option::Option::Some(mut first) = slice.first_mut() {
        first.set(100);
    }
    assert_eq!(items[0], 100, "Writes through first_mut should reach the storage.");
}

#[test]
fn test_equality() {
    let a = [1, 2, 3];
    let b = [1, 2, 3];
    let c = [1, 2, 4];
    let short = [1, 2];

    assert_eq!(Slice::new(&a), Slice::new(&b));
    assert_ne!(Slice::new(&a), Slice::new(&c));
    assert_ne!(
        Slice::new(&a),
        Slice::new(&short),
        "Views of different lengths should never be equal."
    );
}

#[test]
fn test_starts_with() {
    let items = [1, 2, 3, 4];
    let slice = Slice::new(&items);

    assert!(slice.starts_with(&[1, 2]));
    assert!(!slice.starts_with(&[3, 4]));
    assert!(
        slice.slice(2..).starts_with(&[3, 4]),
        "A sub-slice should match against its own leading elements."
    );
    assert!(slice.starts_with(&[1, 2, 3, 4]), "A view starts with itself.");
    assert!(!slice.starts_with(&[1, 2, 3, 4, 5]), "A longer needle can never match.");

    // Every Borrow source shape works as a needle.
    assert!(slice.starts_with(&slice.slice(..2)));
    assert!(slice.starts_with(&Vector::from([1, 2])));
    assert!(slice.starts_with(&vec![1, 2]));

    let text = Vector::from(*b"hello world");
    assert!(
        text.starts_with(c"hello"),
        "A C-string needle should match its logical bytes, without the terminator."
    );
    assert!(!text.starts_with(c"world"));
}

#[test]
fn test_sort() {
    let mut items = [1, 4, 2, 3];
    let mut slice = SliceMut::new(&mut items);
    slice.sort();
    assert_eq!(items, [1, 2, 3, 4]);
}

#[test]
fn test_sort_is_stable() {
    #[derive(Debug)]
    struct Keyed {
        key: u32,
        tag: &'static str,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    let mut items = [
        Keyed { key: 2, tag: "first two" },
        Keyed { key: 1, tag: "one" },
        Keyed { key: 2, tag: "second two" },
        Keyed { key: 1, tag: "late one" },
    ];
    SliceMut::new(&mut items).sort();

    assert_eq!(
        items.iter().map(|k| k.tag).collect::<Vec<_>>(),
        vec!["one", "late one", "first two", "second two"],
        "Equal keys should keep their original relative order."
    );
}

#[test]
fn test_display() {
    let items = [1, 2, 3];
    assert_eq!(Slice::new(&items).to_string(), "[1, 2, 3]");
    assert_eq!(Slice::<i32>::new(&[]).to_string(), "[]");

    let mut items = [1, 2];
    assert_eq!(SliceMut::new(&mut items).to_string(), "[1, 2]");
}

#[test]
fn test_from_raw_parts() {
    let items = [1, 2, 3];
    let existing = Slice::new(&items);

    // SAFETY: The parts come from a live view over the same storage.
    let rebuilt = unsafe {
        Slice::from_raw_parts(
            std::ptr::NonNull::new(items.as_ptr().cast_mut()).expect("slice pointers are never null"),
            existing.len(),
        )
    };
    assert_eq!(rebuilt, existing);
}

#[test]
fn test_slice_mut_views() {
    let mut items = [1, 2, 3, 4];
    let slice = SliceMut::new(&mut items);

    let narrowed = slice.slice_mut(1..3);
    assert_eq!(narrowed.items(), &[2, 3]);

    let shared = narrowed.into_slice();
    assert_eq!(shared.items(), &[2, 3]);
}
