#![cfg(test)]

use crate::contiguous::Vector;
use crate::iter::{IntoIterator, Iterator};
use crate::option::Option::{None, Some};
use crate::util::panic::assert_panics;
use crate::util::testing::{CountedDrop, ZeroSizedType};

#[test]
fn test_push_and_pop() {
    let mut vec = Vector::new();
    for i in 0..=5 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 6);

    for i in (0..=5).rev() {
        assert_eq!(vec.pop(), Some(i), "Pop should return values in reverse push order.");
    }
    assert_eq!(vec.pop(), None, "Popping an empty Vector should produce an empty Option.");
}

#[test]
fn test_growth() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0);

    vec.push(1);
    assert_eq!(vec.cap(), 2, "The first growth should allocate the minimum capacity.");

    vec.push(2);
    vec.push(3);
    assert_eq!(vec.cap(), 4, "Growth should double the capacity.");

    vec.push(4);
    vec.push(5);
    assert_eq!(vec.cap(), 8);
    assert_eq!(vec.items(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_with_cap() {
    let mut vec = Vector::with_cap(5);
    assert_eq!(vec.cap(), 5, "The capacity should be exactly the requested value.");

    for i in 0..5 {
        vec.push(i);
    }
    assert_eq!(vec.cap(), 5, "Pushes within capacity shouldn't reallocate.");
}

#[test]
fn test_reserve_and_shrink() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.reserve(7);
    assert!(vec.cap() >= 10, "After reserve, capacity should cover len + extra.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3, "Shrinking should bring the capacity down to the length.");
    assert_eq!(vec.items(), &[1, 2, 3], "Reallocation should preserve the elements.");
}

#[test]
fn test_indexing_and_views() {
    let mut vec = Vector::from([1, 2, 3, 4]);

    assert_eq!(vec[0], 1);
    vec[0] = 10;
    assert_eq!(vec[0], 10);

    assert_eq!(vec.slice(1..3).items(), &[2, 3]);
    assert_eq!(vec.first().map(|r| r.copied()), Some(10));
    assert_eq!(vec.last().map(|r| r.copied()), Some(4));

    if let Some(mut first) = vec.first_mut() {
        first.set(1);
    }
    assert_eq!(vec[0], 1);

    assert_panics!(
        {
            let vec = Vector::from([1, 2, 3, 4]);
            vec[4]
        },
        "Indexing out of bounds should violate the contract."
    );
}

#[test]
fn test_iterators() {
    let mut vec = Vector::from([0_usize, 1, 2, 3, 4]);

    let collected: Vector<usize> = vec.iter().copied().collect();
    assert_eq!(vec, collected, "Collected iter should be equal.");

    let mut it = vec.iter_mut();
    while let Some(mut handle) = it.next() {
        *handle *= 2;
    }
    assert_eq!(
        vec.items(),
        &[0_usize, 2, 4, 6, 8],
        "Vector mutated by iterator should equal this slice."
    );

    let mut owned = vec.into_iter();
    assert_eq!(owned.next(), Some(0));
    assert_eq!(owned.next(), Some(2));
    assert_eq!(owned.next(), Some(4));
    assert_eq!(owned.next(), Some(6));
    assert_eq!(owned.next(), Some(8));
    assert_eq!(owned.next(), None);
}

#[test]
fn test_sort() {
    let mut vec = Vector::from([1, 4, 2, 3]);
    vec.sort();
    assert_eq!(vec.items(), &[1, 2, 3, 4]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }

    drop(vec);
    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..4 {
        vec.push(counter.clone());
    }

    let cap = vec.cap();
    vec.clear();
    assert_eq!(*counter.borrow(), 4, "Clearing should drop every element.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the allocation.");
}

#[test]
fn test_into_iter_drops_unconsumed() {
    let counter = CountedDrop::new();
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push(counter.clone());
    }

    let mut it = vec.into_iter();
    drop(it.next());
    drop(it.next());
    drop(it);

    assert_eq!(
        *counter.borrow(),
        10,
        "Dropping a partly drained owned iterator should drop the rest."
    );
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..5 {
        vec.push(ZeroSizedType);
    }

    assert_eq!(vec.len(), 5);
    assert_eq!(vec[0], ZeroSizedType, "Indexing should work for zero-sized elements.");
    assert_eq!(vec[4], ZeroSizedType);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 4);
}

#[test]
fn test_std_vec_interop() {
    let vec = Vector::from([1, 2, 3]);
    let ptr = vec.items().as_ptr();

    let std_vec = Vec::from(vec);
    assert_eq!(std_vec, vec![1, 2, 3]);
    assert_eq!(
        std_vec.as_ptr(),
        ptr,
        "Conversion to Vec should hand the allocation over, not copy it."
    );

    let back = Vector::from(std_vec);
    assert_eq!(back.items(), &[1, 2, 3]);
    assert_eq!(
        back.items().as_ptr(),
        ptr,
        "Conversion from Vec should hand the allocation over, not copy it."
    );
}

#[test]
fn test_string_interop() {
    let vec = Vector::from(String::from("text"));
    assert_eq!(vec.items(), b"text");

    let text = String::try_from(vec).expect("the bytes started as valid UTF-8");
    assert_eq!(text, "text");
}

#[test]
fn test_equality_and_clone() {
    let vec = Vector::from([1, 2, 3]);

    assert_eq!(vec, Vector::from([1, 2, 3]));
    assert_ne!(vec, Vector::from([1, 2, 4]));
    assert_ne!(vec, Vector::from([1, 2]));

    let cloned = vec.clone();
    assert_eq!(vec, cloned);
    assert_ne!(
        vec.items().as_ptr(),
        cloned.items().as_ptr(),
        "A clone should own fresh storage."
    );
}

#[test]
fn test_display_and_debug() {
    let vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.to_string(), "[1, 2, 3]");
    assert_eq!(Vector::<i32>::new().to_string(), "[]");

    let debugged = format!("{vec:?}");
    assert!(
        debugged.contains("len: 3"),
        "Debug output should expose the structural fields: {debugged}"
    );
}

#[test]
fn test_std_collect() {
    let vec: Vector<i32> = (1..=3).collect();
    assert_eq!(
        vec.items(),
        &[1, 2, 3],
        "std iterators should collect into a Vector as well."
    );
}
