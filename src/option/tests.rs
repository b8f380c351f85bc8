#![cfg(test)]

use std::cell::Cell;

use crate::option::Option::{self, None, Some};
use crate::util::panic::assert_panics;

#[test]
fn test_queries() {
    assert!(Some(5).is_some(), "A populated Option should report is_some.");
    assert!(!Some(5).is_none());
    assert!(None::<u8>.is_none(), "An empty Option should report is_none.");
    assert!(!None::<u8>.is_some());
}

#[test]
fn test_unwrap() {
    assert_eq!(Some(3).unwrap(), 3, "Unwrap should move the held value out.");

    assert_panics!(
        { None::<i32>.unwrap() },
        "Unwrap on an empty Option should panic."
    );
}

#[test]
fn test_take_empties_the_source() {
    let mut opt = Some(3);
    assert_eq!(opt.take(), Some(3), "The first extraction should succeed.");
    assert_eq!(
        opt.take(),
        None,
        "The second extraction should find the Option already emptied."
    );

    assert_panics!(
        {
            let mut opt = Some(3);
            let _ = opt.take();
            opt.take().unwrap()
        },
        "Unwrapping a second extraction should panic."
    );
}

#[test]
fn test_replace() {
    let mut opt = None;
    assert_eq!(opt.replace(1), None);
    assert_eq!(opt.replace(2), Some(1));
    assert_eq!(opt, Some(2));
}

#[test]
fn test_map() {
    assert_eq!(Some(3).map(|v| v * v), Some(9));
    assert_eq!(
        Some(3).map(|v| v * v).map(|v| v as f64 + 0.5),
        Some(9.5),
        "Maps should chain, converting the held type as they go."
    );

    let calls = Cell::new(0_usize);
    let mapped = None::<i32>.map(|v| {
        calls.set(calls.get() + 1);
        v * v
    });
    assert_eq!(mapped, None, "Mapping an empty Option should produce an empty Option.");
    assert_eq!(
        calls.get(),
        0,
        "Mapping an empty Option should never invoke the closure."
    );
}

#[test]
fn test_and_then() {
    let halve = |v: i32| if v % 2 == 0 { Some(v / 2) } else { None };

    assert_eq!(Some(8).and_then(halve), Some(4));
    assert_eq!(Some(3).and_then(halve), None);
    assert_eq!(None.and_then(halve), None);
}

#[test]
fn test_as_ref_and_as_mut() {
    let opt = Some(3);
    assert_eq!(
        opt.as_ref().map(|r| r.copied()),
        Some(3),
        "as_ref should read the value without consuming the source."
    );
    assert!(opt.is_some(), "The source should survive as_ref.");
    assert!(None::<i32>.as_ref().is_none());

    let mut opt = Some(3);
    if let Some(mut handle) = opt.as_mut() {
        *handle += 1;
    }
    assert_eq!(opt, Some(4), "Writes through as_mut should reach the source.");
}

#[test]
fn test_unwrap_or() {
    assert_eq!(Some(3).unwrap_or(7), 3);
    assert_eq!(None.unwrap_or(7), 7);
}

#[test]
fn test_comparisons() {
    assert_eq!(None::<i32>, None::<i32>, "Two empty Options should be equal.");
    assert_eq!(Some(1), Some(1));
    assert_ne!(Some(1), Some(2));
    assert_ne!(Some(1), None);

    assert!(
        None < Some(0),
        "An empty Option should order before any populated one."
    );
    assert!(Some(1) < Some(2));
}

#[test]
fn test_display() {
    assert_eq!(Some(42).to_string(), "Some(42)");
    assert_eq!(None::<i32>.to_string(), "None");
    assert_eq!(
        Some("text").to_string(),
        "Some(text)",
        "Display should use the held value's Display, not Debug."
    );
}

#[test]
fn test_std_interop() {
    assert_eq!(Option::from(std::option::Option::Some(1)), Some(1));
    assert_eq!(Option::<i32>::from(std::option::Option::None), None);

    assert_eq!(std::option::Option::from(Some(1)), std::option::Option::Some(1));
    assert_eq!(std::option::Option::<i32>::from(None::<i32>), std::option::Option::None);

    assert_eq!(Option::from(7), Some(7), "From<T> should wrap the value.");
}

#[test]
fn test_default() {
    assert_eq!(Option::<i32>::default(), None, "The default Option should be empty.");
}
