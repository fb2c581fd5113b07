use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_size_counts_terminator() {
    let heap = ObjectHeap::new();
    let s = SetupString::from_raw(&heap, b"hello").unwrap();
    assert_eq!(s.size(), 6);
    assert_eq!(s.as_bytes(), b"hello");
    assert_eq!(s.as_bytes_with_terminator(), b"hello\0");
}

#[test]
fn test_empty_string_is_just_terminator() {
    let heap = ObjectHeap::new();
    let s = SetupString::from_raw(&heap, b"").unwrap();
    assert_eq!(s.size(), 1);
    assert!(s.is_empty());
}

#[test]
fn test_rewrite_in_place_shrinks() {
    let heap = ObjectHeap::new();
    let mut s = SetupString::from_raw(&heap, b"abcd").unwrap();
    s.rewrite_in_place(|buffer| {
        buffer[0] = b'z';
        buffer[1] = 0;
        2
    });
    assert_eq!(s.as_bytes(), b"z");
    assert_eq!(s.size(), 2);
}

#[test]
fn test_rewrite_restores_missing_terminator() {
    let heap = ObjectHeap::new();
    let mut s = SetupString::from_raw(&heap, b"ab").unwrap();
    s.rewrite_in_place(|_| 2);
    assert_eq!(s.as_bytes_with_terminator(), b"ab\0");
}

#[test]
fn test_allocation_failure() {
    let heap = ObjectHeap::new();
    heap.fail_after(0);
    assert_eq!(
        SetupString::from_raw(&heap, b"x").unwrap_err(),
        EvalError::OutOfMemory
    );
    assert_eq!(heap.live_objects(), 0);
}

#[test]
fn test_string_releases_on_drop() {
    let heap = ObjectHeap::new();
    let s = SetupString::from_raw(&heap, b"x").unwrap();
    assert_eq!(heap.live_objects(), 1);
    drop(s);
    assert_eq!(heap.live_objects(), 0);
}

#[test]
fn test_equality_is_by_content() {
    let heap = ObjectHeap::new();
    let a = SetupString::from_raw(&heap, b"same").unwrap();
    let b = SetupString::from_raw(&heap, b"same").unwrap();
    let c = SetupString::from_raw(&heap, b"other").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
