use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn test_empty_options_rejected() {
    assert!(SelectableList::<u8>::new(vec![]).is_none());
}

#[test]
fn test_first_selected_by_default() {
    let list = SelectableList::new(vec!["a", "b"]).unwrap();
    assert_eq!(*list.selected(), "a");
    assert_eq!(list.selected_index(), 0);
    assert_eq!(list.options().len(), 2);
}

#[test]
fn test_select_fires_callback_on_change_only() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut list = SelectableList::new(vec![1, 2, 3])
        .unwrap()
        .with_on_select(move |v| sink.borrow_mut().push(*v));

    assert!(list.select(2));
    assert!(list.select(2));
    assert!(list.select(0));
    assert!(!list.select(9));
    assert_eq!(*seen.borrow(), vec![3, 1]);
    assert_eq!(*list.selected(), 1);
}

#[test]
fn test_select_where() {
    let mut list = SelectableList::new(vec!["x", "y"]).unwrap();
    assert!(list.select_where(|s| *s == "y"));
    assert_eq!(*list.selected(), "y");
    assert!(!list.select_where(|s| *s == "z"));
    assert_eq!(list.into_selected(), "y");
}
