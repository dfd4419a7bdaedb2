use super::*;

#[test]
fn starts_closed() {
    let set = DropdownSet::new(3);
    assert_eq!(set.open(), None);
    assert!(!set.is_open(0));
}

#[test]
fn toggle_opens_then_closes() {
    let mut set = DropdownSet::new(2);
    assert!(set.handle(DropdownEvent::Toggle(1)));
    assert!(set.is_open(1));
    assert!(set.handle(DropdownEvent::Toggle(1)));
    assert_eq!(set.open(), None);
}

#[test]
fn opening_another_closes_the_first() {
    let mut set = DropdownSet::new(2);
    set.handle(DropdownEvent::Toggle(0));
    set.handle(DropdownEvent::Toggle(1));
    assert!(!set.is_open(0));
    assert!(set.is_open(1));
}

#[test]
fn trigger_click_bubbling_to_document_keeps_it_open() {
    let mut set = DropdownSet::new(1);
    set.handle(DropdownEvent::Toggle(0));
    assert!(!set.handle(DropdownEvent::ClickAt(Some(0))));
    assert!(set.is_open(0));
}

#[test]
fn outside_click_and_escape_close() {
    let mut set = DropdownSet::new(2);
    set.handle(DropdownEvent::Toggle(0));
    assert!(set.handle(DropdownEvent::ClickAt(None)));
    assert_eq!(set.open(), None);

    set.handle(DropdownEvent::Toggle(0));
    assert!(set.handle(DropdownEvent::ClickAt(Some(1))));
    assert_eq!(set.open(), None);

    set.handle(DropdownEvent::Toggle(1));
    assert!(set.handle(DropdownEvent::Escape));
    assert_eq!(set.open(), None);
}

#[test]
fn events_while_closed_change_nothing() {
    let mut set = DropdownSet::new(1);
    assert!(!set.handle(DropdownEvent::ClickAt(None)));
    assert!(!set.handle(DropdownEvent::Escape));
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut set = DropdownSet::new(1);
    assert!(!set.handle(DropdownEvent::Toggle(5)));
    assert_eq!(set.open(), None);
}
