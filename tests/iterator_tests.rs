use dynarray_list::{CursorState, DynamicArrayList, ListError};

fn sorted_list(n: i32) -> DynamicArrayList<i32> {
    (0..n).collect()
}

#[test]
fn test_iterator_empty_list() {
    let list: DynamicArrayList<i32> = DynamicArrayList::new();

    let mut iter = list.iter();
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));
}

#[test]
fn test_iterator_yields_in_order() {
    let list = sorted_list(17);

    let mut counter = 0;
    for item in &list {
        assert_eq!(*item, counter);
        counter += 1;
    }
    assert_eq!(counter, 17);
}

#[test]
fn test_iterator_size_hint() {
    let list = sorted_list(3);

    let mut iter = list.iter();
    assert_eq!(iter.size_hint(), (3, Some(3)));
    iter.next();
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.len(), 2);
}

#[test]
fn test_iterator_reverse() {
    let list = sorted_list(4);

    let reversed: Vec<_> = list.iter().rev().copied().collect();
    assert_eq!(reversed, vec![3, 2, 1, 0]);
}

#[test]
fn test_iterator_skips_removed_tail() {
    let mut list = sorted_list(5);
    list.remove_at(4).unwrap();
    list.remove_at(0).unwrap();

    let collected: Vec<_> = list.iter().copied().collect();
    assert_eq!(collected, vec![1, 2, 3]);
}

#[test]
fn test_owning_iterator() {
    let mut list = DynamicArrayList::new();
    list.add(String::from("a")).unwrap();
    list.add(String::from("b")).unwrap();
    list.add(String::from("c")).unwrap();
    list.remove_at(1).unwrap();

    let collected: Vec<String> = list.into_iter().collect();
    assert_eq!(collected, vec!["a", "c"]);
}

#[test]
fn test_collect_from_iterator() {
    let list: DynamicArrayList<_> = (0..40).map(|i| i * 2).collect();

    assert_eq!(list.len(), 40);
    assert_eq!(list.get(39), Ok(&78));
}

#[test]
fn test_cursor_walks_whole_list() {
    let list = sorted_list(17);
    let mut cursor = list.cursor();

    let mut counter = 0;
    while cursor.move_next(&list).unwrap() {
        assert_eq!(cursor.current(&list), Ok(&counter));
        counter += 1;
    }

    assert_eq!(counter, 17);
    assert_eq!(cursor.state(), CursorState::Exhausted);
}

#[test]
fn test_cursor_on_empty_list() {
    let list: DynamicArrayList<i32> = DynamicArrayList::new();
    let mut cursor = list.cursor();

    assert_eq!(cursor.move_next(&list), Ok(false));
    assert_eq!(cursor.state(), CursorState::Exhausted);
}

#[test]
fn test_cursor_current_before_start_fails() {
    let list = sorted_list(3);
    let mut cursor = list.cursor();

    assert!(matches!(
        cursor.current(&list),
        Err(ListError::InvalidOperation { .. })
    ));
    assert_eq!(cursor.move_next(&list), Ok(true));
    assert_eq!(cursor.current(&list), Ok(&0));
}

#[test]
fn test_cursor_current_after_exhaustion_fails() {
    let list = sorted_list(1);
    let mut cursor = list.cursor();

    assert_eq!(cursor.move_next(&list), Ok(true));
    assert_eq!(cursor.move_next(&list), Ok(false));
    assert!(matches!(
        cursor.current(&list),
        Err(ListError::InvalidOperation { .. })
    ));
}

#[test]
fn test_cursor_reset() {
    let list = sorted_list(3);
    let mut cursor = list.cursor();

    while cursor.move_next(&list).unwrap() {}
    cursor.reset();

    assert_eq!(cursor.state(), CursorState::NotStarted);
    assert_eq!(cursor.move_next(&list), Ok(true));
    assert_eq!(cursor.current(&list), Ok(&0));
}

#[test]
fn test_cursor_fails_after_add() {
    let mut list = sorted_list(5);
    let mut cursor = list.cursor();
    assert_eq!(cursor.move_next(&list), Ok(true));

    list.add(5).unwrap();

    assert!(matches!(
        cursor.move_next(&list),
        Err(ListError::InvalidOperation { .. })
    ));
    assert_eq!(cursor.state(), CursorState::Poisoned);
}

#[test]
fn test_cursor_fails_after_each_structural_mutation() {
    let mutations: [fn(&mut DynamicArrayList<i32>); 5] = [
        |list| list.add(9).unwrap(),
        |list| list.insert(1, 9).unwrap(),
        |list| {
            list.remove(&2).unwrap();
        },
        |list| {
            list.remove_at(0).unwrap();
        },
        |list| list.clear().unwrap(),
    ];

    for mutate in mutations {
        let mut list = sorted_list(4);
        let mut cursor = list.cursor();

        mutate(&mut list);

        assert!(cursor.move_next(&list).is_err());
    }
}

#[test]
fn test_cursor_survives_failed_mutation() {
    let mut list = sorted_list(3);
    let mut cursor = list.cursor();

    assert!(list.insert(10, 0).is_err());
    assert_eq!(list.remove(&42), Ok(false));

    assert_eq!(cursor.move_next(&list), Ok(true));
}

#[test]
fn test_cursor_fails_after_add_then_clear() {
    let mut list = DynamicArrayList::new();
    let mut cursor = list.cursor();

    list.add(1).unwrap();
    list.clear().unwrap();

    assert!(list.is_empty());
    assert!(cursor.move_next(&list).is_err());
}

#[test]
fn test_cursor_rejects_other_list() {
    let list = sorted_list(3);
    let other: DynamicArrayList<i32> = (100..103).collect();
    let mut cursor = list.cursor();

    assert_eq!(list.modification_stamp(), other.modification_stamp());
    assert_eq!(
        cursor.move_next(&other),
        Err(ListError::InvalidOperation {
            reason: "cursor used with a different list"
        })
    );

    assert_eq!(cursor.move_next(&list), Ok(true));
    assert!(matches!(
        cursor.current(&other),
        Err(ListError::InvalidOperation { .. })
    ));
    assert_eq!(cursor.current(&list), Ok(&0));
}

#[test]
fn test_cursor_rejects_clone_of_its_list() {
    let list = sorted_list(3);
    let copy = list.clone();
    let mut cursor = list.cursor();

    assert!(cursor.move_next(&copy).is_err());
    assert_eq!(cursor.move_next(&list), Ok(true));
}

#[test]
fn test_iterator_clone_without_clone_elements() {
    #[derive(Debug, PartialEq)]
    struct Token(u32);

    let list: DynamicArrayList<Token> = (0..3).map(Token).collect();

    let mut iter = list.iter();
    iter.next();
    let copy = iter.clone();

    assert_eq!(iter.collect::<Vec<_>>(), vec![&Token(1), &Token(2)]);
    assert_eq!(copy.len(), 2);
}
