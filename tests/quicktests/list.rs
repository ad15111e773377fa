use ordtree::list::List;

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use std::collections::VecDeque;

/// The positional operations a linked list supports, for driving a
/// quicktest. Indices are taken modulo a little past the current length
/// so both in-range and out-of-range accesses get exercised.
#[derive(Copy, Clone, Debug)]
enum ListOp {
    PushFront(i8),
    PushBack(i8),
    InsertAt(usize, i8),
    PopFront,
    PopBack,
    RemoveAt(usize),
    Reverse,
}

impl Arbitrary for ListOp {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap() {
            0 => ListOp::PushFront(i8::arbitrary(g)),
            1 => ListOp::PushBack(i8::arbitrary(g)),
            2 => ListOp::InsertAt(usize::arbitrary(g), i8::arbitrary(g)),
            3 => ListOp::PopFront,
            4 => ListOp::PopBack,
            5 => ListOp::RemoveAt(usize::arbitrary(g)),
            6 => ListOp::Reverse,
            _ => unreachable!(),
        }
    }
}

/// Applies a set of operations to a list and a `VecDeque` model,
/// checking each returned value against the model's as it goes.
fn do_ops(ops: &[ListOp], list: &mut List<i8>, model: &mut VecDeque<i8>) {
    for op in ops {
        match *op {
            ListOp::PushFront(x) => {
                list.push_front(x);
                model.push_front(x);
            }
            ListOp::PushBack(x) => {
                list.push_back(x);
                model.push_back(x);
            }
            ListOp::InsertAt(index, x) => {
                let index = index % (model.len() + 2);
                list.insert_at(index, x);
                model.insert(index.min(model.len()), x);
            }
            ListOp::PopFront => assert_eq!(list.pop_front(), model.pop_front()),
            ListOp::PopBack => assert_eq!(list.pop_back(), model.pop_back()),
            ListOp::RemoveAt(index) => {
                let index = index % (model.len() + 2);
                assert_eq!(list.remove_at(index), model.remove(index));
            }
            ListOp::Reverse => {
                list.reverse();
                let reversed: VecDeque<i8> = model.iter().rev().copied().collect();
                *model = reversed;
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<ListOp>) -> bool {
    let mut list = List::new();
    let mut model = VecDeque::new();

    do_ops(&ops, &mut list, &mut model);

    let contents: Vec<i8> = list.iter().copied().collect();
    let expected: Vec<i8> = model.iter().copied().collect();
    contents == expected && list.len() == model.len()
}

#[quickcheck]
fn reverse_twice_is_identity(xs: Vec<i8>) -> bool {
    let mut list = List::new();
    for x in &xs {
        list.push_back(*x);
    }

    list.reverse();
    list.reverse();

    let contents: Vec<i8> = list.iter().copied().collect();
    contents == xs
}

#[quickcheck]
fn reverse_recursive_matches_iterative(xs: Vec<i8>) -> bool {
    let mut iterative = List::new();
    let mut recursive = List::new();
    for x in &xs {
        iterative.push_back(*x);
        recursive.push_back(*x);
    }

    iterative.reverse();
    recursive.reverse_recursive();

    iterative.iter().eq(recursive.iter())
}

#[quickcheck]
fn get_matches_model(xs: Vec<i8>, index: usize) -> bool {
    let mut list = List::new();
    for x in &xs {
        list.push_back(*x);
    }

    list.get(index) == xs.get(index)
}
