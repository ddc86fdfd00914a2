//! Property tests for the containers and the dispatcher
//!
//! Invariants covered:
//! - Queue is FIFO and its full/empty predicates agree with its length.
//! - Stack is LIFO.
//! - Enqueue past capacity fails without changing the queue.
//! - Invert applied twice is the identity on contents and order.
//! - Undo right after any transformation restores the prior containers.

use dispatch_core::{
    Action, BoundedQueue, BoundedStack, Dispatcher, Error, Piece, PieceQueue, PieceStack, CAPACITY,
};
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Clone, Debug)]
enum QueueOp {
    Enqueue(u16),
    Dequeue,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![any::<u16>().prop_map(QueueOp::Enqueue), Just(QueueOp::Dequeue)]
}

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[IJLOSTZ]", 0..=CAPACITY)
}

fn transformation() -> impl Strategy<Value = Action> {
    prop::sample::select(vec![
        Action::Play,
        Action::Reserve,
        Action::UseReserved,
        Action::Swap,
        Action::Invert,
    ])
}

fn dispatcher(queue: &[String], stack: &[String]) -> Dispatcher {
    let mut q = PieceQueue::new();
    for l in queue {
        q.enqueue(Piece::new(l.as_str())).unwrap();
    }
    let mut s = PieceStack::new();
    for l in stack {
        s.push(Piece::new(l.as_str())).unwrap();
    }
    Dispatcher::from_parts(q, s)
}

proptest! {
    #[test]
    fn queue_matches_model(ops in prop::collection::vec(queue_op(), 0..200)) {
        let mut queue: BoundedQueue<u16, CAPACITY> = BoundedQueue::new();
        let mut model: VecDeque<u16> = VecDeque::new();

        for op in ops {
            match op {
                QueueOp::Enqueue(v) => {
                    let before = queue.clone();
                    let result = queue.enqueue(v);
                    if model.len() < CAPACITY {
                        prop_assert_eq!(result, Ok(()));
                        model.push_back(v);
                    } else {
                        prop_assert_eq!(result, Err(Error::Full));
                        prop_assert_eq!(&queue, &before);
                    }
                }
                QueueOp::Dequeue => {
                    prop_assert_eq!(queue.dequeue().ok(), model.pop_front());
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == CAPACITY);
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }

    #[test]
    fn stack_is_lifo(values in prop::collection::vec(any::<u32>(), 0..=CAPACITY)) {
        let mut stack: BoundedStack<u32, CAPACITY> = BoundedStack::new();
        for &v in &values {
            prop_assert_eq!(stack.push(v), Ok(()));
        }
        prop_assert_eq!(stack.is_full(), values.len() == CAPACITY);

        let mut popped = Vec::new();
        while let Ok(v) = stack.pop() {
            popped.push(v);
        }
        popped.reverse();
        prop_assert_eq!(popped, values);
        prop_assert!(stack.is_empty());
    }

    #[test]
    fn invert_twice_is_identity(queue in labels(), stack in labels()) {
        let mut d = dispatcher(&queue, &stack);
        let before = d.snapshot_view();

        prop_assert!(d.invert().is_ok());
        let once = d.snapshot_view();
        let mut reversed_stack = before.stack.clone();
        reversed_stack.reverse();
        prop_assert_eq!(&once.queue, &reversed_stack);
        let mut reversed_queue = before.queue.clone();
        reversed_queue.reverse();
        prop_assert_eq!(&once.stack, &reversed_queue);

        prop_assert!(d.invert().is_ok());
        let twice = d.snapshot_view();
        prop_assert_eq!(twice.queue, before.queue);
        prop_assert_eq!(twice.stack, before.stack);
    }

    #[test]
    fn undo_restores_after_any_transformation(
        queue in labels(),
        stack in labels(),
        prefix in prop::collection::vec(transformation(), 0..6),
        action in transformation(),
    ) {
        let mut d = dispatcher(&queue, &stack);
        for a in prefix {
            apply(&mut d, a);
        }

        let before_queue = d.queue().clone();
        let before_stack = d.stack().clone();
        let history_before = d.history().len();

        apply(&mut d, action);
        prop_assert_eq!(d.history().len(), history_before + 1);

        prop_assert!(d.undo().is_ok());
        prop_assert_eq!(d.queue(), &before_queue);
        prop_assert_eq!(d.stack(), &before_stack);
        prop_assert_eq!(d.history().len(), history_before);
    }

    #[test]
    fn transformations_conserve_or_drop_single_pieces(
        queue in labels(),
        stack in labels(),
        action in transformation(),
    ) {
        let mut d = dispatcher(&queue, &stack);
        let total = |d: &Dispatcher| d.queue().len() + d.stack().len();
        let before = total(&d);

        let applied = apply(&mut d, action);
        let after = total(&d);

        match (action, applied) {
            (Action::Reserve | Action::UseReserved, true) => prop_assert_eq!(after + 1, before),
            _ => prop_assert_eq!(after, before),
        }
    }
}

fn apply(d: &mut Dispatcher, action: Action) -> bool {
    match action {
        Action::Play => d.play().is_ok(),
        Action::Reserve => d.reserve().is_ok(),
        Action::UseReserved => d.use_reserved().is_ok(),
        Action::Swap => d.swap().is_ok(),
        Action::Invert => d.invert().is_ok(),
        Action::Undo => d.undo().is_ok(),
    }
}

#[test]
fn piece_labels_survive_roundtrip_through_containers() {
    let mut d = Dispatcher::new();
    d.seed([Piece::new("I"), Piece::new("a-much-longer-label")]);
    assert!(d.play().is_ok());
    assert_eq!(d.stack().peek_top(), Ok(&Piece::new("I")));
    assert_eq!(d.queue().peek_front(), Ok(&Piece::new("a-much-longer-label")));
}
