//! Text rendering of the containers, the menu and action reports.

use dispatch_core::{Action, Checkpoint, Dispatcher, Error, Outcome, PieceQueue, PieceStack, Report};

pub const MENU: &str = "\
============================================
          Piece Dispatch Master
============================================
1 - Play piece (queue -> stack)
2 - Reserve piece (queue -> discard)
3 - Use reserved piece (stack -> discard)
4 - Swap stack top with queue front
5 - Undo last move
6 - Invert queue with stack
0 - Quit
--------------------------------------------
Choose an action: ";

pub const FAREWELL: &str = "Leaving the system. Good game!";

pub const INVALID_CHOICE: &str = "Invalid option. Try again.";

/// Queue front to back, marking the front and back pieces.
pub fn render_queue(queue: &PieceQueue) -> String {
    let mut line = String::from("Queue (upcoming pieces): [ ");
    if queue.is_empty() {
        line.push_str("Empty ");
    } else {
        let front = queue.front_index();
        let back = queue.back_index();
        for (slot, piece) in queue.iter_slots() {
            line.push_str(piece.label());
            line.push(' ');
            if Some(slot) == front {
                line.push_str("<- Front ");
            }
            if Some(slot) == back {
                line.push_str("<- Back ");
            }
        }
    }
    line.push(']');
    line
}

/// Stack bottom to top, marking the top.
pub fn render_stack(stack: &PieceStack) -> String {
    let mut line = String::from("Reserve stack (in play):  [ ");
    if stack.is_empty() {
        line.push_str("Empty ");
    } else {
        for piece in stack.iter() {
            line.push_str(piece.label());
            line.push(' ');
        }
        line.push_str("<- Top ");
    }
    line.push(']');
    line
}

pub fn render_state(dispatcher: &Dispatcher) -> String {
    format!(
        "\n=== Current State ===\n{}\n{}\n=====================",
        render_queue(dispatcher.queue()),
        render_stack(dispatcher.stack()),
    )
}

/// One line for the checkpoint, one for the outcome.
pub fn render_report(report: &Report) -> Vec<String> {
    let checkpoint = match report.checkpoint {
        Checkpoint::Saved => "State saved for undo.",
        Checkpoint::Skipped => "History full! Cannot save more states.",
    };
    let outcome = match &report.outcome {
        Ok(outcome) => render_outcome(outcome),
        Err(err) => render_refusal(report.action, *err),
    };
    vec![checkpoint.to_string(), outcome]
}

pub fn render_undo(result: &Result<Outcome, Error>) -> String {
    match result {
        Ok(outcome) => render_outcome(outcome),
        Err(err) => render_refusal(Action::Undo, *err),
    }
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Played { piece } => format!("PIECE PLAYED: '{piece}'. Added to the stack."),
        Outcome::Reserved { piece } => {
            format!("PIECE RESERVED/DISCARDED: '{piece}'. Removed from the queue.")
        }
        Outcome::Used { piece } => format!("RESERVED PIECE USED: '{piece}'. Removed from the stack."),
        Outcome::Swapped {
            from_queue,
            from_stack,
        } => format!("SWAP DONE: '{from_queue}' (queue) <-> '{from_stack}' (stack)"),
        Outcome::Inverted { .. } => {
            "INVERSION COMPLETE: queue and stack contents were exchanged.".to_string()
        }
        Outcome::Undone { action } => format!("Last move ({action}) undone."),
    }
}

fn render_refusal(action: Action, err: Error) -> String {
    match (action, err) {
        (Action::Play, Error::Empty) => "Queue empty! No piece to play.".to_string(),
        (Action::Play, Error::Full) => {
            "Stack full, push failed. Piece returned to the back of the queue.".to_string()
        }
        (Action::Reserve, Error::Empty) => "Queue empty! No piece to reserve.".to_string(),
        (Action::UseReserved, Error::Empty) => {
            "Stack empty! No reserved piece to use.".to_string()
        }
        (Action::Swap, Error::OperandsUnavailable) => {
            "Cannot swap. Queue or stack is empty.".to_string()
        }
        (Action::Undo, Error::HistoryEmpty) => "History empty. Nothing to undo.".to_string(),
        (action, err) => format!("{action} failed: {err}"),
    }
}
