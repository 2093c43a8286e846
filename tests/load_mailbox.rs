//! Loader events crossing threads into the controller.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;

use feathers_splash::load::{mailbox, LoadController, LoadEvent, LoadState, TransitionPolicy};

#[test]
fn events_from_another_thread_apply_in_order() {
    let (sender, mailbox) = mailbox::channel();
    let mut controller = LoadController::new(TransitionPolicy::Strict);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    controller.subscribe(move |state| sink.borrow_mut().push(state.clone()));

    let producer = thread::spawn(move || {
        sender.send(LoadEvent::Started);
        for step in 1..=4 {
            sender.send(LoadEvent::progress(f64::from(step) / 4.0));
        }
        sender.send(LoadEvent::Finished);
    });
    producer.join().unwrap();

    assert_eq!(mailbox.drain_into(&mut controller), 6);
    assert_eq!(controller.current_state(), &LoadState::Finished);
    assert_eq!(
        *seen.borrow(),
        vec![
            LoadState::progressing(0.0),
            LoadState::progressing(0.25),
            LoadState::progressing(0.5),
            LoadState::progressing(0.75),
            LoadState::progressing(1.0),
            LoadState::Finished,
        ]
    );
}

#[test]
fn multiple_senders_share_one_mailbox() {
    let (sender, mailbox) = mailbox::channel();
    let mut controller = LoadController::default();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let sender = sender.clone();
            thread::spawn(move || {
                sender.send(LoadEvent::progress(0.5));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    sender.send(LoadEvent::ConnectionLost);

    assert_eq!(mailbox.drain_into(&mut controller), 4);
    assert_eq!(controller.current_state(), &LoadState::NoConnection);
}

#[test]
fn strict_policy_drops_late_progress_after_finish() {
    let (sender, mailbox) = mailbox::channel();
    let mut controller = LoadController::new(TransitionPolicy::Strict);

    sender.send(LoadEvent::Started);
    sender.send(LoadEvent::Finished);
    sender.send(LoadEvent::progress(0.8));

    assert_eq!(mailbox.drain_into(&mut controller), 2);
    assert_eq!(controller.current_state(), &LoadState::Finished);
}

#[test]
fn permissive_policy_reflects_whatever_is_reported() {
    let (sender, mailbox) = mailbox::channel();
    let mut controller = LoadController::new(TransitionPolicy::Permissive);

    sender.send(LoadEvent::Finished);
    sender.send(LoadEvent::progress(0.8));

    assert_eq!(mailbox.drain_into(&mut controller), 2);
    assert_eq!(controller.current_state(), &LoadState::progressing(0.8));
}
