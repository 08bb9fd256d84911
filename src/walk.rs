//! In-order tree streaming and lockstep stream comparison.

use std::thread;

use crossbeam_channel::{bounded, Receiver, SendError, Sender};

use crate::tree::Tree;

/// Streams the values of `tree` into `sender` in in-order sequence: left subtree,
/// then the node's own value, then right subtree. An absent subtree contributes
/// nothing.
///
/// Sends block: on a rendezvous channel (capacity 0), each send suspends the calling
/// thread until a consumer is ready to receive, so the walk advances in lockstep with
/// its consumer and never buffers more than the value currently in flight.
///
/// `stream` borrows `sender` rather than consuming it, so several trees can be
/// streamed into the same channel in sequence; the channel disconnects when the
/// caller drops the last [`Sender`]. This function does not fail: if every
/// [`Receiver`] has been dropped, the walk stops early and the remaining values are
/// discarded.
pub fn stream<T: Clone>(tree: &Tree<T>, sender: &Sender<T>) {
    let _ = walk(tree, sender);
}

fn walk<T: Clone>(tree: &Tree<T>, sender: &Sender<T>) -> Result<(), SendError<T>> {
    if let Some(left) = tree.left() {
        walk(left, sender)?;
    }
    sender.send(tree.value().clone())?;
    if let Some(right) = tree.right() {
        walk(right, sender)?;
    }
    Ok(())
}

/// Drains `a` and `b` in lockstep and decides whether they yield equal sequences.
///
/// On each step, one value is received from each channel. The comparison ends with
/// `false` as soon as a pair of values differs, or as soon as one channel disconnects
/// while the other still yields a value (a length mismatch). It ends with `true` when
/// both channels disconnect on the same step.
///
/// The producers' relative timing is irrelevant: values are paired up index-by-index
/// as they arrive, so no ordering guarantee between the two producers is needed.
pub fn lockstep<T: PartialEq>(a: &Receiver<T>, b: &Receiver<T>) -> bool {
    loop {
        match (a.recv(), b.recv()) {
            (Ok(x), Ok(y)) => {
                if x != y {
                    return false;
                }
            }
            (Err(_), Err(_)) => return true,
            _ => return false,
        }
    }
}

/// Determines whether `a` and `b` contain the same values in the same order.
///
/// One streaming thread is spawned per tree. Each thread walks its tree with
/// [`stream`] into a rendezvous channel and disconnects the channel when the
/// traversal completes. The calling thread drains both channels via [`lockstep`],
/// deciding equality in O(min(|a|, |b|)) steps without materializing either
/// sequence.
///
/// On an early mismatch the receivers are dropped, which makes any still-running
/// streamer wind down at its next send. Both streamer threads are joined before
/// `same` returns, so no thread outlives the call.
pub fn same<T>(a: &Tree<T>, b: &Tree<T>) -> bool
where
    T: Clone + PartialEq + Send + Sync,
{
    thread::scope(|s| {
        let (sender_a, receiver_a) = bounded(0);
        let (sender_b, receiver_b) = bounded(0);
        s.spawn(move || stream(a, &sender_a));
        s.spawn(move || stream(b, &sender_b));
        lockstep(&receiver_a, &receiver_b)
    })
}
