//! # Review Scheduler
//!
//! A review session walks the deck most-stale-first, showing each question,
//! waiting out a priority-driven delay, then revealing the answer.
//!
//! Each card goes through two states: question shown, then answer shown.
//! The delay runs on a worker thread owned by the in-flight [`Presented`]
//! value, so the wait is cancelable: dropping or canceling a presentation
//! stops the timer and leaves the card untouched. Revealing and marking the
//! card as used happen together in [`Presented::reveal`] — a card is never
//! "answered" without its staleness clock being reset, and never reset
//! before the delay has fully elapsed.

use crate::model::{Flashcard, Priority};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Sorts most-stale-first by whole days since last review. The sort is
/// stable, so cards with equal staleness keep store order.
pub fn order_for_review(cards: &mut [Flashcard], now: DateTime<Utc>) {
    cards.sort_by_key(|c| Reverse(c.stale_days_at(now)));
}

/// One pass over the deck. Exhausted once every card has been presented;
/// a finished session cannot be re-entered.
pub struct ReviewSession {
    queue: VecDeque<Flashcard>,
    tick: Duration,
}

impl ReviewSession {
    /// Default delay unit of one second.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self::with_tick(cards, Duration::from_secs(1))
    }

    /// `tick` is the length of one delay unit; the reveal delay for a card
    /// is its priority's unit count times `tick`.
    pub fn with_tick(mut cards: Vec<Flashcard>, tick: Duration) -> Self {
        order_for_review(&mut cards, Utc::now());
        Self {
            queue: cards.into(),
            tick,
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Presents the next card: returns its question and schedules the
    /// delayed reveal. `None` once the deck is exhausted.
    pub fn present_next(&mut self) -> Option<Presented> {
        let card = self.queue.pop_front()?;
        // Priority is fixed at the moment the card is presented.
        let priority = card.priority();
        let delay = self.tick * priority.delay_units() as u32;
        Some(Presented::schedule(card, priority, delay))
    }
}

/// A card in the question-shown state, with its reveal timer running.
pub struct Presented {
    pub question: String,
    pub priority: Priority,
    pub delay: Duration,
    card: Flashcard,
    done: Receiver<()>,
    cancelled: Arc<AtomicBool>,
    timer: Option<JoinHandle<()>>,
}

impl Presented {
    fn schedule(card: Flashcard, priority: Priority, delay: Duration) -> Self {
        let (tx, done) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        // Sleep in short steps so cancellation takes effect promptly.
        let timer = thread::spawn(move || {
            let deadline = Instant::now() + delay;
            loop {
                if flag.load(Ordering::Relaxed) {
                    return;
                }
                let now = Instant::now();
                if now >= deadline {
                    break;
                }
                thread::sleep((deadline - now).min(Duration::from_millis(20)));
            }
            let _ = tx.send(());
        });

        Self {
            question: card.question.clone(),
            priority,
            delay,
            card,
            done,
            cancelled,
            timer: Some(timer),
        }
    }

    /// Blocks until the delay has elapsed, then marks the card as used and
    /// returns it with the answer revealed. `None` only if the timer was
    /// torn down without firing.
    pub fn reveal(self) -> Option<Flashcard> {
        match self.done.recv() {
            Ok(()) => {
                let mut card = self.card.clone();
                card.mark_used();
                Some(card)
            }
            Err(_) => None,
        }
    }

    /// Stops the pending reveal and hands the card back unmarked.
    pub fn cancel(self) -> Flashcard {
        self.cancelled.store(true, Ordering::Relaxed);
        self.card.clone()
    }
}

impl Drop for Presented {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(timer) = self.timer.take() {
            let _ = timer.join();
        }
    }
}
