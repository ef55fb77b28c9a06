// Pattern: Memento - Snapshot and Undo
// Captures an object's state so it can be restored later, without letting
// the history keeper look inside the snapshots.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::Local;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{PatternError, Result};

const STATE_LENGTH: usize = 30;
const LABEL_PREFIX: usize = 9;
const ASCII_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ============================================================================
// Memento
// ============================================================================

/// Metadata view of a snapshot. Deliberately has no accessor for the state.
pub trait Memento {
    /// Human-readable label: timestamp plus a short prefix of the state.
    fn name(&self) -> String;

    fn date(&self) -> &str;

    /// Lets the originator recover its own concrete snapshot type.
    fn as_any(&self) -> &dyn Any;
}

/// The only memento an [`Originator`] knows how to restore. The state field
/// is private to this module; `Debug` shows the label, never the state.
#[derive(Clone)]
pub struct ConcreteMemento {
    state: String,
    date: String,
}

impl ConcreteMemento {
    fn new(state: String) -> Self {
        Self {
            state,
            date: Local::now().format("%F %T").to_string(),
        }
    }
}

impl fmt::Debug for ConcreteMemento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcreteMemento")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}

impl Memento for ConcreteMemento {
    fn name(&self) -> String {
        let prefix: String = self.state.chars().take(LABEL_PREFIX).collect();
        format!("{} / ({}...)", self.date, prefix)
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Originator
// ============================================================================

#[derive(Debug)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        let state = state.into();
        debug!(%state, "originator created");
        Self { state }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Business logic that changes the state; callers back up first.
    pub fn do_something(&mut self) {
        self.do_something_with(&mut rand::thread_rng());
    }

    pub fn do_something_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = random_letters(rng, STATE_LENGTH);
        debug!(state = %self.state, "originator state changed");
    }

    pub fn save(&self) -> Box<dyn Memento> {
        Box::new(ConcreteMemento::new(self.state.clone()))
    }

    /// Fails with [`PatternError::InvalidMemento`] for snapshots this type
    /// did not produce. The current state is left untouched in that case.
    pub fn restore(&mut self, memento: &dyn Memento) -> Result<()> {
        let concrete = memento
            .as_any()
            .downcast_ref::<ConcreteMemento>()
            .ok_or_else(|| {
                PatternError::InvalidMemento(format!(
                    "'{}' was not produced by an Originator",
                    memento.name()
                ))
            })?;

        self.state = concrete.state.clone();
        debug!(state = %self.state, "originator state restored");
        Ok(())
    }
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

// ============================================================================
// Caretaker
// ============================================================================

/// Keeps a LIFO history of snapshots for one originator. Works only through
/// the [`Memento`] trait, never the concrete snapshot.
pub struct Caretaker {
    mementos: Vec<Box<dyn Memento>>,
    originator: Rc<RefCell<Originator>>,
}

impl Caretaker {
    pub fn new(originator: Rc<RefCell<Originator>>) -> Self {
        Self {
            mementos: Vec::new(),
            originator,
        }
    }

    pub fn backup(&mut self) {
        let memento = self.originator.borrow().save();
        info!(memento = %memento.name(), "saving originator's state");
        self.mementos.push(memento);
    }

    /// Appends a snapshot produced elsewhere, e.g. an imported checkpoint.
    pub fn push(&mut self, memento: Box<dyn Memento>) {
        self.mementos.push(memento);
    }

    /// Restores the newest snapshot and returns its label.
    ///
    /// Empty history is a no-op (`Ok(None)`). Snapshots the originator
    /// rejects are dropped and the next older one is tried; if the history
    /// runs out that way, the last rejection is returned.
    pub fn undo(&mut self) -> Result<Option<String>> {
        let mut rejected = None;

        while let Some(memento) = self.mementos.pop() {
            let name = memento.name();
            info!(memento = %name, "restoring state");

            match self.originator.borrow_mut().restore(memento.as_ref()) {
                Ok(()) => return Ok(Some(name)),
                Err(err) => {
                    warn!(memento = %name, error = %err, "skipping corrupt checkpoint");
                    rejected = Some(err);
                }
            }
        }

        match rejected {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }

    /// Labels of all stored snapshots, oldest first. Call again to restart.
    pub fn show_history(&self) -> impl Iterator<Item = String> + '_ {
        self.mementos.iter().map(|memento| memento.name())
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn run() -> Result<()> {
    let originator = Rc::new(RefCell::new(Originator::new("Super-duper-super-puper-super.")));
    let mut caretaker = Caretaker::new(Rc::clone(&originator));
    println!("Originator: My initial state is: {}", originator.borrow().state());

    for _ in 0..3 {
        println!("\nCaretaker: Saving Originator's state...");
        caretaker.backup();

        println!("Originator: I'm doing something important.");
        originator.borrow_mut().do_something();
        println!(
            "Originator: and my state has changed to: {}",
            originator.borrow().state()
        );
    }

    println!("\nCaretaker: Here's the list of mementos:");
    for name in caretaker.show_history() {
        println!("{}", name);
    }

    println!("\nClient: Now, let's rollback!");
    if let Some(name) = caretaker.undo()? {
        println!("Caretaker: Restoring state to: {}", name);
        println!("Originator: My state has changed to: {}", originator.borrow().state());
    }

    println!("\nClient: Once more!");
    if let Some(name) = caretaker.undo()? {
        println!("Caretaker: Restoring state to: {}", name);
        println!("Originator: My state has changed to: {}", originator.borrow().state());
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
