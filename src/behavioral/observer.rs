// Pattern: Observer
// A subject keeps a list of observers and tells each of them whenever its
// state changes; observers decide for themselves whether to react.

use std::rc::Rc;

use rand::Rng;
use tracing::debug;

use crate::error::Result;

pub trait Observer {
    /// Returns the reaction, if the observer cares about the new state.
    fn update(&self, subject: &ConcreteSubject) -> Option<String>;
}

pub trait Subject {
    fn attach(&mut self, observer: Rc<dyn Observer>);
    fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool;
    fn notify(&self) -> Vec<String>;
}

#[derive(Default)]
pub struct ConcreteSubject {
    state: u8,
    observers: Vec<Rc<dyn Observer>>,
}

impl ConcreteSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_state(&mut self, state: u8) -> Vec<String> {
        self.state = state;
        debug!(state, "subject state changed");
        self.notify()
    }

    pub fn some_business_logic(&mut self) -> Vec<String> {
        self.some_business_logic_with(&mut rand::thread_rng())
    }

    /// Picks a new state in `0..=10` and notifies everyone.
    pub fn some_business_logic_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<String> {
        let state = rng.gen_range(0..=10);
        let mut lines = vec![
            "Subject: I'm doing something important.".to_string(),
            format!("Subject: My state has just changed to: {}", state),
        ];
        lines.extend(self.set_state(state));
        lines
    }
}

impl Subject for ConcreteSubject {
    fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn Observer>) -> bool {
        let before = self.observers.len();
        self.observers.retain(|attached| !Rc::ptr_eq(attached, observer));
        self.observers.len() != before
    }

    fn notify(&self) -> Vec<String> {
        let mut lines = vec!["Subject: Notifying observers...".to_string()];
        lines.extend(self.observers.iter().filter_map(|observer| observer.update(self)));
        lines
    }
}

pub struct ConcreteObserverA;

impl Observer for ConcreteObserverA {
    fn update(&self, subject: &ConcreteSubject) -> Option<String> {
        (subject.state() < 3).then(|| "ConcreteObserverA: Reacted to the event".to_string())
    }
}

pub struct ConcreteObserverB;

impl Observer for ConcreteObserverB {
    fn update(&self, subject: &ConcreteSubject) -> Option<String> {
        let state = subject.state();
        (state == 0 || state >= 2).then(|| "ConcreteObserverB: Reacted to the event".to_string())
    }
}

pub fn run() -> Result<()> {
    let mut subject = ConcreteSubject::new();

    let observer_a: Rc<dyn Observer> = Rc::new(ConcreteObserverA);
    subject.attach(Rc::clone(&observer_a));
    println!("Subject: Attached an observer.");

    let observer_b: Rc<dyn Observer> = Rc::new(ConcreteObserverB);
    subject.attach(observer_b);
    println!("Subject: Attached an observer.");

    for round in 0..3 {
        if round == 2 {
            subject.detach(&observer_a);
        }
        println!();
        for line in subject.some_business_logic() {
            println!("{}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn subject_with_both() -> (ConcreteSubject, Rc<dyn Observer>) {
        let mut subject = ConcreteSubject::new();
        let a: Rc<dyn Observer> = Rc::new(ConcreteObserverA);
        subject.attach(Rc::clone(&a));
        subject.attach(Rc::new(ConcreteObserverB));
        (subject, a)
    }

    fn reactions(lines: &[String]) -> Vec<&str> {
        lines
            .iter()
            .filter(|line| line.contains("Reacted"))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_low_state_wakes_both() {
        let (mut subject, _) = subject_with_both();
        assert_eq!(reactions(&subject.set_state(0)).len(), 2);
        assert_eq!(reactions(&subject.set_state(2)).len(), 2);
    }

    #[test]
    fn test_state_one_wakes_only_a() {
        let (mut subject, _) = subject_with_both();
        assert_eq!(
            reactions(&subject.set_state(1)),
            vec!["ConcreteObserverA: Reacted to the event"]
        );
    }

    #[test]
    fn test_high_state_wakes_only_b() {
        let (mut subject, _) = subject_with_both();
        assert_eq!(
            reactions(&subject.set_state(7)),
            vec!["ConcreteObserverB: Reacted to the event"]
        );
    }

    #[test]
    fn test_detach_by_identity() {
        let (mut subject, a) = subject_with_both();
        assert!(subject.detach(&a));
        assert!(!subject.detach(&a));
        assert_eq!(subject.observer_count(), 1);
        assert!(reactions(&subject.set_state(1)).is_empty());
    }

    #[test]
    fn test_business_logic_stays_in_range() {
        let (mut subject, _) = subject_with_both();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            subject.some_business_logic_with(&mut rng);
            assert!(subject.state() <= 10);
        }
    }
}
