// Pattern: Mediator
// Components only talk to the mediator; the mediator decides who reacts.
// The mediator owns the components, components hold a weak link back.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    A,
    B,
    C,
    D,
}

pub trait Mediator {
    fn notify(&self, sender: &'static str, event: Event) -> Vec<String>;
}

/// Shared by every component: the optional link to its mediator.
#[derive(Default)]
pub struct BaseComponent {
    mediator: RefCell<Option<Weak<dyn Mediator>>>,
}

impl BaseComponent {
    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        *self.mediator.borrow_mut() = Some(mediator);
    }

    /// A component whose mediator is gone (or never set) just does its own
    /// work.
    fn notify(&self, sender: &'static str, event: Event) -> Vec<String> {
        let mediator = self.mediator.borrow().as_ref().and_then(Weak::upgrade);
        match mediator {
            Some(mediator) => mediator.notify(sender, event),
            None => Vec::new(),
        }
    }
}

#[derive(Default)]
pub struct Component1 {
    base: BaseComponent,
}

impl Component1 {
    pub fn do_a(&self) -> Vec<String> {
        let mut lines = vec!["Component 1 does A.".to_string()];
        lines.extend(self.base.notify("Component1", Event::A));
        lines
    }

    pub fn do_b(&self) -> Vec<String> {
        let mut lines = vec!["Component 1 does B.".to_string()];
        lines.extend(self.base.notify("Component1", Event::B));
        lines
    }
}

#[derive(Default)]
pub struct Component2 {
    base: BaseComponent,
}

impl Component2 {
    pub fn do_c(&self) -> Vec<String> {
        let mut lines = vec!["Component 2 does C.".to_string()];
        lines.extend(self.base.notify("Component2", Event::C));
        lines
    }

    pub fn do_d(&self) -> Vec<String> {
        let mut lines = vec!["Component 2 does D.".to_string()];
        lines.extend(self.base.notify("Component2", Event::D));
        lines
    }
}

pub struct ConcreteMediator {
    component1: Rc<Component1>,
    component2: Rc<Component2>,
}

impl ConcreteMediator {
    /// Wires both components to the new mediator. Keep the returned `Rc`
    /// alive for as long as the components should coordinate.
    pub fn new(component1: Rc<Component1>, component2: Rc<Component2>) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<ConcreteMediator>| {
            let mediator: Weak<dyn Mediator> = weak.clone();
            component1.base.set_mediator(mediator.clone());
            component2.base.set_mediator(mediator);
            ConcreteMediator {
                component1,
                component2,
            }
        })
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, sender: &'static str, event: Event) -> Vec<String> {
        debug!(sender, ?event, "mediator notified");
        let mut lines = Vec::new();
        match event {
            Event::A => {
                lines.push("Mediator reacts on A and triggers following operations:".to_string());
                lines.extend(self.component2.do_c());
            }
            Event::D => {
                lines.push("Mediator reacts on D and triggers following operations:".to_string());
                lines.extend(self.component1.do_b());
                lines.extend(self.component2.do_c());
            }
            Event::B | Event::C => {}
        }
        lines
    }
}

pub fn run() -> Result<()> {
    let c1 = Rc::new(Component1::default());
    let c2 = Rc::new(Component2::default());
    let _mediator = ConcreteMediator::new(Rc::clone(&c1), Rc::clone(&c2));

    println!("Client triggers operation A.");
    for line in c1.do_a() {
        println!("{}", line);
    }

    println!("\nClient triggers operation D.");
    for line in c2.do_d() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired() -> (Rc<Component1>, Rc<Component2>, Rc<ConcreteMediator>) {
        let c1 = Rc::new(Component1::default());
        let c2 = Rc::new(Component2::default());
        let mediator = ConcreteMediator::new(Rc::clone(&c1), Rc::clone(&c2));
        (c1, c2, mediator)
    }

    #[test]
    fn test_a_triggers_c() {
        let (c1, _c2, _mediator) = wired();
        assert_eq!(
            c1.do_a(),
            vec![
                "Component 1 does A.",
                "Mediator reacts on A and triggers following operations:",
                "Component 2 does C.",
            ]
        );
    }

    #[test]
    fn test_d_triggers_b_then_c() {
        let (_c1, c2, _mediator) = wired();
        let lines = c2.do_d();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "Component 1 does B.");
        assert_eq!(lines[3], "Component 2 does C.");
    }

    #[test]
    fn test_components_work_without_mediator() {
        let (c1, _c2, mediator) = wired();
        drop(mediator);
        assert_eq!(c1.do_a(), vec!["Component 1 does A."]);

        assert_eq!(Component2::default().do_c(), vec!["Component 2 does C."]);
    }
}
