// Pattern: State
// The context delegates to its current state object; states decide when
// the context moves on and to what.

use tracing::debug;

use crate::error::Result;

pub trait State {
    fn name(&self) -> &'static str;

    /// Handles request 1, returning the next state if a transition is due.
    fn handle1(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>>;

    fn handle2(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>>;
}

pub struct ConcreteStateA;

impl State for ConcreteStateA {
    fn name(&self) -> &'static str {
        "ConcreteStateA"
    }

    fn handle1(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>> {
        lines.push("ConcreteStateA handles request1.".to_string());
        lines.push("ConcreteStateA wants to change the state of the context.".to_string());
        Some(Box::new(ConcreteStateB))
    }

    fn handle2(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>> {
        lines.push("ConcreteStateA handles request2.".to_string());
        None
    }
}

pub struct ConcreteStateB;

impl State for ConcreteStateB {
    fn name(&self) -> &'static str {
        "ConcreteStateB"
    }

    fn handle1(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>> {
        lines.push("ConcreteStateB handles request1.".to_string());
        None
    }

    fn handle2(&self, lines: &mut Vec<String>) -> Option<Box<dyn State>> {
        lines.push("ConcreteStateB handles request2.".to_string());
        lines.push("ConcreteStateB wants to change the state of the context.".to_string());
        Some(Box::new(ConcreteStateA))
    }
}

pub struct Context {
    state: Box<dyn State>,
    lines: Vec<String>,
}

impl Context {
    pub fn new(state: Box<dyn State>) -> Self {
        let mut lines = Vec::new();
        lines.push(format!("Context: Transition to {}", state.name()));
        Self { state, lines }
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    fn transition_to(&mut self, state: Box<dyn State>) {
        debug!(from = self.state.name(), to = state.name(), "state transition");
        self.lines.push(format!("Context: Transition to {}", state.name()));
        self.state = state;
    }

    pub fn request1(&mut self) {
        if let Some(next) = self.state.handle1(&mut self.lines) {
            self.transition_to(next);
        }
    }

    pub fn request2(&mut self) {
        if let Some(next) = self.state.handle2(&mut self.lines) {
            self.transition_to(next);
        }
    }

    /// Everything said so far; the log is emptied.
    pub fn drain_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

pub fn run() -> Result<()> {
    let mut context = Context::new(Box::new(ConcreteStateA));
    context.request1();
    context.request2();

    for line in context.drain_lines() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request1_moves_a_to_b() {
        let mut context = Context::new(Box::new(ConcreteStateA));
        context.request1();
        assert_eq!(context.state_name(), "ConcreteStateB");

        context.request1();
        assert_eq!(context.state_name(), "ConcreteStateB");
    }

    #[test]
    fn test_request2_moves_b_to_a() {
        let mut context = Context::new(Box::new(ConcreteStateB));
        context.request2();
        assert_eq!(context.state_name(), "ConcreteStateA");

        context.request2();
        assert_eq!(context.state_name(), "ConcreteStateA");
    }

    #[test]
    fn test_narration() {
        let mut context = Context::new(Box::new(ConcreteStateA));
        context.request1();
        context.request2();

        let lines = context.drain_lines();
        assert_eq!(lines.first().unwrap(), "Context: Transition to ConcreteStateA");
        assert!(lines.contains(&"Context: Transition to ConcreteStateB".to_string()));
        assert_eq!(lines.last().unwrap(), "Context: Transition to ConcreteStateA");
        assert!(context.drain_lines().is_empty());
    }
}
