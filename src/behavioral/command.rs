// Pattern: Command
// Requests as objects: an invoker runs whatever commands it was given before
// and after its own work, without knowing what they do.

use std::rc::Rc;

use tracing::debug;

use crate::error::Result;

pub trait Command {
    fn execute(&self) -> Vec<String>;
}

pub struct SimpleCommand {
    payload: String,
}

impl SimpleCommand {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl Command for SimpleCommand {
    fn execute(&self) -> Vec<String> {
        vec![format!(
            "SimpleCommand: See, I can do simple things like printing ({})",
            self.payload
        )]
    }
}

/// Does the real work for [`ComplexCommand`].
#[derive(Debug, Default)]
pub struct Receiver;

impl Receiver {
    pub fn do_something(&self, a: &str) -> String {
        format!("Receiver: Working on ({}.)", a)
    }

    pub fn do_something_else(&self, b: &str) -> String {
        format!("Receiver: Also working on ({}.)", b)
    }
}

pub struct ComplexCommand {
    receiver: Rc<Receiver>,
    a: String,
    b: String,
}

impl ComplexCommand {
    pub fn new(receiver: Rc<Receiver>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            receiver,
            a: a.into(),
            b: b.into(),
        }
    }
}

impl Command for ComplexCommand {
    fn execute(&self) -> Vec<String> {
        vec![
            "ComplexCommand: Complex stuff should be done by a receiver object".to_string(),
            self.receiver.do_something(&self.a),
            self.receiver.do_something_else(&self.b),
        ]
    }
}

#[derive(Default)]
pub struct Invoker {
    on_start: Option<Box<dyn Command>>,
    on_finish: Option<Box<dyn Command>>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_start(&mut self, command: Box<dyn Command>) {
        self.on_start = Some(command);
    }

    pub fn set_on_finish(&mut self, command: Box<dyn Command>) {
        self.on_finish = Some(command);
    }

    pub fn do_something_important(&self) -> Vec<String> {
        let mut lines = vec!["Invoker: Does anybody want something done before I begin?".to_string()];
        if let Some(command) = &self.on_start {
            debug!("running on_start command");
            lines.extend(command.execute());
        }

        lines.push("Invoker: ...doing something really important...".to_string());

        lines.push("Invoker: Does anybody want something done after I finish?".to_string());
        if let Some(command) = &self.on_finish {
            debug!("running on_finish command");
            lines.extend(command.execute());
        }
        lines
    }
}

pub fn run() -> Result<()> {
    let mut invoker = Invoker::new();
    invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));

    let receiver = Rc::new(Receiver);
    invoker.set_on_finish(Box::new(ComplexCommand::new(receiver, "Send email", "Save report")));

    for line in invoker.do_something_important() {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_invoker() {
        let lines = Invoker::new().do_something_important();
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_commands_run_in_order() {
        let mut invoker = Invoker::new();
        invoker.set_on_start(Box::new(SimpleCommand::new("Say Hi!")));
        invoker.set_on_finish(Box::new(ComplexCommand::new(
            Rc::new(Receiver),
            "Send email",
            "Save report",
        )));

        let lines = invoker.do_something_important();
        assert_eq!(
            lines[1],
            "SimpleCommand: See, I can do simple things like printing (Say Hi!)"
        );
        assert_eq!(lines[2], "Invoker: ...doing something really important...");
        assert_eq!(lines.last().unwrap(), "Receiver: Also working on (Save report.)");
    }
}
