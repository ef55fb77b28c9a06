// Pattern: Facade
// One simple entry point in front of subsystems the client shouldn't need
// to coordinate itself.

use crate::error::Result;

#[derive(Debug, Default)]
pub struct Subsystem1;

impl Subsystem1 {
    pub fn operation1(&self) -> String {
        "Subsystem1: Ready!".to_string()
    }

    pub fn operation_n(&self) -> String {
        "Subsystem1: Go!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Subsystem2;

impl Subsystem2 {
    pub fn operation1(&self) -> String {
        "Subsystem2: Get ready!".to_string()
    }

    pub fn operation_z(&self) -> String {
        "Subsystem2: Fire!".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Facade {
    subsystem1: Subsystem1,
    subsystem2: Subsystem2,
}

impl Facade {
    /// Missing subsystems are created with their defaults.
    pub fn new(subsystem1: Option<Subsystem1>, subsystem2: Option<Subsystem2>) -> Self {
        Self {
            subsystem1: subsystem1.unwrap_or_default(),
            subsystem2: subsystem2.unwrap_or_default(),
        }
    }

    pub fn operation(&self) -> String {
        [
            "Facade initializes subsystems:".to_string(),
            self.subsystem1.operation1(),
            self.subsystem2.operation1(),
            "Facade orders subsystems to perform the action:".to_string(),
            self.subsystem1.operation_n(),
            self.subsystem2.operation_z(),
        ]
        .join("\n")
    }
}

pub fn run() -> Result<()> {
    let facade = Facade::new(Some(Subsystem1), Some(Subsystem2));
    println!("{}", facade.operation());
    Ok(())
}
