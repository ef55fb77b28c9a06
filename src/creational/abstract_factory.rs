// Pattern: Abstract Factory - Families of Related Widgets
// One factory per platform; the application never names a concrete widget.

use std::fmt;

use tracing::debug;

use crate::error::Result;

pub trait Button {
    fn draw(&self) -> String;
}

pub trait Checkbox {
    fn draw(&self) -> String;
}

pub struct MacOsButton;
impl Button for MacOsButton {
    fn draw(&self) -> String {
        "MacOSButton has been drawn".to_string()
    }
}

pub struct WindowsButton;
impl Button for WindowsButton {
    fn draw(&self) -> String {
        "WindowsButton has been drawn".to_string()
    }
}

pub struct MacOsCheckbox;
impl Checkbox for MacOsCheckbox {
    fn draw(&self) -> String {
        "MacOSCheckbox has been drawn".to_string()
    }
}

pub struct WindowsCheckbox;
impl Checkbox for WindowsCheckbox {
    fn draw(&self) -> String {
        "WindowsCheckbox has been drawn".to_string()
    }
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct MacOsFactory;
impl GuiFactory for MacOsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacOsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacOsCheckbox)
    }
}

pub struct WindowsFactory;
impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Os::MacOs => write!(f, "MacOS"),
            Os::Windows => write!(f, "Windows"),
        }
    }
}

pub fn factory_for(os: Os) -> Box<dyn GuiFactory> {
    debug!(%os, "selecting GUI factory");
    match os {
        Os::MacOs => Box::new(MacOsFactory),
        Os::Windows => Box::new(WindowsFactory),
    }
}

/// Holds one widget of each kind, all from the same family.
pub struct Application {
    button: Box<dyn Button>,
    checkbox: Box<dyn Checkbox>,
}

impl Application {
    pub fn new(factory: &dyn GuiFactory) -> Self {
        Self {
            button: factory.create_button(),
            checkbox: factory.create_checkbox(),
        }
    }

    pub fn draw(&self) -> Vec<String> {
        vec![self.button.draw(), self.checkbox.draw()]
    }
}

pub fn run() -> Result<()> {
    for os in [Os::Windows, Os::MacOs] {
        println!("Current OS: {}", os);
        let factory = factory_for(os);
        for line in Application::new(factory.as_ref()).draw() {
            println!("  {}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let app = Application::new(&WindowsFactory);
        assert_eq!(
            app.draw(),
            vec!["WindowsButton has been drawn", "WindowsCheckbox has been drawn"]
        );
    }

    #[test]
    fn test_factory_for_keeps_family_consistent() {
        let lines = Application::new(factory_for(Os::MacOs).as_ref()).draw();
        assert!(lines.iter().all(|line| line.starts_with("MacOS")));
    }
}
