// Pattern: Bridge - Abstraction and Implementation Vary Independently
// Conceptual platforms behind an abstraction, and remotes driving devices.

use crate::error::Result;

// ============================================================================
// Example: Conceptual Bridge
// ============================================================================

pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

pub struct ConcreteImplementationA;
impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

pub struct ConcreteImplementationB;
impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

pub trait Operation {
    fn operation(&self) -> String;
}

pub struct Abstraction {
    implementation: Box<dyn Implementation>,
}

impl Abstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for Abstraction {
    fn operation(&self) -> String {
        format!(
            "Abstraction: Base operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

pub struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for ExtendedAbstraction {
    fn operation(&self) -> String {
        format!(
            "ExtendedAbstraction: Extended operation with:\n{}",
            self.implementation.operation_implementation()
        )
    }
}

fn conceptual_example() {
    let abstraction = Abstraction::new(Box::new(ConcreteImplementationA));
    println!("{}\n", abstraction.operation());

    let extended = ExtendedAbstraction::new(Box::new(ConcreteImplementationB));
    println!("{}", extended.operation());
}

// ============================================================================
// Example: Remotes and Devices
// ============================================================================

pub trait Device {
    fn kind(&self) -> &'static str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    fn set_volume(&mut self, percent: u8);
    fn channel(&self) -> u16;
    fn set_channel(&mut self, channel: u16);

    fn status(&self) -> String {
        format!(
            "------------------------------------\n\
             | I'm {}.\n\
             | I'm {}\n\
             | Current volume is {}%\n\
             | Current channel is {}\n\
             ------------------------------------",
            self.kind(),
            if self.is_enabled() { "enabled" } else { "disabled" },
            self.volume(),
            self.channel()
        )
    }
}

/// Shared state for the concrete devices below.
#[derive(Debug, Clone, Copy)]
struct DeviceState {
    enabled: bool,
    volume: u8,
    channel: u16,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 30,
            channel: 1,
        }
    }
}

macro_rules! device {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Default)]
        pub struct $name {
            state: DeviceState,
        }

        impl Device for $name {
            fn kind(&self) -> &'static str {
                $kind
            }

            fn is_enabled(&self) -> bool {
                self.state.enabled
            }

            fn enable(&mut self) {
                self.state.enabled = true;
            }

            fn disable(&mut self) {
                self.state.enabled = false;
            }

            fn volume(&self) -> u8 {
                self.state.volume
            }

            fn set_volume(&mut self, percent: u8) {
                self.state.volume = percent.min(100);
            }

            fn channel(&self) -> u16 {
                self.state.channel
            }

            fn set_channel(&mut self, channel: u16) {
                self.state.channel = channel;
            }
        }
    };
}

device!(Radio, "radio");
device!(Tv, "a TV");

pub struct BasicRemote<'a> {
    device: &'a mut dyn Device,
}

impl<'a> BasicRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self { device }
    }

    pub fn power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_down(&mut self) {
        let volume = self.device.volume().saturating_sub(10);
        self.device.set_volume(volume);
    }

    pub fn volume_up(&mut self) {
        let volume = self.device.volume().saturating_add(10);
        self.device.set_volume(volume);
    }

    pub fn channel_down(&mut self) {
        let channel = self.device.channel().saturating_sub(1);
        self.device.set_channel(channel);
    }

    pub fn channel_up(&mut self) {
        let channel = self.device.channel().saturating_add(1);
        self.device.set_channel(channel);
    }
}

/// Extends the basic remote by composition.
pub struct AdvancedRemote<'a> {
    basic: BasicRemote<'a>,
}

impl<'a> AdvancedRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self {
            basic: BasicRemote::new(device),
        }
    }

    pub fn basic(&mut self) -> &mut BasicRemote<'a> {
        &mut self.basic
    }

    pub fn mute(&mut self) {
        self.basic.device.set_volume(0);
    }
}

fn test_device(device: &mut dyn Device) {
    println!("Tests with basic remote.");
    BasicRemote::new(device).power();
    println!("Remote: power toggle");
    println!("{}", device.status());

    println!("Tests with advanced remote.");
    let mut advanced = AdvancedRemote::new(device);
    advanced.basic().power();
    advanced.mute();
    println!("Remote: power toggle");
    println!("{}", device.status());
}

pub fn run() -> Result<()> {
    println!("--- Conceptual ---");
    conceptual_example();
    println!("\n--- Remotes ---");
    test_device(&mut Radio::default());
    test_device(&mut Tv::default());
    Ok(())
}
