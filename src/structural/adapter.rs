// Pattern: Adapter - Making Incompatible Interfaces Collaborate
// A conceptual string-reversing adapter, and a unit adapter that lets
// imperial speeds flow through metric-only code.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{PatternError, Result};

// ============================================================================
// Example: Conceptual Adapter
// ============================================================================

/// The interface client code is written against.
pub trait Target {
    fn request(&self) -> String {
        "Target: The default target's behavior.".to_string()
    }
}

pub struct DefaultTarget;
impl Target for DefaultTarget {}

/// Useful behaviour behind an interface the client can't use.
pub struct Adaptee;

impl Adaptee {
    pub fn specific_request(&self) -> String {
        ".eetpadA eht fo roivaheb laicepS".to_string()
    }
}

pub struct Adapter {
    adaptee: Adaptee,
}

impl Adapter {
    pub fn new(adaptee: Adaptee) -> Self {
        Self { adaptee }
    }
}

impl Target for Adapter {
    fn request(&self) -> String {
        let translated: String = self.adaptee.specific_request().chars().rev().collect();
        format!("Adapter: (TRANSLATED) {}", translated)
    }
}

fn client_code(target: &dyn Target) -> String {
    target.request()
}

fn conceptual_example() {
    println!("Client: I can work just fine with the Target objects:");
    println!("{}\n", client_code(&DefaultTarget));

    let adaptee = Adaptee;
    println!("Client: The Adaptee class has a weird interface. See, I don't understand it:");
    println!("Adaptee: {}\n", adaptee.specific_request());

    println!("Client: But I can work with it via the Adapter:");
    println!("{}", client_code(&Adapter::new(adaptee)));
}

// ============================================================================
// Example: Speed Units Adapter
// ============================================================================

pub const MILES_TO_KILOMETERS: f64 = 1.61;

pub trait Speed {
    fn value(&self) -> f64;
    fn unit(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KilometersSpeed(pub f64);

impl Speed for KilometersSpeed {
    fn value(&self) -> f64 {
        self.0
    }

    fn unit(&self) -> &'static str {
        "km/h"
    }
}

/// What the external API hands us.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilesSpeed(pub f64);

impl Speed for MilesSpeed {
    fn value(&self) -> f64 {
        self.0
    }

    fn unit(&self) -> &'static str {
        "mi/h"
    }
}

/// Presents a [`MilesSpeed`] as kilometers per hour.
#[derive(Debug, Clone, Copy)]
pub struct KilometersAdapter {
    speed: MilesSpeed,
}

impl KilometersAdapter {
    pub fn new(speed: MilesSpeed) -> Self {
        Self { speed }
    }
}

impl Speed for KilometersAdapter {
    fn value(&self) -> f64 {
        self.speed.value() * MILES_TO_KILOMETERS
    }

    fn unit(&self) -> &'static str {
        "km/h"
    }
}

/// Orders two speeds; mixing units is an error rather than a silent guess.
pub fn compare_speeds(left: &dyn Speed, right: &dyn Speed) -> Result<Ordering> {
    if left.unit() != right.unit() {
        return Err(PatternError::IncompatibleUnits {
            left: left.unit().to_string(),
            right: right.unit().to_string(),
        });
    }
    Ok(left.value().total_cmp(&right.value()))
}

pub struct KilometersSpeedLimit;

impl KilometersSpeedLimit {
    pub const MAX_LIMIT: KilometersSpeed = KilometersSpeed(100.0);

    pub fn is_speeding(speed: &dyn Speed) -> Result<bool> {
        let ordering = compare_speeds(speed, &Self::MAX_LIMIT)?;
        debug!(value = speed.value(), unit = speed.unit(), ?ordering, "speed checked");
        Ok(ordering == Ordering::Greater)
    }

    pub fn check(speed: &dyn Speed) -> Result<String> {
        let verdict = if Self::is_speeding(speed)? {
            "You are speeding"
        } else {
            "You are below the max limit"
        };
        Ok(format!("({:.1}{}) {}", speed.value(), speed.unit(), verdict))
    }
}

fn speed_example() -> Result<()> {
    for speed in [KilometersSpeed(90.0), KilometersSpeed(110.0)] {
        println!("{}", KilometersSpeedLimit::check(&speed)?);
    }

    let raw = MilesSpeed(50.0);
    match KilometersSpeedLimit::check(&raw) {
        Ok(line) => println!("{}", line),
        Err(err) => println!("Without an adapter: {}", err),
    }

    for speed in [MilesSpeed(50.0), MilesSpeed(80.0)] {
        println!("{}", KilometersSpeedLimit::check(&KilometersAdapter::new(speed))?);
    }
    Ok(())
}

pub fn run() -> Result<()> {
    println!("--- Conceptual ---");
    conceptual_example();
    println!("\n--- Speed units ---");
    speed_example()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        assert_eq!(DefaultTarget.request(), "Target: The default target's behavior.");
    }

    #[test]
    fn test_adapter_translates() {
        let adapter = Adapter::new(Adaptee);
        assert_eq!(
            adapter.request(),
            "Adapter: (TRANSLATED) Special behavior of the Adaptee."
        );
    }

    #[test]
    fn test_mixed_units_are_rejected() {
        let err = compare_speeds(&MilesSpeed(50.0), &KilometersSpeed(50.0)).unwrap_err();
        assert_eq!(
            err,
            PatternError::IncompatibleUnits {
                left: "mi/h".to_string(),
                right: "km/h".to_string(),
            }
        );
        assert!(KilometersSpeedLimit::check(&MilesSpeed(10.0)).is_err());
    }

    #[test]
    fn test_adapter_converts_miles() {
        let adapted = KilometersAdapter::new(MilesSpeed(50.0));
        assert_eq!(adapted.unit(), "km/h");
        assert!((adapted.value() - 80.5).abs() < 1e-9);
        assert_eq!(KilometersSpeedLimit::is_speeding(&adapted), Ok(false));
    }

    #[test]
    fn test_fast_miles_are_speeding() {
        let adapted = KilometersAdapter::new(MilesSpeed(80.0));
        assert_eq!(KilometersSpeedLimit::is_speeding(&adapted), Ok(true));
        assert!(KilometersSpeedLimit::check(&adapted)
            .unwrap()
            .ends_with("You are speeding"));
    }

    #[test]
    fn test_limit_itself_is_not_speeding() {
        assert_eq!(
            KilometersSpeedLimit::is_speeding(&KilometersSpeedLimit::MAX_LIMIT),
            Ok(false)
        );
    }
}
