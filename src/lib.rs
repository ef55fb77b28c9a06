//! # Design Patterns Catalog
//!
//! Runnable, self-contained demonstrations of the classic object-oriented
//! design patterns, expressed with traits, ownership and enums instead of
//! class hierarchies.
//!
//! ## Creational
//! - Abstract Factory, Builder, Factory Method, Prototype, Singleton
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Facade, Flyweight, Proxy
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Iterator, Mediator, Memento,
//!   Observer, State, Strategy, Template Method, Visitor
//!
//! Run them with:
//! ```bash
//! cargo run --bin patterns                 # everything
//! cargo run --bin patterns -- memento      # a single pattern
//! cargo run --bin patterns -- --group structural
//! RUST_LOG=debug cargo run --bin patterns -- singleton
//! ```

pub mod behavioral;
pub mod creational;
pub mod error;
pub mod structural;

pub use error::{PatternError, Result};
