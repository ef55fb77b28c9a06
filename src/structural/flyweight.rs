// Pattern: Flyweight - Sharing Intrinsic State
// Cars in a police database share brand/model/color flyweights; plates and
// owner are passed in per call.

use std::rc::Rc;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flyweight {
    shared_state: Vec<String>,
}

impl Flyweight {
    pub fn new(shared_state: &[&str]) -> Self {
        Self {
            shared_state: shared_state.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn shared_state(&self) -> &[String] {
        &self.shared_state
    }

    pub fn operation(&self, unique_state: &[&str]) -> Result<String> {
        let shared = serde_json::to_string(&self.shared_state)?;
        let unique = serde_json::to_string(unique_state)?;
        Ok(format!(
            "Flyweight: Displaying shared ({}) and unique ({}) state.",
            shared, unique
        ))
    }
}

/// Hands out one [`Flyweight`] per distinct shared state, in creation order.
#[derive(Debug, Default)]
pub struct FlyweightFactory {
    flyweights: IndexMap<String, Rc<Flyweight>>,
}

impl FlyweightFactory {
    pub fn new(initial: &[&[&str]]) -> Self {
        let flyweights = initial
            .iter()
            .map(|state| (Self::key(state), Rc::new(Flyweight::new(state))))
            .collect();
        Self { flyweights }
    }

    /// Order-independent key: the parts sorted and joined with `_`.
    pub fn key(state: &[&str]) -> String {
        let mut parts = state.to_vec();
        parts.sort_unstable();
        parts.join("_")
    }

    pub fn contains(&self, state: &[&str]) -> bool {
        self.flyweights.contains_key(&Self::key(state))
    }

    pub fn get_flyweight(&mut self, shared_state: &[&str]) -> Rc<Flyweight> {
        match self.flyweights.entry(Self::key(shared_state)) {
            Entry::Occupied(entry) => {
                debug!(key = %entry.key(), "reusing existing flyweight");
                Rc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "can't find a flyweight, creating new one");
                Rc::clone(entry.insert(Rc::new(Flyweight::new(shared_state))))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.flyweights.keys().map(String::as_str)
    }

    pub fn list_flyweights(&self) -> String {
        let mut out = format!("FlyweightFactory: I have {} flyweights:", self.len());
        for key in self.keys() {
            out.push('\n');
            out.push_str(key);
        }
        out
    }
}

pub fn add_car_to_police_database(
    factory: &mut FlyweightFactory,
    plates: &str,
    owner: &str,
    brand: &str,
    model: &str,
    color: &str,
) -> Result<String> {
    let flyweight = factory.get_flyweight(&[brand, model, color]);
    flyweight.operation(&[plates, owner])
}

pub fn run() -> Result<()> {
    let mut factory = FlyweightFactory::new(&[
        &["Chevrolet", "Camaro2018", "pink"],
        &["Mercedes Benz", "C300", "black"],
        &["Mercedes Benz", "C500", "red"],
        &["BMW", "M5", "red"],
        &["BMW", "X6", "white"],
    ]);
    println!("{}", factory.list_flyweights());

    for (model, color) in [("M5", "red"), ("X1", "red")] {
        println!("\nClient: Adding a car to database.");
        if factory.contains(&["BMW", model, color]) {
            println!("FlyweightFactory: Reusing existing flyweight.");
        } else {
            println!("FlyweightFactory: Can't find a flyweight, creating new one.");
        }
        let line =
            add_car_to_police_database(&mut factory, "CL234IR", "James Doe", "BMW", model, color)?;
        println!("{}", line);
    }

    println!("\n{}", factory.list_flyweights());
    Ok(())
}
