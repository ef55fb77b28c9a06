// Pattern: Strategy
// The context holds one interchangeable algorithm and can swap it at runtime.

use tracing::debug;

use crate::error::Result;

pub trait Strategy {
    fn name(&self) -> &'static str;
    fn do_algorithm(&self, data: &[String]) -> Vec<String>;
}

pub struct ConcreteStrategyA;

impl Strategy for ConcreteStrategyA {
    fn name(&self) -> &'static str {
        "ConcreteStrategyA"
    }

    fn do_algorithm(&self, data: &[String]) -> Vec<String> {
        let mut sorted = data.to_vec();
        sorted.sort();
        sorted
    }
}

pub struct ConcreteStrategyB;

impl Strategy for ConcreteStrategyB {
    fn name(&self) -> &'static str {
        "ConcreteStrategyB"
    }

    fn do_algorithm(&self, data: &[String]) -> Vec<String> {
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted
    }
}

/// Any closure over the data can stand in for a strategy.
pub struct FnStrategy<F>
where
    F: Fn(&[String]) -> Vec<String>,
{
    algorithm: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&[String]) -> Vec<String>,
{
    pub fn new(algorithm: F) -> Self {
        Self { algorithm }
    }
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&[String]) -> Vec<String>,
{
    fn name(&self) -> &'static str {
        "closure"
    }

    fn do_algorithm(&self, data: &[String]) -> Vec<String> {
        (self.algorithm)(data)
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
    data: Vec<String>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self {
            strategy,
            data: ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        debug!(from = self.strategy.name(), to = strategy.name(), "strategy swapped");
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Runs the current strategy over the data, joined with commas.
    pub fn do_some_business_logic(&self) -> String {
        self.strategy.do_algorithm(&self.data).join(",")
    }
}

pub fn run() -> Result<()> {
    let mut context = Context::new(Box::new(ConcreteStrategyA));
    println!("Client: Strategy is set to normal sorting.");
    println!("Context: Sorting data using the strategy (not sure how it'll do it)");
    println!("{}", context.do_some_business_logic());

    println!("\nClient: Strategy is set to reverse sorting.");
    context.set_strategy(Box::new(ConcreteStrategyB));
    println!("Context: Sorting data using the strategy (not sure how it'll do it)");
    println!("{}", context.do_some_business_logic());

    println!("\nClient: Strategy is set to a closure keeping every other item.");
    context.set_strategy(Box::new(FnStrategy::new(|data: &[String]| {
        data.iter().step_by(2).cloned().collect()
    })));
    println!("{}", context.do_some_business_logic());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending() {
        let context = Context::new(Box::new(ConcreteStrategyA));
        assert_eq!(context.do_some_business_logic(), "a,b,c,d,e");
    }

    #[test]
    fn test_swap_to_descending() {
        let mut context = Context::new(Box::new(ConcreteStrategyA));
        context.set_strategy(Box::new(ConcreteStrategyB));
        assert_eq!(context.strategy_name(), "ConcreteStrategyB");
        assert_eq!(context.do_some_business_logic(), "e,d,c,b,a");
    }

    #[test]
    fn test_closure_strategy() {
        let context = Context::new(Box::new(FnStrategy::new(|data: &[String]| {
            data.iter().map(|s| s.to_uppercase()).collect()
        })));
        assert_eq!(context.strategy_name(), "closure");
        assert_eq!(context.do_some_business_logic(), "A,B,C,D,E");
    }
}
