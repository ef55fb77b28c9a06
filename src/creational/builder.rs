// Pattern: Builder - Step-by-step Construction
// A director-driven builder for generic products, and a fluent builder for
// pizzas where each crust has its own starting point.

use std::mem;

use crate::error::Result;

// ============================================================================
// Example: Builder with a Director
// ============================================================================

pub trait Builder {
    fn produce_part_a(&mut self);
    fn produce_part_b(&mut self);
    fn produce_part_c(&mut self);
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Product1 {
    parts: Vec<String>,
}

impl Product1 {
    fn add(&mut self, part: &str) {
        self.parts.push(part.to_string());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

#[derive(Debug, Default)]
pub struct ConcreteBuilder1 {
    product: Product1,
}

impl ConcreteBuilder1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands over the finished product and starts a fresh one.
    pub fn product(&mut self) -> Product1 {
        mem::take(&mut self.product)
    }
}

impl Builder for ConcreteBuilder1 {
    fn produce_part_a(&mut self) {
        self.product.add("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.product.add("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.product.add("PartC1");
    }
}

/// Knows the build recipes, not the parts.
pub struct Director;

impl Director {
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}

fn director_example() {
    let director = Director;
    let mut builder = ConcreteBuilder1::new();

    println!("Standard basic product:");
    director.build_minimal_viable_product(&mut builder);
    println!("{}\n", builder.product().list_parts());

    println!("Standard full featured product:");
    director.build_full_featured_product(&mut builder);
    println!("{}\n", builder.product().list_parts());

    println!("Custom product:");
    builder.produce_part_a();
    builder.produce_part_b();
    println!("{}", builder.product().list_parts());
}

// ============================================================================
// Example: Fluent Pizza Builder
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    crust: String,
    toppings: Vec<String>,
}

impl Pizza {
    pub fn crust(&self) -> &str {
        &self.crust
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn present(&self) -> String {
        let mut out = format!("This pizza is a\n{} pizza\nwith:\n", self.crust);
        for topping in &self.toppings {
            out.push_str(topping);
            out.push('\n');
        }
        out.push_str("-*-*--*--*--*--*--*-");
        out
    }
}

pub struct PizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder {
    fn with_crust(crust: &str) -> Self {
        Self {
            pizza: Pizza {
                crust: crust.to_string(),
                toppings: Vec::new(),
            },
        }
    }

    pub fn thin_crust() -> Self {
        Self::with_crust("Thin crust")
    }

    pub fn stuffed_crust() -> Self {
        Self::with_crust("Stuffed crust")
    }

    fn topping(&mut self, name: &str) -> &mut Self {
        self.pizza.toppings.push(name.to_string());
        self
    }

    pub fn add_tomato_sauce(&mut self) -> &mut Self {
        self.topping("Tomato sauce")
    }

    pub fn add_cheese(&mut self) -> &mut Self {
        self.topping("Cheese")
    }

    pub fn add_basil(&mut self) -> &mut Self {
        self.topping("Basil")
    }

    pub fn add_pepperoni(&mut self) -> &mut Self {
        self.topping("Pepperoni")
    }

    pub fn pizza(&self) -> &Pizza {
        &self.pizza
    }

    pub fn build(self) -> Pizza {
        self.pizza
    }
}

pub struct Chef;

impl Chef {
    pub fn make_margherita_pizza(&self, builder: &mut PizzaBuilder) {
        builder.add_tomato_sauce().add_cheese().add_basil();
    }

    pub fn make_pepperoni_pizza(&self, builder: &mut PizzaBuilder) {
        builder.add_tomato_sauce().add_cheese().add_pepperoni();
    }
}

fn pizza_example() {
    let chef = Chef;

    let mut thin = PizzaBuilder::thin_crust();
    chef.make_margherita_pizza(&mut thin);
    println!("{}", thin.pizza().present());

    let mut stuffed = PizzaBuilder::stuffed_crust();
    chef.make_pepperoni_pizza(&mut stuffed);
    println!("{}", stuffed.build().present());
}

pub fn run() -> Result<()> {
    println!("--- Director ---");
    director_example();
    println!("\n--- Pizza ---");
    pizza_example();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_product() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_minimal_viable_product(&mut builder);
        assert_eq!(builder.product().list_parts(), "Product parts: PartA1");
    }

    #[test]
    fn test_product_resets_builder() {
        let mut builder = ConcreteBuilder1::new();
        Director.build_full_featured_product(&mut builder);

        let full = builder.product();
        assert_eq!(full.parts(), ["PartA1", "PartB1", "PartC1"]);
        assert!(builder.product().parts().is_empty());
    }

    #[test]
    fn test_custom_product() {
        let mut builder = ConcreteBuilder1::new();
        builder.produce_part_a();
        builder.produce_part_b();
        assert_eq!(builder.product().list_parts(), "Product parts: PartA1, PartB1");
    }

    #[test]
    fn test_margherita_on_thin_crust() {
        let mut builder = PizzaBuilder::thin_crust();
        Chef.make_margherita_pizza(&mut builder);
        let pizza = builder.build();

        assert_eq!(pizza.crust(), "Thin crust");
        assert_eq!(pizza.toppings(), ["Tomato sauce", "Cheese", "Basil"]);
    }

    #[test]
    fn test_present_lists_toppings() {
        let mut builder = PizzaBuilder::stuffed_crust();
        Chef.make_pepperoni_pizza(&mut builder);
        let text = builder.pizza().present();

        assert!(text.starts_with("This pizza is a\nStuffed crust pizza\nwith:\n"));
        assert!(text.contains("Pepperoni\n"));
    }
}
