// Pattern: Visitor
// Double dispatch: a component hands itself to the visitor method written
// for its concrete type, so new operations need no change to components.

use crate::error::Result;

pub trait Component {
    fn accept(&self, visitor: &dyn Visitor) -> String;
}

pub trait Visitor {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String;
    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String;
}

pub struct ConcreteComponentA;

impl ConcreteComponentA {
    pub fn exclusive_method_of_concrete_component_a(&self) -> &'static str {
        "A"
    }
}

impl Component for ConcreteComponentA {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_a(self)
    }
}

pub struct ConcreteComponentB;

impl ConcreteComponentB {
    pub fn special_method_of_concrete_component_b(&self) -> &'static str {
        "B"
    }
}

impl Component for ConcreteComponentB {
    fn accept(&self, visitor: &dyn Visitor) -> String {
        visitor.visit_concrete_component_b(self)
    }
}

pub struct ConcreteVisitor1;

impl Visitor for ConcreteVisitor1 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!(
            "{} + ConcreteVisitor1",
            element.exclusive_method_of_concrete_component_a()
        )
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!(
            "{} + ConcreteVisitor1",
            element.special_method_of_concrete_component_b()
        )
    }
}

pub struct ConcreteVisitor2;

impl Visitor for ConcreteVisitor2 {
    fn visit_concrete_component_a(&self, element: &ConcreteComponentA) -> String {
        format!(
            "{} + ConcreteVisitor2",
            element.exclusive_method_of_concrete_component_a()
        )
    }

    fn visit_concrete_component_b(&self, element: &ConcreteComponentB) -> String {
        format!(
            "{} + ConcreteVisitor2",
            element.special_method_of_concrete_component_b()
        )
    }
}

pub fn client_code(components: &[Box<dyn Component>], visitor: &dyn Visitor) -> Vec<String> {
    components
        .iter()
        .map(|component| component.accept(visitor))
        .collect()
}

pub fn run() -> Result<()> {
    let components: Vec<Box<dyn Component>> =
        vec![Box::new(ConcreteComponentA), Box::new(ConcreteComponentB)];

    println!("The client code works with all visitors via the base Visitor interface:");
    for line in client_code(&components, &ConcreteVisitor1) {
        println!("{}", line);
    }

    println!("\nIt allows the same client code to work with different types of visitors:");
    for line in client_code(&components, &ConcreteVisitor2) {
        println!("{}", line);
    }
    Ok(())
}
