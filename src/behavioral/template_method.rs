// Pattern: Template Method
// The trait fixes the skeleton of the algorithm in a provided method;
// implementors fill in the required steps and may override the hooks.

use crate::error::Result;

pub trait AbstractClass {
    fn template_method(&self) -> Vec<String> {
        let mut lines = vec![self.base_operation1(), self.required_operations1()];
        lines.push(self.base_operation2());
        lines.extend(self.hook1());
        lines.push(self.required_operations2());
        lines.push(self.base_operation3());
        lines.extend(self.hook2());
        lines
    }

    fn base_operation1(&self) -> String {
        "AbstractClass says: I am doing the bulk of the work".to_string()
    }

    fn base_operation2(&self) -> String {
        "AbstractClass says: But I let subclasses override some operations".to_string()
    }

    fn base_operation3(&self) -> String {
        "AbstractClass says: But I am doing the bulk of the work anyway".to_string()
    }

    fn required_operations1(&self) -> String;

    fn required_operations2(&self) -> String;

    // Hooks: empty unless overridden.
    fn hook1(&self) -> Option<String> {
        None
    }

    fn hook2(&self) -> Option<String> {
        None
    }
}

pub struct ConcreteClass1;

impl AbstractClass for ConcreteClass1 {
    fn required_operations1(&self) -> String {
        "ConcreteClass1 says: Implemented Operation1".to_string()
    }

    fn required_operations2(&self) -> String {
        "ConcreteClass1 says: Implemented Operation2".to_string()
    }
}

pub struct ConcreteClass2;

impl AbstractClass for ConcreteClass2 {
    fn required_operations1(&self) -> String {
        "ConcreteClass2 says: Implemented Operation1".to_string()
    }

    fn required_operations2(&self) -> String {
        "ConcreteClass2 says: Implemented Operation2".to_string()
    }

    fn hook1(&self) -> Option<String> {
        Some("ConcreteClass2 says: Overridden Hook1".to_string())
    }
}

pub fn client_code(abstract_class: &dyn AbstractClass) -> Vec<String> {
    abstract_class.template_method()
}

pub fn run() -> Result<()> {
    println!("Same client code can work with different subclasses:");
    for line in client_code(&ConcreteClass1) {
        println!("{}", line);
    }

    println!("\nSame client code can work with different subclasses:");
    for line in client_code(&ConcreteClass2) {
        println!("{}", line);
    }
    Ok(())
}
