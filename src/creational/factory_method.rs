// Pattern: Factory Method
// The creator's shared logic depends only on the product trait; each
// concrete creator decides which product to make.

use crate::error::Result;

pub trait Product {
    fn operation(&self) -> String;
}

pub struct ConcreteProduct1;
impl Product for ConcreteProduct1 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct1}".to_string()
    }
}

pub struct ConcreteProduct2;
impl Product for ConcreteProduct2 {
    fn operation(&self) -> String {
        "{Result of the ConcreteProduct2}".to_string()
    }
}

pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn some_operation(&self) -> String {
        let product = self.factory_method();
        format!(
            "Creator: The same creator's code has just worked with {}",
            product.operation()
        )
    }
}

pub struct ConcreteCreator1;
impl Creator for ConcreteCreator1 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct1)
    }
}

pub struct ConcreteCreator2;
impl Creator for ConcreteCreator2 {
    fn factory_method(&self) -> Box<dyn Product> {
        Box::new(ConcreteProduct2)
    }
}

fn client_code(creator: &dyn Creator) -> String {
    format!(
        "Client: I'm not aware of the creator's class, but it still works.\n{}",
        creator.some_operation()
    )
}

pub fn run() -> Result<()> {
    println!("App: Launched with the ConcreteCreator1.");
    println!("{}\n", client_code(&ConcreteCreator1));

    println!("App: Launched with the ConcreteCreator2.");
    println!("{}", client_code(&ConcreteCreator2));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creators_pick_their_product() {
        assert!(ConcreteCreator1
            .some_operation()
            .ends_with("{Result of the ConcreteProduct1}"));
        assert!(ConcreteCreator2
            .some_operation()
            .ends_with("{Result of the ConcreteProduct2}"));
    }

    #[test]
    fn test_client_code_is_creator_agnostic() {
        let creators: Vec<Box<dyn Creator>> = vec![Box::new(ConcreteCreator1), Box::new(ConcreteCreator2)];
        for creator in &creators {
            assert!(client_code(creator.as_ref()).contains("it still works"));
        }
    }
}
