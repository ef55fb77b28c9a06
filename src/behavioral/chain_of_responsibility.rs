// Pattern: Chain of Responsibility
// Each handler either handles a request or passes it along. The "pass it
// along" part lives in a small composition helper instead of a base class.

use std::rc::Rc;

use tracing::trace;

use crate::error::Result;

pub trait Handler {
    /// `None` means nobody in the rest of the chain wanted the request.
    fn handle(&self, request: &str) -> Option<String>;
}

/// Link to the next handler, shared so sub-chains can be reused.
#[derive(Clone, Default)]
pub struct Successor(Option<Rc<dyn Handler>>);

impl Successor {
    pub fn new(next: Rc<dyn Handler>) -> Self {
        Successor(Some(next))
    }

    pub fn end() -> Self {
        Successor(None)
    }

    pub fn pass(&self, request: &str) -> Option<String> {
        self.0.as_ref().and_then(|next| next.handle(request))
    }
}

macro_rules! animal_handler {
    ($name:ident, $animal:expr, $food:expr) => {
        pub struct $name {
            next: Successor,
        }

        impl $name {
            pub fn new(next: Successor) -> Self {
                Self { next }
            }
        }

        impl Handler for $name {
            fn handle(&self, request: &str) -> Option<String> {
                if request == $food {
                    Some(format!("{}: I'll eat the {}", $animal, request))
                } else {
                    trace!(handler = $animal, request, "passing request along");
                    self.next.pass(request)
                }
            }
        }
    };
}

animal_handler!(MonkeyHandler, "Monkey", "Banana");
animal_handler!(SquirrelHandler, "Squirrel", "Nut");
animal_handler!(DogHandler, "Dog", "MeatBall");

/// Builds Monkey > Squirrel > Dog and returns the head plus the
/// Squirrel > Dog sub-chain.
pub fn build_chain() -> (Rc<dyn Handler>, Rc<dyn Handler>) {
    let dog: Rc<dyn Handler> = Rc::new(DogHandler::new(Successor::end()));
    let squirrel: Rc<dyn Handler> = Rc::new(SquirrelHandler::new(Successor::new(dog)));
    let monkey: Rc<dyn Handler> = Rc::new(MonkeyHandler::new(Successor::new(Rc::clone(&squirrel))));
    (monkey, squirrel)
}

pub fn client_code(handler: &dyn Handler) -> Vec<String> {
    ["Nut", "Banana", "Cup of coffee"]
        .iter()
        .flat_map(|food| {
            let answer = handler
                .handle(food)
                .unwrap_or_else(|| format!("{} was left untouched.", food));
            [format!("Client: Who wants a {}?", food), format!("  {}", answer)]
        })
        .collect()
}

pub fn run() -> Result<()> {
    let (monkey, squirrel) = build_chain();

    println!("Chain: Monkey > Squirrel > Dog");
    for line in client_code(monkey.as_ref()) {
        println!("{}", line);
    }

    println!("\nSubchain: Squirrel > Dog");
    for line in client_code(squirrel.as_ref()) {
        println!("{}", line);
    }
    Ok(())
}
