// Pattern: Composite - Trees Treated Uniformly
// Leaves and branches share one trait; child management is an optional
// capability that only branches provide.

use crate::error::{PatternError, Result};

pub trait Component {
    fn operation(&self) -> String;

    fn is_composite(&self) -> bool {
        false
    }

    fn add(&mut self, _component: Box<dyn Component>) -> Result<()> {
        Err(PatternError::not_implemented(
            std::any::type_name::<Self>(),
            "add",
        ))
    }

    fn remove(&mut self, _index: usize) -> Result<Box<dyn Component>> {
        Err(PatternError::not_implemented(
            std::any::type_name::<Self>(),
            "remove",
        ))
    }
}

#[derive(Debug, Default)]
pub struct Leaf;

impl Component for Leaf {
    fn operation(&self) -> String {
        "Leaf".to_string()
    }
}

#[derive(Default)]
pub struct Composite {
    children: Vec<Box<dyn Component>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    fn operation(&self) -> String {
        let results: Vec<String> = self.children.iter().map(|child| child.operation()).collect();
        format!("Branch({})", results.join("+"))
    }

    fn is_composite(&self) -> bool {
        true
    }

    fn add(&mut self, component: Box<dyn Component>) -> Result<()> {
        self.children.push(component);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Box<dyn Component>> {
        if index >= self.children.len() {
            return Err(PatternError::NoSuchChild {
                index,
                len: self.children.len(),
            });
        }
        Ok(self.children.remove(index))
    }
}

fn client_code(component: &dyn Component) -> String {
    format!("RESULT: {}", component.operation())
}

/// Adds `child` without checking concrete types first.
fn client_code2(parent: &mut dyn Component, child: Box<dyn Component>) -> Result<String> {
    if parent.is_composite() {
        parent.add(child)?;
    }
    Ok(format!("RESULT: {}", parent.operation()))
}

pub fn run() -> Result<()> {
    println!("Client: I've got a simple component:");
    println!("{}\n", client_code(&Leaf));

    let mut tree = Composite::new();
    let mut branch1 = Composite::new();
    branch1.add(Box::new(Leaf))?;
    branch1.add(Box::new(Leaf))?;
    let mut branch2 = Composite::new();
    branch2.add(Box::new(Leaf))?;
    tree.add(Box::new(branch1))?;
    tree.add(Box::new(branch2))?;

    println!("Client: Now I've got a composite tree:");
    println!("{}\n", client_code(&tree));

    println!("Client: I don't need to check the components classes even when managing the tree:");
    println!("{}", client_code2(&mut tree, Box::new(Leaf))?);
    Ok(())
}
