// Pattern: Prototype - Copying Object Graphs
// Plain fields clone for free; a nested component that points back at its
// owner needs a two-phase copy so the copy points at the clone.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::Result;

pub type SharedPrototype = Rc<RefCell<Prototype>>;

pub struct ComponentWithBackReference {
    prototype: Weak<RefCell<Prototype>>,
}

impl ComponentWithBackReference {
    pub fn new(prototype: &SharedPrototype) -> Self {
        Self {
            prototype: Rc::downgrade(prototype),
        }
    }

    pub fn prototype(&self) -> Option<SharedPrototype> {
        self.prototype.upgrade()
    }
}

pub struct Prototype {
    pub primitive: i32,
    pub component: Option<Box<DateTime<Local>>>,
    pub circular_reference: Option<Rc<RefCell<ComponentWithBackReference>>>,
}

impl Prototype {
    pub fn new_shared(primitive: i32, component: DateTime<Local>) -> SharedPrototype {
        Rc::new(RefCell::new(Prototype {
            primitive,
            component: Some(Box::new(component)),
            circular_reference: None,
        }))
    }

    /// Gives `this` a nested component whose back-reference is `this`.
    pub fn attach_back_reference(this: &SharedPrototype) {
        let component = ComponentWithBackReference::new(this);
        this.borrow_mut().circular_reference = Some(Rc::new(RefCell::new(component)));
    }

    /// Deep copy of `original` and its nested component.
    ///
    /// Phase one copies node contents. Phase two rewrites back-pointers
    /// through an identity map from original node to clone; pointers to
    /// nodes outside the copied graph are kept as they are.
    pub fn deep_clone(original: &SharedPrototype) -> SharedPrototype {
        let source = original.borrow();

        let clone = Rc::new(RefCell::new(Prototype {
            primitive: source.primitive,
            component: source.component.clone(),
            circular_reference: None,
        }));

        let mut identity: HashMap<*const RefCell<Prototype>, Weak<RefCell<Prototype>>> =
            HashMap::new();
        identity.insert(Rc::as_ptr(original), Rc::downgrade(&clone));

        let circular_reference = source.circular_reference.as_ref().map(|component| {
            let component = component.borrow();
            let back = &component.prototype;
            let prototype = identity
                .get(&back.as_ptr())
                .cloned()
                .unwrap_or_else(|| back.clone());
            Rc::new(RefCell::new(ComponentWithBackReference { prototype }))
        });
        drop(source);

        clone.borrow_mut().circular_reference = circular_reference;
        debug!(remapped = identity.len(), "prototype cloned");
        clone
    }
}

/// Outcome of each check the demo performs, in order.
pub fn verify_clone(p1: &SharedPrototype, p2: &SharedPrototype) -> [bool; 4] {
    let (a, b) = (p1.borrow(), p2.borrow());

    let primitive_copied = a.primitive == b.primitive;

    let component_cloned = match (&a.component, &b.component) {
        (Some(x), Some(y)) => !std::ptr::eq(x.as_ref(), y.as_ref()) && x == y,
        (None, None) => true,
        _ => false,
    };

    let (reference_cloned, linked_to_clone) = match (&a.circular_reference, &b.circular_reference) {
        (Some(x), Some(y)) => {
            let back = y.borrow().prototype();
            (
                !Rc::ptr_eq(x, y),
                back.map_or(false, |back| Rc::ptr_eq(&back, p2)),
            )
        }
        _ => (false, false),
    };

    [primitive_copied, component_cloned, reference_cloned, linked_to_clone]
}

pub fn run() -> Result<()> {
    let p1 = Prototype::new_shared(245, Local::now());
    Prototype::attach_back_reference(&p1);

    let p2 = Prototype::deep_clone(&p1);
    let [primitive, component, reference, linked] = verify_clone(&p1, &p2);

    let report = |ok: bool, yay: &str, booo: &str| {
        if ok {
            println!("{} Yay!", yay);
        } else {
            println!("{} Booo!", booo);
        }
    };

    report(
        primitive,
        "Primitive field values have been carried over to a clone.",
        "Primitive field values have not been copied.",
    );
    report(
        component,
        "Simple component has been cloned.",
        "Simple component has not been cloned.",
    );
    report(
        reference,
        "Component with back reference has been cloned.",
        "Component with back reference has not been cloned.",
    );
    report(
        linked,
        "Component with back reference is linked to the clone.",
        "Component with back reference is linked to original object.",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SharedPrototype {
        let p = Prototype::new_shared(245, Local::now());
        Prototype::attach_back_reference(&p);
        p
    }

    #[test]
    fn test_all_checks_pass() {
        let p1 = sample();
        let p2 = Prototype::deep_clone(&p1);
        assert_eq!(verify_clone(&p1, &p2), [true; 4]);
    }

    #[test]
    fn test_original_still_points_at_itself() {
        let p1 = sample();
        let _p2 = Prototype::deep_clone(&p1);

        let original = p1.borrow();
        let back = original
            .circular_reference
            .as_ref()
            .and_then(|c| c.borrow().prototype())
            .unwrap();
        assert!(Rc::ptr_eq(&back, &p1));
    }

    #[test]
    fn test_external_back_reference_is_preserved() {
        let outsider = Prototype::new_shared(1, Local::now());
        let p1 = Prototype::new_shared(2, Local::now());
        p1.borrow_mut().circular_reference =
            Some(Rc::new(RefCell::new(ComponentWithBackReference::new(&outsider))));

        let p2 = Prototype::deep_clone(&p1);
        let back = p2
            .borrow()
            .circular_reference
            .as_ref()
            .and_then(|c| c.borrow().prototype())
            .unwrap();
        assert!(Rc::ptr_eq(&back, &outsider));
    }

    #[test]
    fn test_clone_is_independent() {
        let p1 = sample();
        let p2 = Prototype::deep_clone(&p1);
        p2.borrow_mut().primitive = 0;
        assert_eq!(p1.borrow().primitive, 245);
    }
}
