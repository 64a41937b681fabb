//! In-memory element and page used by unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;
use crate::sync::{ThemeDocument, ThemeElement, ThemeElements};

#[derive(Debug, Default)]
pub struct FakeNode {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub display: Option<String>,
    pub writes: usize,
    /// Reject every write when set.
    pub broken: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FakeElement(pub Rc<RefCell<FakeNode>>);

impl FakeElement {
    pub fn broken() -> Self {
        let el = Self::default();
        el.0.borrow_mut().broken = true;
        el
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn display(&self) -> Option<String> {
        self.0.borrow().display.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.display().as_deref() == Some("block")
    }

    pub fn writes(&self) -> usize {
        self.0.borrow().writes
    }

    fn write(&self, f: impl FnOnce(&mut FakeNode)) -> Result<(), ThemeError> {
        let mut node = self.0.borrow_mut();
        node.writes += 1;
        if node.broken {
            return Err(ThemeError::Dom("element detached".into()));
        }
        f(&mut node);
        Ok(())
    }
}

impl ThemeElement for FakeElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.write(|node| {
            node.attributes.insert(name.to_owned(), value.to_owned());
        })
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.borrow().attributes.contains_key(name)
    }

    fn toggle_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.write(|node| {
            if present {
                node.classes.insert(class.to_owned());
            } else {
                node.classes.remove(class);
            }
        })
    }

    fn set_display(&self, value: &str) -> Result<(), ThemeError> {
        self.write(|node| node.display = Some(value.to_owned()))
    }
}

pub fn elements() -> ThemeElements<FakeElement> {
    ThemeElements {
        control: FakeElement::default(),
        sun: FakeElement::default(),
        moon: FakeElement::default(),
        root: FakeElement::default(),
    }
}

/// Snapshot of every observable facet, for idempotence comparisons.
pub fn snapshot(els: &ThemeElements<FakeElement>) -> Vec<String> {
    [&els.control, &els.sun, &els.moon, &els.root]
        .iter()
        .map(|el| {
            let node = el.0.borrow();
            format!("{:?} {:?} {:?}", node.attributes, node.classes, node.display)
        })
        .collect()
}

/// Page double: elements registered by selector and id.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub selectors: HashMap<String, FakeElement>,
    pub ids: HashMap<String, FakeElement>,
    pub root: Option<FakeElement>,
}

impl FakeDocument {
    /// A correctly configured page holding `els`.
    pub fn with(els: &ThemeElements<FakeElement>) -> Self {
        let mut doc = Self::default();
        doc.selectors.insert("[data-theme-toggle]".into(), els.control.clone());
        doc.ids.insert("theme-switch-sun".into(), els.sun.clone());
        doc.ids.insert("theme-switch-moon".into(), els.moon.clone());
        doc.root = Some(els.root.clone());
        doc
    }
}

impl ThemeDocument for FakeDocument {
    type Element = FakeElement;

    fn query(&self, selector: &str) -> Result<Option<FakeElement>, ThemeError> {
        Ok(self.selectors.get(selector).cloned())
    }

    fn by_id(&self, id: &str) -> Option<FakeElement> {
        self.ids.get(id).cloned()
    }

    fn root(&self) -> Option<FakeElement> {
        self.root.clone()
    }
}
