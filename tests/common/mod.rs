// Recording stand-in for a DOM element, shared by the host-side tests.

#![allow(dead_code)]

use bistro_core::Surface;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Default)]
pub struct FakeElement {
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    pub style_writes: RefCell<usize>,
}

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl Surface for FakeElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_style(&self, property: &str, value: &str) {
        *self.style_writes.borrow_mut() += 1;
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }
}
