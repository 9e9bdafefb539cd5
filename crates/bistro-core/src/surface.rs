/// The slice of an element the site behaviors are allowed to touch.
///
/// Class operations must be idempotent: adding a present class or removing an
/// absent one is a no-op. `set_style` writes an inline style property, which
/// covers both `transform` and custom properties such as `--mouse-x`.
pub trait Surface {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn set_style(&self, property: &str, value: &str);
}

impl<T: Surface + ?Sized> Surface for std::rc::Rc<T> {
    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }
    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }
    fn set_style(&self, property: &str, value: &str) {
        (**self).set_style(property, value)
    }
}
