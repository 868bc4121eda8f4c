use std::f64::consts;

/// A named variable and its current value.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// Case-sensitive name made only of ASCII letters.
    pub name:  String,
    /// Current value.
    pub value: f64,
}

/// Stores every variable bound during a session.
///
/// Entries keep their insertion order, which is also the order they are
/// listed in. A name appears at most once; rebinding overwrites in place.
/// Nothing is ever removed.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierStore {
    identifiers: Vec<Identifier>,
}

impl Default for IdentifierStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierStore {
    /// Creates a store seeded with `pi` and `e`.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::store::IdentifierStore;
    ///
    /// let store = IdentifierStore::new();
    /// assert_eq!(store.lookup("pi"), Some(std::f64::consts::PI));
    /// assert_eq!(store.lookup("e"), Some(std::f64::consts::E));
    /// assert_eq!(store.len(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut store = Self::empty();
        store.bind("pi", consts::PI);
        store.bind("e", consts::E);
        store
    }

    /// Creates a store with no variables at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { identifiers: Vec::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.identifiers
            .iter()
            .find(|identifier| identifier.name == name)
            .map(|identifier| identifier.value)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Binds `name` to `value`.
    ///
    /// An existing binding is overwritten in place; otherwise the new
    /// variable is appended after all existing ones.
    ///
    /// # Example
    /// ```
    /// use stackcalc::interpreter::store::IdentifierStore;
    ///
    /// let mut store = IdentifierStore::empty();
    /// store.bind("x", 1.0);
    /// store.bind("y", 2.0);
    /// store.bind("x", 3.0);
    ///
    /// let names: Vec<_> = store.iter().map(|i| i.name.as_str()).collect();
    /// assert_eq!(names, ["x", "y"]);
    /// assert_eq!(store.lookup("x"), Some(3.0));
    /// ```
    pub fn bind(&mut self, name: &str, value: f64) {
        if let Some(identifier) = self.identifiers.iter_mut().find(|i| i.name == name) {
            identifier.value = value;
        } else {
            self.identifiers.push(Identifier { name: name.to_string(),
                                               value });
        }
    }

    /// Iterates over every variable in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.identifiers.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

/// Checks whether `name` may be the target of an assignment.
///
/// Valid names are non-empty and consist solely of ASCII letters.
///
/// # Example
/// ```
/// use stackcalc::interpreter::store::is_valid_name;
///
/// assert!(is_valid_name("radius"));
/// assert!(!is_valid_name("1x"));
/// assert!(!is_valid_name("x2"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}
