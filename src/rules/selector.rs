//! Structured selector keys.

/// A composite rule table key.
///
/// A selector names a block, optionally qualified by a state and a modifier.
/// When an `ancestor` is set the qualifiers apply to the ancestor instead,
/// expressing "when the ancestor carries this modifier/state, style the
/// block".
///
/// The text form is produced only by [`Display`](std::fmt::Display):
///
/// | Selector | Text |
/// |----------|------|
/// | block | `Button` |
/// | block + state + modifier | `Button.hover--size-lg` |
/// | scoped | `Card--active.hover Card__title` |
///
/// # Example
///
/// ```rust
/// use bemstyle::Selector;
///
/// let sel = Selector::block("Button").with_modifier("size-lg");
/// assert_eq!(sel.to_string(), "Button--size-lg");
///
/// let scoped = Selector::scoped("Card", "Card__title").with_state("hover");
/// assert_eq!(scoped.to_string(), "Card.hover Card__title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    ancestor: Option<String>,
    block: String,
    state: Option<String>,
    modifier: Option<String>,
}

impl Selector {
    /// Selects a bare block.
    pub fn block(block: impl Into<String>) -> Self {
        Self {
            ancestor: None,
            block: block.into(),
            state: None,
            modifier: None,
        }
    }

    /// Selects `block` as a descendant of `ancestor`.
    pub fn scoped(ancestor: impl Into<String>, block: impl Into<String>) -> Self {
        Self {
            ancestor: Some(ancestor.into()),
            ..Self::block(block)
        }
    }

    /// Qualifies the selector with a state segment, e.g. `hover`.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Qualifies the selector with a modifier segment, e.g. `size-lg`.
    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub(crate) fn qualified(mut self, state: Option<&str>, modifier: Option<&str>) -> Self {
        self.state = state.map(str::to_string);
        self.modifier = modifier.map(str::to_string);
        self
    }

    pub fn ancestor(&self) -> Option<&str> {
        self.ancestor.as_deref()
    }

    pub fn block_name(&self) -> &str {
        &self.block
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.ancestor {
            // Scoped: modifier before state, on the ancestor.
            Some(ancestor) => {
                f.write_str(ancestor)?;
                if let Some(modifier) = &self.modifier {
                    write!(f, "--{}", modifier)?;
                }
                if let Some(state) = &self.state {
                    write!(f, ".{}", state)?;
                }
                write!(f, " {}", self.block)
            }
            None => {
                f.write_str(&self.block)?;
                if let Some(state) = &self.state {
                    write!(f, ".{}", state)?;
                }
                if let Some(modifier) = &self.modifier {
                    write!(f, "--{}", modifier)?;
                }
                Ok(())
            }
        }
    }
}
