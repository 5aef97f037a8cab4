//! Classified component properties.

use super::value::PropValue;
use crate::util::kebab_case;

/// What a property key contributes to BEM resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropKind {
    /// `M`-prefixed: styles through a `--modifier` selector.
    Modifier,
    /// `S`-prefixed: styles through a `.state` selector.
    State,
    /// Any other key. Ignored by resolution and projection.
    Other,
}

impl PropKind {
    /// Classifies a key by its prefix.
    pub fn of(key: &str) -> Self {
        if key.starts_with('M') {
            PropKind::Modifier
        } else if key.starts_with('S') {
            PropKind::State
        } else {
            PropKind::Other
        }
    }

    /// Returns whether this kind takes part in BEM resolution.
    pub fn is_bem(self) -> bool {
        !matches!(self, PropKind::Other)
    }
}

/// A property key classified once, at the point it enters a bag.
#[derive(Debug, Clone, PartialEq)]
pub struct Prop {
    /// How the key is interpreted.
    pub kind: PropKind,
    /// The key as declared, e.g. `"MSize"`.
    pub key: String,
    /// Selector segment derived from the key, e.g. `"size"`.
    ///
    /// For `Other` props this is the key unchanged.
    pub name: String,
    pub value: PropValue,
}

impl Prop {
    /// Classifies `key` and derives its selector segment.
    ///
    /// The segment is the key minus its one-letter prefix, kebab-cased. A
    /// leading dash produced by an uppercase first letter is folded into the
    /// selector separator, so `MSize` and `Msize` both yield `size`.
    pub fn new(key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        let key = key.into();
        let kind = PropKind::of(&key);
        let name = if kind.is_bem() {
            let segment = kebab_case(&key, 1);
            match segment.strip_prefix('-') {
                Some(stripped) => stripped.to_string(),
                None => segment,
            }
        } else {
            key.clone()
        };

        Self {
            kind,
            key,
            name,
            value: value.into(),
        }
    }

    /// Modifier segment for this prop: `name` or `name-<value>`.
    ///
    /// Returns `None` for non-modifier props. A literal `true` adds no value
    /// suffix.
    pub fn modifier(&self) -> Option<String> {
        if self.kind != PropKind::Modifier {
            return None;
        }
        if self.value.is_true() {
            Some(self.name.clone())
        } else {
            Some(format!("{}-{}", self.name, self.value))
        }
    }

    /// State segment for this prop, or `None` for non-state props.
    pub fn state(&self) -> Option<&str> {
        match self.kind {
            PropKind::State => Some(&self.name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_by_prefix() {
        assert_eq!(PropKind::of("MSize"), PropKind::Modifier);
        assert_eq!(PropKind::of("Shover"), PropKind::State);
        assert_eq!(PropKind::of("size"), PropKind::Other);
        assert_eq!(PropKind::of("mSize"), PropKind::Other);
        assert_eq!(PropKind::of(""), PropKind::Other);
    }

    #[test]
    fn test_name_folds_leading_dash() {
        assert_eq!(Prop::new("MSize", "lg").name, "size");
        assert_eq!(Prop::new("Msize", "lg").name, "size");
        assert_eq!(Prop::new("MFontSize", true).name, "font-size");
        assert_eq!(Prop::new("Mcol12", true).name, "col-12");
    }

    #[test]
    fn test_other_keeps_key_as_name() {
        let prop = Prop::new("onPress", true);
        assert_eq!(prop.kind, PropKind::Other);
        assert_eq!(prop.name, "onPress");
        assert_eq!(prop.modifier(), None);
        assert_eq!(prop.state(), None);
    }

    #[test]
    fn test_modifier_segment() {
        assert_eq!(Prop::new("Mactive", true).modifier().as_deref(), Some("active"));
        assert_eq!(Prop::new("MSize", "lg").modifier().as_deref(), Some("size-lg"));
        assert_eq!(Prop::new("MCols", 3).modifier().as_deref(), Some("cols-3"));
        assert_eq!(Prop::new("Mflag", "true").modifier().as_deref(), Some("flag-true"));
    }

    #[test]
    fn test_state_segment() {
        let prop = Prop::new("SHover", true);
        assert_eq!(prop.state(), Some("hover"));
        assert_eq!(prop.modifier(), None);
    }
}
