//! Measurement categories

use std::fmt;
use std::str::FromStr;
use crate::ConversionError;

/// A domain of comparable units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
}

impl Category {
    /// All categories, in listing order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Time,
    ];

    /// Stable identifier (e.g. "Length")
    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
            Category::Time => "Time",
        }
    }

    /// Decorative icon shown next to the identifier
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Length => "📏",
            Category::Weight => "⚖️",
            Category::Temperature => "🌡️",
            Category::Volume => "🧪",
            Category::Time => "⏳",
        }
    }

    /// Display label (e.g. "📏 Length")
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.id())
    }

    pub fn description(&self) -> String {
        match self {
            Category::Temperature => "Temperature conversion between different scales".to_string(),
            other => format!("Standard {} measurement units", other.id().to_lowercase()),
        }
    }

    /// Temperature scales are affine; every other category is a plain factor table
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }

    /// Look up a category by identifier or display label
    pub fn resolve(name: &str) -> Option<Category> {
        Category::ALL.into_iter()
            .find(|c| c.id() == name || c.label() == name)
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::resolve(s).ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_id() {
        assert_eq!(Category::resolve("Length"), Some(Category::Length));
        assert_eq!(Category::resolve("Time"), Some(Category::Time));
    }

    #[test]
    fn test_resolve_by_label() {
        assert_eq!(Category::resolve("🌡️ Temperature"), Some(Category::Temperature));
        assert_eq!(Category::resolve("⚖️ Weight"), Some(Category::Weight));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(Category::resolve("Bogus"), None);
        assert_eq!(Category::resolve("length"), None);

        let err = "Bogus".parse::<Category>().unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("Bogus".to_string()));
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in Category::ALL.iter().enumerate() {
            for b in &Category::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(Category::Volume.description(), "Standard volume measurement units");
        assert_eq!(Category::Temperature.description(), "Temperature conversion between different scales");
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = Category::ALL.into_iter().filter(|c| !c.is_linear()).collect();
        assert_eq!(affine, vec![Category::Temperature]);
    }
}
