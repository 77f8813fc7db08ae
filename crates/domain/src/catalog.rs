//! Fixed actor and color lists.

use crate::error::DomainError;

/// Built-in actor names, in display order.
pub const DEFAULT_ACTORS: [&str; 10] = [
    "Tom Hanks",
    "Meryl Streep",
    "Leonardo DiCaprio",
    "Jennifer Lawrence",
    "Brad Pitt",
    "Natalie Portman",
    "Denzel Washington",
    "Charlize Theron",
    "Robert Downey Jr.",
    "Cate Blanchett",
];

/// Built-in color names, in display order.
pub const DEFAULT_COLORS: [&str; 8] = [
    "red", "blue", "green", "orange", "purple", "yellow", "pink", "teal",
];

/// The two selectable lists.
///
/// Both lists are guaranteed non-empty: the only way to obtain a `Catalog`
/// is through [`Catalog::new`] (validated) or [`Catalog::builtin`]. There is
/// no mutation API, so the guarantee holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    actors: Vec<String>,
    colors: Vec<String>,
}

impl Catalog {
    /// Build a catalog from arbitrary lists.
    ///
    /// Fails with [`DomainError::EmptyCatalog`] if either list is empty.
    /// Actors are checked before colors.
    pub fn new<A, C>(actors: A, colors: C) -> Result<Self, DomainError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let actors: Vec<String> = actors.into_iter().map(Into::into).collect();
        if actors.is_empty() {
            return Err(DomainError::empty_catalog("actors"));
        }

        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(DomainError::empty_catalog("colors"));
        }

        Ok(Self { actors, colors })
    }

    /// The built-in catalog served by default.
    pub fn builtin() -> Self {
        Self {
            actors: DEFAULT_ACTORS.iter().map(|s| s.to_string()).collect(),
            colors: DEFAULT_COLORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_actors_and_eight_colors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.actors().len(), 10);
        assert_eq!(catalog.colors().len(), 8);
        assert_eq!(catalog.actors()[0], "Tom Hanks");
        assert_eq!(catalog.colors()[7], "teal");
    }

    #[test]
    fn builtin_entries_are_non_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog.actors().iter().all(|a| !a.is_empty()));
        assert!(catalog.colors().iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn new_keeps_order() {
        let catalog = Catalog::new(["B", "A"], ["Y", "X"]).unwrap();
        assert_eq!(catalog.actors(), ["B".to_string(), "A".to_string()]);
        assert_eq!(catalog.colors(), ["Y".to_string(), "X".to_string()]);
    }

    #[test]
    fn new_rejects_empty_actors() {
        let err = Catalog::new(Vec::<String>::new(), ["red"]).unwrap_err();
        assert_eq!(err, DomainError::EmptyCatalog { list: "actors" });
    }

    #[test]
    fn new_rejects_empty_colors() {
        let err = Catalog::new(["Tom Hanks"], Vec::<&str>::new()).unwrap_err();
        assert_eq!(err, DomainError::EmptyCatalog { list: "colors" });
    }

    #[test]
    fn new_reports_actors_first_when_both_empty() {
        let err = Catalog::new(Vec::<&str>::new(), Vec::<&str>::new()).unwrap_err();
        assert_eq!(err, DomainError::EmptyCatalog { list: "actors" });
    }

    #[test]
    fn duplicates_are_allowed() {
        let catalog = Catalog::new(["A", "A"], ["X"]).unwrap();
        assert_eq!(catalog.actors().len(), 2);
    }
}
