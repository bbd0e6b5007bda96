//! Field-level patch values.
//!
//! A [`Patch`] keeps "leave unchanged" distinct from "set to this value", even
//! when the value itself is empty or zero.

/// Change requested for a single field of a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Keep the stored value.
    #[default]
    Unchanged,
    /// Replace the stored value.
    Set(T),
}

impl<T> Patch<T> {
    /// Convert the replacement value with a fallible function.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Patch<U>, E> {
        match self {
            Self::Unchanged => Ok(Patch::Unchanged),
            Self::Set(value) => f(value).map(Patch::Set),
        }
    }

    /// Write the replacement into `target`.
    ///
    /// # Examples
    /// ```
    /// use tea_api::domain::Patch;
    ///
    /// let mut name = "Kyusu".to_owned();
    /// Patch::Unchanged.apply_to(&mut name);
    /// assert_eq!(name, "Kyusu");
    /// Patch::Set(String::new()).apply_to(&mut name);
    /// assert_eq!(name, "");
    /// ```
    pub fn apply_to(self, target: &mut T) {
        if let Self::Set(value) = self {
            *target = value;
        }
    }

    /// Write the replacement into an optional `target`.
    pub fn apply_to_option(self, target: &mut Option<T>) {
        if let Self::Set(value) = self {
            *target = Some(value);
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }
}
