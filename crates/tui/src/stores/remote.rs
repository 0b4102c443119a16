//! Request state for asynchronously fetched data.

/// State of one asynchronously fetched datum.
///
/// Replaces the boolean-loading-flag-plus-error-string pattern with an
/// explicit value: a field is untouched (`NotAsked`), in flight
/// (`Loading`), holds the last response (`Loaded`), or holds the last
/// failure (`Failed`). Assignment is last-write-wins; there is no
/// sequencing guard for overlapping fetches.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Remote<T> {
    #[default]
    NotAsked,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Remote<T> {
    /// Mark a fetch as started. Loaded data is kept on screen while a
    /// refresh is in flight; only empty or failed fields show the
    /// loading state.
    pub fn begin(&mut self) {
        if !matches!(self, Self::Loaded(_)) {
            *self = Self::Loading;
        }
    }

    /// Apply a completed fetch: the response replaces the field
    /// wholesale, or the failure message lands in `Failed`.
    pub fn resolve(&mut self, result: Result<T, String>) {
        *self = match result {
            Ok(value) => Self::Loaded(value),
            Err(message) => Self::Failed(message),
        };
    }

    pub fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The loaded value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access to the loaded value, if any.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
