//! Gallery lightbox navigation.
//!
//! The index always refers to the *filtered* image sequence, so callers pass
//! the current length on every transition and call [`Lightbox::rescope`]
//! whenever the filter changes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(usize),
}

impl Lightbox {
    /// Open on `index`; ignored when it does not address an item.
    pub fn open(index: usize, len: usize) -> Self {
        if index < len {
            Self::Open(index)
        } else {
            Self::Closed
        }
    }

    pub fn next(self, len: usize) -> Self {
        match self {
            Self::Open(_) if len == 0 => Self::Closed,
            Self::Open(i) => Self::Open((i + 1) % len),
            Self::Closed => Self::Closed,
        }
    }

    pub fn previous(self, len: usize) -> Self {
        match self {
            Self::Open(_) if len == 0 => Self::Closed,
            Self::Open(i) => Self::Open((i % len + len - 1) % len),
            Self::Closed => Self::Closed,
        }
    }

    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Keep the index valid after the sequence changed length: clamp to the
    /// last item, or close when nothing is left.
    pub fn rescope(self, len: usize) -> Self {
        match self {
            Self::Open(_) if len == 0 => Self::Closed,
            Self::Open(i) if i >= len => Self::Open(len - 1),
            other => other,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Self::Open(i) => Some(i),
            Self::Closed => None,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}
