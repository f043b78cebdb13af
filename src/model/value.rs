// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A node-level property as reported by the host.
///
/// `Mixed` means the characters of the node (or of the queried range) disagree; `Absent` means
/// the host has no value at all (e.g. a text node without characters or an unset style
/// reference). Consumers must handle all three cases.
#[derive(Debug, Clone, PartialEq)]
pub enum Prop<T> {
    Uniform(T),
    Mixed,
    Absent,
}

impl<T> Prop<T> {
    pub fn uniform(&self) -> Option<&T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::Mixed | Self::Absent => None,
        }
    }

    pub fn into_uniform(self) -> Option<T> {
        match self {
            Self::Uniform(value) => Some(value),
            Self::Mixed | Self::Absent => None,
        }
    }

    pub fn is_mixed(&self) -> bool {
        matches!(self, Self::Mixed)
    }
}

impl<T: PartialEq> Prop<T> {
    /// Collapses a sequence of per-run values into a node-level property.
    pub fn collapse<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Self::Absent;
        };
        for value in iter {
            if value != first {
                return Self::Mixed;
            }
        }
        Self::Uniform(first)
    }
}

#[cfg(test)]
mod tests {
    use super::Prop;

    #[test]
    fn collapse_reports_absent_uniform_and_mixed() {
        assert_eq!(Prop::<u32>::collapse([]), Prop::Absent);
        assert_eq!(Prop::collapse([3, 3, 3]), Prop::Uniform(3));
        assert_eq!(Prop::collapse([3, 4]), Prop::Mixed);
    }

    #[test]
    fn collapse_treats_none_runs_as_values() {
        assert_eq!(Prop::collapse([None::<u8>, None]), Prop::Uniform(None));
        assert_eq!(Prop::collapse([None, Some(1u8)]), Prop::Mixed);
    }
}
