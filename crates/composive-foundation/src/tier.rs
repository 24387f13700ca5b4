/// The four size tiers every responsive table is split into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResponsiveSize {
    #[default]
    Small,
    Compact,
    Medium,
    Large,
}

impl ResponsiveSize {
    pub const ALL: [ResponsiveSize; 4] = [Self::Small, Self::Compact, Self::Medium, Self::Large];
}

/// One complete value per tier. Overrides replace a whole tier set, never a
/// single field inside a tier.
#[derive(Clone, Debug, PartialEq)]
pub struct TierSet<T> {
    pub small: T,
    pub compact: T,
    pub medium: T,
    pub large: T,
}

impl<T> TierSet<T> {
    pub fn new(small: T, compact: T, medium: T, large: T) -> Self {
        Self {
            small,
            compact,
            medium,
            large,
        }
    }

    pub fn get(&self, size: ResponsiveSize) -> &T {
        match size {
            ResponsiveSize::Small => &self.small,
            ResponsiveSize::Compact => &self.compact,
            ResponsiveSize::Medium => &self.medium,
            ResponsiveSize::Large => &self.large,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TierSet<U> {
        TierSet {
            small: f(&self.small),
            compact: f(&self.compact),
            medium: f(&self.medium),
            large: f(&self.large),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResponsiveSize, &T)> {
        ResponsiveSize::ALL.into_iter().map(move |size| (size, self.get(size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_matching_tier() {
        let tiers = TierSet::new("s", "c", "m", "l");
        let picked: Vec<_> = ResponsiveSize::ALL.iter().map(|size| *tiers.get(*size)).collect();
        assert_eq!(picked, vec!["s", "c", "m", "l"]);
    }

    #[test]
    fn map_keeps_tier_positions() {
        let tiers = TierSet::new(1, 2, 3, 4).map(|v| v * 10);
        assert_eq!(tiers, TierSet::new(10, 20, 30, 40));
    }
}
