use crate::HourSet;

/// A player and the hours they can attend, in the reference timezone.
///
/// The best and acceptable sets never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    best: HourSet,
    acceptable: HourSet,
}

impl Participant {
    /// Creates a participant.
    ///
    /// Hours present in both sets are kept as best hours and dropped from the
    /// acceptable ones. Use [`Participant::overlap`] beforehand to find out
    /// which hours are affected.
    pub fn new(name: impl Into<String>, best: HourSet, acceptable: HourSet) -> Participant {
        let mut acceptable = acceptable;
        acceptable ^= Self::overlap(best, acceptable);

        Self {
            name: name.into(),
            best,
            acceptable,
        }
    }

    /// Hours that would be removed from `acceptable` by [`Participant::new`].
    #[inline]
    pub fn overlap(best: HourSet, acceptable: HourSet) -> HourSet {
        best & acceptable
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn best(&self) -> HourSet {
        self.best
    }

    #[inline]
    pub fn acceptable(&self) -> HourSet {
        self.acceptable
    }
}

/// Formats as `name, best(1, 2), acceptable(3)`.
impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let list = |set: HourSet| {
            set.hours()
                .map(|hour| hour.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };

        write!(
            f,
            "{}, best({}), acceptable({})",
            self.name,
            list(self.best),
            list(self.acceptable)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Participant;
    use crate::HourSet;

    #[test]
    fn overlap_removed_from_acceptable() {
        let best = HourSet::from_hours([1, 2, 3]).unwrap();
        let acceptable = HourSet::from_hours([3, 4]).unwrap();

        assert_eq!(
            Participant::overlap(best, acceptable),
            HourSet::from_hours([3]).unwrap()
        );

        let p = Participant::new("alice", best, acceptable);
        assert_eq!(p.best(), best);
        assert_eq!(p.acceptable(), HourSet::from_hours([4]).unwrap());
        assert!((p.best() & p.acceptable()).is_empty());
    }

    #[test]
    fn display() {
        let p = Participant::new(
            "bob",
            HourSet::from_hours([20, 19]).unwrap(),
            HourSet::empty(),
        );
        assert_eq!(p.to_string(), "bob, best(19, 20), acceptable()");
    }
}
