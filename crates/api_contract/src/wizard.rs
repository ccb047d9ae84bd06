//! Step machine for the onboarding wizard.
//!
//! Four linear steps; backward moves are always allowed and never discard
//! entered data (the draft lives outside the step). Submission is modeled by
//! the page, not here: a failed submit leaves the machine on `Preferences`
//! so the user can resubmit.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Intro,
    Goals,
    Profile,
    Preferences,
}

impl WizardStep {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Intro => Self::Goals,
            Self::Goals => Self::Profile,
            Self::Profile | Self::Preferences => Self::Preferences,
        }
    }

    #[must_use]
    pub const fn back(self) -> Self {
        match self {
            Self::Intro | Self::Goals => Self::Intro,
            Self::Profile => Self::Goals,
            Self::Preferences => Self::Profile,
        }
    }

    /// 1-based position shown in the step indicator.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Intro => 1,
            Self::Goals => 2,
            Self::Profile => 3,
            Self::Preferences => 4,
        }
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::WizardStep;

    #[test]
    fn walks_forward_to_the_terminal_step() {
        let mut step = WizardStep::default();
        let mut numbers = vec![step.number()];
        while !step.is_last() {
            step = step.next();
            numbers.push(step.number());
        }
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        // next() on the last step stays put; submission is a page concern.
        assert_eq!(step.next(), WizardStep::Preferences);
    }

    #[test]
    fn back_is_always_permitted_and_bottoms_out_at_intro() {
        let mut step = WizardStep::Preferences;
        for expected in [3, 2, 1, 1] {
            step = step.back();
            assert_eq!(step.number(), expected);
        }
    }
}
