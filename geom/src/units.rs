/// Unit preferences for displaying distances, speeds and durations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitFmt {
    /// Round `Duration`s to a whole number of seconds.
    pub round_durations: bool,
    /// Display in metric; US imperial otherwise.
    pub metric: bool,
}

impl UnitFmt {
    pub fn metric() -> UnitFmt {
        UnitFmt {
            round_durations: false,
            metric: true,
        }
    }

    pub fn imperial() -> UnitFmt {
        UnitFmt {
            round_durations: false,
            metric: false,
        }
    }
}

impl Default for UnitFmt {
    fn default() -> UnitFmt {
        UnitFmt::metric()
    }
}
