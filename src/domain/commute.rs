// src/domain/commute.rs

pub const HOSPITAL_MARKER_COLOR: &str = "#ef4444";

/// Drive-time range used for marker and badge coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommuteBucket {
    /// 15 minutes or less.
    Near,
    /// More than 15, at most 25.
    Moderate,
    /// More than 25.
    Far,
}

impl CommuteBucket {
    pub const ALL: [CommuteBucket; 3] = [
        CommuteBucket::Near,
        CommuteBucket::Moderate,
        CommuteBucket::Far,
    ];

    pub fn from_minutes(minutes: u32) -> Self {
        if minutes <= 15 {
            CommuteBucket::Near
        } else if minutes <= 25 {
            CommuteBucket::Moderate
        } else {
            CommuteBucket::Far
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            CommuteBucket::Near => "green",
            CommuteBucket::Moderate => "yellow",
            CommuteBucket::Far => "red",
        }
    }

    pub fn marker_color(self) -> &'static str {
        match self {
            CommuteBucket::Near => "#10b981",
            CommuteBucket::Moderate => "#f59e0b",
            CommuteBucket::Far => "#ef4444",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            CommuteBucket::Near => "text-green-600 bg-green-50",
            CommuteBucket::Moderate => "text-yellow-600 bg-yellow-50",
            CommuteBucket::Far => "text-red-600 bg-red-50",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            CommuteBucket::Near => "≤15 min drive",
            CommuteBucket::Moderate => "15-25 min drive",
            CommuteBucket::Far => ">25 min drive",
        }
    }
}

/// Departure scenario the commute data was sampled for. Only the
/// Wednesday evening rush has data behind it today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommuteScenario {
    #[default]
    Wednesday530pm,
    Monday800am,
    Friday600pm,
    Saturday1000am,
    OffPeak,
}

impl CommuteScenario {
    pub const ALL: [CommuteScenario; 5] = [
        CommuteScenario::Wednesday530pm,
        CommuteScenario::Monday800am,
        CommuteScenario::Friday600pm,
        CommuteScenario::Saturday1000am,
        CommuteScenario::OffPeak,
    ];

    pub fn value(self) -> &'static str {
        match self {
            CommuteScenario::Wednesday530pm => "wed_5_30pm",
            CommuteScenario::Monday800am => "mon_8_00am",
            CommuteScenario::Friday600pm => "fri_6_00pm",
            CommuteScenario::Saturday1000am => "sat_10_00am",
            CommuteScenario::OffPeak => "off_peak",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CommuteScenario::Wednesday530pm => "Wednesday 5:30pm ET",
            CommuteScenario::Monday800am => "Monday 8:00am ET",
            CommuteScenario::Friday600pm => "Friday 6:00pm ET",
            CommuteScenario::Saturday1000am => "Saturday 10:00am ET",
            CommuteScenario::OffPeak => "Off-Peak Hours",
        }
    }

    pub fn is_available(self) -> bool {
        self == CommuteScenario::Wednesday530pm
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == raw)
    }
}
