use std::fmt;

/// Reading level an explanation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudienceTier {
    /// Grade 2, age 7-8.
    Lower,
    /// Grade 5, age 10-11.
    Upper,
}

impl AudienceTier {
    /// Invocation order used by the aggregator.
    pub const ALL: [AudienceTier; 2] = [AudienceTier::Lower, AudienceTier::Upper];

    pub fn grade(self) -> u8 {
        match self {
            AudienceTier::Lower => 2,
            AudienceTier::Upper => 5,
        }
    }

    pub fn age_range(self) -> &'static str {
        match self {
            AudienceTier::Lower => "7-8",
            AudienceTier::Upper => "10-11",
        }
    }
}

impl fmt::Display for AudienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grade {}", self.grade())
    }
}
