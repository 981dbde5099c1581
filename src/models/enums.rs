use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string form doubles as the serde representation.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Closed set of conditions the prediction engine can emit.
    Disease {
        Anemia => "Anemia",
        Type2Diabetes => "Type 2 Diabetes",
        ChronicKidneyDisease => "Chronic Kidney Disease",
        Thrombocytopenia => "Thrombocytopenia",
        Thalassemia => "Thalassemia",
        Healthy => "Healthy",
        Inconclusive => "Inconclusive",
    }
);

str_enum!(
    /// Coarse severity bucket. Declaration order is the risk order.
    RiskLevel {
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
);

str_enum!(Gender {
    Male => "male",
    Female => "female",
});

str_enum!(
    /// Markers carried on predictions for display.
    Marker {
        Hemoglobin => "hemoglobin",
        Glucose => "glucose",
        Creatinine => "creatinine",
        Urea => "urea",
        Platelets => "platelets",
    }
);

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(VerificationStatus {
    Pending => "pending",
    Verified => "verified",
    Failed => "failed",
});

impl Disease {
    /// Case-insensitive exact match on the display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether this is one of the fallback outcomes rather than a detected condition.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Healthy | Self::Inconclusive)
    }
}

impl RiskLevel {
    /// Numeric rank used for "highest risk first" ordering.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Moderate => 2,
            Self::High => 3,
        }
    }
}

impl Marker {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Hemoglobin => "g/dL",
            Self::Glucose | Self::Creatinine | Self::Urea => "mg/dL",
            Self::Platelets => "/µL",
        }
    }
}
