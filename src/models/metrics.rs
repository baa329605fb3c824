use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Underweight => write!(f, "underweight"),
            Self::Normal => write!(f, "normal"),
            Self::Overweight => write!(f, "overweight"),
            Self::Obese => write!(f, "obese"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    Gain,
    Maintain,
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lose => write!(f, "lose"),
            Self::Gain => write!(f, "gain"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

impl FromStr for Goal {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "lose" => Ok(Self::Lose),
            "gain" => Ok(Self::Gain),
            "maintain" => Ok(Self::Maintain),
            _ => Err(Error::invalid(
                "goal",
                format!("{} (expected lose/gain/maintain)", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Centimeters,
    FeetInches,
}

impl HeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::FeetInches => "ft-in",
        }
    }
}

impl std::fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for HeightUnit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "cm" | "centimeters" => Ok(Self::Centimeters),
            "ft" | "ft-in" | "feet_inches" => Ok(Self::FeetInches),
            _ => Err(Error::invalid(
                "height unit",
                format!("{} (expected cm/ft-in)", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lbs",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "kg" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pounds" => Ok(Self::Pounds),
            _ => Err(Error::invalid(
                "weight unit",
                format!("{} (expected kg/lb)", s),
            )),
        }
    }
}

/// The in-progress body metrics of the current user.
///
/// `bmi` and `category` are derived: the only way to populate them is
/// [`BodyMetrics::measured`], which runs the unit conversion and the
/// calculator. Magnitudes are kept exactly as entered, in the units recorded
/// next to them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyMetrics {
    bmi: Option<f64>,
    category: Option<BmiCategory>,
    goal: Option<Goal>,
    height: Option<f64>,
    weight: Option<f64>,
    #[serde(default)]
    height_unit: HeightUnit,
    #[serde(default)]
    weight_unit: WeightUnit,
}

impl BodyMetrics {
    /// Build a tuple from raw measurements. Measurements the calculator
    /// rejects (zero, negative) are still recorded, with no bmi; the store
    /// refuses negative or non-finite ones on `set`.
    pub fn measured(
        height: f64,
        height_unit: HeightUnit,
        weight: f64,
        weight_unit: WeightUnit,
    ) -> Self {
        let assessment = crate::core::bmi::evaluate(height, height_unit, weight, weight_unit);
        Self {
            bmi: assessment.map(|a| a.bmi),
            category: assessment.map(|a| a.category),
            goal: None,
            height: Some(height),
            weight: Some(weight),
            height_unit,
            weight_unit,
        }
    }

    pub fn with_goal(mut self, goal: Option<Goal>) -> Self {
        self.goal = goal;
        self
    }

    pub fn bmi(&self) -> Option<f64> {
        self.bmi
    }

    pub fn category(&self) -> Option<BmiCategory> {
        self.category
    }

    pub fn goal(&self) -> Option<Goal> {
        self.goal
    }

    pub fn height(&self) -> Option<f64> {
        self.height
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check a tuple that came from outside this process (the durable slot).
    pub fn validate(&self) -> Result<(), String> {
        for (name, v) in [("height", self.height), ("weight", self.weight)] {
            if let Some(v) = v {
                if !v.is_finite() || v < 0.0 {
                    return Err(format!("{} must be a finite non-negative number", name));
                }
            }
        }
        if self.category.is_some() != self.bmi.is_some() {
            return Err("category must be present exactly when bmi is".into());
        }

        let expected = match (self.height, self.weight) {
            (Some(h), Some(w)) => {
                crate::core::bmi::evaluate(h, self.height_unit, w, self.weight_unit)
            }
            _ => None,
        };
        match (self.bmi, expected) {
            (None, None) => Ok(()),
            (Some(b), Some(a)) if (b - a.bmi).abs() < 1e-6 && self.category == Some(a.category) => {
                Ok(())
            }
            _ => Err("bmi does not match the recorded height and weight".into()),
        }
    }
}
