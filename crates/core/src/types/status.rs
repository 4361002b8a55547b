//! Status enums for the checkout flow.

use serde::{Deserialize, Serialize};

/// Delivery speed tier offered per city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTier {
    Fast,
    Regular,
    Slow,
}

impl DeliveryTier {
    /// Every tier, in the order they are offered.
    pub const ALL: [Self; 3] = [Self::Fast, Self::Regular, Self::Slow];

    /// Wire/form name of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Regular => "regular",
            Self::Slow => "slow",
        }
    }

    /// Human-readable label, e.g. `Fast Delivery`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fast => "Fast Delivery",
            Self::Regular => "Regular Delivery",
            Self::Slow => "Slow Delivery",
        }
    }

    /// Promised delivery window.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Fast => "1-2 business days",
            Self::Regular => "3-5 business days",
            Self::Slow => "5-7 business days",
        }
    }
}

impl std::fmt::Display for DeliveryTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeliveryTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(Self::Fast),
            "regular" => Ok(Self::Regular),
            "slow" => Ok(Self::Slow),
            _ => Err(format!("invalid delivery tier: {s}")),
        }
    }
}

/// Position in the linear checkout flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Information,
    Delivery,
    Summary,
}

impl CheckoutStep {
    /// Steps in navigation order.
    pub const ORDER: [Self; 3] = [Self::Information, Self::Delivery, Self::Summary];

    /// Zero-based position of the step in [`Self::ORDER`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Information => 0,
            Self::Delivery => 1,
            Self::Summary => 2,
        }
    }

    /// The step after this one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Information => Some(Self::Delivery),
            Self::Delivery => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// The step before this one, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Information => None,
            Self::Delivery => Some(Self::Information),
            Self::Summary => Some(Self::Delivery),
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Information => "Information",
            Self::Delivery => "Delivery",
            Self::Summary => "Summary",
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Information => write!(f, "information"),
            Self::Delivery => write!(f, "delivery"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Lifecycle of an order placement within one checkout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Idle,
    Submitting,
    Placed,
    Failed,
}

impl OrderStatus {
    /// Whether a placement is currently in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
