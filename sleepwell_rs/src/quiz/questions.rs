//! The three quiz questions and their fixed option sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares a fixed-choice answer enum with its wire value and label.
macro_rules! quiz_options {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($value:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value, as used in the answer mapping and HTML.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            /// Human label shown on the option control.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

quiz_options! {
    /// Primary sleep position.
    Position {
        Back => ("back", "Back sleeper"),
        Side => ("side", "Side sleeper"),
        Stomach => ("stomach", "Stomach sleeper"),
        Combo => ("combo", "Combination sleeper"),
    }
}

quiz_options! {
    /// How warm the sleeper runs.
    Temperature {
        Hot => ("hot", "I sleep hot"),
        Cold => ("cold", "I sleep cold"),
        Neutral => ("neutral", "Just right"),
    }
}

quiz_options! {
    /// Main sleep concern.
    Concern {
        Pain => ("pain", "Neck/back pain"),
        Insomnia => ("insomnia", "Trouble falling asleep"),
        Comfort => ("comfort", "General comfort"),
        Quality => ("quality", "Sleep quality"),
    }
}

/// Key under which an answer is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Position,
    Temperature,
    Concerns,
}

impl QuestionId {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::Position => "position",
            QuestionId::Temperature => "temperature",
            QuestionId::Concerns => "concerns",
        }
    }

    /// `(value, label)` pairs for this question, in display order.
    pub fn options(self) -> Vec<(&'static str, &'static str)> {
        match self {
            QuestionId::Position => Position::ALL.iter().map(|o| (o.as_str(), o.label())).collect(),
            QuestionId::Temperature => Temperature::ALL
                .iter()
                .map(|o| (o.as_str(), o.label()))
                .collect(),
            QuestionId::Concerns => Concern::ALL.iter().map(|o| (o.as_str(), o.label())).collect(),
        }
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon drawn next to the question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionIcon {
    Bed,
    Thermometer,
    Moon,
}

/// A quiz step.
#[derive(Clone, Copy, Debug)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: &'static str,
    pub icon: QuestionIcon,
}

/// Questions in the order they are asked.
pub const QUESTIONS: [Question; 3] = [
    Question {
        id: QuestionId::Position,
        prompt: "What is your primary sleep position?",
        icon: QuestionIcon::Bed,
    },
    Question {
        id: QuestionId::Temperature,
        prompt: "How do you sleep temperature-wise?",
        icon: QuestionIcon::Thermometer,
    },
    Question {
        id: QuestionId::Concerns,
        prompt: "What is your main sleep concern?",
        icon: QuestionIcon::Moon,
    },
];
