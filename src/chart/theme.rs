use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                contributions: "rgb(79 70 229)",
                interest: "rgb(22 163 74)",
                grid: "rgba(0, 0, 0, 0.1)",
                text: "#475569",
            },
            Theme::Dark => Palette {
                contributions: "rgb(99 102 241)",
                interest: "rgb(52 211 153)",
                grid: "rgba(255, 255, 255, 0.1)",
                text: "#cbd5e1",
            },
        }
    }
}

/// Fixed colors per theme: indigo contributions, green interest, slate text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub contributions: &'static str,
    pub interest: &'static str,
    pub grid: &'static str,
    pub text: &'static str,
}
