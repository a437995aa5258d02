//! Page designs.
//!
//! Each design is a pair of templates: a form (`design/<id>.html`) and a
//! rendered page (`preview/<id>.html`). The set is closed; a design id that
//! is not listed here never reaches the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A template variant for the form and preview pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Design {
    #[default]
    One,
    Two,
    Three,
}

impl Design {
    /// Every known design, in id order.
    pub const ALL: [Design; 3] = [Design::One, Design::Two, Design::Three];

    /// Numeric id used in URLs, form fields and stored records.
    pub fn id(&self) -> i64 {
        match self {
            Design::One => 1,
            Design::Two => 2,
            Design::Three => 3,
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Template rendering the editable form for this design.
    pub fn form_template(&self) -> String {
        format!("design/{}.html", self.id())
    }

    /// Template rendering the finished page for this design.
    pub fn preview_template(&self) -> String {
        format!("preview/{}.html", self.id())
    }
}

impl FromStr for Design {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(Design::from_id)
            .ok_or_else(|| format!("Invalid design id: {}", s))
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Design> for i64 {
    fn from(design: Design) -> Self {
        design.id()
    }
}

impl TryFrom<i64> for Design {
    type Error = String;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Design::from_id(id).ok_or_else(|| format!("Invalid design id: {}", id))
    }
}
