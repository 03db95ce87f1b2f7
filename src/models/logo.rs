use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LogoError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoStyle {
    Minimal,
    Modern,
    Tech,
    Classic,
}

impl LogoStyle {
    pub fn all() -> &'static [LogoStyle] {
        &[
            LogoStyle::Minimal,
            LogoStyle::Modern,
            LogoStyle::Tech,
            LogoStyle::Classic,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoStyle::Minimal => "minimal",
            LogoStyle::Modern => "modern",
            LogoStyle::Tech => "tech",
            LogoStyle::Classic => "classic",
        }
    }

    /// Expanded description substituted into the prompt template.
    pub fn description(&self) -> &'static str {
        match self {
            LogoStyle::Minimal => {
                "a contemporary minimal design built from simple, clean lines and geometric forms"
            }
            LogoStyle::Modern => "sleek, modern design elements with clean typography",
            LogoStyle::Tech => {
                "technical, future-oriented design elements with geometric patterns"
            }
            LogoStyle::Classic => {
                "traditional, trustworthy design elements with refined ornamentation"
            }
        }
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoStyle {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(LogoStyle::Minimal),
            "modern" => Ok(LogoStyle::Modern),
            "tech" => Ok(LogoStyle::Tech),
            "classic" => Ok(LogoStyle::Classic),
            other => Err(LogoError::InvalidInput(format!(
                "unknown logo style '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Monochrome,
    Business,
    Tech,
    Eco,
    Contemporary,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Monochrome,
            ColorScheme::Business,
            ColorScheme::Tech,
            ColorScheme::Eco,
            ColorScheme::Contemporary,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Monochrome => "monochrome",
            ColorScheme::Business => "business",
            ColorScheme::Tech => "tech",
            ColorScheme::Eco => "eco",
            ColorScheme::Contemporary => "contemporary",
        }
    }

    /// Fixed palette substituted into the prompt template.
    pub fn palette(&self) -> &'static str {
        match self {
            ColorScheme::Monochrome => "black, white and grey tones",
            ColorScheme::Business => "navy blue and grey",
            ColorScheme::Tech => "electric blue and silver",
            ColorScheme::Eco => "green and sage",
            ColorScheme::Contemporary => "deep purple and turquoise",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monochrome" => Ok(ColorScheme::Monochrome),
            "business" => Ok(ColorScheme::Business),
            "tech" => Ok(ColorScheme::Tech),
            "eco" => Ok(ColorScheme::Eco),
            "contemporary" => Ok(ColorScheme::Contemporary),
            other => Err(LogoError::InvalidInput(format!(
                "unknown color scheme '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    Geometric,
    Abstract,
    Lettermark,
    Symbolic,
}

impl IconType {
    pub fn all() -> &'static [IconType] {
        &[
            IconType::Geometric,
            IconType::Abstract,
            IconType::Lettermark,
            IconType::Symbolic,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Geometric => "geometric",
            IconType::Abstract => "abstract",
            IconType::Lettermark => "lettermark",
            IconType::Symbolic => "symbolic",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            IconType::Geometric => "a geometric",
            IconType::Abstract => "an abstract",
            IconType::Lettermark => "a letter-based",
            IconType::Symbolic => "a symbolic",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconType {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geometric" => Ok(IconType::Geometric),
            "abstract" => Ok(IconType::Abstract),
            "lettermark" => Ok(IconType::Lettermark),
            "symbolic" => Ok(IconType::Symbolic),
            other => Err(LogoError::InvalidInput(format!(
                "unknown icon type '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Education,
    Healthcare,
    Energy,
    Media,
}

impl Industry {
    pub fn all() -> &'static [Industry] {
        &[
            Industry::Technology,
            Industry::Finance,
            Industry::Education,
            Industry::Healthcare,
            Industry::Energy,
            Industry::Media,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Education => "education",
            Industry::Healthcare => "healthcare",
            Industry::Energy => "energy",
            Industry::Media => "media",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Industry::Technology => "technology and IT",
            Industry::Finance => "finance and investment",
            Industry::Education => "education",
            Industry::Healthcare => "healthcare",
            Industry::Energy => "environment and energy",
            Industry::Media => "media and entertainment",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "technology" => Ok(Industry::Technology),
            "finance" => Ok(Industry::Finance),
            "education" => Ok(Industry::Education),
            "healthcare" => Ok(Industry::Healthcare),
            "energy" => Ok(Industry::Energy),
            "media" => Ok(Industry::Media),
            other => Err(LogoError::InvalidInput(format!(
                "unknown industry '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Minimal,
    Moderate,
    Detailed,
}

impl Complexity {
    pub fn all() -> &'static [Complexity] {
        &[
            Complexity::Minimal,
            Complexity::Moderate,
            Complexity::Detailed,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Minimal => "minimal",
            Complexity::Moderate => "moderate",
            Complexity::Detailed => "detailed",
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Complexity::Minimal => "minimal",
            Complexity::Moderate => "moderately detailed",
            Complexity::Detailed => "richly detailed",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(Complexity::Minimal),
            "moderate" => Ok(Complexity::Moderate),
            "detailed" => Ok(Complexity::Detailed),
            other => Err(LogoError::InvalidInput(format!(
                "unknown complexity '{}'",
                other
            ))),
        }
    }
}

/// Branding parameters for a single logo generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoRequest {
    pub brand_name: String,
    pub style: LogoStyle,
    pub color_scheme: ColorScheme,
    pub icon_type: IconType,
    pub industry: Option<Industry>,
    pub complexity: Complexity,
    pub additional_feature: Option<String>,
}

impl LogoRequest {
    pub fn new(
        brand_name: impl Into<String>,
        style: LogoStyle,
        color_scheme: ColorScheme,
        icon_type: IconType,
        complexity: Complexity,
    ) -> Self {
        Self {
            brand_name: brand_name.into(),
            style,
            color_scheme,
            icon_type,
            industry: None,
            complexity,
            additional_feature: None,
        }
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    pub fn with_additional_feature(mut self, feature: impl Into<String>) -> Self {
        self.additional_feature = Some(feature.into());
        self
    }
}

/// Result of one successful dispatch. Carries the exact prompt that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLogo {
    pub url: Option<String>,
    pub image_data: Option<String>, // Base64 encoded, when b64_json was requested
    pub prompt: String,
    pub revised_prompt: Option<String>,
    pub model: String,
}
