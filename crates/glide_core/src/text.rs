//! Text style values

use crate::color::Color;
use crate::lerp::{lerp_discrete, Lerp};
use serde::{Deserialize, Serialize};

/// Font weight on the 100..=900 scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl FontWeight {
    pub const W100: FontWeight = FontWeight(100);
    pub const W200: FontWeight = FontWeight(200);
    pub const W300: FontWeight = FontWeight(300);
    pub const W400: FontWeight = FontWeight(400);
    pub const W500: FontWeight = FontWeight(500);
    pub const W600: FontWeight = FontWeight(600);
    pub const W700: FontWeight = FontWeight(700);
    pub const W800: FontWeight = FontWeight(800);
    pub const W900: FontWeight = FontWeight(900);
    pub const NORMAL: FontWeight = Self::W400;
    pub const BOLD: FontWeight = Self::W700;
}

impl Lerp for FontWeight {
    /// Weight is discrete: the nearer end wins, switching at the midpoint
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        lerp_discrete(a, b, t)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
    Justify,
}

/// What happens to text that does not fit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOverflow {
    #[default]
    Clip,
    Fade,
    Ellipsis,
}

/// Reading direction, used to resolve start/end edges
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Inheritable text style.
///
/// Every field is optional; a missing field inherits from the enclosing
/// style. Blending holds a field that only one side sets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub letter_spacing: Option<f32>,
    pub word_spacing: Option<f32>,
    pub height: Option<f32>,
    pub font_family: Option<String>,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn with_word_spacing(mut self, spacing: f32) -> Self {
        self.word_spacing = Some(spacing);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Fill fields this style leaves unset from `parent`
    pub fn inherit_from(&self, parent: &TextStyle) -> TextStyle {
        TextStyle {
            color: self.color.or(parent.color),
            font_size: self.font_size.or(parent.font_size),
            font_weight: self.font_weight.or(parent.font_weight),
            font_style: self.font_style.or(parent.font_style),
            letter_spacing: self.letter_spacing.or(parent.letter_spacing),
            word_spacing: self.word_spacing.or(parent.word_spacing),
            height: self.height.or(parent.height),
            font_family: self
                .font_family
                .clone()
                .or_else(|| parent.font_family.clone()),
        }
    }
}

impl Lerp for TextStyle {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        if t == 0.0 {
            return a.clone();
        }
        if t == 1.0 {
            return b.clone();
        }
        TextStyle {
            color: Option::<Color>::lerp(&a.color, &b.color, t),
            font_size: Option::<f32>::lerp(&a.font_size, &b.font_size, t),
            font_weight: Option::<FontWeight>::lerp(&a.font_weight, &b.font_weight, t),
            font_style: lerp_discrete(&a.font_style, &b.font_style, t),
            letter_spacing: Option::<f32>::lerp(&a.letter_spacing, &b.letter_spacing, t),
            word_spacing: Option::<f32>::lerp(&a.word_spacing, &b.word_spacing, t),
            height: Option::<f32>::lerp(&a.height, &b.height, t),
            font_family: lerp_discrete(&a.font_family, &b.font_family, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_switches_halfway() {
        assert_eq!(FontWeight::lerp(&FontWeight::NORMAL, &FontWeight::BOLD, 0.4), FontWeight::NORMAL);
        assert_eq!(FontWeight::lerp(&FontWeight::NORMAL, &FontWeight::BOLD, 0.5), FontWeight::BOLD);
        // no intermediate weights are synthesized
        assert_eq!(FontWeight::lerp(&FontWeight::W100, &FontWeight::W900, 0.49), FontWeight::W100);

        let a = TextStyle::new().with_font_weight(FontWeight::NORMAL);
        let b = TextStyle::new().with_font_weight(FontWeight::BOLD);
        assert_eq!(TextStyle::lerp(&a, &b, 0.4).font_weight, Some(FontWeight::NORMAL));
        assert_eq!(TextStyle::lerp(&a, &b, 0.6).font_weight, Some(FontWeight::BOLD));
    }

    #[test]
    fn style_blend_holds_one_sided_fields() {
        let a = TextStyle::new().with_font_size(10.0).with_color(Color::BLACK);
        let b = TextStyle::new().with_font_size(20.0).with_letter_spacing(2.0);
        let mid = TextStyle::lerp(&a, &b, 0.5);
        assert_eq!(mid.font_size, Some(15.0));
        assert_eq!(mid.color, Some(Color::BLACK));
        assert_eq!(mid.letter_spacing, Some(2.0));
    }

    #[test]
    fn family_switches_halfway() {
        let a = TextStyle::new().with_font_family("Inter");
        let b = TextStyle::new().with_font_family("Mono");
        assert_eq!(TextStyle::lerp(&a, &b, 0.25).font_family.as_deref(), Some("Inter"));
        assert_eq!(TextStyle::lerp(&a, &b, 0.75).font_family.as_deref(), Some("Mono"));
    }

    #[test]
    fn inherit_fills_gaps_only() {
        let parent = TextStyle::new().with_font_size(14.0).with_color(Color::BLACK);
        let child = TextStyle::new().with_color(Color::RED);
        let resolved = child.inherit_from(&parent);
        assert_eq!(resolved.color, Some(Color::RED));
        assert_eq!(resolved.font_size, Some(14.0));
    }
}
