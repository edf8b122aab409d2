//! Page geometry and font styles.

use serde::{Deserialize, Serialize};

/// A4 width in points.
pub const A4_WIDTH: f32 = 595.2756;
/// A4 height in points.
pub const A4_HEIGHT: f32 = 841.8898;

/// Visual weight of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Paper title
    Title,
    /// Summary and timestamp lines under the title
    Caption,
    /// Question body
    Body,
    /// Answer key text
    Answer,
}

impl FontStyle {
    /// All styles, in the order their fonts are registered.
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Title,
        FontStyle::Caption,
        FontStyle::Body,
        FontStyle::Answer,
    ];

    /// Font size in points.
    pub fn font_size(self) -> f32 {
        match self {
            FontStyle::Title => 16.0,
            FontStyle::Caption => 10.0,
            FontStyle::Body => 12.0,
            FontStyle::Answer => 10.0,
        }
    }

    /// Vertical advance after a line in this style.
    pub fn line_height(self) -> f32 {
        match self {
            FontStyle::Title => 20.0,
            FontStyle::Caption => 20.0,
            FontStyle::Body => 18.0,
            FontStyle::Answer => 14.0,
        }
    }

    /// Standard 14 base font used for this style.
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Title => "Helvetica-Bold",
            FontStyle::Caption | FontStyle::Body => "Helvetica",
            FontStyle::Answer => "Helvetica-Oblique",
        }
    }
}

/// Page size, margins and spacing used by the paginator.
///
/// The y axis grows upwards, as in PDF: the writable band runs from
/// `bottom_margin` up to `height - top_margin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Left edge of the text column
    pub left_margin: f32,
    /// Distance from the top edge to the first baseline
    pub top_margin: f32,
    /// Lowest y a line may reach
    pub bottom_margin: f32,
    /// Extra indent for answer lines
    pub answer_indent: f32,
    /// Gap after the header block
    pub header_gap: f32,
    /// Gap after each question body
    pub question_gap: f32,
    /// Gap after each answer
    pub answer_gap: f32,
}

impl PageLayout {
    /// A4 page with the standard paper margins.
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            left_margin: 50.0,
            top_margin: 50.0,
            bottom_margin: 80.0,
            answer_indent: 20.0,
            header_gap: 10.0,
            question_gap: 6.0,
            answer_gap: 6.0,
        }
    }

    /// Y of the first baseline on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.top_margin
    }

    /// Height of the writable band.
    pub fn usable_height(&self) -> f32 {
        self.top() - self.bottom_margin
    }

    /// Check that every measure is finite and non-negative and that the
    /// writable band can hold at least one line of every style.
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("left_margin", self.left_margin),
            ("top_margin", self.top_margin),
            ("bottom_margin", self.bottom_margin),
            ("answer_indent", self.answer_indent),
            ("header_gap", self.header_gap),
            ("question_gap", self.question_gap),
            ("answer_gap", self.answer_gap),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(format!("{} must be a finite number", name));
            }
            if value < 0.0 {
                return Err(format!("{} must not be negative", name));
            }
        }
        if self.width == 0.0 || self.height == 0.0 {
            return Err("page size must be positive".to_string());
        }
        let tallest = FontStyle::ALL
            .iter()
            .map(|s| s.line_height())
            .fold(0.0_f32, f32::max);
        if self.usable_height() < tallest {
            return Err(format!(
                "usable height {:.1} is smaller than one line ({:.1})",
                self.usable_height(),
                tallest
            ));
        }
        Ok(())
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_band() {
        let layout = PageLayout::a4();
        assert!((layout.top() - 791.8898).abs() < 1e-3);
        assert!((layout.usable_height() - 711.8898).abs() < 1e-3);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_body_taller_than_answer() {
        assert!(FontStyle::Body.line_height() > FontStyle::Answer.line_height());
        assert!(FontStyle::Body.font_size() > FontStyle::Answer.font_size());
    }

    #[test]
    fn test_validate_rejects_tiny_band() {
        let layout = PageLayout {
            height: 140.0,
            ..PageLayout::a4()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_spacing() {
        let layout = PageLayout {
            question_gap: -500.0,
            ..PageLayout::a4()
        };
        assert_eq!(
            layout.validate(),
            Err("question_gap must not be negative".to_string())
        );

        let layout = PageLayout {
            answer_indent: -1.0,
            ..PageLayout::a4()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let layout = PageLayout {
            bottom_margin: f32::NAN,
            ..PageLayout::a4()
        };
        assert_eq!(
            layout.validate(),
            Err("bottom_margin must be a finite number".to_string())
        );

        let layout = PageLayout {
            height: f32::INFINITY,
            ..PageLayout::a4()
        };
        assert!(layout.validate().is_err());
    }
}
