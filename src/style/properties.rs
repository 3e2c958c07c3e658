//! CSS-facing property identity: the KFX property symbol set, its CSS
//! names (§4.H translation table), and small keyword enums generated the
//! way the teacher's `enum_property!` macro does (`style/properties.rs`).

/// Generates a CSS-keyword enum with `as_css`/`from_css`.
macro_rules! enum_property {
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident => $css:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_css(&self) -> &'static str {
                match self {
                    $(Self::$variant => $css),+
                }
            }

            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

enum_property! {
    pub enum TextAlignKeyword {
        Left => "left",
        Right => "right",
        Center => "center",
        Justify => "justify",
    }
}

enum_property! {
    /// §4.E "special dispatch for `baseline_style`".
    pub enum BaselineStyleKeyword {
        Normal => "normal",
        Superscript => "super",
        Subscript => "sub",
    }
}

enum_property! {
    /// §4.E "horizontal-position: `float_clear` set union under the symbol
    /// lattice (left + right = both)".
    pub enum FloatClearKeyword {
        None => "none",
        Left => "left",
        Right => "right",
        Both => "both",
    }
}

impl FloatClearKeyword {
    /// `left + right = both`; identical values or a value with `none` are
    /// idempotent (§4.E, §8 S5).
    pub fn union(self, other: FloatClearKeyword) -> FloatClearKeyword {
        use FloatClearKeyword::*;
        match (self, other) {
            (None, other) => other,
            (existing, None) => existing,
            (Both, _) | (_, Both) => Both,
            (Left, Right) | (Right, Left) => Both,
            (Left, Left) => Left,
            (Right, Right) => Right,
        }
    }
}

/// The KFX style properties this crate understands the merge semantics of
/// (§4.E, §4.F). Each maps to a `YJ_symbols` symbol ID and a CSS name used
/// by the debug formatters (§4.H).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    FontFamily,
    FontStyle,
    FontWeight,
    FontSize,
    TextColor,
    BackgroundColor,
    LetterSpacing,
    WordSpacing,
    TextAlign,
    TextIndent,
    TextTransform,
    LineHeight,
    VerticalAlign,
    WhiteSpaceNowrap,
    MarginTop,
    MarginLeft,
    MarginBottom,
    MarginRight,
    PaddingTop,
    PaddingBottom,
    Width,
    Height,
    Visibility,
    Opacity,
    FontVariant,
    FloatClear,
    LayoutHints,
    BaselineStyle,
}

/// Every property this crate dispatches on, in ascending-symbol-ID order —
/// also the derived `Ord` order, since declaration order above matches it
/// (§9 "Canonicalization sorts keys by symbol ID").
pub const ALL_PROPERTIES: &[Property] = &[
    Property::FontFamily,
    Property::FontStyle,
    Property::FontWeight,
    Property::FontSize,
    Property::TextColor,
    Property::BackgroundColor,
    Property::LetterSpacing,
    Property::WordSpacing,
    Property::TextAlign,
    Property::TextIndent,
    Property::TextTransform,
    Property::LineHeight,
    Property::VerticalAlign,
    Property::WhiteSpaceNowrap,
    Property::MarginTop,
    Property::MarginLeft,
    Property::MarginBottom,
    Property::MarginRight,
    Property::PaddingTop,
    Property::PaddingBottom,
    Property::Width,
    Property::Height,
    Property::Visibility,
    Property::Opacity,
    Property::FontVariant,
    Property::FloatClear,
    Property::LayoutHints,
    Property::BaselineStyle,
];

impl Property {
    pub fn symbol_id(self) -> u64 {
        match self {
            Property::FontFamily => 11,
            Property::FontStyle => 12,
            Property::FontWeight => 13,
            Property::FontSize => 16,
            Property::TextColor => 19,
            Property::BackgroundColor => 21,
            Property::LetterSpacing => 32,
            Property::WordSpacing => 33,
            Property::TextAlign => 34,
            Property::TextIndent => 36,
            Property::TextTransform => 41,
            Property::LineHeight => 42,
            Property::VerticalAlign => 44,
            Property::WhiteSpaceNowrap => 45,
            Property::MarginTop => 47,
            Property::MarginLeft => 48,
            Property::MarginBottom => 49,
            Property::MarginRight => 50,
            Property::PaddingTop => 52,
            Property::PaddingBottom => 54,
            Property::Width => 56,
            Property::Height => 57,
            Property::Visibility => 68,
            Property::Opacity => 72,
            Property::FontVariant => 583,
            Property::FloatClear => 628,
            Property::LayoutHints => 791,
            Property::BaselineStyle => 792,
        }
    }

    pub fn from_symbol_id(id: u64) -> Option<Property> {
        ALL_PROPERTIES.iter().copied().find(|p| p.symbol_id() == id)
    }

    /// CSS property name (§4.H: "`text_alignment` → `text-align`,
    /// `text_color` → `color`, etc.").
    pub fn css_name(self) -> &'static str {
        match self {
            Property::FontFamily => "font-family",
            Property::FontStyle => "font-style",
            Property::FontWeight => "font-weight",
            Property::FontVariant => "font-variant",
            Property::FontSize => "font-size",
            Property::TextColor => "color",
            Property::BackgroundColor => "background-color",
            Property::LetterSpacing => "letter-spacing",
            Property::WordSpacing => "word-spacing",
            Property::TextAlign => "text-align",
            Property::TextIndent => "text-indent",
            Property::TextTransform => "text-transform",
            Property::LineHeight => "line-height",
            Property::VerticalAlign => "vertical-align",
            Property::WhiteSpaceNowrap => "white-space",
            Property::MarginTop => "margin-top",
            Property::MarginLeft => "margin-left",
            Property::MarginBottom => "margin-bottom",
            Property::MarginRight => "margin-right",
            Property::PaddingTop => "padding-top",
            Property::PaddingBottom => "padding-bottom",
            Property::Width => "width",
            Property::Height => "height",
            Property::Visibility => "visibility",
            Property::Opacity => "opacity",
            Property::FloatClear => "clear",
            Property::LayoutHints => "-kfx-layout-hints",
            Property::BaselineStyle => "-kfx-baseline-style",
        }
    }

    /// Standard CSS-inheritable properties (§4.F `Push`): text-align,
    /// line-height, font-*, color — explicitly *not* margins/paddings,
    /// mirrored on the teacher's `cascade::inherit_from_parent` table.
    pub fn is_css_inheritable(self) -> bool {
        matches!(
            self,
            Property::FontFamily
                | Property::FontStyle
                | Property::FontWeight
                | Property::FontVariant
                | Property::FontSize
                | Property::TextColor
                | Property::LetterSpacing
                | Property::WordSpacing
                | Property::TextAlign
                | Property::TextIndent
                | Property::TextTransform
                | Property::LineHeight
                | Property::WhiteSpaceNowrap
                | Property::Visibility
        )
    }

    /// Margin/padding properties — inherited only via `PushBlock`, never
    /// via plain `Push` (§4.F).
    pub fn is_margin_or_padding(self) -> bool {
        matches!(
            self,
            Property::MarginTop
                | Property::MarginLeft
                | Property::MarginBottom
                | Property::MarginRight
                | Property::PaddingTop
                | Property::PaddingBottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_id_round_trips() {
        for &p in ALL_PROPERTIES {
            assert_eq!(Property::from_symbol_id(p.symbol_id()), Some(p));
        }
    }

    #[test]
    fn css_name_translation_matches_spec_examples() {
        assert_eq!(Property::TextAlign.css_name(), "text-align");
        assert_eq!(Property::TextColor.css_name(), "color");
    }

    #[test]
    fn margins_are_not_css_inheritable() {
        assert!(!Property::MarginLeft.is_css_inheritable());
        assert!(Property::MarginLeft.is_margin_or_padding());
        assert!(Property::TextAlign.is_css_inheritable());
        assert!(!Property::TextAlign.is_margin_or_padding());
    }

    #[test]
    fn float_clear_union_left_right_is_both() {
        use FloatClearKeyword::*;
        assert_eq!(Left.union(Right), Both);
        assert_eq!(Right.union(Left), Both);
        assert_eq!(Left.union(Left), Left);
        assert_eq!(None.union(Right), Right);
    }

    #[test]
    fn keyword_enum_round_trips_css() {
        assert_eq!(TextAlignKeyword::from_css("center"), Some(TextAlignKeyword::Center));
        assert_eq!(TextAlignKeyword::Justify.as_css(), "justify");
    }
}
