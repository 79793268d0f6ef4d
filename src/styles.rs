//! Named cell styles used by the timesheet.
//!
//! Styles are plain data here; `render` turns them into `umya_spreadsheet::Style`.

/// The closed set of style buckets a timesheet cell can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleId {
    Title,
    Header,
    Cell,
    Formula,
    Formula2,
}

impl StyleId {
    pub const ALL: [StyleId; 5] = [
        StyleId::Title,
        StyleId::Header,
        StyleId::Cell,
        StyleId::Formula,
        StyleId::Formula2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StyleId::Title => "title",
            StyleId::Header => "header",
            StyleId::Cell => "cell",
            StyleId::Formula => "formula",
            StyleId::Formula2 => "formula_2",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    General,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Bottom,
    Center,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontSpec {
    pub size: Option<f64>,
    pub bold: bool,
    /// ARGB hex, e.g. `ffffffff`.
    pub color: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSpec {
    pub font: FontSpec,
    /// Solid fill colour (ARGB hex).
    pub fill: Option<&'static str>,
    /// Thin border on all four sides, in this colour.
    pub border: Option<&'static str>,
    pub number_format: Option<&'static str>,
    pub horizontal: HAlign,
    pub vertical: VAlign,
    pub wrap_text: bool,
}

// Lower-case ARGB keeps umya from mapping these onto its indexed palette.
pub const WHITE: &str = "ffffffff";
pub const BLACK: &str = "ff000000";
pub const GREY_25_PERCENT: &str = "ffc0c0c0";
pub const GREY_40_PERCENT: &str = "ff969696";
pub const GREY_50_PERCENT: &str = "ff808080";

/// One entry per `StyleId`, `StyleSpec` unless mapped to something else.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleBook<T = StyleSpec> {
    specs: [T; 5],
}

impl<T> StyleBook<T> {
    pub fn get(&self, id: StyleId) -> &T {
        &self.specs[id.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &T)> {
        StyleId::ALL.into_iter().map(|id| (id, self.get(id)))
    }

    /// Same buckets, each entry converted by `f`.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> StyleBook<U> {
        StyleBook {
            specs: self.specs.each_ref().map(f),
        }
    }
}

pub fn build_styles() -> StyleBook {
    let title = StyleSpec {
        font: FontSpec {
            size: Some(18.0),
            bold: true,
            color: None,
        },
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
        ..StyleSpec::default()
    };

    let header = StyleSpec {
        font: FontSpec {
            size: Some(11.0),
            bold: false,
            color: Some(WHITE),
        },
        fill: Some(GREY_50_PERCENT),
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
        wrap_text: true,
        ..StyleSpec::default()
    };

    let cell = StyleSpec {
        border: Some(BLACK),
        horizontal: HAlign::Center,
        wrap_text: true,
        ..StyleSpec::default()
    };

    let formula = |fill| StyleSpec {
        fill: Some(fill),
        number_format: Some("0.00"),
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
        ..StyleSpec::default()
    };

    let mut specs: [StyleSpec; 5] = Default::default();
    specs[StyleId::Title.slot()] = title;
    specs[StyleId::Header.slot()] = header;
    specs[StyleId::Cell.slot()] = cell;
    specs[StyleId::Formula.slot()] = formula(GREY_25_PERCENT);
    specs[StyleId::Formula2.slot()] = formula(GREY_40_PERCENT);

    StyleBook { specs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bucket_is_populated() {
        let book = build_styles();
        for (id, spec) in book.iter() {
            assert_ne!(spec, &StyleSpec::default(), "{} is empty", id.name());
        }
    }

    #[test]
    fn same_styles_every_time() {
        assert_eq!(build_styles(), build_styles());
    }

    #[test]
    fn formula_buckets_differ_only_by_fill() {
        let book = build_styles();
        let f1 = book.get(StyleId::Formula);
        let f2 = book.get(StyleId::Formula2);
        assert_eq!(f1.number_format, Some("0.00"));
        assert_eq!(f1.fill, Some(GREY_25_PERCENT));
        assert_eq!(f2.fill, Some(GREY_40_PERCENT));
        assert_eq!(
            StyleSpec { fill: None, ..f1.clone() },
            StyleSpec { fill: None, ..f2.clone() }
        );
    }

    #[test]
    fn header_is_white_on_grey() {
        let header = build_styles().get(StyleId::Header).clone();
        assert_eq!(header.font.color, Some(WHITE));
        assert_eq!(header.fill, Some(GREY_50_PERCENT));
        assert!(header.wrap_text);
    }

    #[test]
    fn title_is_large_bold() {
        let title = build_styles().get(StyleId::Title).clone();
        assert_eq!(title.font.size, Some(18.0));
        assert!(title.font.bold);
    }

    #[test]
    fn mapped_book_keeps_buckets_in_place() {
        let book = build_styles();
        let fills = book.map(|spec| spec.fill);
        for id in StyleId::ALL {
            assert_eq!(*fills.get(id), book.get(id).fill, "{}", id.name());
        }
        assert_eq!(*fills.get(StyleId::Formula2), Some(GREY_40_PERCENT));
    }

    #[test]
    fn names_match_buckets() {
        let names: Vec<_> = StyleId::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names, ["title", "header", "cell", "formula", "formula_2"]);
    }
}
