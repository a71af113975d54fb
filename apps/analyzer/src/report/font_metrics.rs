//! Static glyph-width tables for the two standard PDF fonts the report uses.
//!
//! Widths are in 1/1000 em (AFM units) and cover ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Anything else falls back to `average_width`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFont {
    Helvetica,
    HelveticaBold,
}

impl ReportFont {
    /// Name of the standard Type1 font.
    pub fn base_font(&self) -> &'static str {
        match self {
            ReportFont::Helvetica => "Helvetica",
            ReportFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name the content streams refer to.
    pub fn resource_name(&self) -> &'static str {
        match self {
            ReportFont::Helvetica => "F1",
            ReportFont::HelveticaBold => "F2",
        }
    }

    pub fn metrics(&self) -> &'static FontMetricTable {
        match self {
            ReportFont::Helvetica => &HELVETICA,
            ReportFont::HelveticaBold => &HELVETICA_BOLD,
        }
    }
}

pub struct FontMetricTable {
    widths: [u16; 95],
    pub average_width: u16,
}

impl FontMetricTable {
    /// Rendered width in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u32::from(self.widths[code - 32])
                } else {
                    u32::from(self.average_width)
                }
            })
            .sum();
        units as f32 * size_pt / 1000.0
    }
}

#[rustfmt::skip]
static HELVETICA: FontMetricTable = FontMetricTable {
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-Z
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-z
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_width: 556,
};

#[rustfmt::skip]
static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A-Z
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a-z
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    average_width: 611,
};
