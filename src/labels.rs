//! petcat mnemonic labels for screen-code glyphs

/// Number of screen codes with a slot in the label table
pub const LABEL_COUNT: usize = 0xE0;

/// petcat labels keyed by screen code.
///
/// Entry `i` is the petcat notation for the glyph at screen code `i`
/// (the same labels apply to both banks of the ROM). Codes in
/// `0xA0..=0xC0` are reverse-video filler with no petcat name of their
/// own and stay `None`; every other slot has a label.
pub const LABELS: [Option<&str>; LABEL_COUNT] = build_labels();

/// Labels for screen codes 0x00 through 0x9F.
#[rustfmt::skip]
const LABELS_00_9F: [&str; 0xA0] = [
    // 0x00
    "@", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w",
    "x", "y", "z", "[", "\\", "]", "^", "_",
    // 0x20
    "{space}", "!", "\"", "#", "$", "%", "&", "'",
    "(", ")", "*", "+", ",", "-", ".", "/",
    "0", "1", "2", "3", "4", "5", "6", "7",
    "8", "9", ":", ";", "<", "=", ">", "?",
    // 0x40
    "{SHIFT-*}", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "{SHIFT-+}", "{CBM--}", "{SHIFT--}", "~", "{CBM-*}",
    // 0x60
    "{SHIFT-SPACE}", "{CBM-K}", "{CBM-I}", "{CBM-T}", "{CBM-@}", "{CBM-G}", "{CBM-+}", "{CBM-M}",
    "{CBM-POUND}", "{SHIFT-POUND}", "{CBM-N}", "{CBM-Q}", "{CBM-D}", "{CBM-Z}", "{CBM-S}", "{CBM-P}",
    "{CBM-A}", "{CBM-E}", "{CBM-R}", "{CBM-W}", "{CBM-H}", "{CBM-J}", "{CBM-L}", "{CBM-Y}",
    "{CBM-U}", "{CBM-Q}", "{SHIFT-@}", "{CBM-F}", "{CBM-C}", "{CBM-X}", "{CBM-V}", "{CBM-B}",
    // 0x80
    "{null}", "{CTRL-A}", "{CTRL-B}", "{stop}", "{CTRL-D}", "{wht}", "{CTRL-F}", "{CTRL-G}",
    "{dish}", "{ensh}", "{$0a}", "{CTRL-K}", "{\\f}", "{\\n}", "{swlc}", "{CTRL-O}",
    "{CTRL-P}", "{down}", "{rvon}", "{home}", "{del}", "{CTRL-U}", "{CTRL-V}", "{CTRL-W}",
    "{CTRL-X}", "{CTRL-Y}", "{CTRL-Z}", "{esc}", "{red}", "{rght}", "{grn}", "{blu}",
];

/// Labels for screen codes 0xC1 through 0xDF.
#[rustfmt::skip]
const LABELS_C1_DF: [&str; 0x1F] = [
    "{orng}", "{$82}", "{$83}", "{$84}", "{f1}", "{f3}", "{f5}", "{f7}",
    "{f2}", "{f4}", "{f6}", "{f8}", "{stret}", "{swuc}", "{$8f}", "{blk}",
    "{up}", "{rvof}", "{clr}", "{inst}", "{brn}", "{lred}", "{gry1}", "{gry2}",
    "{lgrn}", "{lblu}", "{gry3}", "{pur}", "{left}", "{yel}", "{cn}",
];

const fn build_labels() -> [Option<&'static str>; LABEL_COUNT] {
    let mut labels = [None; LABEL_COUNT];

    let mut i = 0;
    while i < LABELS_00_9F.len() {
        labels[i] = Some(LABELS_00_9F[i]);
        i += 1;
    }

    // 0xA0..=0xC0 stays None
    let mut i = 0;
    while i < LABELS_C1_DF.len() {
        labels[0xC1 + i] = Some(LABELS_C1_DF[i]);
        i += 1;
    }

    labels
}

/// Look up the petcat label for a screen code
///
/// Returns `None` for codes without a petcat mnemonic (`0xA0..=0xC0`)
/// and for indices past the end of the table.
#[must_use]
pub fn label(index: usize) -> Option<&'static str> {
    LABELS.get(index).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_outside_gap_is_labeled() {
        for (i, entry) in LABELS.iter().enumerate() {
            if (0xA0..=0xC0).contains(&i) {
                assert!(entry.is_none(), "expected no label at {i:#04x}");
            } else {
                assert!(entry.is_some(), "expected a label at {i:#04x}");
            }
        }
    }

    #[test]
    fn test_known_codes_resolve_to_petcat_names() {
        assert_eq!(label(0x00), Some("@"));
        assert_eq!(label(0x1F), Some("_"));
        assert_eq!(label(0x20), Some("{space}"));
        assert_eq!(label(0x3F), Some("?"));
        assert_eq!(label(0x40), Some("{SHIFT-*}"));
        assert_eq!(label(0x5F), Some("{CBM-*}"));
        assert_eq!(label(0x60), Some("{SHIFT-SPACE}"));
        assert_eq!(label(0x7F), Some("{CBM-B}"));
        assert_eq!(label(0x80), Some("{null}"));
        assert_eq!(label(0x9F), Some("{blu}"));
        assert_eq!(label(0xC1), Some("{orng}"));
        assert_eq!(label(0xDF), Some("{cn}"));
    }

    #[test]
    fn test_codes_past_table_have_no_label() {
        assert_eq!(label(0xA0), None);
        assert_eq!(label(0xC0), None);
        assert_eq!(label(LABEL_COUNT), None);
        assert_eq!(label(0x1FF), None);
    }
}
