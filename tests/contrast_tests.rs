use contrastly::color::{parse_color, parse_palette};
use contrastly::contrast::{MAX_RATIO, MIN_RATIO, build_contrast_matrix, contrast_ratio};

const PALETTE: [&str; 4] = ["#0EA5E9", "#111827", "#F9FAFB", "#F97316"];

#[test]
fn test_black_on_white_is_maximum() {
    let black = parse_color("#000000").unwrap();
    let white = parse_color("#FFFFFF").unwrap();

    assert_eq!(contrast_ratio(&black, &white), 21.0);
    assert_eq!(contrast_ratio(&black, &white), MAX_RATIO);
}

#[test]
fn test_identity_is_one() {
    for hex in PALETTE.iter().chain(&["#000", "#fff", "#777777"]) {
        let c = parse_color(hex).unwrap();
        assert_eq!(contrast_ratio(&c, &c), MIN_RATIO, "self contrast of {hex}");
    }
}

#[test]
fn test_symmetry() {
    let colors = parse_palette(&PALETTE).unwrap();
    for a in &colors {
        for b in &colors {
            assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }
    }
}

#[test]
fn test_ratio_range() {
    let grays: Vec<String> = (0u8..=255)
        .step_by(15)
        .map(|v| format!("#{v:02x}{v:02x}{v:02x}"))
        .collect();
    let colors = parse_palette(&grays).unwrap();
    for a in &colors {
        for b in &colors {
            let ratio = contrast_ratio(a, b);
            assert!((MIN_RATIO..=MAX_RATIO).contains(&ratio), "{ratio}");
        }
    }
}

#[test]
fn test_known_ratios() {
    let ratio = |a: &str, b: &str| contrast_ratio(&parse_color(a).unwrap(), &parse_color(b).unwrap());

    // Reference values from the WCAG relative luminance formula
    assert_eq!(ratio("#767676", "#FFFFFF"), 4.54);
    assert_eq!(ratio("#777777", "#FFFFFF"), 4.48);
    assert_eq!(ratio("#595959", "#FFFFFF"), 7.0);
    assert_eq!(ratio("#FF0000", "#FFFFFF"), 4.0);
    assert_eq!(ratio("#111827", "#F9FAFB"), 16.98);
    assert_eq!(ratio("#F97316", "#F9FAFB"), 2.68);
}

#[test]
fn test_ratio_just_below_half_cent_rounds_down() {
    let ratio = |a: &str, b: &str| contrast_ratio(&parse_color(a).unwrap(), &parse_color(b).unwrap());

    // (0.132869 + 0.05) / (0.0194 + 0.05) is stored as 2.63499999999999979
    assert_eq!(parse_color("#0552FF").unwrap().luminance(), 0.132869);
    assert_eq!(parse_color("#041874").unwrap().luminance(), 0.0194);
    assert_eq!(ratio("#041874", "#0552FF"), 2.63);
    assert_eq!(ratio("#0552FF", "#041874"), 2.63);

    // 3.27499999999999991
    assert_eq!(ratio("#0781E3", "#520E64"), 3.27);

    let colors = parse_palette(&["#041874", "#0552FF"]).unwrap();
    let matrix = build_contrast_matrix(&colors, false);
    assert_eq!(matrix[0][1], 2.63);
    assert_eq!(matrix[1][0], 2.63);
}

#[test]
fn test_ratio_has_two_decimals() {
    let colors = parse_palette(&PALETTE).unwrap();
    for a in &colors {
        for b in &colors {
            let ratio = contrast_ratio(a, b);
            let scaled = ratio * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{ratio}");
        }
    }
}

#[test]
fn test_matrix_shape_and_values() {
    let colors = parse_palette(&PALETTE).unwrap();
    let matrix = build_contrast_matrix(&colors, false);

    assert_eq!(matrix.len(), 4);
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), 4);
        for (j, &value) in row.iter().enumerate() {
            if i == j {
                assert_eq!(value, 1.0);
            } else {
                assert_eq!(value, contrast_ratio(&colors[i], &colors[j]));
            }
            assert_eq!(value, matrix[j][i], "matrix must be symmetric");
        }
    }

    assert_eq!(matrix[1][2], 16.98);
    assert_eq!(matrix[0][1], 6.4);
    assert_eq!(matrix[2][3], 2.68);
}

#[test]
fn test_matrix_include_self_computes_diagonal() {
    let colors = parse_palette(&["#abc", "#AABBCC", "#000"]).unwrap();

    let forced = build_contrast_matrix(&colors, false);
    let computed = build_contrast_matrix(&colors, true);

    for i in 0..colors.len() {
        assert_eq!(forced[i][i], 1.0);
        assert_eq!(computed[i][i], contrast_ratio(&colors[i], &colors[i]));
    }
    // Same hex via different input strings still has no contrast
    assert_eq!(computed[0][1], 1.0);
}

#[test]
fn test_matrix_row_order_matches_input() {
    let colors = parse_palette(&["#000", "#fff", "#767676"]).unwrap();
    let matrix = build_contrast_matrix(&colors, false);

    assert_eq!(matrix[0], vec![1.0, 21.0, 4.62]);
    assert_eq!(matrix[1], vec![21.0, 1.0, 4.54]);
    assert_eq!(matrix[2], vec![4.62, 4.54, 1.0]);
}
