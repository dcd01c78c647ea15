use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use wrast::reformat;

/// Every file in `tests/fixtures/out` must be the formatted result of the
/// same-named file in `tests/fixtures/in`.
#[test]
fn test_fixture_pairs() {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let in_dir = fixtures.join("in");
    let out_dir = fixtures.join("out");

    let mut checked = 0;
    for entry in fs::read_dir(&out_dir).unwrap() {
        let out_path = entry.unwrap().path();
        if !out_path.extension().map(|e| e == "py").unwrap_or(false) {
            continue;
        }

        let name = out_path.file_name().unwrap().to_owned();
        let input = fs::read_to_string(in_dir.join(&name)).unwrap();
        let expected = fs::read_to_string(&out_path).unwrap();

        assert_eq!(reformat(&input).unwrap(), expected, "fixture {:?}", name);
        checked += 1;
    }

    assert!(checked > 0, "no fixture pairs found");
}
