use pretty_assertions::assert_eq;
use sparkline::demo;

const EXPECTED: &str = include_str!("data/demo-output.txt");

#[test]
fn default_demo_is_stable() {
    assert_eq!(demo(&[]).unwrap(), EXPECTED);
}

#[test]
fn explicit_default_series_matches_empty_input() {
    let pi: Vec<Option<f64>> = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]
        .into_iter()
        .map(Some)
        .collect();
    assert_eq!(demo(&pi).unwrap(), demo(&[]).unwrap());
}
