use std::fs;
use std::path::PathBuf;

use modeplot::curve::{load_curve, load_curves};
use modeplot::error::MapError;

fn unique_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "modeplot_curves_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn write_curve_file(name: &str, rows: &[(f64, f64)]) -> PathBuf {
    let path = unique_path(name);
    let mut body = String::from("mode map\nraw\nq,du_raw,du_mev\n");
    for (q, du) in rows {
        body.push_str(&format!("{q},0.0,{du}\n"));
    }
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn every_data_row_becomes_one_sample_in_file_order() {
    let rows: Vec<(f64, f64)> = (0..17).map(|i| (i as f64 * 0.25 - 2.0, i as f64)).collect();
    let path = write_curve_file("k_rows.csv", &rows);

    let series = load_curve(&path, 1).unwrap();
    assert_eq!(series.len(), 17);
    assert_eq!(series.coords.len(), series.energies.len());
    for (i, (q, du)) in rows.iter().enumerate() {
        assert_eq!(series.coords[i], *q);
        assert_eq!(series.energies[i], *du);
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn atom_count_scales_energies_linearly() {
    let rows = [(-1.0, 12.0), (0.0, 0.0), (1.0, 9.0)];
    let path = write_curve_file("atoms.csv", &rows);

    let one = load_curve(&path, 1).unwrap();
    let three = load_curve(&path, 3).unwrap();
    assert_eq!(one.coords, three.coords);
    for (a, b) in one.energies.iter().zip(&three.energies) {
        assert_eq!(*a / 3.0, *b);
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn multiple_files_keep_their_order() {
    let first = write_curve_file("first.csv", &[(0.0, 1.0)]);
    let second = write_curve_file("second.csv", &[(0.0, 2.0), (1.0, 3.0)]);

    let all = load_curves(&[first.clone(), second.clone()], 1).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].energies, vec![1.0]);
    assert_eq!(all[1].energies, vec![2.0, 3.0]);

    let _ = fs::remove_file(&first);
    let _ = fs::remove_file(&second);
}

#[test]
fn a_bad_file_aborts_the_whole_batch() {
    let good = write_curve_file("good.csv", &[(0.0, 1.0)]);
    let bad = unique_path("bad.csv");
    fs::write(&bad, "h\nh\nh\n0.0,0.0,oops\n").unwrap();

    let err = load_curves(&[good.clone(), bad.clone()], 1).unwrap_err();
    assert!(matches!(err, MapError::Parse { .. }), "{err}");

    let _ = fs::remove_file(&good);
    let _ = fs::remove_file(&bad);
}
