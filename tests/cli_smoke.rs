use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_wordcloud")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push("wordcloud");
            p
        })
}

fn work_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Solid black mask: every pixel placeable.
fn write_mask(path: &PathBuf) {
    let img = image::RgbImage::from_pixel(64, 64, image::Rgb([0, 0, 0]));
    img.save(path).unwrap();
}

#[test]
fn cli_fails_on_missing_mask() {
    let dir = work_dir("missing_mask");

    let out = Command::new(exe())
        .args([
            "--mask",
            "target/cli_smoke/no_such_mask.png",
            "--font",
            "unused.ttf",
            "--input",
        ])
        .arg(&dir)
        .output()
        .expect("run wordcloud binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("mask error"), "stderr was: {stderr}");
}

#[test]
fn cli_fails_on_empty_corpus() {
    let dir = work_dir("empty_corpus");
    let mask = dir.join("mask.png");
    write_mask(&mask);
    // No files matching the pattern exist in the input folder; the mask
    // loads fine and the run must still exit non-zero before touching the
    // font.
    let out = Command::new(exe())
        .arg("--mask")
        .arg(&mask)
        .args(["--font", "unused.ttf", "--pattern", "*.txt", "--input"])
        .arg(&dir)
        .output()
        .expect("run wordcloud binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no readable text"), "stderr was: {stderr}");
}

#[test]
fn cli_fails_on_all_white_mask() {
    let dir = work_dir("white_mask");
    let mask = dir.join("mask.png");
    let img = image::RgbImage::from_pixel(16, 16, image::Rgb([255, 255, 255]));
    img.save(&mask).unwrap();
    std::fs::write(dir.join("combined.txt"), "cat dog").unwrap();

    let out = Command::new(exe())
        .arg("--mask")
        .arg(&mask)
        .args(["--font", "unused.ttf", "--input"])
        .arg(&dir)
        .output()
        .expect("run wordcloud binary");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no placeable pixels"), "stderr was: {stderr}");
}
