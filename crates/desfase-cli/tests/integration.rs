//! Integration tests for the desfase binary.
//!
//! Each test runs the built binary in a scratch directory, since the
//! commands write their artifacts to `./results/` relative to the
//! working directory.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn desfase_in(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_desfase"));
    cmd.current_dir(dir);
    cmd
}

/// Generate a mono test tone WAV inside `dir` and return its path.
fn tone_fixture(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let status = desfase_in(dir)
        .args([
            "generate",
            "tone",
            path.to_str().unwrap(),
            "--freq",
            "440",
            "--duration",
            "0.5",
            "--sample-rate",
            "44100",
        ])
        .status()
        .expect("failed to run desfase generate");
    assert!(status.success(), "generate tone failed");
    path
}

#[test]
fn generate_and_info() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "tone.wav");

    let output = desfase_in(dir.path())
        .args(["info", tone.to_str().unwrap()])
        .output()
        .expect("failed to run desfase info");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sample Rate: 44100 Hz"), "stdout: {stdout}");
    assert!(stdout.contains("Channels:    1"), "stdout: {stdout}");
}

#[test]
fn downsample_writes_wav_and_graphs() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "tone.wav");

    let output = desfase_in(dir.path())
        .args(["downsample", tone.to_str().unwrap(), "8192"])
        .output()
        .expect("failed to run desfase downsample");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let results = dir.path().join("results");
    assert!(results.join("tone_downsampled_to_8192.wav").exists());
    assert!(results.join("tone_downsampled_to_8192_input.pgm").exists());
    assert!(results.join("tone_downsampled_to_8192_output.pgm").exists());

    // 0.5s at 44100 Hz is 22050 frames; at 8192 Hz: round(22050 * 8192/44100) = 4096
    let loaded = desfase_io::read_wav(results.join("tone_downsampled_to_8192.wav")).unwrap();
    assert_eq!(loaded.sample_rate(), 8192);
    assert_eq!(loaded.frame_count(), 4096);
}

#[test]
fn downsample_rejects_upsampling() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "tone.wav");

    let output = desfase_in(dir.path())
        .args(["downsample", tone.to_str().unwrap(), "96000"])
        .output()
        .expect("failed to run desfase downsample");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("only rate reduction is supported"),
        "stderr: {stderr}"
    );
    assert!(
        !dir.path()
            .join("results/tone_downsampled_to_96000.wav")
            .exists(),
        "no output should be produced on rejection"
    );
}

#[test]
fn translate_roundtrips_between_containers() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "fixture.wav");

    // WAV -> table
    let status = desfase_in(dir.path())
        .args(["translate", tone.to_str().unwrap()])
        .status()
        .expect("failed to run desfase translate");
    assert!(status.success());

    let table = dir.path().join("results/fixture.csv");
    assert!(table.exists());

    // table -> WAV
    let status = desfase_in(dir.path())
        .args(["translate", table.to_str().unwrap()])
        .status()
        .expect("failed to run desfase translate");
    assert!(status.success());

    let back = desfase_io::read_wav(dir.path().join("results/fixture.wav")).unwrap();
    let original = desfase_io::read_wav(&tone).unwrap();
    assert_eq!(back.sample_rate(), original.sample_rate());
    assert_eq!(back.frame_count(), original.frame_count());
    for (a, b) in original.samples().iter().zip(back.samples().iter()) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn translate_rejects_unknown_container() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("clip.mp3");
    std::fs::write(&bogus, b"not audio").unwrap();

    let output = desfase_in(dir.path())
        .args(["translate", bogus.to_str().unwrap()])
        .output()
        .expect("failed to run desfase translate");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported format"), "stderr: {stderr}");
}

#[test]
fn analyze_self_reports_zero_lag() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "probe.wav");

    let output = desfase_in(dir.path())
        .args([
            "analyze",
            tone.to_str().unwrap(),
            tone.to_str().unwrap(),
            "--output",
            "report.json",
        ])
        .output()
        .expect("failed to run desfase analyze");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Arg max absolute correlation (lag): 0 seconds"),
        "stdout: {stdout}"
    );
    assert!(stdout.contains("Lag axis:"), "stdout: {stdout}");
    assert!(
        dir.path()
            .join("results/probe_vs_probe_correlation.pgm")
            .exists()
    );

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["peak_lag_seconds"], 0.0);
    assert_eq!(report["sample_rate"], 44100);

    // The lag axis brackets zero symmetrically for a self-correlation.
    let start = report["lag_axis_start_seconds"].as_f64().unwrap();
    let end = report["lag_axis_end_seconds"].as_f64().unwrap();
    assert!(start < 0.0 && end > 0.0, "axis [{start}, {end}]");
}

#[test]
fn analyze_requires_two_inputs() {
    let dir = TempDir::new().unwrap();
    let tone = tone_fixture(dir.path(), "only.wav");

    let output = desfase_in(dir.path())
        .args(["analyze", tone.to_str().unwrap()])
        .output()
        .expect("failed to run desfase analyze");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn delayed_fixture_shifts_the_peak() {
    let dir = TempDir::new().unwrap();
    let noise = dir.path().join("noise.wav");
    let status = desfase_in(dir.path())
        .args([
            "generate",
            "noise",
            noise.to_str().unwrap(),
            "--duration",
            "0.25",
            "--sample-rate",
            "8192",
            "--seed",
            "42",
        ])
        .status()
        .expect("failed to run desfase generate noise");
    assert!(status.success());

    let delayed = dir.path().join("noise_delayed.wav");
    let status = desfase_in(dir.path())
        .args([
            "generate",
            "delayed",
            noise.to_str().unwrap(),
            delayed.to_str().unwrap(),
            "--frames",
            "1024",
        ])
        .status()
        .expect("failed to run desfase generate delayed");
    assert!(status.success());

    let output = desfase_in(dir.path())
        .args([
            "analyze",
            noise.to_str().unwrap(),
            delayed.to_str().unwrap(),
            "--output",
            "lag.json",
        ])
        .output()
        .expect("failed to run desfase analyze");
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("lag.json")).unwrap())
            .unwrap();
    let lag = report["peak_lag_seconds"].as_f64().unwrap();
    let expected = 1024.0 / 8192.0;
    assert!(
        (lag.abs() - expected).abs() < 2.0 / 8192.0,
        "lag {lag} vs expected magnitude {expected}"
    );
}
