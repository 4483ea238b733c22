//! End-to-end pipeline tests: bytes in, colored bytes out

use atg_log_colorizer::classifier::{Category, LineClassifier};
use atg_log_colorizer::{pipeline, ColorWriter, Palette};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;
use std::fs;
use std::io::BufReader;
use tempfile::TempDir;

fn run_plain(input: &[u8]) -> (Vec<u8>, atg_log_colorizer::RunStats) {
    let mut writer = ColorWriter::new(Vec::new(), Palette::default(), false);
    let mut classifier = LineClassifier::new();
    let stats = pipeline::run(input, &mut writer, &mut classifier).unwrap();
    (writer.into_inner(), stats)
}

fn ansi(command: impl Command) -> String {
    let mut out = String::new();
    command.write_ansi(&mut out).unwrap();
    out
}

#[test]
fn test_plain_output_preserves_text() {
    let input = b"10:00:00,000 INFO  [Server] up\n\n10:00:01,000 WARN  [Server] slow\n";
    let (output, stats) = run_plain(input);
    assert_eq!(output, input);
    assert_eq!(stats.lines, 2);
    assert_eq!(stats.blank, 1);
}

#[test]
fn test_nul_bytes_become_spaces() {
    let (output, stats) = run_plain(b"10:00:00,000\0ERROR [x]\0bad\n");
    assert_eq!(output, b"10:00:00,000 ERROR [x] bad\n");
    assert_eq!(stats.count(Category::Error), 1);
}

#[test]
fn test_crlf_and_missing_final_newline() {
    let (output, stats) = run_plain(b"first line\r\nsecond line");
    assert_eq!(output, b"first line\nsecond line\n");
    assert_eq!(stats.lines, 2);
}

#[test]
fn test_invalid_utf8_passes_through() {
    let input = b"10:00:00,000 ERROR [caf\xe9] \xff\xfe broken\n";
    let (output, stats) = run_plain(input);
    assert_eq!(output, input);
    assert_eq!(stats.count(Category::Error), 1);
}

#[test]
fn test_colored_output_sequences() {
    let mut writer = ColorWriter::new(Vec::new(), Palette::default(), true);
    let mut classifier = LineClassifier::new();
    pipeline::run(
        "10:00:00,000 ERROR [x] bad\n".as_bytes(),
        &mut writer,
        &mut classifier,
    )
    .unwrap();
    let output = String::from_utf8(writer.into_inner()).unwrap();

    let expected = format!(
        "{}10:00:00,000 ERROR [x] bad\n{}{}",
        ansi(SetForegroundColor(Color::Red)),
        ansi(SetForegroundColor(Color::Yellow)),
        ansi(ResetColor),
    );
    assert_eq!(output, expected);
}

#[test]
fn test_blank_line_resets_to_other_color() {
    let mut writer = ColorWriter::new(Vec::new(), Palette::default(), true);
    let mut classifier = LineClassifier::new();
    pipeline::run(" \t\n".as_bytes(), &mut writer, &mut classifier).unwrap();
    let output = String::from_utf8(writer.into_inner()).unwrap();

    let expected = format!(
        "{}\n{}",
        ansi(SetForegroundColor(Color::Yellow)),
        ansi(ResetColor)
    );
    assert_eq!(output, expected);
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("server.log");
    fs::write(
        &path,
        "SQL Statement Failed: [++SQLSelect++]\nSELECT * FROM dps_user\n[--SQLSelect--]\nNucleus running\n",
    )
    .unwrap();

    let file = fs::File::open(&path).unwrap();
    let mut writer = ColorWriter::new(Vec::new(), Palette::default(), false);
    let mut classifier = LineClassifier::new();
    let stats = pipeline::run(BufReader::new(file), &mut writer, &mut classifier).unwrap();

    assert_eq!(stats.count(Category::Error), 3);
    assert_eq!(stats.count(Category::Nucleus), 1);
    assert_eq!(writer.into_inner(), fs::read(&path).unwrap());
}
