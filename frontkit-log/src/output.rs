// Line formatting for stderr output

use crate::{Format, Level, LogConfig};
use std::io::Write;

pub(crate) fn write(level: Level, target: &str, message: &str, config: &LogConfig) {
    match config.format {
        Format::Pretty => write_pretty(level, target, message, config),
        Format::Compact => write_compact(level, target, message, config),
        Format::Json => write_json(level, target, message),
    }
}

fn write_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    #[cfg(feature = "color")]
    {
        if config.color {
            let _ = write!(stderr, "{:5} ", level.colored());
        } else {
            let _ = write!(stderr, "{:5} ", level.as_str());
        }
    }

    #[cfg(not(feature = "color"))]
    let _ = write!(stderr, "{:5} ", level.as_str());

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

fn write_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%H:%M:%S"));
    }

    let _ = write!(stderr, "{} ", level.as_str().chars().next().unwrap_or('?'));

    if config.module_path && !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn write_json(level: Level, target: &str, message: &str) {
    if let Some(line) = json_line(level, target, message) {
        eprintln!("{}", line);
    }
}

#[cfg(feature = "json")]
fn json_line(level: Level, target: &str, message: &str) -> Option<String> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Line<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    serde_json::to_string(&Line {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    })
    .ok()
}

// Without serde the JSON format degrades to compact lines.
#[cfg(not(feature = "json"))]
fn write_json(level: Level, target: &str, message: &str) {
    let config = LogConfig {
        timestamps: true,
        module_path: true,
        ..LogConfig::default()
    };
    write_compact(level, target, message, &config);
}
