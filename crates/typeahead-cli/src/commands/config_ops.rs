use std::fs;
use std::process;

use typeahead_engine::typeahead_core::settings;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: autocomplete.default_k={}, autocomplete.max_k={}, queue.default_priority={}",
        s.autocomplete.default_k, s.autocomplete.max_k, s.queue.default_priority
    );
}

/// Install a settings file as the global configuration for this run.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}
